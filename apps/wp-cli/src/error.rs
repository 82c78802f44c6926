//! Error type for the command-line driver.

/// Wraps errors from the library crates so `main` can report them uniformly.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] wp_project::ProjectError),

    #[error("Turbine error: {0}")]
    Turbine(#[from] wp_turbine::TurbineError),

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
