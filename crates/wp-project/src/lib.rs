//! wp-project: turbine specification and power curve files.
//!
//! Specification sheets are YAML (or JSON) with the keys `rotor_diameter`,
//! `hub_height`, `rated_power`, `cut_in_wind_speed`, `rated_wind_speed`,
//! `cut_out_wind_speed` and an optional `name`. Power curves are headered CSV
//! with the columns `Wind Speed [m/s]` and `Power [kW]`.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_power_curve, validate_specs};

use std::fs::File;
use std::path::{Path, PathBuf};
use wp_core::is_strictly_ascending;
use wp_turbine::TurbineError;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Power curve is missing column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("Turbine error: {0}")]
    Turbine(#[from] TurbineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_specs_yaml(path: &Path) -> ProjectResult<SpecsDef> {
    let content = std::fs::read_to_string(path)?;
    let specs: SpecsDef = serde_yaml::from_str(&content)?;
    validate_specs(&specs)?;
    tracing::debug!(path = %path.display(), name = ?specs.name, "loaded turbine specs");
    Ok(specs)
}

pub fn save_specs_yaml(path: &Path, specs: &SpecsDef) -> ProjectResult<()> {
    validate_specs(specs)?;
    let content = serde_yaml::to_string(specs)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_specs_json(path: &Path) -> ProjectResult<SpecsDef> {
    let content = std::fs::read_to_string(path)?;
    let specs: SpecsDef = serde_json::from_str(&content)?;
    validate_specs(&specs)?;
    tracing::debug!(path = %path.display(), name = ?specs.name, "loaded turbine specs");
    Ok(specs)
}

pub fn save_specs_json(path: &Path, specs: &SpecsDef) -> ProjectResult<()> {
    validate_specs(specs)?;
    let content = serde_json::to_string_pretty(specs)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a spec sheet, picking the format from the file extension.
pub fn load_specs(path: &Path) -> ProjectResult<SpecsDef> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => load_specs_yaml(path),
        Some("json") => load_specs_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Parse a power curve table from any CSV reader.
///
/// Columns are matched by header name; extra columns are ignored. Rows stay in
/// file order. Unsorted speeds are accepted with a warning.
pub fn read_power_curve_csv<R: std::io::Read>(reader: R) -> ProjectResult<PowerCurveDef> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in [SPEED_COLUMN, POWER_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ProjectError::MissingColumn { column });
        }
    }

    let rows = rdr
        .deserialize::<CurveRow>()
        .collect::<Result<Vec<_>, _>>()?;
    let curve = PowerCurveDef { rows };
    validate_power_curve(&curve)?;

    if !is_strictly_ascending(&curve.speeds()) {
        tracing::warn!(
            rows = curve.rows.len(),
            "power curve wind speeds are not strictly ascending; interpolation may be meaningless"
        );
    }
    Ok(curve)
}

pub fn load_power_curve_csv(path: &Path) -> ProjectResult<PowerCurveDef> {
    let file = File::open(path)?;
    let curve = read_power_curve_csv(file)?;
    tracing::debug!(path = %path.display(), rows = curve.rows.len(), "loaded power curve");
    Ok(curve)
}

pub fn write_power_curve_csv<W: std::io::Write>(writer: W, curve: &PowerCurveDef) -> ProjectResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &curve.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_power_curve_csv(path: &Path, curve: &PowerCurveDef) -> ProjectResult<()> {
    validate_power_curve(curve)?;
    let file = File::create(path)?;
    write_power_curve_csv(file, curve)
}
