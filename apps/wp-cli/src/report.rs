//! Text and CSV rendering of specs and power tables.

use crate::error::CliResult;
use wp_core::units::as_m2;
use wp_turbine::{PowerTable, TurbineSpecs};

const SPEED_HEADER: &str = "speed_mps";

pub fn render_specs(specs: &TurbineSpecs) -> String {
    let mut out = String::new();
    if let Some(name) = &specs.name {
        out.push_str(&format!("Turbine: {}\n", name));
    }
    out.push_str(&format!("  Rotor diameter:  {:.1} m\n", specs.rotor_diameter));
    out.push_str(&format!("  Swept area:      {:.1} m^2\n", as_m2(specs.swept_area())));
    out.push_str(&format!("  Hub height:      {:.1} m\n", specs.hub_height));
    out.push_str(&format!("  Rated power:     {:.1} kW\n", specs.rated_power));
    out.push_str(&format!("  Cut-in speed:    {:.2} m/s\n", specs.v_in));
    out.push_str(&format!("  Rated speed:     {:.2} m/s\n", specs.v_rated));
    out.push_str(&format!("  Cut-out speed:   {:.2} m/s\n", specs.v_out));
    if !(specs.v_in <= specs.v_rated && specs.v_rated <= specs.v_out) {
        out.push_str("  (speeds are not ordered cut-in <= rated <= cut-out)\n");
    }
    out
}

/// Right-aligned columns, one row per speed.
pub fn render_table(table: &PowerTable) -> String {
    let labels: Vec<&str> = table.labels().collect();
    let widths: Vec<usize> = labels.iter().map(|l| l.len().max(10)).collect();

    let mut out = format!("{:>10}", SPEED_HEADER);
    for (label, width) in labels.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", label, width = *width));
    }
    out.push('\n');

    for (v, powers) in table.rows() {
        out.push_str(&format!("{:>10.2}", v));
        for (p, width) in powers.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$.2}", p, width = *width));
        }
        out.push('\n');
    }
    out
}

pub fn write_table_csv<W: std::io::Write>(writer: W, table: &PowerTable) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![SPEED_HEADER.to_string()];
    header.extend(table.labels().map(str::to_string));
    wtr.write_record(&header)?;

    for (v, powers) in table.rows() {
        let mut record = vec![v.to_string()];
        record.extend(powers.iter().map(|p| p.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
