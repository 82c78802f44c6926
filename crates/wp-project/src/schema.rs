//! On-disk formats for turbine specifications and measured power curves.

use serde::{Deserialize, Serialize};
use wp_turbine::{PowerCurve, TurbineResult, TurbineSpecs};

/// Turbine specification sheet as stored in YAML or JSON.
///
/// Unknown keys are ignored so vendor sheets with extra fields still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rotor_diameter: f64,
    pub hub_height: f64,
    pub rated_power: f64,
    pub cut_in_wind_speed: f64,
    pub rated_wind_speed: f64,
    pub cut_out_wind_speed: f64,
}

impl SpecsDef {
    pub fn to_specs(&self) -> TurbineSpecs {
        TurbineSpecs {
            rotor_diameter: self.rotor_diameter,
            hub_height: self.hub_height,
            rated_power: self.rated_power,
            v_in: self.cut_in_wind_speed,
            v_rated: self.rated_wind_speed,
            v_out: self.cut_out_wind_speed,
            name: self.name.clone(),
        }
    }
}

impl From<&TurbineSpecs> for SpecsDef {
    fn from(specs: &TurbineSpecs) -> Self {
        Self {
            name: specs.name.clone(),
            rotor_diameter: specs.rotor_diameter,
            hub_height: specs.hub_height,
            rated_power: specs.rated_power,
            cut_in_wind_speed: specs.v_in,
            rated_wind_speed: specs.v_rated,
            cut_out_wind_speed: specs.v_out,
        }
    }
}

/// Column header for wind speed in power curve tables.
pub const SPEED_COLUMN: &str = "Wind Speed [m/s]";
/// Column header for power in power curve tables.
pub const POWER_COLUMN: &str = "Power [kW]";

/// One row of a power curve table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveRow {
    #[serde(rename = "Wind Speed [m/s]")]
    pub wind_speed: f64,
    #[serde(rename = "Power [kW]")]
    pub power: f64,
}

/// Power curve table in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PowerCurveDef {
    pub rows: Vec<CurveRow>,
}

impl PowerCurveDef {
    pub fn speeds(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.wind_speed).collect()
    }

    pub fn to_curve(&self) -> TurbineResult<PowerCurve> {
        PowerCurve::from_pairs(self.rows.iter().map(|r| (r.wind_speed, r.power)))
    }
}

impl From<&PowerCurve> for PowerCurveDef {
    fn from(curve: &PowerCurve) -> Self {
        Self {
            rows: curve
                .samples()
                .map(|(wind_speed, power)| CurveRow { wind_speed, power })
                .collect(),
        }
    }
}
