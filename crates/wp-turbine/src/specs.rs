//! Nameplate parameters shared by every turbine model.

use std::f64::consts::PI;
use wp_core::units::{Area, Length, Power, Velocity, kw, m, mps};

/// Physical and operating parameters of a wind turbine.
///
/// Speeds are in m/s, lengths in m, power in kW. The expected ordering
/// `v_in <= v_rated <= v_out` is not enforced; models simply evaluate their
/// rules against whatever values are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct TurbineSpecs {
    /// Rotor diameter (m)
    pub rotor_diameter: f64,
    /// Hub height above ground (m)
    pub hub_height: f64,
    /// Rated (maximum) electrical power (kW)
    pub rated_power: f64,
    /// Cut-in wind speed (m/s)
    pub v_in: f64,
    /// Rated wind speed (m/s)
    pub v_rated: f64,
    /// Cut-out wind speed (m/s)
    pub v_out: f64,
    /// Optional display name
    pub name: Option<String>,
}

impl TurbineSpecs {
    pub fn new(
        rotor_diameter: f64,
        hub_height: f64,
        rated_power: f64,
        v_in: f64,
        v_rated: f64,
        v_out: f64,
    ) -> Self {
        Self {
            rotor_diameter,
            hub_height,
            rated_power,
            v_in,
            v_rated,
            v_out,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when `v` lies inside the closed operating envelope `[v_in, v_out]`.
    pub fn in_envelope(&self, v: f64) -> bool {
        self.v_in <= v && v <= self.v_out
    }

    pub fn rotor_diameter(&self) -> Length {
        m(self.rotor_diameter)
    }

    pub fn hub_height(&self) -> Length {
        m(self.hub_height)
    }

    pub fn rated_power(&self) -> Power {
        kw(self.rated_power)
    }

    pub fn cut_in(&self) -> Velocity {
        mps(self.v_in)
    }

    pub fn rated_speed(&self) -> Velocity {
        mps(self.v_rated)
    }

    pub fn cut_out(&self) -> Velocity {
        mps(self.v_out)
    }

    /// Rotor swept area, π·D²/4.
    pub fn swept_area(&self) -> Area {
        let d = self.rotor_diameter();
        d * d * (PI / 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wp_core::units::{as_kw, as_m2, as_mps};

    fn specs() -> TurbineSpecs {
        TurbineSpecs::new(90.0, 80.0, 2000.0, 3.0, 12.0, 25.0)
    }

    #[test]
    fn unnamed_by_default() {
        assert!(specs().name.is_none());
        assert_eq!(specs().with_name("LEANWIND").name.as_deref(), Some("LEANWIND"));
    }

    #[test]
    fn envelope_is_closed() {
        let s = specs();
        assert!(!s.in_envelope(2.999));
        assert!(s.in_envelope(3.0));
        assert!(s.in_envelope(25.0));
        assert!(!s.in_envelope(25.001));
        assert!(!s.in_envelope(f64::NAN));
    }

    #[test]
    fn typed_accessors() {
        let s = specs();
        assert_relative_eq!(as_kw(s.rated_power()), 2000.0);
        assert_relative_eq!(as_mps(s.cut_in()), 3.0);
        assert_relative_eq!(as_mps(s.rated_speed()), 12.0);
        assert_relative_eq!(as_mps(s.cut_out()), 25.0);
        assert_relative_eq!(s.hub_height().value, 80.0);
    }

    #[test]
    fn swept_area_of_90m_rotor() {
        assert_relative_eq!(as_m2(specs().swept_area()), 6361.725123519331, max_relative = 1e-12);
    }
}
