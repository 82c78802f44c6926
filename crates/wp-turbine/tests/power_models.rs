use approx::assert_relative_eq;
use proptest::prelude::*;
use wp_turbine::{GeneralTurbine, MeasuredTurbine, PowerCurve, PowerModel, TurbineModel, TurbineSpecs};

fn reference_specs() -> TurbineSpecs {
    TurbineSpecs::new(90.0, 80.0, 2000.0, 3.0, 12.0, 25.0)
}

fn reference_curve() -> PowerCurve {
    PowerCurve::from_pairs([(3.0, 0.0), (6.0, 300.0), (12.0, 2000.0), (25.0, 2000.0)]).unwrap()
}

#[test]
fn general_reference_scenario() {
    let turbine = GeneralTurbine::new(reference_specs()).unwrap();
    let power = turbine.compute_power(&[2.0, 3.0, 6.0, 12.0, 20.0, 26.0]);

    let expected = [0.0, 31.25, 250.0, 2000.0, 2000.0, 0.0];
    assert_eq!(power.len(), expected.len());
    for (p, e) in power.iter().zip(expected) {
        assert_relative_eq!(*p, e);
    }
}

#[test]
fn measured_reference_scenario() {
    let turbine = MeasuredTurbine::new(reference_specs(), reference_curve());
    let power = turbine.compute_power(&[2.0, 4.0, 6.0, 25.0, 26.0]);

    let expected = [0.0, 100.0, 300.0, 2000.0, 0.0];
    assert_eq!(power.len(), expected.len());
    for (p, e) in power.iter().zip(expected) {
        assert_relative_eq!(*p, e);
    }
}

#[test]
fn general_at_cut_in_uses_ramp_formula() {
    let specs = reference_specs();
    let turbine = GeneralTurbine::new(specs.clone()).unwrap();
    let expected = specs.rated_power * (specs.v_in / specs.v_rated).powi(3);
    assert_eq!(turbine.power_at(specs.v_in), expected);
}

#[test]
fn models_share_parameters() {
    let general = TurbineModel::general(reference_specs().with_name("GENERAL")).unwrap();
    let measured = TurbineModel::measured(reference_specs().with_name("GENERAL"), reference_curve());
    assert_eq!(general.specs(), measured.specs());
}

fn specs_strategy() -> impl Strategy<Value = TurbineSpecs> {
    (1.0_f64..5000.0, 0.5_f64..6.0, 4.0_f64..15.0, 16.0_f64..30.0).prop_map(
        |(rated_power, v_in, v_rated, v_out)| {
            TurbineSpecs::new(100.0, 90.0, rated_power, v_in, v_rated, v_out)
        },
    )
}

fn ascending_curve() -> impl Strategy<Value = PowerCurve> {
    prop::collection::vec((0.1_f64..4.0, 0.0_f64..400.0), 1..15).prop_map(|steps| {
        let mut v = 0.0;
        let mut p = 0.0;
        let pairs: Vec<(f64, f64)> = steps
            .into_iter()
            .map(|(dv, dp)| {
                v += dv;
                p += dp;
                (v, p)
            })
            .collect();
        PowerCurve::from_pairs(pairs).unwrap()
    })
}

fn speeds() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-20.0_f64..60.0, 0..40)
}

proptest! {
    #[test]
    fn output_length_matches_input(specs in specs_strategy(), curve in ascending_curve(), vs in speeds()) {
        let general = GeneralTurbine::new(specs.clone()).unwrap();
        let measured = MeasuredTurbine::new(specs, curve);
        prop_assert_eq!(general.compute_power(&vs).len(), vs.len());
        prop_assert_eq!(measured.compute_power(&vs).len(), vs.len());
    }

    #[test]
    fn zero_outside_operating_envelope(specs in specs_strategy(), curve in ascending_curve(), vs in speeds()) {
        let general = GeneralTurbine::new(specs.clone()).unwrap();
        let measured = MeasuredTurbine::new(specs.clone(), curve);
        for v in vs.into_iter().filter(|v| *v < specs.v_in || *v > specs.v_out) {
            prop_assert_eq!(general.power_at(v), 0.0);
            prop_assert_eq!(measured.power_at(v), 0.0);
        }
    }

    #[test]
    fn general_flat_between_rated_and_cut_out(specs in specs_strategy(), frac in 0.0_f64..=1.0) {
        let v = (specs.v_rated + frac * (specs.v_out - specs.v_rated)).min(specs.v_out);
        let general = GeneralTurbine::new(specs.clone()).unwrap();
        prop_assert_eq!(general.power_at(v), specs.rated_power);
    }

    #[test]
    fn general_never_exceeds_rated(specs in specs_strategy(), vs in speeds()) {
        let general = GeneralTurbine::new(specs.clone()).unwrap();
        for p in general.compute_power(&vs) {
            prop_assert!((0.0..=specs.rated_power).contains(&p));
        }
    }

    #[test]
    fn measured_exact_at_samples(curve in ascending_curve()) {
        // Envelope covering the whole table so every sample is evaluated.
        let specs = TurbineSpecs::new(100.0, 90.0, 1.0, 0.0, 1.0, 1000.0);
        let measured = MeasuredTurbine::new(specs, curve.clone());
        for (v, p) in curve.samples() {
            prop_assert_eq!(measured.power_at(v), p);
        }
    }

    #[test]
    fn measured_monotone_for_non_decreasing_curve(curve in ascending_curve(), a in 0.0_f64..70.0, b in 0.0_f64..70.0) {
        let specs = TurbineSpecs::new(100.0, 90.0, 1.0, 0.0, 1.0, 1000.0);
        let measured = MeasuredTurbine::new(specs, curve);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(measured.power_at(lo) <= measured.power_at(hi) + 1e-9);
    }
}
