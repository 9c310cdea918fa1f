use tube_fiv_toolbox::fiv::{
    evaluate, response, CollisionRisk, DerivedDynamics, FivError, GeometryFault, InputSheet,
    SccRisk, TubeInput,
};

fn with_velocity(v: f64) -> TubeInput {
    let mut input = TubeInput::default();
    input.properties.fluid_velocity_m_s = v;
    input
}

#[test]
fn default_case_matches_golden_values() {
    let eval = evaluate(&TubeInput::default()).expect("default case");
    let d = &eval.dynamics;
    assert!((d.force_amplitude_n - 50.0).abs() < 1e-9);
    assert!((d.mass_kg - 1.134_429).abs() < 1e-6, "mass={}", d.mass_kg);
    assert!((d.stiffness_n_per_m - 6065.7635).abs() < 1e-3);
    assert!((d.natural_angular_frequency_rad_s - 73.123_01).abs() < 1e-4);

    let r = &eval.risk;
    assert!((r.max_displacement_m - 0.007_959_47).abs() < 1e-8);
    assert_eq!(r.wear_events, 0);
    assert_eq!(r.collision_risk, CollisionRisk::No);
    assert_eq!(r.noise_level_db, 60);
    assert_eq!(r.pressure_drop_kpa, 5);
    assert_eq!(r.scc_risk, SccRisk::Low);
}

#[test]
fn series_has_fixed_grid() {
    let eval = evaluate(&TubeInput::default()).unwrap();
    let samples = eval.series.samples();
    assert_eq!(samples.len(), response::SAMPLE_COUNT);
    assert_eq!(samples[0].time_s, 0.0);
    assert_eq!(samples[0].displacement_m, 0.0);
    assert_eq!(samples[samples.len() - 1].time_s, response::DURATION_S);
    assert!(samples.windows(2).all(|w| w[1].time_s > w[0].time_s));
}

#[test]
fn evaluation_is_deterministic() {
    let a = evaluate(&TubeInput::default()).unwrap();
    let b = evaluate(&TubeInput::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn faster_flow_never_reduces_damage() {
    let mut prev_max = -1.0;
    let mut prev_wear = 0;
    for v in [0.0, 1.0, 2.0, 2.2, 2.5, 3.0, 4.0, 5.0] {
        let r = evaluate(&with_velocity(v)).unwrap().risk;
        assert!(r.max_displacement_m >= prev_max, "v={v}");
        assert!(r.wear_events >= prev_wear, "v={v}");
        prev_max = r.max_displacement_m;
        prev_wear = r.wear_events;
    }
}

#[test]
fn zero_velocity_is_quiet() {
    let eval = evaluate(&with_velocity(0.0)).unwrap();
    assert!(eval.series.samples().iter().all(|s| s.displacement_m == 0.0));
    let r = eval.risk;
    assert_eq!(r.max_displacement_m, 0.0);
    assert_eq!(r.wear_events, 0);
    assert_eq!(r.collision_risk, CollisionRisk::No);
    assert_eq!(r.noise_level_db, 60);
}

#[test]
fn threshold_bands() {
    let r = evaluate(&with_velocity(2.2)).unwrap().risk;
    assert_eq!((r.wear_events, r.collision_risk, r.noise_level_db), (9, CollisionRisk::No, 60));

    let r = evaluate(&with_velocity(2.5)).unwrap().risk;
    assert_eq!(r.collision_risk, CollisionRisk::Yes);
    assert_eq!(r.noise_level_db, 90);
    assert_eq!(r.wear_events, 26);
    assert_eq!(r.pressure_drop_kpa, 5);

    let r = evaluate(&with_velocity(4.0)).unwrap().risk;
    assert_eq!(r.wear_events, 122);
    assert_eq!(r.pressure_drop_kpa, 15);
    assert_eq!(r.scc_risk, SccRisk::Low);

    let r = evaluate(&with_velocity(5.0)).unwrap().risk;
    assert_eq!(r.wear_events, 176);
    assert_eq!(r.scc_risk, SccRisk::High);
}

#[test]
fn wall_equal_to_radius_is_rejected() {
    let mut input = TubeInput::default();
    input.geometry.wall_thickness_m = input.geometry.outer_diameter_m / 2.0;
    let err = evaluate(&input).unwrap_err();
    assert!(matches!(
        err,
        FivError::InvalidGeometry(GeometryFault::WallTooThick { .. })
    ));
}

#[test]
fn negative_input_is_rejected_before_geometry() {
    let mut input = TubeInput::default();
    input.properties.fluid_density_kg_m3 = -1.0;
    assert!(DerivedDynamics::derive(&input).unwrap_err().is_input());
}

#[test]
fn incomplete_sheet_reports_missing_field() {
    let sheet = InputSheet {
        outer_diameter_m: Some(0.03),
        ..InputSheet::default()
    };
    let err = TubeInput::try_from(sheet.clone()).unwrap_err();
    assert!(err.is_input());

    let filled = TubeInput::try_from(sheet.fill_from(&TubeInput::default())).unwrap();
    assert_eq!(filled.geometry.outer_diameter_m, 0.03);
    assert_eq!(filled.geometry.wall_thickness_m, 0.002);
}

#[test]
fn first_step_grows_with_velocity() {
    let slow = evaluate(&with_velocity(1.0)).unwrap();
    let fast = evaluate(&with_velocity(1.5)).unwrap();
    assert!(fast.dynamics.force_amplitude_n > slow.dynamics.force_amplitude_n);
    let x_slow = slow.series.samples()[1].displacement_m;
    let x_fast = fast.series.samples()[1].displacement_m;
    assert!(x_slow > 0.0);
    assert!(x_fast > x_slow);
}

#[test]
fn huge_velocity_never_yields_nan_series() {
    let err = evaluate(&with_velocity(1e200)).unwrap_err();
    assert!(err.is_input(), "{err}");
}
