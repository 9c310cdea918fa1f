use tube_fiv_toolbox::fiv::{
    indicators, AcousticInput, AcousticResonance, FlowIndicators, PitchType, TubeInput,
};

#[test]
fn default_flow_indicators() {
    let ind = FlowIndicators::compute(&TubeInput::default()).unwrap();
    assert!((ind.natural_frequency_hz - 6.7191).abs() < 1e-3);
    assert!((ind.reynolds_number.unwrap() - 50_000.0).abs() < 1e-6);
    assert!((ind.vortex_shedding_hz - 16.0).abs() < 1e-9);
    assert!((ind.instability_factor - 0.05).abs() < 1e-12);
}

#[test]
fn zero_viscosity_leaves_reynolds_undefined() {
    let mut input = TubeInput::default();
    input.properties.fluid_viscosity_pa_s = 0.0;
    assert!(indicators::reynolds_number(&input).is_err());
    let ind = FlowIndicators::compute(&input).unwrap();
    assert!(ind.reynolds_number.is_none());
    assert!((ind.vortex_shedding_hz - 16.0).abs() < 1e-9);
}

#[test]
fn shedding_scales_with_velocity() {
    let mut input = TubeInput::default();
    input.properties.fluid_velocity_m_s = 4.0;
    assert!((indicators::vortex_shedding_frequency_hz(&input) - 32.0).abs() < 1e-9);
}

#[test]
fn triangular_pitch_raises_angular_mode() {
    let square = AcousticResonance::compute(&AcousticInput::default()).unwrap();
    let tri = AcousticResonance::compute(&AcousticInput {
        pitch: PitchType::Triangular,
        ..AcousticInput::default()
    })
    .unwrap();
    assert!((tri.angular_hz / square.angular_hz - 1.15).abs() < 1e-12);
    assert_eq!(tri.axial_hz, square.axial_hz);
}

#[test]
fn short_shell_rejected() {
    let input = AcousticInput {
        shell_length_m: 0.05,
        ..AcousticInput::default()
    };
    assert!(AcousticResonance::compute(&input).is_err());
}
