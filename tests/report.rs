use std::fs;

use tube_fiv_toolbox::fiv::{evaluate, screen, AcousticInput, TubeInput};
use tube_fiv_toolbox::report::{self, ScreeningReport};

#[test]
fn report_lines_follow_tab_order() {
    let s = screen(&TubeInput::default(), &AcousticInput::default()).unwrap();
    let report = ScreeningReport::from_screening(&s);
    let labels: Vec<&str> = report.lines().iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        [
            "Natural Frequency",
            "Reynolds Number",
            "Vortex Shedding Frequency",
            "Turbulent Buffeting Effect",
            "Axial Resonance",
            "Angular Resonance",
            "Fluid Elastic Instability Factor",
            "Tube Mass",
            "Tube Stiffness",
            "Fluid Force Amplitude",
            "Natural Frequency (rad/s)",
            "Max Displacement",
            "Mid-span Collision Risk",
            "Wear Contact Events",
            "Noise Level",
            "Pressure Drop",
            "Stress Corrosion Cracking Risk",
        ]
    );
}

#[test]
fn report_values_are_formatted() {
    let s = screen(&TubeInput::default(), &AcousticInput::default()).unwrap();
    let report = ScreeningReport::from_screening(&s);
    assert_eq!(report.value_of("Natural Frequency"), Some("6.72 Hz"));
    assert_eq!(report.value_of("Reynolds Number"), Some("50000.00"));
    assert_eq!(report.value_of("Vortex Shedding Frequency"), Some("16.00 Hz"));
    assert_eq!(report.value_of("Axial Resonance"), Some("173.59 Hz"));
    assert_eq!(report.value_of("Tube Mass"), Some("1.134 kg"));
    assert_eq!(report.value_of("Tube Stiffness"), Some("6065.8 N/m"));
    assert_eq!(report.value_of("Fluid Force Amplitude"), Some("50.00 N"));
    assert_eq!(report.value_of("Max Displacement"), Some("0.0080 m"));
    assert_eq!(report.value_of("Mid-span Collision Risk"), Some("NO"));
    assert_eq!(report.value_of("Noise Level"), Some("60 dB"));
    assert_eq!(report.value_of("Pressure Drop"), Some("5 kPa"));
    assert_eq!(report.value_of("Stress Corrosion Cracking Risk"), Some("Low"));

    let text = report.to_text();
    assert_eq!(text.lines().count(), 17);
    assert!(text.starts_with("Natural Frequency: 6.72 Hz\n"));
}

#[test]
fn zero_viscosity_reports_na() {
    let mut input = TubeInput::default();
    input.properties.fluid_viscosity_pa_s = 0.0;
    let s = screen(&input, &AcousticInput::default()).unwrap();
    let report = ScreeningReport::from_screening(&s);
    assert_eq!(report.value_of("Reynolds Number"), Some("N/A"));
}

#[test]
fn text_csv_and_png_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let s = screen(&TubeInput::default(), &AcousticInput::default()).unwrap();

    let txt = dir.path().join("report.txt");
    ScreeningReport::from_screening(&s).write_text(&txt).unwrap();
    assert!(fs::read_to_string(&txt).unwrap().contains("Wear Contact Events: 0"));

    let eval = evaluate(&TubeInput::default()).unwrap();
    let csv = dir.path().join("series.csv");
    report::write_series(&eval.series, &csv).unwrap();
    let body = fs::read_to_string(&csv).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("time_s,displacement_m,fluid_force_n"));
    assert_eq!(lines.count(), 1000);

    let png = dir.path().join("series.png");
    report::write_series(&eval.series, &png).unwrap();
    let bytes = fs::read(&png).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
