use tube_fiv_toolbox::config::{self, UnitSystem};
use tube_fiv_toolbox::units::LengthUnit;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default_at(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.unit_system, UnitSystem::SI);
    assert_eq!(cfg.path(), path.as_path());
}

#[test]
fn saved_changes_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = config::load_or_default_at(&path).unwrap();
    cfg.inputs.properties.fluid_velocity_m_s = 3.25;
    cfg.acoustic.make = "ACME".into();
    cfg.apply_unit_system(UnitSystem::Imperial);
    cfg.save().unwrap();

    let back = config::load_or_default_at(&path).unwrap();
    assert_eq!(back.inputs.properties.fluid_velocity_m_s, 3.25);
    assert_eq!(back.acoustic.make, "ACME");
    assert_eq!(back.default_units.length, LengthUnit::Inch);
    assert_eq!(back, cfg);
}

#[test]
fn access_key_never_lands_in_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    config::load_or_default_at(&path).unwrap();
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("key_env = \"TUBE_FIV_ACCESS_KEY\""));
}
