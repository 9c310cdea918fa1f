use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

fn parse_unit<U: Unit>(code: &str) -> Result<U, ConversionError> {
    U::parse(code).ok_or_else(|| ConversionError::UnknownUnit(code.trim().to_string()))
}

fn convert_codes<U: Unit>(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from: U = parse_unit(from)?;
    let to: U = parse_unit(to)?;
    Ok(crate::units::convert(value, from, to))
}

/// 문자열로 전달된 단위명을 해석해 값을 환산한다.
///
/// 예: `convert(QuantityKind::Length, 25.0, "mm", "m") == Ok(0.025)`
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => convert_codes::<LengthUnit>(value, from, to),
        QuantityKind::Modulus => convert_codes::<ModulusUnit>(value, from, to),
        QuantityKind::Density => convert_codes::<DensityUnit>(value, from, to),
        QuantityKind::Velocity => convert_codes::<VelocityUnit>(value, from, to),
        QuantityKind::Viscosity => convert_codes::<ViscosityUnit>(value, from, to),
        QuantityKind::Temperature => convert_codes::<TemperatureUnit>(value, from, to),
    }
}

/// 해당 물리량에서 선택 가능한 단위 기호 목록.
pub fn unit_symbols(kind: QuantityKind) -> Vec<&'static str> {
    fn symbols<U: Unit>() -> Vec<&'static str> {
        U::ALL.iter().map(|u| u.symbol()).collect()
    }
    match kind {
        QuantityKind::Length => symbols::<LengthUnit>(),
        QuantityKind::Modulus => symbols::<ModulusUnit>(),
        QuantityKind::Density => symbols::<DensityUnit>(),
        QuantityKind::Velocity => symbols::<VelocityUnit>(),
        QuantityKind::Viscosity => symbols::<ViscosityUnit>(),
        QuantityKind::Temperature => symbols::<TemperatureUnit>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimeter_to_meter() {
        let v = convert(QuantityKind::Length, 25.0, "mm", "m").unwrap();
        assert!((v - 0.025).abs() < 1e-12);
    }

    #[test]
    fn gpa_to_pa_case_insensitive() {
        let v = convert(QuantityKind::Modulus, 210.0, "gpa", "PA").unwrap();
        assert!((v - 2.1e11).abs() < 1.0);
    }

    #[test]
    fn centipoise_is_millipascal_second() {
        let v = convert(QuantityKind::Viscosity, 1.0, "cP", "mPa.s").unwrap();
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn celsius_to_kelvin() {
        let v = convert(QuantityKind::Temperature, 26.85, "C", "K").unwrap();
        assert!((v - 300.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_unit_reported() {
        let err = convert(QuantityKind::Velocity, 1.0, "knot", "m/s").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("knot".into()));
    }

    #[test]
    fn every_symbol_parses_back() {
        for kind in QuantityKind::ALL {
            for sym in unit_symbols(kind) {
                let si = kind.si_symbol();
                assert!(convert(kind, 1.0, sym, si).is_ok(), "{sym} -> {si}");
            }
        }
    }
}
