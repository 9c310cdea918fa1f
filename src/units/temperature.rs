use serde::{Deserialize, Serialize};

use super::Unit;

/// 기체 온도 단위. SI 기준은 K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
    ];

    fn to_si(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        }
    }

    fn from_si(self, value_si: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value_si,
            TemperatureUnit::Celsius => value_si - 273.15,
            TemperatureUnit::Fahrenheit => value_si * 9.0 / 5.0 - 459.67,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}
