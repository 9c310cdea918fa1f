use serde::{Deserialize, Serialize};

use super::Unit;

/// 유속 단위. SI 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    KilometerPerHour,
}

impl Unit for VelocityUnit {
    const ALL: &'static [Self] = &[
        VelocityUnit::MeterPerSecond,
        VelocityUnit::FootPerSecond,
        VelocityUnit::KilometerPerHour,
    ];

    fn to_si(self, value: f64) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => value,
            VelocityUnit::FootPerSecond => value * 0.3048,
            VelocityUnit::KilometerPerHour => value / 3.6,
        }
    }

    fn from_si(self, value_si: f64) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => value_si,
            VelocityUnit::FootPerSecond => value_si / 0.3048,
            VelocityUnit::KilometerPerHour => value_si * 3.6,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::KilometerPerHour => "km/h",
        }
    }
}
