use serde::{Deserialize, Serialize};

use super::Unit;

/// 길이 단위. SI 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

impl Unit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    fn to_si(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }

    fn from_si(self, value_si: f64) -> f64 {
        value_si / self.meters_per_unit()
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}
