use serde::{Deserialize, Serialize};

use super::Unit;

/// 밀도 단위. SI 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

impl Unit for DensityUnit {
    const ALL: &'static [Self] = &[
        DensityUnit::KgPerCubicMeter,
        DensityUnit::GramPerCubicCentimeter,
        DensityUnit::PoundPerCubicFoot,
    ];

    fn to_si(self, value: f64) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => value,
            DensityUnit::GramPerCubicCentimeter => value * 1000.0,
            DensityUnit::PoundPerCubicFoot => value * 16.018_463,
        }
    }

    fn from_si(self, value_si: f64) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => value_si,
            DensityUnit::GramPerCubicCentimeter => value_si / 1000.0,
            DensityUnit::PoundPerCubicFoot => value_si / 16.018_463,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m3",
            DensityUnit::GramPerCubicCentimeter => "g/cm3",
            DensityUnit::PoundPerCubicFoot => "lb/ft3",
        }
    }
}
