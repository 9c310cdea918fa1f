use serde::{Deserialize, Serialize};

use super::Unit;

/// 동점성(점도) 단위. SI 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    /// cP 와 mPa·s 는 크기가 같다
    Centipoise,
    MilliPascalSecond,
}

impl Unit for ViscosityUnit {
    const ALL: &'static [Self] = &[
        ViscosityUnit::PascalSecond,
        ViscosityUnit::Centipoise,
        ViscosityUnit::MilliPascalSecond,
    ];

    fn to_si(self, value: f64) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => value,
            ViscosityUnit::Centipoise | ViscosityUnit::MilliPascalSecond => value / 1000.0,
        }
    }

    fn from_si(self, value_si: f64) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => value_si,
            ViscosityUnit::Centipoise | ViscosityUnit::MilliPascalSecond => value_si * 1000.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa.s",
            ViscosityUnit::Centipoise => "cP",
            ViscosityUnit::MilliPascalSecond => "mPa.s",
        }
    }
}
