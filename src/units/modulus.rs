use serde::{Deserialize, Serialize};

use super::Unit;

/// 탄성계수(응력) 단위. SI 기준은 Pa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModulusUnit {
    Pascal,
    MegaPascal,
    GigaPascal,
    Psi,
    Ksi,
    /// 백만 psi (미국 재료 데이터에서 흔히 쓰인다)
    Msi,
}

impl ModulusUnit {
    fn pascals_per_unit(self) -> f64 {
        const PSI: f64 = 6_894.757_293;
        match self {
            ModulusUnit::Pascal => 1.0,
            ModulusUnit::MegaPascal => 1.0e6,
            ModulusUnit::GigaPascal => 1.0e9,
            ModulusUnit::Psi => PSI,
            ModulusUnit::Ksi => PSI * 1.0e3,
            ModulusUnit::Msi => PSI * 1.0e6,
        }
    }
}

impl Unit for ModulusUnit {
    const ALL: &'static [Self] = &[
        ModulusUnit::Pascal,
        ModulusUnit::MegaPascal,
        ModulusUnit::GigaPascal,
        ModulusUnit::Psi,
        ModulusUnit::Ksi,
        ModulusUnit::Msi,
    ];

    fn to_si(self, value: f64) -> f64 {
        value * self.pascals_per_unit()
    }

    fn from_si(self, value_si: f64) -> f64 {
        value_si / self.pascals_per_unit()
    }

    fn symbol(self) -> &'static str {
        match self {
            ModulusUnit::Pascal => "Pa",
            ModulusUnit::MegaPascal => "MPa",
            ModulusUnit::GigaPascal => "GPa",
            ModulusUnit::Psi => "psi",
            ModulusUnit::Ksi => "ksi",
            ModulusUnit::Msi => "Msi",
        }
    }
}
