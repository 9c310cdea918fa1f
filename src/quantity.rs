/// 입력 폼에서 단위를 고를 수 있는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Modulus,
    Density,
    Velocity,
    Viscosity,
    Temperature,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Length,
        QuantityKind::Modulus,
        QuantityKind::Density,
        QuantityKind::Velocity,
        QuantityKind::Viscosity,
        QuantityKind::Temperature,
    ];

    /// SI 기준 단위 기호
    pub fn si_symbol(&self) -> &'static str {
        match self {
            QuantityKind::Length => "m",
            QuantityKind::Modulus => "Pa",
            QuantityKind::Density => "kg/m3",
            QuantityKind::Velocity => "m/s",
            QuantityKind::Viscosity => "Pa.s",
            QuantityKind::Temperature => "K",
        }
    }
}
