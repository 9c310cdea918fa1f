use serde::{Deserialize, Serialize};

use super::error::{FivError, GeometryFault, InputFault};

/// 튜브 형상. 모든 값은 SI(m) 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeGeometry {
    /// 외경 D [m]
    pub outer_diameter_m: f64,
    /// 두께 t [m]
    pub wall_thickness_m: f64,
    /// 튜브 길이 L [m]
    pub length_m: f64,
}

impl Default for TubeGeometry {
    fn default() -> Self {
        Self {
            outer_diameter_m: 0.025,
            wall_thickness_m: 0.002,
            length_m: 1.0,
        }
    }
}

impl TubeGeometry {
    /// 내경 D - 2t [m]. 음수가 될 수 있으므로 검증 전에는 신뢰하지 않는다.
    pub fn inner_diameter_m(&self) -> f64 {
        self.outer_diameter_m - 2.0 * self.wall_thickness_m
    }

    /// 내경이 양수인지 확인한다.
    pub fn check_wall(&self) -> Result<(), GeometryFault> {
        if self.wall_thickness_m * 2.0 >= self.outer_diameter_m {
            return Err(GeometryFault::WallTooThick {
                thickness_m: self.wall_thickness_m,
                outer_diameter_m: self.outer_diameter_m,
            });
        }
        Ok(())
    }
}

/// 튜브 재질과 관내/관외 유체 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialFluidProperties {
    /// 튜브 재질 밀도 [kg/m³]
    pub material_density_kg_m3: f64,
    /// 탄성계수 E [Pa]
    pub elastic_modulus_pa: f64,
    /// 유속 [m/s]
    pub fluid_velocity_m_s: f64,
    /// 유체 밀도 [kg/m³]
    pub fluid_density_kg_m3: f64,
    /// 유체 점도 [Pa·s]
    pub fluid_viscosity_pa_s: f64,
}

impl Default for MaterialFluidProperties {
    fn default() -> Self {
        Self {
            material_density_kg_m3: 7850.0,
            elastic_modulus_pa: 2.1e11,
            fluid_velocity_m_s: 2.0,
            fluid_density_kg_m3: 1000.0,
            fluid_viscosity_pa_s: 0.001,
        }
    }
}

/// 한 번의 평가에 쓰이는 입력 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeInput {
    pub geometry: TubeGeometry,
    pub properties: MaterialFluidProperties,
}

impl TubeInput {
    fn fields(&self) -> [(&'static str, f64); 8] {
        let g = &self.geometry;
        let p = &self.properties;
        [
            ("outer_diameter_m", g.outer_diameter_m),
            ("wall_thickness_m", g.wall_thickness_m),
            ("length_m", g.length_m),
            ("material_density_kg_m3", p.material_density_kg_m3),
            ("elastic_modulus_pa", p.elastic_modulus_pa),
            ("fluid_velocity_m_s", p.fluid_velocity_m_s),
            ("fluid_density_kg_m3", p.fluid_density_kg_m3),
            ("fluid_viscosity_pa_s", p.fluid_viscosity_pa_s),
        ]
    }

    /// 입력값의 유한성/범위를 검사한다. 형상(두께 vs 외경) 검사는 포함하지 않는다.
    pub fn validate(&self) -> Result<(), FivError> {
        let fields = self.fields();
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputFault::NonFinite { field, value }.into());
            }
        }
        for (field, value) in fields {
            if value < 0.0 {
                return Err(InputFault::OutOfRange {
                    field,
                    value,
                    rule: ">= 0",
                }
                .into());
            }
        }
        let strictly_positive = [
            ("material_density_kg_m3", self.properties.material_density_kg_m3),
            ("elastic_modulus_pa", self.properties.elastic_modulus_pa),
            ("outer_diameter_m", self.geometry.outer_diameter_m),
            ("length_m", self.geometry.length_m),
        ];
        for (field, value) in strictly_positive {
            if value <= 0.0 {
                return Err(InputFault::OutOfRange {
                    field,
                    value,
                    rule: "> 0",
                }
                .into());
            }
        }
        Ok(())
    }
}

/// 케이스 파일/CLI 플래그에서 읽은 입력. 빠진 항목은 `None`으로 남는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSheet {
    pub outer_diameter_m: Option<f64>,
    pub wall_thickness_m: Option<f64>,
    pub length_m: Option<f64>,
    pub material_density_kg_m3: Option<f64>,
    pub elastic_modulus_pa: Option<f64>,
    pub fluid_velocity_m_s: Option<f64>,
    pub fluid_density_kg_m3: Option<f64>,
    pub fluid_viscosity_pa_s: Option<f64>,
}

impl InputSheet {
    /// 비어 있는 항목을 `base` 값으로 채운다.
    pub fn fill_from(self, base: &TubeInput) -> InputSheet {
        let g = &base.geometry;
        let p = &base.properties;
        InputSheet {
            outer_diameter_m: self.outer_diameter_m.or(Some(g.outer_diameter_m)),
            wall_thickness_m: self.wall_thickness_m.or(Some(g.wall_thickness_m)),
            length_m: self.length_m.or(Some(g.length_m)),
            material_density_kg_m3: self
                .material_density_kg_m3
                .or(Some(p.material_density_kg_m3)),
            elastic_modulus_pa: self.elastic_modulus_pa.or(Some(p.elastic_modulus_pa)),
            fluid_velocity_m_s: self.fluid_velocity_m_s.or(Some(p.fluid_velocity_m_s)),
            fluid_density_kg_m3: self.fluid_density_kg_m3.or(Some(p.fluid_density_kg_m3)),
            fluid_viscosity_pa_s: self.fluid_viscosity_pa_s.or(Some(p.fluid_viscosity_pa_s)),
        }
    }

    /// 다른 시트의 값이 있으면 그것을 우선한다.
    pub fn overlay(self, top: InputSheet) -> InputSheet {
        InputSheet {
            outer_diameter_m: top.outer_diameter_m.or(self.outer_diameter_m),
            wall_thickness_m: top.wall_thickness_m.or(self.wall_thickness_m),
            length_m: top.length_m.or(self.length_m),
            material_density_kg_m3: top.material_density_kg_m3.or(self.material_density_kg_m3),
            elastic_modulus_pa: top.elastic_modulus_pa.or(self.elastic_modulus_pa),
            fluid_velocity_m_s: top.fluid_velocity_m_s.or(self.fluid_velocity_m_s),
            fluid_density_kg_m3: top.fluid_density_kg_m3.or(self.fluid_density_kg_m3),
            fluid_viscosity_pa_s: top.fluid_viscosity_pa_s.or(self.fluid_viscosity_pa_s),
        }
    }
}

impl TryFrom<InputSheet> for TubeInput {
    type Error = FivError;

    fn try_from(sheet: InputSheet) -> Result<Self, Self::Error> {
        fn need(v: Option<f64>, field: &'static str) -> Result<f64, FivError> {
            v.ok_or(FivError::InvalidInput(InputFault::Missing(field)))
        }
        let input = TubeInput {
            geometry: TubeGeometry {
                outer_diameter_m: need(sheet.outer_diameter_m, "outer_diameter_m")?,
                wall_thickness_m: need(sheet.wall_thickness_m, "wall_thickness_m")?,
                length_m: need(sheet.length_m, "length_m")?,
            },
            properties: MaterialFluidProperties {
                material_density_kg_m3: need(
                    sheet.material_density_kg_m3,
                    "material_density_kg_m3",
                )?,
                elastic_modulus_pa: need(sheet.elastic_modulus_pa, "elastic_modulus_pa")?,
                fluid_velocity_m_s: need(sheet.fluid_velocity_m_s, "fluid_velocity_m_s")?,
                fluid_density_kg_m3: need(sheet.fluid_density_kg_m3, "fluid_density_kg_m3")?,
                fluid_viscosity_pa_s: need(sheet.fluid_viscosity_pa_s, "fluid_viscosity_pa_s")?,
            },
        };
        input.validate()?;
        Ok(input)
    }
}

impl From<&TubeInput> for InputSheet {
    fn from(input: &TubeInput) -> Self {
        InputSheet::default().fill_from(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_valid() {
        assert!(TubeInput::default().validate().is_ok());
        assert!(TubeInput::default().geometry.check_wall().is_ok());
    }

    #[test]
    fn negative_viscosity_rejected() {
        let mut input = TubeInput::default();
        input.properties.fluid_viscosity_pa_s = -0.001;
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            FivError::InvalidInput(InputFault::OutOfRange {
                field: "fluid_viscosity_pa_s",
                ..
            })
        ));
    }

    #[test]
    fn nan_rejected_before_range() {
        let mut input = TubeInput::default();
        input.geometry.length_m = f64::NAN;
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            FivError::InvalidInput(InputFault::NonFinite { field: "length_m", .. })
        ));
    }

    #[test]
    fn zero_modulus_rejected() {
        let mut input = TubeInput::default();
        input.properties.elastic_modulus_pa = 0.0;
        assert!(input.validate().unwrap_err().is_input());
    }

    #[test]
    fn zero_velocity_and_viscosity_allowed() {
        let mut input = TubeInput::default();
        input.properties.fluid_velocity_m_s = 0.0;
        input.properties.fluid_viscosity_pa_s = 0.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn sheet_reports_missing_field() {
        let mut sheet = InputSheet::from(&TubeInput::default());
        sheet.fluid_density_kg_m3 = None;
        let err = TubeInput::try_from(sheet).unwrap_err();
        assert_eq!(
            err,
            FivError::InvalidInput(InputFault::Missing("fluid_density_kg_m3"))
        );
    }

    #[test]
    fn overlay_prefers_top_values() {
        let base = InputSheet::from(&TubeInput::default());
        let top = InputSheet {
            fluid_velocity_m_s: Some(5.0),
            ..InputSheet::default()
        };
        let merged = base.overlay(top);
        assert_eq!(merged.fluid_velocity_m_s, Some(5.0));
        assert_eq!(merged.outer_diameter_m, Some(0.025));
    }
}
