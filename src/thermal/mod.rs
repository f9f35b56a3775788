//! 외벽 열보호 계산 핵심 모듈.
//! 층 열저항 모델, 적합성 검토, 미지 층 두께 계산으로 구성한다.

pub mod compliance;
pub mod demo;
pub mod layer;
pub mod normative;
pub mod thickness;
pub mod wall;

pub use compliance::{check_compliance, ComplianceResult};
pub use layer::LayerMaterial;
pub use thickness::{solve_thickness, ConfigurationError, RequiredResistanceBasis, ThicknessResult};
pub use wall::WallAssembly;
