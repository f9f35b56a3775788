//! 열저항 계산에 쓰는 단위 정의 및 변환 모듈 모음.

pub mod conductivity;
pub mod heat_transfer;
pub mod length;
pub mod resistance;

pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use resistance::{convert_resistance, ResistanceUnit};
