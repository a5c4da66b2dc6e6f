//! 선대 데이터 복제 도입 비용/ROI 계산 모듈 모음.

pub mod breakdown;
pub mod inputs;
pub mod model;

pub use breakdown::{comparison_series, savings_breakdown, Category, ComparisonRow, SavingsSlice};
pub use inputs::*;
pub use model::*;
