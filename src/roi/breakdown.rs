//! 차트 렌더러에 넘길 비교/절감 데이터 계열.

use serde::Serialize;

use super::model::RoiReport;

/// 비용 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Bandwidth,
    ManualOperations,
    FailureResolution,
    License,
}

/// 항목별 현행 대비 GTReplicate 월 비용 (막대 차트 한 묶음).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub category: Category,
    pub current: f64,
    pub gtreplicate: f64,
}

/// 절감액 파이 차트 한 조각.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsSlice {
    pub category: Category,
    pub value: f64,
    /// 전체 양(+)의 절감액 중 비중 (0~1)
    pub share: f64,
}

/// 항목별 비용 비교 계열. 라이선스 모델은 라이선스 비용 행이 추가된다.
pub fn comparison_series(report: &RoiReport) -> Vec<ComparisonRow> {
    let mut rows = vec![
        ComparisonRow {
            category: Category::Bandwidth,
            current: report.current.bandwidth,
            gtreplicate: report.gtreplicate.bandwidth,
        },
        ComparisonRow {
            category: Category::ManualOperations,
            current: report.current.manual,
            gtreplicate: report.gtreplicate.manual,
        },
        ComparisonRow {
            category: Category::FailureResolution,
            current: report.current.failure,
            gtreplicate: report.gtreplicate.failure,
        },
    ];
    if let Some(license) = &report.license {
        rows.push(ComparisonRow {
            category: Category::License,
            current: 0.0,
            gtreplicate: license.monthly_license_cost,
        });
    }
    rows
}

/// 절감액 구성. 항목 합계가 0 이하이면 그릴 것이 없으므로 `None`.
pub fn savings_breakdown(report: &RoiReport) -> Option<Vec<SavingsSlice>> {
    let s = &report.savings_by_category;
    if s.total() <= 0.0 {
        return None;
    }
    let parts = [
        (Category::Bandwidth, s.bandwidth),
        (Category::ManualOperations, s.operations),
        (Category::FailureResolution, s.failure),
    ];
    // 음수 조각은 파이에서 0으로 본다.
    let positive: f64 = parts.iter().map(|(_, v)| v.max(0.0)).sum();
    if positive <= 0.0 {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|&(category, value)| SavingsSlice {
                category,
                value,
                share: value.max(0.0) / positive,
            })
            .collect(),
    )
}
