use serde::Serialize;
use tracing::debug;

use super::inputs::{InputError, Mode, ModeKind, RoiInput};

/// GTReplicate 도입 후 대역폭 비용 잔존 비율 (60% 절감)
pub const BANDWIDTH_FACTOR: f64 = 0.40;
/// 고정 절감 모드의 수작업 비용 잔존 비율 (75% 절감)
pub const MANUAL_FACTOR: f64 = 0.25;
/// 전송 실패 대응 비용 잔존 비율 (90% 절감)
pub const FAILURE_FACTOR: f64 = 0.10;

const MONTHS_PER_YEAR: f64 = 12.0;

/// 항목별 월 비용 [USD/월].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostBreakdown {
    pub bandwidth: f64,
    pub manual: f64,
    pub failure: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.bandwidth + self.manual + self.failure
    }
}

/// 항목별 월 절감액. 라이선스 비용은 수작업(운영) 항목에서 차감된다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategorySavings {
    pub bandwidth: f64,
    pub operations: f64,
    pub failure: f64,
}

impl CategorySavings {
    pub fn total(&self) -> f64 {
        self.bandwidth + self.operations + self.failure
    }
}

/// 라이선스 모델에서만 산출되는 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LicenseSummary {
    pub monthly_license_cost: f64,
    pub annual_license_cost: f64,
    pub implementation_cost: f64,
    /// 도입비 회수 개월 수. 월 절감액이 0 이하이면 `None`.
    pub roi_months: Option<f64>,
}

/// 입력 스냅샷 하나에 대한 전체 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiReport {
    pub mode: ModeKind,
    pub current: CostBreakdown,
    pub gtreplicate: CostBreakdown,
    pub current_total: f64,
    /// 라이선스 비용 포함 GTReplicate 월 총비용
    pub gt_total: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub savings_by_category: CategorySavings,
    /// 현행 비용 대비 절감률 [%]. 현행 총비용이 0이면 `None`.
    pub savings_pct: Option<f64>,
    pub license: Option<LicenseSummary>,
}

impl RoiReport {
    pub fn monthly_license_cost(&self) -> f64 {
        self.license.map_or(0.0, |l| l.monthly_license_cost)
    }
}

/// 현행 프로세스의 월 비용을 계산한다.
pub fn current_costs(input: &RoiInput) -> CostBreakdown {
    let f = &input.fleet;
    let vessels = f.vessels_f64();
    CostBreakdown {
        bandwidth: vessels * f.data_per_vessel_gb * f.bandwidth_cost_per_gb,
        manual: vessels * f.monthly_manual_hours_per_vessel * f.it_cost_per_hour,
        failure: vessels * f.monthly_failures_per_vessel * f.hours_per_failure * f.it_cost_per_hour,
    }
}

/// GTReplicate 도입 후 항목별 월 비용(라이선스 제외)을 계산한다.
pub fn gtreplicate_costs(input: &RoiInput, current: &CostBreakdown) -> CostBreakdown {
    let manual = match &input.mode {
        Mode::Simple => current.manual * MANUAL_FACTOR,
        Mode::LicenseAware(terms) => {
            input.fleet.vessels_f64() * terms.maintenance_hours_per_vessel * input.fleet.it_cost_per_hour
        }
    };
    CostBreakdown {
        bandwidth: current.bandwidth * BANDWIDTH_FACTOR,
        manual,
        failure: current.failure * FAILURE_FACTOR,
    }
}

/// 절감률 [%]. 분모가 0이거나 결과가 유한하지 않으면 정의되지 않는다.
pub fn savings_percentage(current_total: f64, savings: f64) -> Option<f64> {
    if current_total == 0.0 {
        None
    } else {
        Some(savings / current_total * 100.0).filter(|p| p.is_finite())
    }
}

/// 도입비 회수 기간 [월]. 월 절감액이 양수이고 결과가 유한할 때만 정의된다.
pub fn payback_months(implementation_cost: f64, monthly_savings: f64) -> Option<f64> {
    if monthly_savings > 0.0 {
        Some(implementation_cost / monthly_savings).filter(|m| m.is_finite())
    } else {
        None
    }
}

fn finite(metric: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::Overflow { metric })
    }
}

/// 입력 스냅샷으로 모든 파생 지표를 다시 계산한다.
pub fn calculate(input: &RoiInput) -> Result<RoiReport, InputError> {
    input.validate()?;

    let current = current_costs(input);
    let gtreplicate = gtreplicate_costs(input, &current);

    let monthly_license_cost = match &input.mode {
        Mode::Simple => 0.0,
        Mode::LicenseAware(terms) => input.fleet.vessels_f64() * terms.license_cost_per_vessel,
    };

    // 최소값을 지킨 입력이라도 곱셈이 f64 범위를 넘을 수 있다.
    let current_total = finite("current_total", current.total())?;
    let gt_total = finite("gt_total", gtreplicate.total() + monthly_license_cost)?;
    let monthly_savings = finite("monthly_savings", current_total - gt_total)?;
    let annual_savings = finite("annual_savings", monthly_savings * MONTHS_PER_YEAR)?;
    let annual_license_cost = finite("annual_license_cost", monthly_license_cost * MONTHS_PER_YEAR)?;

    let savings_by_category = CategorySavings {
        bandwidth: current.bandwidth - gtreplicate.bandwidth,
        operations: current.manual - gtreplicate.manual - monthly_license_cost,
        failure: current.failure - gtreplicate.failure,
    };

    let license = match &input.mode {
        Mode::Simple => None,
        Mode::LicenseAware(terms) => Some(LicenseSummary {
            monthly_license_cost,
            annual_license_cost,
            implementation_cost: terms.implementation_cost,
            roi_months: payback_months(terms.implementation_cost, monthly_savings),
        }),
    };

    let report = RoiReport {
        mode: input.mode.kind(),
        current,
        gtreplicate,
        current_total,
        gt_total,
        monthly_savings,
        annual_savings,
        savings_by_category,
        savings_pct: savings_percentage(current_total, monthly_savings),
        license,
    };
    debug!(
        mode = ?report.mode,
        current_total,
        gt_total,
        monthly_savings,
        "recalculated ROI"
    );
    Ok(report)
}
