use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 입력값 전제조건 위반을 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// 필드별 최소값 미만
    #[error("{field} 값 {value}이(가) 최소값 {min}보다 작습니다")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },
    /// NaN 또는 무한대
    #[error("{field} 값이 유한한 숫자가 아닙니다")]
    NotFinite { field: &'static str },
    /// 선박 수처럼 정수만 허용하는 필드에 소수/범위 밖 값
    #[error("{field} 값 {value}은(는) {max} 이하의 정수여야 합니다")]
    NotInteger {
        field: &'static str,
        max: f64,
        value: f64,
    },
    /// 유효한 입력이지만 계산 결과가 f64 범위를 넘음
    #[error("{metric} 계산 결과가 표현 범위를 넘었습니다")]
    Overflow { metric: &'static str },
}

/// 입력 필드 식별자. 프롬프트, CLI 플래그, 검증이 같은 이름과 최소값을 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Vessels,
    DataPerVesselGb,
    BandwidthCostPerGb,
    MonthlyManualHoursPerVessel,
    ItCostPerHour,
    MonthlyFailuresPerVessel,
    HoursPerFailure,
    LicenseCostPerVessel,
    ImplementationCost,
    MaintenanceHoursPerVessel,
}

impl Field {
    /// 공통 선박 입력 필드 (두 모드 모두 사용).
    pub const FLEET: [Field; 7] = [
        Field::Vessels,
        Field::DataPerVesselGb,
        Field::BandwidthCostPerGb,
        Field::MonthlyManualHoursPerVessel,
        Field::ItCostPerHour,
        Field::MonthlyFailuresPerVessel,
        Field::HoursPerFailure,
    ];

    /// 라이선스 모드 전용 필드.
    pub const LICENSE: [Field; 3] = [
        Field::LicenseCostPerVessel,
        Field::ImplementationCost,
        Field::MaintenanceHoursPerVessel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Vessels => "vessels",
            Field::DataPerVesselGb => "data_per_vessel_gb",
            Field::BandwidthCostPerGb => "bandwidth_cost_per_gb",
            Field::MonthlyManualHoursPerVessel => "monthly_manual_hours_per_vessel",
            Field::ItCostPerHour => "it_cost_per_hour",
            Field::MonthlyFailuresPerVessel => "monthly_failures_per_vessel",
            Field::HoursPerFailure => "hours_per_failure",
            Field::LicenseCostPerVessel => "gtreplicate_license_cost_per_vessel",
            Field::ImplementationCost => "implementation_cost_onetime",
            Field::MaintenanceHoursPerVessel => "maintenance_hours_per_vessel",
        }
    }

    /// 허용 최소값.
    pub fn min(self) -> f64 {
        match self {
            Field::Vessels
            | Field::DataPerVesselGb
            | Field::BandwidthCostPerGb
            | Field::MonthlyManualHoursPerVessel
            | Field::ItCostPerHour => 1.0,
            _ => 0.0,
        }
    }

    /// 값이 필드 전제조건을 만족하는지 확인한다.
    pub fn check(self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field: self.name() });
        }
        if value < self.min() {
            return Err(InputError::BelowMinimum {
                field: self.name(),
                min: self.min(),
                value,
            });
        }
        if self == Field::Vessels && (value.fract() != 0.0 || value > f64::from(u32::MAX)) {
            return Err(InputError::NotInteger {
                field: self.name(),
                max: f64::from(u32::MAX),
                value,
            });
        }
        Ok(value)
    }
}

/// 선대 규모와 현행 프로세스 비용 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetProfile {
    pub vessels: u32,
    /// 선박당 월 데이터 전송량 [GB]
    pub data_per_vessel_gb: f64,
    /// 대역폭 단가 [USD/GB]
    pub bandwidth_cost_per_gb: f64,
    /// 선박당 월 수작업 시간 [h]
    pub monthly_manual_hours_per_vessel: f64,
    /// IT 인건비 [USD/h]
    pub it_cost_per_hour: f64,
    /// 선박당 월 전송 실패 횟수
    pub monthly_failures_per_vessel: f64,
    /// 실패 1건당 복구 시간 [h]
    pub hours_per_failure: f64,
}

impl Default for FleetProfile {
    fn default() -> Self {
        Self {
            vessels: 10,
            data_per_vessel_gb: 50.0,
            bandwidth_cost_per_gb: 30.0,
            monthly_manual_hours_per_vessel: 20.0,
            it_cost_per_hour: 50.0,
            monthly_failures_per_vessel: 5.0,
            hours_per_failure: 2.0,
        }
    }
}

impl FleetProfile {
    pub fn get(&self, field: Field) -> Option<f64> {
        Some(match field {
            Field::Vessels => f64::from(self.vessels),
            Field::DataPerVesselGb => self.data_per_vessel_gb,
            Field::BandwidthCostPerGb => self.bandwidth_cost_per_gb,
            Field::MonthlyManualHoursPerVessel => self.monthly_manual_hours_per_vessel,
            Field::ItCostPerHour => self.it_cost_per_hour,
            Field::MonthlyFailuresPerVessel => self.monthly_failures_per_vessel,
            Field::HoursPerFailure => self.hours_per_failure,
            _ => return None,
        })
    }

    /// 필드 값을 검증 후 설정한다.
    /// 라이선스 필드가 들어오면 `false`를 돌려준다.
    pub fn set(&mut self, field: Field, value: f64) -> Result<bool, InputError> {
        let value = field.check(value)?;
        match field {
            Field::Vessels => self.vessels = value as u32,
            Field::DataPerVesselGb => self.data_per_vessel_gb = value,
            Field::BandwidthCostPerGb => self.bandwidth_cost_per_gb = value,
            Field::MonthlyManualHoursPerVessel => self.monthly_manual_hours_per_vessel = value,
            Field::ItCostPerHour => self.it_cost_per_hour = value,
            Field::MonthlyFailuresPerVessel => self.monthly_failures_per_vessel = value,
            Field::HoursPerFailure => self.hours_per_failure = value,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for field in Field::FLEET {
            if let Some(v) = self.get(field) {
                field.check(v)?;
            }
        }
        Ok(())
    }

    pub(crate) fn vessels_f64(&self) -> f64 {
        f64::from(self.vessels)
    }
}

/// 라이선스 모델 전용 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseTerms {
    /// 선박당 월 라이선스 비용 [USD]
    pub license_cost_per_vessel: f64,
    /// 일회성 도입 비용 [USD]
    pub implementation_cost: f64,
    /// 도입 후 선박당 월 유지보수 시간 [h]
    pub maintenance_hours_per_vessel: f64,
}

impl Default for LicenseTerms {
    fn default() -> Self {
        Self {
            license_cost_per_vessel: 30.0,
            implementation_cost: 0.0,
            maintenance_hours_per_vessel: 5.0,
        }
    }
}

impl LicenseTerms {
    pub fn get(&self, field: Field) -> Option<f64> {
        Some(match field {
            Field::LicenseCostPerVessel => self.license_cost_per_vessel,
            Field::ImplementationCost => self.implementation_cost,
            Field::MaintenanceHoursPerVessel => self.maintenance_hours_per_vessel,
            _ => return None,
        })
    }

    pub fn set(&mut self, field: Field, value: f64) -> Result<bool, InputError> {
        let value = field.check(value)?;
        match field {
            Field::LicenseCostPerVessel => self.license_cost_per_vessel = value,
            Field::ImplementationCost => self.implementation_cost = value,
            Field::MaintenanceHoursPerVessel => self.maintenance_hours_per_vessel = value,
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for field in Field::LICENSE {
            if let Some(v) = self.get(field) {
                field.check(v)?;
            }
        }
        Ok(())
    }
}

/// 계산 모드. 두 모드의 수작업 비용 가정은 서로 다르며 통합하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// 고정 절감률(대역폭 60%, 수작업 75%, 실패 90%) 비교.
    Simple,
    /// 유지보수 시간과 라이선스 비용을 반영하는 모델.
    LicenseAware(LicenseTerms),
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Simple => ModeKind::Simple,
            Mode::LicenseAware(_) => ModeKind::LicenseAware,
        }
    }
}

/// 데이터 없이 모드 종류만 나타낸다 (설정/CLI 선택용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ModeKind {
    Simple,
    LicenseAware,
}

/// 계산기 한 번 호출에 넘기는 입력 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiInput {
    pub fleet: FleetProfile,
    pub mode: Mode,
}

impl RoiInput {
    pub fn simple(fleet: FleetProfile) -> Self {
        Self {
            fleet,
            mode: Mode::Simple,
        }
    }

    pub fn license_aware(fleet: FleetProfile, terms: LicenseTerms) -> Self {
        Self {
            fleet,
            mode: Mode::LicenseAware(terms),
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        self.fleet.validate()?;
        if let Mode::LicenseAware(terms) = &self.mode {
            terms.validate()?;
        }
        Ok(())
    }
}
