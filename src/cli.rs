//! 명령줄 인자 정의.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::roi::{Field, InputError, ModeKind, RoiInput};

#[derive(Debug, Parser)]
#[command(name = "gtreplicate_roi", version, about = "GTReplicate fleet replication ROI calculator")]
pub struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    pub lang: String,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 입력값으로 한 번 계산하고 결과를 출력한다
    Calc(CalcArgs),
    /// 대화형 계산기 (기본)
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `calc` 하위 명령 인자. 지정하지 않은 값은 설정의 기본값을 쓴다.
#[derive(Debug, Default, Args)]
pub struct CalcArgs {
    #[arg(long, value_enum)]
    pub mode: Option<ModeKind>,
    #[arg(long)]
    pub vessels: Option<f64>,
    #[arg(long)]
    pub data_per_vessel_gb: Option<f64>,
    #[arg(long)]
    pub bandwidth_cost_per_gb: Option<f64>,
    #[arg(long)]
    pub monthly_manual_hours: Option<f64>,
    #[arg(long)]
    pub it_cost_per_hour: Option<f64>,
    #[arg(long)]
    pub monthly_failures: Option<f64>,
    #[arg(long)]
    pub hours_per_failure: Option<f64>,
    #[arg(long)]
    pub license_cost_per_vessel: Option<f64>,
    #[arg(long)]
    pub implementation_cost: Option<f64>,
    #[arg(long)]
    pub maintenance_hours: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 입력값과 항목별 비용을 함께 출력
    #[arg(long)]
    pub debug: bool,
}

impl CalcArgs {
    fn overrides(&self) -> [(Field, Option<f64>); 10] {
        [
            (Field::Vessels, self.vessels),
            (Field::DataPerVesselGb, self.data_per_vessel_gb),
            (Field::BandwidthCostPerGb, self.bandwidth_cost_per_gb),
            (Field::MonthlyManualHoursPerVessel, self.monthly_manual_hours),
            (Field::ItCostPerHour, self.it_cost_per_hour),
            (Field::MonthlyFailuresPerVessel, self.monthly_failures),
            (Field::HoursPerFailure, self.hours_per_failure),
            (Field::LicenseCostPerVessel, self.license_cost_per_vessel),
            (Field::ImplementationCost, self.implementation_cost),
            (Field::MaintenanceHoursPerVessel, self.maintenance_hours),
        ]
    }

    /// 설정 기본값 위에 명령줄 값을 덮어써서 입력 스냅샷을 만든다.
    pub fn to_input(&self, cfg: &Config) -> Result<RoiInput, InputError> {
        let mut fleet = cfg.fleet;
        let mut license = cfg.license;
        for (field, value) in self.overrides() {
            if let Some(v) = value {
                if !fleet.set(field, v)? {
                    license.set(field, v)?;
                }
            }
        }
        Ok(match self.mode.unwrap_or(cfg.default_mode) {
            ModeKind::Simple => RoiInput::simple(fleet),
            ModeKind::LicenseAware => RoiInput::license_aware(fleet, license),
        })
    }
}
