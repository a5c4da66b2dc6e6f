use crate::config::Config;
use crate::roi::{self, Field, FleetProfile, InputError, LicenseTerms, ModeKind, RoiInput, RoiReport};

/// 대화형 화면 하나의 입력 스냅샷과 마지막 계산 결과.
///
/// 입력이 바뀔 때마다 전체를 다시 계산하며, 이전 결과는 재사용하지 않는다.
#[derive(Debug, Clone)]
pub struct Session {
    mode: ModeKind,
    fleet: FleetProfile,
    license: LicenseTerms,
    report: RoiReport,
}

impl Session {
    pub fn new(
        mode: ModeKind,
        fleet: FleetProfile,
        license: LicenseTerms,
    ) -> Result<Self, InputError> {
        let report = roi::calculate(&snapshot(mode, fleet, license))?;
        Ok(Self {
            mode,
            fleet,
            license,
            report,
        })
    }

    /// 설정의 기본 입력값으로 세션을 연다.
    pub fn from_config(cfg: &Config, mode: ModeKind) -> Result<Self, InputError> {
        Self::new(mode, cfg.fleet, cfg.license)
    }

    pub fn input(&self) -> RoiInput {
        snapshot(self.mode, self.fleet, self.license)
    }

    pub fn report(&self) -> &RoiReport {
        &self.report
    }

    /// 현재 모드에서 편집 가능한 필드 목록 (화면 번호 순).
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Field::FLEET.to_vec();
        if self.mode == ModeKind::LicenseAware {
            fields.extend(Field::LICENSE);
        }
        fields
    }

    /// 필드 하나를 바꾸고 즉시 다시 계산한다. 거부된 값은 스냅샷을 바꾸지 않는다.
    pub fn set(&mut self, field: Field, value: f64) -> Result<&RoiReport, InputError> {
        let mut fleet = self.fleet;
        let mut license = self.license;
        if !fleet.set(field, value)? {
            license.set(field, value)?;
        }
        self.report = roi::calculate(&snapshot(self.mode, fleet, license))?;
        self.fleet = fleet;
        self.license = license;
        Ok(&self.report)
    }
}

fn snapshot(mode: ModeKind, fleet: FleetProfile, license: LicenseTerms) -> RoiInput {
    match mode {
        ModeKind::Simple => RoiInput::simple(fleet),
        ModeKind::LicenseAware => RoiInput::license_aware(fleet, license),
    }
}
