use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::roi::{FleetProfile, InputError, LicenseTerms, ModeKind};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en ...)
    pub language: String,
    /// 언어팩 디렉터리 (없으면 내장 문자열)
    pub language_pack_dir: Option<String>,
    /// 시작 시 선택되는 계산 모드
    pub default_mode: ModeKind,
    /// 입력값/항목별 비용 디버그 출력 여부
    pub show_debug: bool,
    /// 입력 기본값
    pub fleet: FleetProfile,
    pub license: LicenseTerms,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_mode: ModeKind::Simple,
            show_debug: false,
            fleet: FleetProfile::default(),
            license: LicenseTerms::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 저장된 기본 입력값이 최소값 조건을 어김
    #[error("설정 기본값 오류: {0}")]
    Invalid(#[from] InputError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.fleet.validate()?;
        cfg.license.validate()?;
        info!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        if let Err(e) = save_config(&cfg, path) {
            warn!(path = %path.display(), error = %e, "could not write default configuration");
        } else {
            info!(path = %path.display(), "created default configuration");
        }
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

/// `--config` 인자가 없으면 작업 디렉터리의 config.toml을 쓴다.
pub fn resolve_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
