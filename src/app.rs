use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::cli::{CalcArgs, OutputFormat};
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::report;
use crate::roi::{self, ComparisonRow, InputError, RoiInput, RoiReport, SavingsSlice};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 표준 입력이 닫힘 (EOF)
    #[error("표준 입력이 닫혔습니다")]
    InputClosed,
}

/// 대화형 CLI 애플리케이션의 메인 루프를 실행한다. 표준 입력이 닫히면 종료로 취급한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    match menu_loop(config, config_path, tr) {
        Ok(()) | Err(AppError::InputClosed) => {
            println!("{}", tr.t(i18n::keys::APP_EXIT));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn menu_loop(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr, config.default_mode)? {
            MenuChoice::Calculator(mode) => ui_cli::handle_calculator(tr, config, mode)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                info!(path = %config_path.display(), "saved settings");
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// JSON 출력 형태. N/A 지표는 `null`로 나간다.
#[derive(Debug, Serialize)]
pub struct CalcOutput {
    pub input: RoiInput,
    pub report: RoiReport,
    pub comparison: Vec<ComparisonRow>,
    pub savings_breakdown: Option<Vec<SavingsSlice>>,
}

impl CalcOutput {
    pub fn new(input: RoiInput, report: RoiReport) -> Self {
        Self {
            comparison: roi::comparison_series(&report),
            savings_breakdown: roi::savings_breakdown(&report),
            input,
            report,
        }
    }
}

/// `calc` 하위 명령: 한 번 계산해 지정 형식으로 렌더링한다.
pub fn render_calc(args: &CalcArgs, config: &Config, tr: &Translator) -> Result<String, AppError> {
    let input = args.to_input(config)?;
    let report = roi::calculate(&input)?;
    match args.format {
        OutputFormat::Text => Ok(report::render_report(
            &input,
            &report,
            tr,
            args.debug || config.show_debug,
        )),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&CalcOutput::new(input, report))?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn run_calc(args: &CalcArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let out = render_calc(args, config, tr)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
