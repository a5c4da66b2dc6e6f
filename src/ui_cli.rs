use std::io::{self, Write};

use tracing::debug;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::roi::{Field, InputError, ModeKind};
use crate::session::Session;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator(ModeKind),
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 빈 입력은 기본 모드 계산기로 간다.
pub fn main_menu(tr: &Translator, default_mode: ModeKind) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIMPLE));
    println!("{}", tr.t(keys::MAIN_MENU_LICENSE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        if let Some(choice) = parse_menu(&sel, default_mode) {
            return Ok(choice);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn parse_menu(sel: &str, default_mode: ModeKind) -> Option<MenuChoice> {
    match sel.trim() {
        "" => Some(MenuChoice::Calculator(default_mode)),
        "1" => Some(MenuChoice::Calculator(ModeKind::Simple)),
        "2" => Some(MenuChoice::Calculator(ModeKind::LicenseAware)),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 계산기 화면. 항목을 하나 바꿀 때마다 다시 계산해 전체 결과를 다시 출력한다.
pub fn handle_calculator(tr: &Translator, cfg: &Config, mode: ModeKind) -> Result<(), AppError> {
    let mut session = Session::from_config(cfg, mode)?;
    let heading = match mode {
        ModeKind::Simple => keys::CALC_SIMPLE_HEADING,
        ModeKind::LicenseAware => keys::CALC_LICENSE_HEADING,
    };
    loop {
        println!("{}", tr.t(heading));
        print!("{}", report::render_inputs(&session.input(), tr));
        println!();
        print!(
            "{}",
            report::render_report(&session.input(), session.report(), tr, cfg.show_debug)
        );
        println!("\n{}", tr.t(keys::CALC_EDIT_HINT));

        let fields = session.fields();
        let Some(field) = read_field_choice(tr, &fields)? else {
            return Ok(());
        };
        let value = read_field_value(tr, field)?;
        match session.set(field, value) {
            Ok(_) => debug!(field = field.name(), value, "input changed"),
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

/// 변경할 필드 번호를 읽는다. 빈 입력이면 `None`.
fn read_field_choice(tr: &Translator, fields: &[Field]) -> Result<Option<Field>, AppError> {
    loop {
        let sel = read_line(tr.t(keys::PROMPT_FIELD_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(None);
        }
        if let Some(field) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| fields.get(i))
        {
            return Ok(Some(*field));
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 필드 최소값을 만족할 때까지 다시 묻는다.
fn read_field_value(tr: &Translator, field: Field) -> Result<f64, AppError> {
    let prompt = format!("{} → {}", tr.field(field), tr.t(keys::PROMPT_NEW_VALUE));
    loop {
        let v = read_f64(tr, &prompt)?;
        match field.check(v) {
            Ok(v) => return Ok(v),
            Err(InputError::BelowMinimum { min, .. }) => {
                println!("{} {min}", tr.t(keys::ERROR_BELOW_MINIMUM))
            }
            Err(InputError::NotInteger { max, .. }) => {
                println!("{} {max}", tr.t(keys::ERROR_NOT_INTEGER))
            }
            Err(InputError::NotFinite { .. } | InputError::Overflow { .. }) => {
                println!("{}", tr.t(keys::ERROR_INVALID_NUMBER))
            }
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?} (debug: {})",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.default_mode,
        cfg.show_debug
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.default_mode = ModeKind::Simple,
        "2" => cfg.default_mode = ModeKind::LicenseAware,
        "3" => cfg.show_debug = !cfg.show_debug,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!(
        "{} {:?} (debug: {})",
        tr.t(keys::SETTINGS_SAVED),
        cfg.default_mode,
        cfg.show_debug
    );
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_modes() {
        let d = ModeKind::Simple;
        assert_eq!(parse_menu("1\n", d), Some(MenuChoice::Calculator(ModeKind::Simple)));
        assert_eq!(parse_menu(" 2 ", d), Some(MenuChoice::Calculator(ModeKind::LicenseAware)));
        assert_eq!(parse_menu("0", d), Some(MenuChoice::Exit));
        assert_eq!(parse_menu("9", d), None);
    }

    #[test]
    fn empty_selection_opens_default_mode() {
        assert_eq!(
            parse_menu("\n", ModeKind::LicenseAware),
            Some(MenuChoice::Calculator(ModeKind::LicenseAware))
        );
    }
}
