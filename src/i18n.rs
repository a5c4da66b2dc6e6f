use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

use crate::roi::Field;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOT_APPLICABLE: &str = "general.not_applicable";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMPLE: &str = "main_menu.simple";
    pub const MAIN_MENU_LICENSE: &str = "main_menu.license";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_BELOW_MINIMUM: &str = "error.below_minimum";
    pub const ERROR_NOT_INTEGER: &str = "error.not_integer";

    pub const CALC_SIMPLE_HEADING: &str = "calc.simple_heading";
    pub const CALC_LICENSE_HEADING: &str = "calc.license_heading";
    pub const CALC_EDIT_HINT: &str = "calc.edit_hint";
    pub const PROMPT_FIELD_SELECT: &str = "prompt.field_select";
    pub const PROMPT_NEW_VALUE: &str = "prompt.new_value";

    pub const SECTION_FLEET: &str = "section.fleet";
    pub const SECTION_CURRENT_PROCESS: &str = "section.current_process";
    pub const SECTION_LICENSE: &str = "section.license";
    pub const SECTION_COMPARISON: &str = "section.comparison";
    pub const SECTION_SAVINGS_BREAKDOWN: &str = "section.savings_breakdown";
    pub const SECTION_SUMMARY: &str = "section.summary";
    pub const SECTION_DEBUG: &str = "section.debug";

    pub const FIELD_VESSELS: &str = "field.vessels";
    pub const FIELD_DATA_PER_VESSEL: &str = "field.data_per_vessel";
    pub const FIELD_BANDWIDTH_COST: &str = "field.bandwidth_cost";
    pub const FIELD_MONTHLY_HOURS: &str = "field.monthly_hours";
    pub const FIELD_IT_COST: &str = "field.it_cost";
    pub const FIELD_FAILURE_RATE: &str = "field.failure_rate";
    pub const FIELD_FAILURE_TIME: &str = "field.failure_time";
    pub const FIELD_LICENSE_COST: &str = "field.license_cost";
    pub const FIELD_IMPLEMENTATION_COST: &str = "field.implementation_cost";
    pub const FIELD_MAINTENANCE_HOURS: &str = "field.maintenance_hours";

    pub const CATEGORY_BANDWIDTH: &str = "category.bandwidth";
    pub const CATEGORY_MANUAL: &str = "category.manual";
    pub const CATEGORY_FAILURE: &str = "category.failure";
    pub const CATEGORY_LICENSE: &str = "category.license";
    pub const COLUMN_CURRENT: &str = "column.current";
    pub const COLUMN_GTREPLICATE: &str = "column.gtreplicate";

    pub const SUMMARY_CURRENT_MONTHLY: &str = "summary.current_monthly";
    pub const SUMMARY_GT_MONTHLY: &str = "summary.gt_monthly";
    pub const SUMMARY_MONTHLY_SAVINGS: &str = "summary.monthly_savings";
    pub const SUMMARY_ANNUAL_SAVINGS: &str = "summary.annual_savings";
    pub const SUMMARY_MONTHLY_LICENSE: &str = "summary.monthly_license";
    pub const SUMMARY_ANNUAL_LICENSE: &str = "summary.annual_license";
    pub const SUMMARY_ROI_MONTHS: &str = "summary.roi_months";
    pub const SAVINGS_NONE: &str = "savings.none";
    pub const DEBUG_INPUTS: &str = "debug.inputs";
    pub const DEBUG_COSTS: &str = "debug.costs";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

/// 입력 필드의 표시 라벨 키.
pub fn field_key(field: Field) -> &'static str {
    use keys::*;
    match field {
        Field::Vessels => FIELD_VESSELS,
        Field::DataPerVesselGb => FIELD_DATA_PER_VESSEL,
        Field::BandwidthCostPerGb => FIELD_BANDWIDTH_COST,
        Field::MonthlyManualHoursPerVessel => FIELD_MONTHLY_HOURS,
        Field::ItCostPerHour => FIELD_IT_COST,
        Field::MonthlyFailuresPerVessel => FIELD_FAILURE_RATE,
        Field::HoursPerFailure => FIELD_FAILURE_TIME,
        Field::LicenseCostPerVessel => FIELD_LICENSE_COST,
        Field::ImplementationCost => FIELD_IMPLEMENTATION_COST,
        Field::MaintenanceHoursPerVessel => FIELD_MAINTENANCE_HOURS,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NOT_APPLICABLE => "N/A",
        MAIN_MENU_TITLE => "\n=== GTReplicate ROI 계산기 ===",
        MAIN_MENU_SIMPLE => "1) 단순 비교 (고정 절감률)",
        MAIN_MENU_LICENSE => "2) 라이선스 반영 모델",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_BELOW_MINIMUM => "최소값보다 작습니다. 최소값:",
        ERROR_NOT_INTEGER => "정수만 입력할 수 있습니다. 최대값:",
        CALC_SIMPLE_HEADING => "\n-- 단순 비교 --",
        CALC_LICENSE_HEADING => "\n-- 라이선스 반영 모델 --",
        CALC_EDIT_HINT => "항목 번호를 입력하면 값을 바꿀 수 있습니다 (엔터=메인 메뉴).",
        PROMPT_FIELD_SELECT => "변경할 항목 번호: ",
        PROMPT_NEW_VALUE => "새 값: ",
        SECTION_FLEET => "[선대 정보]",
        SECTION_CURRENT_PROCESS => "[현행 프로세스]",
        SECTION_LICENSE => "[GTReplicate 비용]",
        SECTION_COMPARISON => "[비용 비교 (USD/월)]",
        SECTION_SAVINGS_BREAKDOWN => "[절감액 구성]",
        SECTION_SUMMARY => "[요약]",
        SECTION_DEBUG => "[디버그 정보]",
        FIELD_VESSELS => "선박 수",
        FIELD_DATA_PER_VESSEL => "선박당 데이터 전송량 (GB/월)",
        FIELD_BANDWIDTH_COST => "대역폭 비용 (USD/GB)",
        FIELD_MONTHLY_HOURS => "선박당 월 작업 시간",
        FIELD_IT_COST => "IT 시간당 비용 (USD)",
        FIELD_FAILURE_RATE => "월 전송 실패 횟수",
        FIELD_FAILURE_TIME => "실패당 복구 시간",
        FIELD_LICENSE_COST => "선박당 GTReplicate 라이선스 (USD/월)",
        FIELD_IMPLEMENTATION_COST => "도입 비용 (일회성, USD)",
        FIELD_MAINTENANCE_HOURS => "선박당 월 유지보수 시간",
        CATEGORY_BANDWIDTH => "대역폭 비용",
        CATEGORY_MANUAL => "수작업 운영",
        CATEGORY_FAILURE => "실패 복구",
        CATEGORY_LICENSE => "라이선스",
        COLUMN_CURRENT => "현행",
        COLUMN_GTREPLICATE => "GTReplicate",
        SUMMARY_CURRENT_MONTHLY => "현행 월 비용",
        SUMMARY_GT_MONTHLY => "GTReplicate 월 비용",
        SUMMARY_MONTHLY_SAVINGS => "월 절감액",
        SUMMARY_ANNUAL_SAVINGS => "연 절감액",
        SUMMARY_MONTHLY_LICENSE => "월 라이선스 비용",
        SUMMARY_ANNUAL_LICENSE => "연 라이선스 비용",
        SUMMARY_ROI_MONTHS => "투자 회수 기간 (개월)",
        SAVINGS_NONE => "절감액이 없어 구성 차트를 표시하지 않습니다.",
        DEBUG_INPUTS => "입력값:",
        DEBUG_COSTS => "계산된 비용:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본 모드:",
        SETTINGS_OPTIONS => "1) 단순 비교  2) 라이선스 반영  3) 디버그 출력 전환",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        NOT_APPLICABLE => "N/A",
        MAIN_MENU_TITLE => "\n=== GTReplicate ROI Calculator ===",
        MAIN_MENU_SIMPLE => "1) Simple comparison (fixed reductions)",
        MAIN_MENU_LICENSE => "2) License-aware model",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_BELOW_MINIMUM => "Value is below the minimum. Minimum:",
        ERROR_NOT_INTEGER => "Whole numbers only. Maximum:",
        CALC_SIMPLE_HEADING => "\n-- Simple Comparison --",
        CALC_LICENSE_HEADING => "\n-- License-Aware Model --",
        CALC_EDIT_HINT => "Enter a field number to change its value (enter = main menu).",
        PROMPT_FIELD_SELECT => "Field number: ",
        PROMPT_NEW_VALUE => "New value: ",
        SECTION_FLEET => "[Fleet Information]",
        SECTION_CURRENT_PROCESS => "[Current Process]",
        SECTION_LICENSE => "[GTReplicate Costs]",
        SECTION_COMPARISON => "[Cost Comparison (USD/Month)]",
        SECTION_SAVINGS_BREAKDOWN => "[Savings Breakdown]",
        SECTION_SUMMARY => "[Summary]",
        SECTION_DEBUG => "[Debug Information]",
        FIELD_VESSELS => "Number of Vessels",
        FIELD_DATA_PER_VESSEL => "Data Transfer per Vessel (GB/month)",
        FIELD_BANDWIDTH_COST => "Bandwidth Cost (USD/GB)",
        FIELD_MONTHLY_HOURS => "Monthly Hours per Vessel",
        FIELD_IT_COST => "IT Cost per Hour (USD)",
        FIELD_FAILURE_RATE => "Monthly Transfer Failures",
        FIELD_FAILURE_TIME => "Hours per Failure Resolution",
        FIELD_LICENSE_COST => "GTReplicate License per Vessel (USD/month)",
        FIELD_IMPLEMENTATION_COST => "Implementation Cost (one-time, USD)",
        FIELD_MAINTENANCE_HOURS => "Maintenance Hours per Vessel",
        CATEGORY_BANDWIDTH => "Bandwidth Cost",
        CATEGORY_MANUAL => "Manual Operations",
        CATEGORY_FAILURE => "Failure Resolution",
        CATEGORY_LICENSE => "License",
        COLUMN_CURRENT => "Current",
        COLUMN_GTREPLICATE => "GTReplicate",
        SUMMARY_CURRENT_MONTHLY => "Current Monthly Cost",
        SUMMARY_GT_MONTHLY => "GTReplicate Monthly Cost",
        SUMMARY_MONTHLY_SAVINGS => "Monthly Savings",
        SUMMARY_ANNUAL_SAVINGS => "Annual Savings",
        SUMMARY_MONTHLY_LICENSE => "Monthly License Cost",
        SUMMARY_ANNUAL_LICENSE => "Annual License Cost",
        SUMMARY_ROI_MONTHS => "ROI Period (months)",
        SAVINGS_NONE => "No savings to break down.",
        DEBUG_INPUTS => "Input Values:",
        DEBUG_COSTS => "Calculated Costs:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current default mode:",
        SETTINGS_OPTIONS => "1) Simple  2) License-aware  3) Toggle debug output",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated:",
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if let Some(map) = &overrides {
            debug!(lang = lang_code, entries = map.len(), "loaded language pack");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순. 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        self.t(field_key(field))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

/// `ko-KR`, `en_US.UTF-8` 같은 코드에서 기본 언어만 뽑는다. `auto`/빈 값은 `None`.
fn normalize_lang(code: &str) -> Option<String> {
    let base = code
        .trim()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match base.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_lang) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_lang(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 하위 key.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_beats_config() {
        assert_eq!(resolve_language("ko-kr", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn posix_locale_strings_reduce_to_base_language() {
        assert_eq!(normalize_lang("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_lang(" EN-gb ").as_deref(), Some("en"));
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_lang("de-DE"), None);
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[summary]\ncurrent_monthly = \"Now\"\n").expect("pack");
        assert_eq!(map.get("summary.current_monthly").map(String::as_str), Some("Now"));
    }

    #[test]
    fn unknown_key_yields_placeholder() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
        assert_eq!(tr.t(keys::NOT_APPLICABLE), "N/A");
    }
}
