//! 계산 결과를 사람이 읽는 텍스트로 렌더링한다. 계산기는 숫자만 내고 서식은 여기서 맡는다.

use std::fmt::Write;

use crate::i18n::{keys, Translator};
use crate::roi::{self, Category, Field, RoiInput, RoiReport};

/// USD 금액을 `$1,234.56` 형식으로 만든다.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// 백분율 (소수 첫째 자리).
pub fn format_percent(value: Option<f64>, tr: &Translator) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => tr.t(keys::NOT_APPLICABLE).to_string(),
    }
}

/// 개월 수 (소수 첫째 자리).
pub fn format_months(value: Option<f64>, tr: &Translator) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => tr.t(keys::NOT_APPLICABLE).to_string(),
    }
}

fn category_label(category: Category, tr: &Translator) -> &str {
    tr.t(match category {
        Category::Bandwidth => keys::CATEGORY_BANDWIDTH,
        Category::ManualOperations => keys::CATEGORY_MANUAL,
        Category::FailureResolution => keys::CATEGORY_FAILURE,
        Category::License => keys::CATEGORY_LICENSE,
    })
}

/// 입력 필드 목록 (번호는 대화형 편집에서 항목 선택에 쓴다).
pub fn render_inputs(input: &RoiInput, tr: &Translator) -> String {
    let mut out = String::new();
    let mut n = 1;
    let mut line = |out: &mut String, field: Field, value: f64| {
        let _ = writeln!(out, "{n:>2}) {}: {value}", tr.field(field));
        n += 1;
    };
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_FLEET));
    for field in &Field::FLEET[..3] {
        if let Some(v) = input.fleet.get(*field) {
            line(&mut out, *field, v);
        }
    }
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_CURRENT_PROCESS));
    for field in &Field::FLEET[3..] {
        if let Some(v) = input.fleet.get(*field) {
            line(&mut out, *field, v);
        }
    }
    if let roi::Mode::LicenseAware(terms) = &input.mode {
        let _ = writeln!(out, "{}", tr.t(keys::SECTION_LICENSE));
        for field in Field::LICENSE {
            if let Some(v) = terms.get(field) {
                line(&mut out, field, v);
            }
        }
    }
    out
}

/// 항목별 비용 비교 표.
pub fn render_comparison(report: &RoiReport, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_COMPARISON));
    let _ = writeln!(
        out,
        "  {:<24} {:>16} {:>16}",
        "",
        tr.t(keys::COLUMN_CURRENT),
        tr.t(keys::COLUMN_GTREPLICATE)
    );
    for row in roi::comparison_series(report) {
        let _ = writeln!(
            out,
            "  {:<24} {:>16} {:>16}",
            category_label(row.category, tr),
            format_usd(row.current),
            format_usd(row.gtreplicate)
        );
    }
    out
}

/// 절감액 구성. 절감액이 없으면 안내 문구만 낸다.
pub fn render_savings_breakdown(report: &RoiReport, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_SAVINGS_BREAKDOWN));
    match roi::savings_breakdown(report) {
        Some(slices) => {
            for s in slices {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>16} {:>7.1}%",
                    category_label(s.category, tr),
                    format_usd(s.value),
                    s.share * 100.0
                );
            }
        }
        None => {
            let _ = writeln!(out, "  {}", tr.t(keys::SAVINGS_NONE));
        }
    }
    out
}

/// 요약 지표.
pub fn render_summary(report: &RoiReport, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_SUMMARY));
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::SUMMARY_CURRENT_MONTHLY),
        format_usd(report.current_total)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::SUMMARY_GT_MONTHLY),
        format_usd(report.gt_total)
    );
    let _ = writeln!(
        out,
        "  {}: {} ({})",
        tr.t(keys::SUMMARY_MONTHLY_SAVINGS),
        format_usd(report.monthly_savings),
        format_percent(report.savings_pct, tr)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::SUMMARY_ANNUAL_SAVINGS),
        format_usd(report.annual_savings)
    );
    if let Some(license) = &report.license {
        let _ = writeln!(
            out,
            "  {}: {}",
            tr.t(keys::SUMMARY_MONTHLY_LICENSE),
            format_usd(license.monthly_license_cost)
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            tr.t(keys::SUMMARY_ANNUAL_LICENSE),
            format_usd(license.annual_license_cost)
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            tr.t(keys::SUMMARY_ROI_MONTHS),
            format_months(license.roi_months, tr)
        );
    }
    out
}

/// 입력값과 항목별 비용을 그대로 찍는다.
pub fn render_debug(input: &RoiInput, report: &RoiReport, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_DEBUG));
    let _ = writeln!(out, "  {}", tr.t(keys::DEBUG_INPUTS));
    for field in Field::FLEET {
        if let Some(v) = input.fleet.get(field) {
            let _ = writeln!(out, "    {}: {v}", field.name());
        }
    }
    if let roi::Mode::LicenseAware(terms) = &input.mode {
        for field in Field::LICENSE {
            if let Some(v) = terms.get(field) {
                let _ = writeln!(out, "    {}: {v}", field.name());
            }
        }
    }
    let _ = writeln!(out, "  {}", tr.t(keys::DEBUG_COSTS));
    let costs = [
        ("current_bandwidth_cost", report.current.bandwidth),
        ("current_manual_cost", report.current.manual),
        ("current_failure_cost", report.current.failure),
        ("gt_bandwidth_cost", report.gtreplicate.bandwidth),
        ("gt_manual_cost", report.gtreplicate.manual),
        ("gt_failure_cost", report.gtreplicate.failure),
    ];
    for (name, v) in costs {
        let _ = writeln!(out, "    {name}: {v}");
    }
    if report.license.is_some() {
        let _ = writeln!(out, "    monthly_license_cost: {}", report.monthly_license_cost());
    }
    out
}

/// 비교 표, 절감 구성, 요약(+디버그)을 한 화면으로 묶는다.
pub fn render_report(input: &RoiInput, report: &RoiReport, tr: &Translator, debug: bool) -> String {
    let mut out = String::new();
    out.push_str(&render_comparison(report, tr));
    out.push('\n');
    out.push_str(&render_savings_breakdown(report, tr));
    out.push('\n');
    out.push_str(&render_summary(report, tr));
    if debug {
        out.push('\n');
        out.push_str(&render_debug(input, report, tr));
    }
    out
}
