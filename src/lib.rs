//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(웹 대시보드 등)에서도 그대로 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod report;
pub mod roi;
pub mod session;
pub mod ui_cli;
