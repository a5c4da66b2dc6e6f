use clap::Parser;
use gtreplicate_roi::cli::{Cli, Command};
use gtreplicate_roi::{app, config, i18n};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lang = cli.lang.clone();
    if let Err(err) = try_run(cli) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let path = config::resolve_path(cli.config);
    let mut cfg = config::load_or_default(&path)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Calc(args)) => app::run_calc(&args, &cfg, &tr),
        Some(Command::Interactive) | None => app::run(&mut cfg, &path, &tr),
    }
}
