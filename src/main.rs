use std::path::PathBuf;

use clap::Parser;
use phase_plot_toolbox::app::{self, Command};
use phase_plot_toolbox::config::{self, DEFAULT_CONFIG_PATH};

/// CO2 상경계 오버레이와 다중 패널 스케일 정렬 도구.
#[derive(Debug, Parser)]
#[command(name = "phase_plot_toolbox", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화식 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        Some(command) => println!("{}", app::execute(&command, &cfg)?),
        None => app::run(&mut cfg, &cli.config)?,
    }
    Ok(())
}
