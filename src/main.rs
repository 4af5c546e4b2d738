use clap::Parser;
use pipe_pump_toolbox::app::{self, Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로깅을 초기화한 뒤 명령을 실행한다.
fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
