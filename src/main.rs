use clap::Parser;
use thermal_protection_building::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
