use std::process::ExitCode;

use backnav::cli;
use backnav::config::ENV_LOG;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(ENV_LOG, "warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = cli::parse();

    match backnav::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
