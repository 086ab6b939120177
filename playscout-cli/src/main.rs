//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info");
    env_logger::Builder::from_env(env).init();

    if let Err(err) = playscout_cli::run() {
        eprintln!("playscout: {err}");
        std::process::exit(1);
    }
}
