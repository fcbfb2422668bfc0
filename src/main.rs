use std::process::ExitCode;
use std::sync::Arc;

mod api;
mod config;
mod error;
mod http;
mod logger;
mod server;

use error::ServerError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not exist yet when config or logging setup failed
            eprintln!("[FATAL] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServerError> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // One thread serves every connection; there is no shared mutable state
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let local = tokio::task::LocalSet::new();
    runtime.block_on(local.run_until(async_main(cfg)))
}

async fn async_main(cfg: config::Config) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&listener.local_addr()?, &cfg);

    let shutdown = server::ShutdownSignal::new();
    server::start_signal_handler(Arc::clone(&shutdown));

    server::start_server_loop(listener, state, shutdown).await;
    Ok(())
}
