use std::sync::Arc;

mod browser;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::ServerConfig::from_exe_dir()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Relative lookups from the front-end resolve against the asset tree,
    // not wherever the process happened to be started from.
    std::env::set_current_dir(&cfg.root)?;

    // Bind failure (port in use, permission denied) is fatal and propagates
    // out of main with a non-zero exit.
    let addr = cfg.socket_addr()?;
    let listener = server::listener::bind(addr)?;

    let url = cfg.url();
    logger::log_server_start(&cfg.root, &url);
    browser::launch(&url);

    let shutdown = Arc::new(server::signal::ShutdownSignal::new());
    server::signal::start(Arc::clone(&shutdown));

    server::run_loop::run(listener, Arc::new(cfg), shutdown).await;
    Ok(())
}
