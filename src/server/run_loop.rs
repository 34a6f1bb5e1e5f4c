// Accept loop
// Serves connections until a shutdown signal arrives, then releases the
// listening socket.

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::spawn_serve;
use super::signal::ShutdownSignal;
use crate::config::ServerConfig;
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// In-flight requests keep running on their own tasks; only the listener
/// is closed, which releases the bound port.
pub async fn run(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: Arc<ShutdownSignal>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        spawn_serve(stream, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    drop(listener);
}
