// Connection serving
// One spawned task per accepted TCP connection.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Serve a single connection on its own task. Request-level concurrency is
/// whatever hyper's HTTP/1 defaults give us; nothing is tuned here.
pub fn spawn_serve(stream: tokio::net::TcpStream, config: Arc<ServerConfig>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, config).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
