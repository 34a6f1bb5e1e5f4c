//! Request dispatch
//!
//! Entry point for HTTP request processing. Validates the method, hands
//! GET/HEAD to the static file handler, and finalizes every response with
//! the CORS headers.

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http::{cors, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Service entry point, called by hyper for each request.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    logger::log_request(&method, req.uri());

    Ok(dispatch(&method, &path, &config).await)
}

/// Produce the finalized response for a request. Every response funnels
/// through here, so error statuses carry the same CORS headers as success.
pub async fn dispatch(
    method: &Method,
    path: &str,
    config: &ServerConfig,
) -> Response<Full<Bytes>> {
    let mut resp = route(method, path, config).await;
    cors::apply(resp.headers_mut());
    resp
}

async fn route(method: &Method, path: &str, config: &ServerConfig) -> Response<Full<Bytes>> {
    match *method {
        Method::GET => static_files::serve(config, path, false).await,
        Method::HEAD => static_files::serve(config, path, true).await,
        Method::OPTIONS => response::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            response::build_405_response()
        }
    }
}
