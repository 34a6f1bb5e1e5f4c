//! Console logging
//!
//! Human-readable status lines on stdout, warnings and errors on stderr.
//! There is no file-backed logging; this is a local development tool.

use chrono::Local;
use hyper::{Method, Uri};
use std::path::Path;

pub fn log_server_start(root: &Path, url: &str) {
    println!("======================================");
    println!("Kart Check System dev server");
    println!("Serving files from: {}", root.display());
    println!("Server running at: {url}");
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!(
        "[{}] \"{method} {uri}\"",
        Local::now().format("%d/%b/%Y:%H:%M:%S")
    );
}

pub fn log_response(bytes: usize) {
    println!("[Response] {bytes} bytes");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_browser_launch_failed(url: &str, err: &std::io::Error) {
    eprintln!("[WARN] Could not open browser at {url}: {err}");
    eprintln!("[WARN] Open the URL manually to use the Kart Check System");
}

pub fn log_shutdown() {
    println!("\nServer stopped by user");
}
