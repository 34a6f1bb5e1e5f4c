//! Static file serving
//!
//! Maps URL paths to files under the serving root and builds the response
//! with an inferred content type.

use crate::config::ServerConfig;
use crate::http::{mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve the file a URL path maps to under the serving root.
pub async fn serve(config: &ServerConfig, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve(&config.root, path) else {
        return response::build_404_response();
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime::content_type(file_path.extension().and_then(|e| e.to_str()));
            logger::log_response(content.len());
            response::build_file_response(content, content_type, is_head)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => response::build_404_response(),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            response::build_500_response()
        }
    }
}

/// Map a URL path to a file under the serving root.
///
/// Returns `None` when the path escapes the root or points at nothing
/// servable. `/` and directory paths fall back to `index.html`.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    // Remove leading slash and prevent directory traversal
    let clean_path = url_path.trim_start_matches('/').replace("..", "");
    let mut file_path = root.join(&clean_path);

    if clean_path.is_empty() || url_path.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(INDEX_FILE);
    }

    // Canonicalize both sides so symlinks cannot escape the root either.
    // A missing file fails canonicalization here, which is the 404 path.
    let root_canonical = root.canonicalize().ok()?;
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {url_path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    Some(file_canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn fixture_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("index.html"), "<h1>Kart Check</h1>").unwrap();
        std_fs::create_dir(dir.path().join("assets")).unwrap();
        std_fs::write(dir.path().join("assets").join("app.js"), "console.log(1)").unwrap();
        dir
    }

    #[test]
    fn resolves_plain_file() {
        let dir = fixture_root();
        let resolved = resolve(dir.path(), "/index.html").unwrap();
        assert!(resolved.ends_with("index.html"));
    }

    #[test]
    fn resolves_nested_file() {
        let dir = fixture_root();
        let resolved = resolve(dir.path(), "/assets/app.js").unwrap();
        assert!(resolved.ends_with("assets/app.js"));
    }

    #[test]
    fn root_and_directory_paths_map_to_index() {
        let dir = fixture_root();
        assert!(resolve(dir.path(), "/").unwrap().ends_with("index.html"));
        // Directory without its own index.html has nothing to serve
        assert!(resolve(dir.path(), "/assets/").is_none());
    }

    #[test]
    fn missing_file_does_not_resolve() {
        let dir = fixture_root();
        assert!(resolve(dir.path(), "/nope.html").is_none());
    }

    #[test]
    fn traversal_cannot_escape_root() {
        let dir = fixture_root();
        assert!(resolve(dir.path(), "/../../etc/passwd").is_none());
        assert!(resolve(dir.path(), "/..%2f..%2fetc/passwd").is_none());
    }

    #[tokio::test]
    async fn serve_returns_file_bytes() {
        let dir = fixture_root();
        let cfg = ServerConfig::with_root(dir.path().to_path_buf());
        let resp = serve(&cfg, "/assets/app.js", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
    }

    #[tokio::test]
    async fn serve_missing_file_is_404() {
        let dir = fixture_root();
        let cfg = ServerConfig::with_root(dir.path().to_path_buf());
        let resp = serve(&cfg, "/missing.png", false).await;
        assert_eq!(resp.status(), 404);
    }
}
