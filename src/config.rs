// Server configuration
// Fixed host/port plus the serving root, set once at startup and read-only
// for the lifetime of the process.

use std::io::{Error, ErrorKind};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory whose contents are exposed over HTTP.
    pub root: PathBuf,
}

impl ServerConfig {
    /// Build the configuration with the serving root set to the directory
    /// containing the running executable, so the front-end assets shipped
    /// next to the binary are what gets served.
    pub fn from_exe_dir() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                "executable has no parent directory",
            )
        })?;
        Ok(Self::with_root(root))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root,
        }
    }

    /// Resolve `host:port` into a socket address. `localhost` goes through
    /// the resolver rather than a literal parse.
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::AddrNotAvailable,
                    format!("no address found for {}:{}", self.host, self.port),
                )
            })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}
