// Browser launch
// Best-effort: a failure here never affects the server.

use crate::logger;

/// Open the default system browser at the server URL. Failure is logged
/// with its cause and otherwise ignored.
pub fn launch(url: &str) {
    if let Err(e) = open::that(url) {
        logger::log_browser_launch_failed(url, &e);
    }
}
