//! Request handling: method gate, static file resolution, CORS finalization.

pub mod router;
pub mod static_files;

pub use router::handle_request;
