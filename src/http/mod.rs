//! HTTP building blocks: MIME inference, CORS injection, response builders.

pub mod cors;
pub mod mime;
pub mod response;
