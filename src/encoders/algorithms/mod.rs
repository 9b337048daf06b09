pub mod block;
pub mod errors;
pub mod runic;

// Re-export error types for public API
pub use errors::DecodeError;
