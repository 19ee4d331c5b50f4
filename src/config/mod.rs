pub mod credentials;
pub mod types;

pub use credentials::redact_credentials;
pub use types::*;
