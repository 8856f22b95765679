//! Credential handling and outbound URL validation.

pub mod credentials;
pub mod validate;

pub use credentials::{ModelCredentials, SecretString};
pub use validate::UrlValidator;
