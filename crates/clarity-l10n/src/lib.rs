//! # Clarity L10n
//!
//! Flat-key message bundles for the clarity dashboard. The built-in English
//! bundle is embedded at compile time; user bundles can be layered on top
//! from JSON files. Lookups never fail: unmapped keys are echoed back.

pub mod bundle;
pub mod error;

pub use bundle::{default_bundle, translate, translate2, MessageBundle, DEFAULT_MESSAGES};
pub use error::{L10nError, L10nResult};
