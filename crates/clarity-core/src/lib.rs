//! # Clarity Core
//!
//! Domain types for the clarity project-overview dashboard: the analysis
//! timeline (version markers, quality-gate changes) and quality gate
//! evaluation against project measures.
//!
//! ## Key Types
//!
//! - [`AnalysisEvent`]: a timestamped marker on a project's analysis timeline
//! - [`EventCategory`]: what kind of marker an event is
//! - [`QualityGate`]: a named set of [`Condition`]s over metrics
//! - [`EvaluatedGate`]: the outcome of evaluating a gate against [`Measure`]s

pub mod error;
pub mod event;
pub mod qualitygate;

// Re-export main types
pub use error::*;
pub use event::*;
pub use qualitygate::*;
