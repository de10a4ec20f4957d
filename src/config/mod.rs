//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv
//!     → options.rs (clap parse, immutable Options)
//!
//! --custom-resource-state-config | --custom-resource-state-config-file
//!     → source.rs (pick source, open, wrap in ConfigDecoder)
//!     → schema.rs (deserialize the YAML document)
//!     → validation.rs (semantic checks)
//! ```
//!
//! # Design Decisions
//! - Options are immutable once parsed
//! - Inline configuration takes precedence over the file path
//! - Validation separates syntactic (serde) from semantic checks

pub mod options;
pub mod schema;
pub mod source;
pub mod validation;

pub use options::Options;
pub use source::{ConfigDecoder, ConfigSource};
