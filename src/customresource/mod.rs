//! Custom resource state metrics.
//!
//! # Data Flow
//! ```text
//! ConfigDecoder (inline text or file)
//!     → builder.rs (decode first document, validate)
//!     → factory.rs (one CustomResourceFactory per resource)
//!     → Vec<Box<dyn RegistryFactory>> handed to the runner
//! ```

pub mod builder;
pub mod factory;

pub use builder::from_config;
pub use factory::{CustomResourceFactory, FamilyDesc, RegistryFactory};
