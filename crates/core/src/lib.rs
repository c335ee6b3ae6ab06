//! # pivotgen Core
//!
//! Core types, traits, and error handling for pivotgen.
//!
//! - **Types**: `TablePair`, the normalized pair of tables a pivot joins
//! - **Traits**: collaborator seams (`FileSystem`, `StubLocator`,
//!   `Inflector`, `Clock`) plus `Validatable`
//! - **Errors**: `GenerationError` and `GenerationResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{GenerationError, GenerationResult};
pub use traits::{Clock, FileSystem, Inflector, StubLocator, Validatable};
pub use types::TablePair;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
