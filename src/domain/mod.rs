//! Domain layer: the chain value model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod chain;
pub mod entities;
pub mod error;

pub use chain::{try_combine, ChainValue, Labelled};
pub use entities::{NamedNode, Node};
pub use error::{DomainError, DomainResult};
