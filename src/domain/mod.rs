//! Domain layer: request-scoped entities, the error taxonomy, and the
//! ports the application services are written against.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::*;
pub use errors::{DomainError, Result};
