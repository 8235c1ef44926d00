// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod validation;

pub use auth::{Actor, AuthError, Capability, HasAuthContext};
pub use entity_ids::*;
pub use errors::{DomainError, DomainResult};
pub use id::Id;
pub use validation::FieldErrors;
