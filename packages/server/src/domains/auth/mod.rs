//! Auth domain - token verification for the REST API
//!
//! Account registration and login live in the external user service; this
//! crate only verifies the bearer tokens it issues (and mints them in tests).

pub mod jwt;

pub use jwt::{Claims, JwtService};
