//! HTTP handlers for the complex endpoints
pub mod mutation;
pub mod query;
