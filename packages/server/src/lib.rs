// Housing API - Core
//
// Backend for residential complex listings: composite complex updates with
// their sub-resources and image gallery, plus news and documents.
//
// Domains live in domains/*, infrastructure behind traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
