// Business domains
pub mod auth;
pub mod complexes;
pub mod contacts;
