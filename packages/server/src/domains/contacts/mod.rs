pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::SalesContactData;
pub use models::{NewSalesContact, SalesContact, SalesContactPatch};
