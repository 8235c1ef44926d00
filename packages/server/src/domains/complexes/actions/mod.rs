//! Complex actions - entry points called by the HTTP handlers.
//!
//! Actions take validated input and the caller, run the ownership check and
//! return response data.

pub mod create;
pub mod documents;
pub mod files;
pub mod gallery;
pub mod load;
pub mod news;
pub mod update;

pub use create::create_complex;
pub use documents::{create_document, delete_document};
pub use gallery::{plan_reconciliation, GalleryPlan};
pub use load::{get_complex, get_my_complex, list_gallery};
pub use news::{create_news, delete_news};
pub use update::update_complex;
