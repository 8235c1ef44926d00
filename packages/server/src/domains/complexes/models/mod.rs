pub mod benefits;
pub mod complex;
pub mod document;
pub mod gallery;
pub mod news;
pub mod registration;

pub use benefits::*;
pub use complex::*;
pub use document::*;
pub use gallery::*;
pub use news::*;
pub use registration::*;
