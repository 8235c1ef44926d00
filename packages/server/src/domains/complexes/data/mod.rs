pub mod complex;
pub mod gallery;
pub mod news;

pub use complex::*;
pub use gallery::*;
pub use news::*;
