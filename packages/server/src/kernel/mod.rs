//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod storage;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use storage::LocalFileStorage;
pub use test_dependencies::{MockFileStorage, TestDependencies};
pub use traits::*;
