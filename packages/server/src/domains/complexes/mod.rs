//! Residential complexes - listings with their sub-resources, gallery, news
//! and documents.

pub mod actions;
pub mod commands;
pub mod data;
pub mod edges;
pub mod models;
pub mod types;

pub use data::{GalleryImageData, ResidentialComplexData};
pub use models::{ComplexDocument, ComplexNews, GalleryImage, ResidentialComplex};
