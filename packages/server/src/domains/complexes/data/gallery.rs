use serde::{Deserialize, Serialize};

use crate::domains::complexes::models::GalleryImage;
use crate::kernel::BaseFileStorage;

/// Gallery image as returned to clients; `image` is a public URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImageData {
    pub id: String,
    pub image: String,
    pub order: i32,
}

impl GalleryImageData {
    pub fn from_model(image: GalleryImage, storage: &dyn BaseFileStorage) -> Self {
        Self {
            id: image.id.to_string(),
            image: storage.public_url(&image.image_path),
            order: image.display_order,
        }
    }
}
