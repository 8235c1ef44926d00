//! Gallery reconciliation planning.
//!
//! `images_order` names the images to keep and their new positions. Every
//! image of the complex that it does not name is deleted, unless the list is
//! empty, which keeps the gallery untouched.

use std::collections::HashSet;

use crate::common::GalleryImageId;
use crate::domains::complexes::commands::ImageOrderEntry;

/// What a gallery update will do to the stored images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryPlan {
    /// Kept images and their new order
    pub reorder: Vec<(GalleryImageId, i32)>,
    /// Existing images not named in the order list
    pub delete: Vec<GalleryImageId>,
    /// Ids in the order list that are not images of this complex
    pub unknown: Vec<GalleryImageId>,
}

pub fn plan_reconciliation(existing: &[GalleryImageId], order: &[ImageOrderEntry]) -> GalleryPlan {
    if order.is_empty() {
        return GalleryPlan::default();
    }

    let existing_set: HashSet<GalleryImageId> = existing.iter().copied().collect();
    let mut plan = GalleryPlan::default();
    let mut kept = HashSet::with_capacity(order.len());

    for entry in order {
        if existing_set.contains(&entry.id) {
            plan.reorder.push((entry.id, entry.order));
            kept.insert(entry.id);
        } else {
            plan.unknown.push(entry.id);
        }
    }

    plan.delete = existing
        .iter()
        .copied()
        .filter(|id| !kept.contains(id))
        .collect();

    plan
}
