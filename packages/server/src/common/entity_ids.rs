//! Typed ids for every persisted entity.
//!
//! ```rust
//! use housing_core::common::{ComplexId, GalleryImageId};
//!
//! let complex_id = ComplexId::new();
//! let image_id = GalleryImageId::new();
//! // let wrong: ComplexId = image_id; // does not compile
//! # let _ = (complex_id, image_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Account that owns listings (managed by the external user service).
pub struct User;

/// Residential complex listing.
pub struct ResidentialComplex;

pub struct ComplexBenefits;

pub struct RegistrationAndPayment;

/// Sales department contact of a complex.
pub struct SalesContact;

pub struct GalleryImage;

pub struct ComplexNews;

pub struct ComplexDocument;

// ============================================================================
// Type aliases
// ============================================================================

pub type UserId = Id<User>;

pub type ComplexId = Id<ResidentialComplex>;

pub type BenefitsId = Id<ComplexBenefits>;

pub type RegistrationId = Id<RegistrationAndPayment>;

pub type SalesContactId = Id<SalesContact>;

pub type GalleryImageId = Id<GalleryImage>;

pub type NewsId = Id<ComplexNews>;

pub type DocumentId = Id<ComplexDocument>;
