//! Request payloads and the validated commands built from them

pub mod payload;
pub mod update;
pub mod upload;

pub use payload::{
    BenefitsPayload, ComplexPayload, CreateDocumentPayload, CreateNewsPayload, ImageOrderEntry,
    NewImagePayload, RegistrationPayload, SalesContactPayload,
};
pub use update::{CreateComplexCommand, NewGalleryImage, UpdateComplexCommand, UpdateMode};
pub use upload::{decode_document, decode_image, DecodedFile, MAX_UPLOAD_BYTES};
