//! Validated command objects built from [`ComplexPayload`].
//!
//! Building a command performs every check that needs no database access:
//! `validator` rules, required fields for full updates, duplicate gallery ids
//! and base64 image decoding. A command that exists is safe to persist.

use std::collections::HashSet;
use validator::Validate;

use super::payload::{
    BenefitsPayload, ComplexPayload, ImageOrderEntry, NewImagePayload, RegistrationPayload,
    SalesContactPayload,
};
use super::upload::{decode_image, DecodedFile};
use crate::common::{ComplexId, FieldErrors};
use crate::domains::complexes::models::{
    BenefitsPatch, ComplexPatch, NewBenefits, NewComplex, NewRegistration, RegistrationPatch,
};
use crate::domains::contacts::{NewSalesContact, SalesContactPatch};

/// `PUT` replaces the whole representation, `PATCH` merges a subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Replace,
    Partial,
}

/// Decoded image to append to the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryImage {
    pub file: DecodedFile,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateComplexCommand {
    pub complex_id: ComplexId,
    pub complex: ComplexPatch,
    pub benefits: BenefitsPatch,
    pub registration: RegistrationPatch,
    pub contact: SalesContactPatch,
    /// Images to keep with their new order. Empty keeps the whole gallery.
    pub images_order: Vec<ImageOrderEntry>,
    pub new_images: Vec<NewGalleryImage>,
}

#[derive(Debug, Clone)]
pub struct CreateComplexCommand {
    pub complex: NewComplex,
    pub benefits: NewBenefits,
    pub registration: NewRegistration,
    pub contact: NewSalesContact,
    pub new_images: Vec<NewGalleryImage>,
}

/// Payload split into per-table pieces
struct Parts {
    complex: ComplexPatch,
    benefits: BenefitsPatch,
    registration: RegistrationPatch,
    contact: SalesContactPatch,
    images_order: Option<Vec<ImageOrderEntry>>,
    images: Vec<NewImagePayload>,
}

impl UpdateComplexCommand {
    pub fn from_payload(
        complex_id: ComplexId,
        payload: ComplexPayload,
        mode: UpdateMode,
    ) -> Result<Self, FieldErrors> {
        let mut errors = schema_errors(&payload);
        if mode == UpdateMode::Replace {
            errors.merge(payload.missing_fields(true));
        }
        if let Some(entries) = &payload.images_order {
            errors.merge(duplicate_ids(entries));
        }

        let parts = split(payload);
        let new_images = decode_images(&parts.images, &mut errors);
        errors.into_result()?;

        Ok(Self {
            complex_id,
            complex: parts.complex,
            benefits: parts.benefits,
            registration: parts.registration,
            contact: parts.contact,
            images_order: parts.images_order.unwrap_or_default(),
            new_images,
        })
    }

    /// Whether the gallery reconciliation may delete images
    pub fn prunes_gallery(&self) -> bool {
        !self.images_order.is_empty()
    }
}

impl CreateComplexCommand {
    pub fn from_payload(payload: ComplexPayload) -> Result<Self, FieldErrors> {
        let mut errors = schema_errors(&payload);
        let missing = payload.missing_fields(false);
        errors.merge(missing.clone());
        if payload.images_order.as_ref().is_some_and(|o| !o.is_empty()) {
            errors.add("images_order", "A new complex has no images to order.");
        }

        let parts = split(payload);
        let new_images = decode_images(&parts.images, &mut errors);
        errors.into_result()?;

        let (Some(complex), Some(benefits), Some(registration), Some(contact)) = (
            complete_complex(parts.complex),
            complete_benefits(parts.benefits),
            complete_registration(parts.registration),
            complete_contact(parts.contact),
        ) else {
            return Err(missing);
        };

        Ok(Self {
            complex,
            benefits,
            registration,
            contact,
            new_images,
        })
    }
}

fn schema_errors(payload: &ComplexPayload) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

fn duplicate_ids(entries: &[ImageOrderEntry]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if !seen.insert(entry.id) {
            errors.add(
                format!("images_order[{}].id", index),
                "Image is listed more than once.",
            );
        }
    }
    errors
}

fn decode_images(images: &[NewImagePayload], errors: &mut FieldErrors) -> Vec<NewGalleryImage> {
    let mut decoded = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        match decode_image(&image.image) {
            Ok(file) => decoded.push(NewGalleryImage {
                file,
                order: image.order,
            }),
            Err(message) => errors.add(format!("images[{}].image", index), message),
        }
    }
    decoded
}

fn split(payload: ComplexPayload) -> Parts {
    let BenefitsPayload {
        playground,
        sportsground,
        parking,
        territory_protected,
    } = payload.benefits.unwrap_or_default();
    let RegistrationPayload {
        formalization,
        payment_options,
        purpose,
        contract_sum,
    } = payload.registration_and_payment.unwrap_or_default();
    let SalesContactPayload {
        first_name,
        last_name,
        phone,
        email,
    } = payload.sales_department_contact.unwrap_or_default();

    Parts {
        complex: ComplexPatch {
            name: payload.name,
            description: payload.description,
            commissioning_date: payload.commissioning_date,
            is_commissioning: payload.is_commissioning,
            address: payload.address,
            map_lat: payload.map_lat,
            map_lon: payload.map_lon,
            distance: payload.distance,
            ceiling_height: payload.ceiling_height,
            gas: payload.gas,
            status: payload.status,
            house_type: payload.house_type,
            house_class: payload.house_class,
            technology: payload.technology,
            territory: payload.territory,
            communal_payments: payload.communal_payments,
            heating: payload.heating,
            sewerage: payload.sewerage,
            water_service: payload.water_service,
        },
        benefits: BenefitsPatch {
            playground,
            sportsground,
            parking,
            territory_protected,
        },
        registration: RegistrationPatch {
            formalization,
            payment_options,
            purpose,
            contract_sum,
        },
        contact: SalesContactPatch {
            first_name,
            last_name,
            phone,
            email: email.map(|e| e.trim().to_lowercase()),
        },
        images_order: payload.images_order,
        images: payload.images.unwrap_or_default(),
    }
}

fn complete_complex(patch: ComplexPatch) -> Option<NewComplex> {
    Some(NewComplex {
        name: patch.name?,
        description: patch.description?,
        commissioning_date: patch.commissioning_date.flatten(),
        is_commissioning: patch.is_commissioning?,
        address: patch.address?,
        map_lat: patch.map_lat?,
        map_lon: patch.map_lon?,
        distance: patch.distance?,
        ceiling_height: patch.ceiling_height?,
        gas: patch.gas?,
        status: patch.status?,
        house_type: patch.house_type?,
        house_class: patch.house_class?,
        technology: patch.technology?,
        territory: patch.territory?,
        communal_payments: patch.communal_payments?,
        heating: patch.heating?,
        sewerage: patch.sewerage?,
        water_service: patch.water_service?,
    })
}

fn complete_benefits(patch: BenefitsPatch) -> Option<NewBenefits> {
    Some(NewBenefits {
        playground: patch.playground?,
        sportsground: patch.sportsground?,
        parking: patch.parking?,
        territory_protected: patch.territory_protected?,
    })
}

fn complete_registration(patch: RegistrationPatch) -> Option<NewRegistration> {
    Some(NewRegistration {
        formalization: patch.formalization?,
        payment_options: patch.payment_options?,
        purpose: patch.purpose?,
        contract_sum: patch.contract_sum?,
    })
}

fn complete_contact(patch: SalesContactPatch) -> Option<NewSalesContact> {
    Some(NewSalesContact {
        first_name: patch.first_name?,
        last_name: patch.last_name?,
        phone: patch.phone?,
        email: patch.email?,
    })
}
