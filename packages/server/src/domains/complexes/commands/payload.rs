//! Request bodies for the complex endpoints.
//!
//! Every field is optional at the serde level so the same shape serves `PUT`
//! (all fields required, checked by [`ComplexPayload::missing_fields`]) and
//! `PATCH` (any subset).

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::common::{ComplexId, FieldErrors, GalleryImageId};
use crate::domains::complexes::types::{
    ComplexStatus, ContractSum, Formalization, HouseClass, HouseType, PaymentOptions, Purpose,
    Territory, UtilitySupply,
};

pub const REQUIRED: &str = "This field is required.";

lazy_static! {
    /// International phone number: optional `+`, 10 to 15 digits.
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9]{10,15}$").unwrap();
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BenefitsPayload {
    pub playground: Option<bool>,
    pub sportsground: Option<bool>,
    pub parking: Option<bool>,
    pub territory_protected: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegistrationPayload {
    pub formalization: Option<Formalization>,
    pub payment_options: Option<PaymentOptions>,
    pub purpose: Option<Purpose>,
    pub contract_sum: Option<ContractSum>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SalesContactPayload {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(regex(path = *PHONE_RE, message = "Enter a valid phone number"))]
    pub phone: Option<String>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
}

/// Keep an existing gallery image at the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct ImageOrderEntry {
    pub id: GalleryImageId,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub order: i32,
}

/// New gallery image as a base64 string (a `data:image/...;base64,` prefix is allowed)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewImagePayload {
    #[validate(length(min = 1, message = "Image must not be empty"))]
    pub image: String,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    #[serde(default)]
    pub order: i32,
}

/// Composite body for create, full update and partial update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ComplexPayload {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub commissioning_date: Option<Option<NaiveDate>>,

    pub is_commissioning: Option<bool>,

    #[validate(length(min = 1, max = 500, message = "Address must be between 1 and 500 characters"))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub map_lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub map_lon: Option<f64>,

    #[validate(range(min = 0, message = "Distance must not be negative"))]
    pub distance: Option<i32>,

    #[validate(range(min = 1.5, max = 10.0, message = "Ceiling height must be between 1.5 and 10 metres"))]
    pub ceiling_height: Option<f64>,

    pub gas: Option<bool>,
    pub status: Option<ComplexStatus>,

    #[serde(rename = "type_house")]
    pub house_type: Option<HouseType>,

    #[serde(rename = "class_house")]
    pub house_class: Option<HouseClass>,

    #[validate(length(max = 500, message = "Technology must be at most 500 characters"))]
    pub technology: Option<String>,

    pub territory: Option<Territory>,

    #[validate(length(max = 500, message = "Communal payments must be at most 500 characters"))]
    pub communal_payments: Option<String>,

    pub heating: Option<UtilitySupply>,
    pub sewerage: Option<UtilitySupply>,
    pub water_service: Option<UtilitySupply>,

    #[validate(nested)]
    pub benefits: Option<BenefitsPayload>,

    #[validate(nested)]
    pub registration_and_payment: Option<RegistrationPayload>,

    #[validate(nested)]
    pub sales_department_contact: Option<SalesContactPayload>,

    #[validate(nested)]
    pub images_order: Option<Vec<ImageOrderEntry>>,

    #[validate(nested)]
    pub images: Option<Vec<NewImagePayload>>,
}

fn require<T>(errors: &mut FieldErrors, path: &str, value: &Option<T>) {
    if value.is_none() {
        errors.add(path, REQUIRED);
    }
}

impl BenefitsPayload {
    fn missing_fields(&self, prefix: &str, errors: &mut FieldErrors) {
        require(errors, &format!("{}.playground", prefix), &self.playground);
        require(errors, &format!("{}.sportsground", prefix), &self.sportsground);
        require(errors, &format!("{}.parking", prefix), &self.parking);
        require(
            errors,
            &format!("{}.territory_protected", prefix),
            &self.territory_protected,
        );
    }
}

impl RegistrationPayload {
    fn missing_fields(&self, prefix: &str, errors: &mut FieldErrors) {
        require(errors, &format!("{}.formalization", prefix), &self.formalization);
        require(errors, &format!("{}.payment_options", prefix), &self.payment_options);
        require(errors, &format!("{}.purpose", prefix), &self.purpose);
        require(errors, &format!("{}.contract_sum", prefix), &self.contract_sum);
    }
}

impl SalesContactPayload {
    fn missing_fields(&self, prefix: &str, errors: &mut FieldErrors) {
        require(errors, &format!("{}.first_name", prefix), &self.first_name);
        require(errors, &format!("{}.last_name", prefix), &self.last_name);
        require(errors, &format!("{}.phone", prefix), &self.phone);
        require(errors, &format!("{}.email", prefix), &self.email);
    }
}

impl ComplexPayload {
    /// Fields a full representation must carry.
    ///
    /// `commissioning_date` is nullable and `images` is write-only, so neither
    /// is required. `images_order` is only required when `with_gallery_order`
    /// is set (full updates); creation has no gallery to order yet.
    pub fn missing_fields(&self, with_gallery_order: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require(&mut errors, "name", &self.name);
        require(&mut errors, "description", &self.description);
        require(&mut errors, "is_commissioning", &self.is_commissioning);
        require(&mut errors, "address", &self.address);
        require(&mut errors, "map_lat", &self.map_lat);
        require(&mut errors, "map_lon", &self.map_lon);
        require(&mut errors, "distance", &self.distance);
        require(&mut errors, "ceiling_height", &self.ceiling_height);
        require(&mut errors, "gas", &self.gas);
        require(&mut errors, "status", &self.status);
        require(&mut errors, "type_house", &self.house_type);
        require(&mut errors, "class_house", &self.house_class);
        require(&mut errors, "technology", &self.technology);
        require(&mut errors, "territory", &self.territory);
        require(&mut errors, "communal_payments", &self.communal_payments);
        require(&mut errors, "heating", &self.heating);
        require(&mut errors, "sewerage", &self.sewerage);
        require(&mut errors, "water_service", &self.water_service);

        match &self.benefits {
            Some(benefits) => benefits.missing_fields("benefits", &mut errors),
            None => errors.add("benefits", REQUIRED),
        }
        match &self.registration_and_payment {
            Some(registration) => {
                registration.missing_fields("registration_and_payment", &mut errors)
            }
            None => errors.add("registration_and_payment", REQUIRED),
        }
        match &self.sales_department_contact {
            Some(contact) => contact.missing_fields("sales_department_contact", &mut errors),
            None => errors.add("sales_department_contact", REQUIRED),
        }
        if with_gallery_order {
            require(&mut errors, "images_order", &self.images_order);
        }

        errors
    }
}

/// Body of `POST /api/complex-news`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsPayload {
    pub residential_complex: ComplexId,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,
}

/// Body of `POST /api/complex-documents`; `file` is base64
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocumentPayload {
    pub residential_complex: ComplexId,

    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "File must not be empty"))]
    pub file: String,
}
