use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{DocumentData, GalleryImageData, NewsData};
use crate::domains::complexes::models::{
    ComplexBenefits, RegistrationAndPayment, ResidentialComplex,
};
use crate::domains::contacts::SalesContactData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenefitsData {
    pub playground: bool,
    pub sportsground: bool,
    pub parking: bool,
    pub territory_protected: bool,
}

impl From<ComplexBenefits> for BenefitsData {
    fn from(benefits: ComplexBenefits) -> Self {
        Self {
            playground: benefits.playground,
            sportsground: benefits.sportsground,
            parking: benefits.parking,
            territory_protected: benefits.territory_protected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationData {
    pub formalization: String,
    pub payment_options: String,
    pub purpose: String,
    pub contract_sum: String,
}

impl From<RegistrationAndPayment> for RegistrationData {
    fn from(registration: RegistrationAndPayment) -> Self {
        Self {
            formalization: registration.formalization,
            payment_options: registration.payment_options,
            purpose: registration.purpose,
            contract_sum: registration.contract_sum,
        }
    }
}

/// Composite representation of a residential complex
///
/// Field names follow the public API (`type_house`, `class_house`, `user`,
/// `document`, `gallery_residential_complex`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResidentialComplexData {
    pub id: String,
    /// Owner user id
    pub user: String,
    pub name: String,
    pub description: String,
    pub commissioning_date: Option<NaiveDate>,
    pub is_commissioning: bool,
    pub address: String,
    pub map_lat: f64,
    pub map_lon: f64,
    pub distance: i32,
    pub ceiling_height: f64,
    pub gas: bool,
    pub status: String,
    pub type_house: String,
    pub class_house: String,
    pub technology: String,
    pub territory: String,
    pub communal_payments: String,
    pub heating: String,
    pub sewerage: String,
    pub water_service: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sales_department_contact: SalesContactData,
    pub benefits: BenefitsData,
    pub registration_and_payment: RegistrationData,
    pub news: Vec<NewsData>,
    pub document: Vec<DocumentData>,
    /// Sorted by `order`, ties by upload time
    pub gallery_residential_complex: Vec<GalleryImageData>,
}

/// Everything a composite response is assembled from
pub struct ComplexParts {
    pub complex: ResidentialComplex,
    pub contact: SalesContactData,
    pub benefits: ComplexBenefits,
    pub registration: RegistrationAndPayment,
    pub news: Vec<NewsData>,
    pub documents: Vec<DocumentData>,
    pub gallery: Vec<GalleryImageData>,
}

impl From<ComplexParts> for ResidentialComplexData {
    fn from(parts: ComplexParts) -> Self {
        let complex = parts.complex;
        Self {
            id: complex.id.to_string(),
            user: complex.owner_id.to_string(),
            name: complex.name,
            description: complex.description,
            commissioning_date: complex.commissioning_date,
            is_commissioning: complex.is_commissioning,
            address: complex.address,
            map_lat: complex.map_lat,
            map_lon: complex.map_lon,
            distance: complex.distance,
            ceiling_height: complex.ceiling_height,
            gas: complex.gas,
            status: complex.status,
            type_house: complex.house_type,
            class_house: complex.house_class,
            technology: complex.technology,
            territory: complex.territory,
            communal_payments: complex.communal_payments,
            heating: complex.heating,
            sewerage: complex.sewerage,
            water_service: complex.water_service,
            created_at: complex.created_at,
            updated_at: complex.updated_at,
            sales_department_contact: parts.contact,
            benefits: parts.benefits.into(),
            registration_and_payment: parts.registration.into(),
            news: parts.news,
            document: parts.documents,
            gallery_residential_complex: parts.gallery,
        }
    }
}
