//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use housing_core::common::{ComplexId, GalleryImageId, UserId};
use housing_core::domains::complexes::models::{
    ComplexBenefits, GalleryImage, NewBenefits, NewComplex, NewRegistration,
    RegistrationAndPayment, ResidentialComplex,
};
use housing_core::domains::complexes::types::{
    ComplexStatus, ContractSum, Formalization, HouseClass, HouseType, PaymentOptions, Purpose,
    Territory, UtilitySupply,
};
use housing_core::domains::contacts::{NewSalesContact, SalesContact};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Smallest byte string `image::guess_format` recognises as PNG
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

pub fn png_base64() -> String {
    STANDARD.encode(PNG_BYTES)
}

/// Create a complex with its sub-resources directly through the models.
pub async fn create_test_complex(pool: &PgPool, owner: UserId, name: &str) -> Result<ComplexId> {
    let mut tx = pool.begin().await?;

    let complex = ResidentialComplex::create(
        owner,
        &NewComplex {
            name: name.to_string(),
            description: "Fixture complex".to_string(),
            commissioning_date: None,
            is_commissioning: false,
            address: "1 Fixture Street".to_string(),
            map_lat: 46.4,
            map_lon: 30.7,
            distance: 1200,
            ceiling_height: 2.8,
            gas: false,
            status: ComplexStatus::Apartments,
            house_type: HouseType::MultiApartment,
            house_class: HouseClass::Comfort,
            technology: "Brick".to_string(),
            territory: Territory::Open,
            communal_payments: "Fixed".to_string(),
            heating: UtilitySupply::Central,
            sewerage: UtilitySupply::Central,
            water_service: UtilitySupply::Central,
        },
        &mut *tx,
    )
    .await?;

    ComplexBenefits::create(
        complex.id,
        &NewBenefits {
            playground: true,
            sportsground: false,
            parking: true,
            territory_protected: false,
        },
        &mut *tx,
    )
    .await?;

    RegistrationAndPayment::create(
        complex.id,
        &NewRegistration {
            formalization: Formalization::Notary,
            payment_options: PaymentOptions::Installments,
            purpose: Purpose::Residential,
            contract_sum: ContractSum::Full,
        },
        &mut *tx,
    )
    .await?;

    SalesContact::create(
        complex.id,
        &NewSalesContact {
            first_name: "Olena".to_string(),
            last_name: "Fixture".to_string(),
            phone: "+380501112233".to_string(),
            email: "sales@example.com".to_string(),
        },
        &mut *tx,
    )
    .await?;

    tx.commit().await?;
    Ok(complex.id)
}

/// Insert a gallery row pointing at `gallery/<name>.png`.
pub async fn add_gallery_image(
    pool: &PgPool,
    complex_id: ComplexId,
    order: i32,
) -> Result<GalleryImageId> {
    let mut conn = pool.acquire().await?;
    let path = format!("gallery/{}.png", GalleryImageId::new());
    let image = GalleryImage::create(complex_id, &path, order, &mut *conn).await?;
    Ok(image.id)
}

/// Gallery as `(id, order)` pairs in display order.
pub async fn gallery_of(pool: &PgPool, complex_id: ComplexId) -> Result<Vec<(GalleryImageId, i32)>> {
    Ok(GalleryImage::find_for_complex(complex_id, pool)
        .await?
        .into_iter()
        .map(|image| (image.id, image.display_order))
        .collect())
}

/// Every persisted row of a complex, for before/after comparisons.
pub async fn snapshot(pool: &PgPool, complex_id: ComplexId) -> Result<Value> {
    let complex = ResidentialComplex::find_by_id(complex_id, pool).await?;
    let benefits = ComplexBenefits::find_for_complex(complex_id, pool).await?;
    let registration = RegistrationAndPayment::find_for_complex(complex_id, pool).await?;
    let contact = SalesContact::find_for_complex(complex_id, pool).await?;
    let gallery = GalleryImage::find_for_complex(complex_id, pool).await?;

    Ok(json!({
        "complex": complex,
        "benefits": benefits,
        "registration": registration,
        "contact": contact,
        "gallery": gallery,
    }))
}

/// Complete `PUT` body; `images_order` is left empty.
pub fn full_complex_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Ten storeys by the sea",
        "commissioning_date": "2027-06-01",
        "is_commissioning": true,
        "address": "5 Beach Road",
        "map_lat": 46.37668422515867,
        "map_lon": 30.721478800598362,
        "distance": 2500,
        "ceiling_height": 2.5,
        "gas": true,
        "status": "apartments",
        "type_house": "multi_apartment",
        "class_house": "elite",
        "technology": "Monolithic frame with block infill",
        "territory": "closed_protected",
        "communal_payments": "Monthly",
        "heating": "central",
        "sewerage": "central",
        "water_service": "autonomous",
        "sales_department_contact": {
            "first_name": "Julia",
            "last_name": "Test",
            "phone": "+380955554433",
            "email": "julia@example.com"
        },
        "benefits": {
            "playground": true,
            "sportsground": true,
            "parking": true,
            "territory_protected": true
        },
        "registration_and_payment": {
            "formalization": "justice",
            "payment_options": "mortgage",
            "purpose": "residential",
            "contract_sum": "partial"
        },
        "images_order": []
    })
}
