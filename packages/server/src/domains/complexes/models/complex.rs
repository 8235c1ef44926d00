use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor, PgPool, Postgres, QueryBuilder};

use crate::common::{ComplexId, UserId};
use crate::domains::complexes::types::{
    ComplexStatus, HouseClass, HouseType, Territory, UtilitySupply,
};

/// Residential complex listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResidentialComplex {
    pub id: ComplexId,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub commissioning_date: Option<NaiveDate>,
    pub is_commissioning: bool,
    pub address: String,
    pub map_lat: f64,
    pub map_lon: f64,
    pub distance: i32, // metres to the sea
    pub ceiling_height: f64,
    pub gas: bool,
    pub status: String,      // ComplexStatus
    pub house_type: String,  // HouseType
    pub house_class: String, // HouseClass
    pub technology: String,
    pub territory: String, // Territory
    pub communal_payments: String,
    pub heating: String,       // UtilitySupply
    pub sewerage: String,      // UtilitySupply
    pub water_service: String, // UtilitySupply
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a complex
#[derive(Debug, Clone, PartialEq)]
pub struct NewComplex {
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
    pub status: ComplexStatus,
    pub house_type: HouseType,
    pub house_class: HouseClass,
    pub technology: String,
    pub territory: Territory,
    pub communal_payments: String,
    pub heating: UtilitySupply,
    pub sewerage: UtilitySupply,
    pub water_service: UtilitySupply,
}

/// Field-level changes to a complex; `None` leaves the column untouched.
///
/// `commissioning_date` is doubly optional: `Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub commissioning_date: Option<Option<NaiveDate>>,
    pub is_commissioning: Option<bool>,
    pub address: Option<String>,
    pub map_lat: Option<f64>,
    pub map_lon: Option<f64>,
    pub distance: Option<i32>,
    pub ceiling_height: Option<f64>,
    pub gas: Option<bool>,
    pub status: Option<ComplexStatus>,
    pub house_type: Option<HouseType>,
    pub house_class: Option<HouseClass>,
    pub technology: Option<String>,
    pub territory: Option<Territory>,
    pub communal_payments: Option<String>,
    pub heating: Option<UtilitySupply>,
    pub sewerage: Option<UtilitySupply>,
    pub water_service: Option<UtilitySupply>,
}

impl ResidentialComplex {
    pub async fn find_by_id<'e>(
        id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM residential_complexes WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(Into::into)
    }

    /// The complex owned by a user (at most one per user)
    pub async fn find_by_owner(owner_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM residential_complexes WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_owner(id: ComplexId, pool: &PgPool) -> Result<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT owner_id FROM residential_complexes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Lock the complex row for the rest of the transaction.
    ///
    /// Returns `None` when the complex does not exist.
    pub async fn lock_for_update(id: ComplexId, conn: &mut PgConnection) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM residential_complexes WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(Into::into)
    }

    pub async fn create(
        owner_id: UserId,
        input: &NewComplex,
        conn: &mut PgConnection,
    ) -> Result<Self> {
        let complex = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO residential_complexes (
                id, owner_id, name, description, commissioning_date, is_commissioning,
                address, map_lat, map_lon, distance, ceiling_height, gas,
                status, house_type, house_class, technology, territory,
                communal_payments, heating, sewerage, water_service
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING *
            "#,
        )
        .bind(ComplexId::new())
        .bind(owner_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.commissioning_date)
        .bind(input.is_commissioning)
        .bind(&input.address)
        .bind(input.map_lat)
        .bind(input.map_lon)
        .bind(input.distance)
        .bind(input.ceiling_height)
        .bind(input.gas)
        .bind(input.status.as_str())
        .bind(input.house_type.as_str())
        .bind(input.house_class.as_str())
        .bind(&input.technology)
        .bind(input.territory.as_str())
        .bind(&input.communal_payments)
        .bind(input.heating.as_str())
        .bind(input.sewerage.as_str())
        .bind(input.water_service.as_str())
        .fetch_one(&mut *conn)
        .await?;
        Ok(complex)
    }

    /// Write the provided fields and bump `updated_at`.
    pub async fn apply_patch(
        id: ComplexId,
        patch: &ComplexPatch,
        conn: &mut PgConnection,
    ) -> Result<()> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE residential_complexes SET ");
        let mut fields = builder.separated(", ");
        fields.push("updated_at = NOW()");

        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        if let Some(commissioning_date) = patch.commissioning_date {
            fields
                .push("commissioning_date = ")
                .push_bind_unseparated(commissioning_date);
        }
        if let Some(is_commissioning) = patch.is_commissioning {
            fields
                .push("is_commissioning = ")
                .push_bind_unseparated(is_commissioning);
        }
        if let Some(address) = &patch.address {
            fields.push("address = ").push_bind_unseparated(address);
        }
        if let Some(map_lat) = patch.map_lat {
            fields.push("map_lat = ").push_bind_unseparated(map_lat);
        }
        if let Some(map_lon) = patch.map_lon {
            fields.push("map_lon = ").push_bind_unseparated(map_lon);
        }
        if let Some(distance) = patch.distance {
            fields.push("distance = ").push_bind_unseparated(distance);
        }
        if let Some(ceiling_height) = patch.ceiling_height {
            fields
                .push("ceiling_height = ")
                .push_bind_unseparated(ceiling_height);
        }
        if let Some(gas) = patch.gas {
            fields.push("gas = ").push_bind_unseparated(gas);
        }
        if let Some(status) = patch.status {
            fields.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some(house_type) = patch.house_type {
            fields
                .push("house_type = ")
                .push_bind_unseparated(house_type.as_str());
        }
        if let Some(house_class) = patch.house_class {
            fields
                .push("house_class = ")
                .push_bind_unseparated(house_class.as_str());
        }
        if let Some(technology) = &patch.technology {
            fields.push("technology = ").push_bind_unseparated(technology);
        }
        if let Some(territory) = patch.territory {
            fields
                .push("territory = ")
                .push_bind_unseparated(territory.as_str());
        }
        if let Some(communal_payments) = &patch.communal_payments {
            fields
                .push("communal_payments = ")
                .push_bind_unseparated(communal_payments);
        }
        if let Some(heating) = patch.heating {
            fields.push("heating = ").push_bind_unseparated(heating.as_str());
        }
        if let Some(sewerage) = patch.sewerage {
            fields.push("sewerage = ").push_bind_unseparated(sewerage.as_str());
        }
        if let Some(water_service) = patch.water_service {
            fields
                .push("water_service = ")
                .push_bind_unseparated(water_service.as_str());
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.build().execute(&mut *conn).await?;
        Ok(())
    }
}
