use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor, Postgres, QueryBuilder};

use crate::common::{BenefitsId, ComplexId};

/// Amenity flags of a complex (exactly one row per complex)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComplexBenefits {
    pub id: BenefitsId,
    pub residential_complex_id: ComplexId,
    pub playground: bool,
    pub sportsground: bool,
    pub parking: bool,
    pub territory_protected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewBenefits {
    pub playground: bool,
    pub sportsground: bool,
    pub parking: bool,
    pub territory_protected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenefitsPatch {
    pub playground: Option<bool>,
    pub sportsground: Option<bool>,
    pub parking: Option<bool>,
    pub territory_protected: Option<bool>,
}

impl BenefitsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ComplexBenefits {
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM complex_benefits WHERE residential_complex_id = $1",
        )
        .bind(complex_id)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        input: &NewBenefits,
        conn: &mut PgConnection,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO complex_benefits (
                id, residential_complex_id, playground, sportsground, parking, territory_protected
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(BenefitsId::new())
        .bind(complex_id)
        .bind(input.playground)
        .bind(input.sportsground)
        .bind(input.parking)
        .bind(input.territory_protected)
        .fetch_one(&mut *conn)
        .await
        .map_err(Into::into)
    }

    /// Update the benefits row owned by `complex_id`; a no-op for an empty patch.
    pub async fn apply_patch(
        complex_id: ComplexId,
        patch: &BenefitsPatch,
        conn: &mut PgConnection,
    ) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE complex_benefits SET ");
        let mut fields = builder.separated(", ");
        if let Some(playground) = patch.playground {
            fields.push("playground = ").push_bind_unseparated(playground);
        }
        if let Some(sportsground) = patch.sportsground {
            fields.push("sportsground = ").push_bind_unseparated(sportsground);
        }
        if let Some(parking) = patch.parking {
            fields.push("parking = ").push_bind_unseparated(parking);
        }
        if let Some(territory_protected) = patch.territory_protected {
            fields
                .push("territory_protected = ")
                .push_bind_unseparated(territory_protected);
        }
        builder
            .push(" WHERE residential_complex_id = ")
            .push_bind(complex_id);

        let result = builder.build().execute(&mut *conn).await?;
        if result.rows_affected() != 1 {
            anyhow::bail!("Benefits row missing for complex {}", complex_id);
        }
        Ok(())
    }
}
