use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor, Postgres, QueryBuilder};

use crate::common::{ComplexId, SalesContactId};

/// Sales department contact of a residential complex (one per complex)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalesContact {
    pub id: SalesContactId,
    pub residential_complex_id: ComplexId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Input for creating a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSalesContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl SalesContactPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl SalesContact {
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM sales_department_contacts WHERE residential_complex_id = $1",
        )
        .bind(complex_id)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        input: &NewSalesContact,
        conn: &mut PgConnection,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO sales_department_contacts (
                id, residential_complex_id, first_name, last_name, phone, email
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(SalesContactId::new())
        .bind(complex_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone)
        .bind(&input.email)
        .fetch_one(&mut *conn)
        .await
        .map_err(Into::into)
    }

    /// Update the contact owned by `complex_id`; a no-op for an empty patch.
    pub async fn apply_patch(
        complex_id: ComplexId,
        patch: &SalesContactPatch,
        conn: &mut PgConnection,
    ) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE sales_department_contacts SET ");
        let mut fields = builder.separated(", ");
        if let Some(first_name) = &patch.first_name {
            fields.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = &patch.last_name {
            fields.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(phone) = &patch.phone {
            fields.push("phone = ").push_bind_unseparated(phone);
        }
        if let Some(email) = &patch.email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        builder
            .push(" WHERE residential_complex_id = ")
            .push_bind(complex_id);

        let result = builder.build().execute(&mut *conn).await?;
        if result.rows_affected() != 1 {
            anyhow::bail!("Sales contact missing for complex {}", complex_id);
        }
        Ok(())
    }
}
