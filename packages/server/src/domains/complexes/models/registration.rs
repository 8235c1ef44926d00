use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor, Postgres, QueryBuilder};

use crate::common::{ComplexId, RegistrationId};
use crate::domains::complexes::types::{ContractSum, Formalization, PaymentOptions, Purpose};

/// Legal and financial terms of sale (exactly one row per complex)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistrationAndPayment {
    pub id: RegistrationId,
    pub residential_complex_id: ComplexId,
    pub formalization: String,   // Formalization
    pub payment_options: String, // PaymentOptions
    pub purpose: String,         // Purpose
    pub contract_sum: String,    // ContractSum
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRegistration {
    pub formalization: Formalization,
    pub payment_options: PaymentOptions,
    pub purpose: Purpose,
    pub contract_sum: ContractSum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationPatch {
    pub formalization: Option<Formalization>,
    pub payment_options: Option<PaymentOptions>,
    pub purpose: Option<Purpose>,
    pub contract_sum: Option<ContractSum>,
}

impl RegistrationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RegistrationAndPayment {
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM complex_registrations WHERE residential_complex_id = $1",
        )
        .bind(complex_id)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        input: &NewRegistration,
        conn: &mut PgConnection,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO complex_registrations (
                id, residential_complex_id, formalization, payment_options, purpose, contract_sum
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(RegistrationId::new())
        .bind(complex_id)
        .bind(input.formalization.as_str())
        .bind(input.payment_options.as_str())
        .bind(input.purpose.as_str())
        .bind(input.contract_sum.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(Into::into)
    }

    /// Update the terms owned by `complex_id`; a no-op for an empty patch.
    pub async fn apply_patch(
        complex_id: ComplexId,
        patch: &RegistrationPatch,
        conn: &mut PgConnection,
    ) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE complex_registrations SET ");
        let mut fields = builder.separated(", ");
        if let Some(formalization) = patch.formalization {
            fields
                .push("formalization = ")
                .push_bind_unseparated(formalization.as_str());
        }
        if let Some(payment_options) = patch.payment_options {
            fields
                .push("payment_options = ")
                .push_bind_unseparated(payment_options.as_str());
        }
        if let Some(purpose) = patch.purpose {
            fields.push("purpose = ").push_bind_unseparated(purpose.as_str());
        }
        if let Some(contract_sum) = patch.contract_sum {
            fields
                .push("contract_sum = ")
                .push_bind_unseparated(contract_sum.as_str());
        }
        builder
            .push(" WHERE residential_complex_id = ")
            .push_bind(complex_id);

        let result = builder.build().execute(&mut *conn).await?;
        if result.rows_affected() != 1 {
            anyhow::bail!("Registration row missing for complex {}", complex_id);
        }
        Ok(())
    }
}
