use super::{AuthError, Capability};
use crate::common::entity_ids::{ComplexId, DocumentId, NewsId, UserId};
use anyhow::Result;
use async_trait::async_trait;

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::new(user_id)
///     .can(Capability::ManageComplex(complex_id))
///     .check(&deps)
///     .await?;
/// ```
pub struct Actor {
    user_id: UserId,
}

impl Actor {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Specify what the actor wants to do
    pub fn can(self, capability: Capability) -> CapabilityBuilder {
        CapabilityBuilder {
            user_id: self.user_id,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    user_id: UserId,
    capability: Capability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub async fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: HasAuthContext,
    {
        let owner = match self.capability {
            Capability::ManageComplex(id) => deps.complex_owner(id).await?,
            Capability::ManageNews(id) => deps.news_owner(id).await?,
            Capability::ManageDocument(id) => deps.document_owner(id).await?,
        };

        match owner {
            None => Err(AuthError::NotFound(self.capability.resource().to_string())),
            Some(owner) if owner == self.user_id => Ok(()),
            Some(_) => Err(AuthError::PermissionDenied(format!(
                "{} belongs to another user",
                self.capability.resource()
            ))),
        }
    }
}

/// Ownership lookups needed by authorization checks.
///
/// Each method returns the owning user, or `None` when the resource does not exist.
#[async_trait]
pub trait HasAuthContext: Send + Sync {
    async fn complex_owner(&self, id: ComplexId) -> Result<Option<UserId>>;
    async fn news_owner(&self, id: NewsId) -> Result<Option<UserId>>;
    async fn document_owner(&self, id: DocumentId) -> Result<Option<UserId>>;
}
