/// Authorization checks for listing management.
///
/// Handlers gate mutations with a fluent check before any domain action runs:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, Capability};
///
/// Actor::new(auth_user.user_id)
///     .can(Capability::ManageComplex(complex_id))
///     .check(&deps)
///     .await?;
/// ```

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder, HasAuthContext};
pub use capability::Capability;
pub use errors::AuthError;
