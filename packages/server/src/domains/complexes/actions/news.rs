use tracing::info;
use validator::Validate;

use crate::common::{Actor, Capability, DomainError, DomainResult, FieldErrors, NewsId, UserId};
use crate::domains::complexes::commands::CreateNewsPayload;
use crate::domains::complexes::data::NewsData;
use crate::domains::complexes::models::ComplexNews;
use crate::kernel::ServerDeps;

/// Publish a news item on a complex the caller owns.
pub async fn create_news(
    user_id: UserId,
    payload: CreateNewsPayload,
    deps: &ServerDeps,
) -> DomainResult<NewsData> {
    payload.validate().map_err(FieldErrors::from)?;

    let complex_id = payload.residential_complex;
    Actor::new(user_id)
        .can(Capability::ManageComplex(complex_id))
        .check(deps)
        .await?;

    let news = ComplexNews::create(complex_id, &payload.title, &payload.body, &deps.db_pool).await?;
    info!(complex_id = %complex_id, news_id = %news.id, "News published");
    Ok(news.into())
}

pub async fn delete_news(user_id: UserId, news_id: NewsId, deps: &ServerDeps) -> DomainResult<()> {
    Actor::new(user_id)
        .can(Capability::ManageNews(news_id))
        .check(deps)
        .await?;

    if !ComplexNews::delete(news_id, &deps.db_pool).await? {
        return Err(DomainError::NotFound("News".to_string()));
    }
    info!(news_id = %news_id, "News deleted");
    Ok(())
}
