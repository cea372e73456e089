#![allow(async_fn_in_trait)]

use recommend_domain::id::RecommendationId;
use recommend_domain::recommendation::{Recommendation, RecommendationPayload};
use recommend_domain::search::SearchFilter;

use crate::error::ApiError;

/// Port for the recommendations REST resource.
///
/// One method per endpoint; each call issues exactly one request.
pub trait RecommendationApi: Send + Sync {
    /// `POST /recommendations`
    async fn create(&self, payload: &RecommendationPayload) -> Result<Recommendation, ApiError>;

    /// `PUT /recommendations/{id}`
    async fn update(
        &self,
        id: RecommendationId,
        payload: &RecommendationPayload,
    ) -> Result<Recommendation, ApiError>;

    /// `GET /recommendations/{id}`
    async fn get(&self, id: RecommendationId) -> Result<Recommendation, ApiError>;

    /// `DELETE /recommendations/{id}`. The response body is ignored.
    async fn delete(&self, id: RecommendationId) -> Result<(), ApiError>;

    /// `GET /recommendations?{query}`
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Recommendation>, ApiError>;

    /// `PUT /recommendations/{id}/likes`
    async fn like(&self, id: RecommendationId) -> Result<Recommendation, ApiError>;

    /// `DELETE /recommendations/reset`
    async fn reset(&self) -> Result<(), ApiError>;
}
