use recommend_domain::recommendation::Recommendation;
use tracing::debug;

use crate::domain::field::FormFields;
use crate::domain::input;
use crate::domain::port::RecommendationApi;
use crate::error::FormError;

// ── CreateRecommendation ─────────────────────────────────────────────────────

pub struct CreateRecommendationUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> CreateRecommendationUseCase<'_, A> {
    pub async fn execute(&self, fields: &FormFields) -> Result<Recommendation, FormError> {
        let payload = input::payload(fields)?;
        debug!(
            product_id = %payload.product_id,
            recommended_product_id = %payload.recommended_product_id,
            "creating recommendation"
        );
        Ok(self.api.create(&payload).await?)
    }
}

// ── UpdateRecommendation ─────────────────────────────────────────────────────

pub struct UpdateRecommendationUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> UpdateRecommendationUseCase<'_, A> {
    pub async fn execute(&self, fields: &FormFields) -> Result<Recommendation, FormError> {
        let id = input::recommendation_id(fields)?;
        let payload = input::payload(fields)?;
        debug!(%id, "updating recommendation");
        Ok(self.api.update(id, &payload).await?)
    }
}

// ── RetrieveRecommendation ───────────────────────────────────────────────────

pub struct RetrieveRecommendationUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> RetrieveRecommendationUseCase<'_, A> {
    pub async fn execute(&self, fields: &FormFields) -> Result<Recommendation, FormError> {
        let id = input::recommendation_id(fields)?;
        debug!(%id, "retrieving recommendation");
        Ok(self.api.get(id).await?)
    }
}

// ── DeleteRecommendation ─────────────────────────────────────────────────────

pub struct DeleteRecommendationUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> DeleteRecommendationUseCase<'_, A> {
    pub async fn execute(&self, fields: &FormFields) -> Result<(), FormError> {
        let id = input::recommendation_id(fields)?;
        debug!(%id, "deleting recommendation");
        Ok(self.api.delete(id).await?)
    }
}

// ── LikeRecommendation ───────────────────────────────────────────────────────

pub struct LikeRecommendationUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> LikeRecommendationUseCase<'_, A> {
    pub async fn execute(&self, fields: &FormFields) -> Result<Recommendation, FormError> {
        let id = input::recommendation_id(fields)?;
        debug!(%id, "liking recommendation");
        Ok(self.api.like(id).await?)
    }
}
