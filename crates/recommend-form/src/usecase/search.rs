use recommend_domain::recommendation::Recommendation;
use tracing::debug;

use crate::domain::field::FormFields;
use crate::domain::input;
use crate::domain::port::RecommendationApi;
use crate::error::FormError;

// ── SearchRecommendations ────────────────────────────────────────────────────

pub struct SearchRecommendationsUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> SearchRecommendationsUseCase<'_, A> {
    /// Rows in the order the service returned them.
    pub async fn execute(&self, fields: &FormFields) -> Result<Vec<Recommendation>, FormError> {
        let filter = input::search_filter(fields)?;
        debug!(?filter, "searching recommendations");
        Ok(self.api.search(&filter).await?)
    }
}
