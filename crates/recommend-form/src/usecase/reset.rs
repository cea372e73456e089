use recommend_domain::recommendation::RecommendationPayload;
use tracing::{debug, info};

use crate::domain::port::RecommendationApi;
use crate::error::FormError;

// ── ResetRecommendations ─────────────────────────────────────────────────────

pub struct ResetRecommendationsUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> ResetRecommendationsUseCase<'_, A> {
    pub async fn execute(&self) -> Result<(), FormError> {
        debug!("resetting recommendations");
        Ok(self.api.reset().await?)
    }
}

// ── SeedRecommendations ──────────────────────────────────────────────────────

/// Error from seeding, with how far it got.
#[derive(Debug, thiserror::Error)]
#[error("seeding stopped after {created} row(s): {source}")]
pub struct SeedError {
    pub created: usize,
    #[source]
    pub source: FormError,
}

pub struct SeedRecommendationsUseCase<'a, A: RecommendationApi> {
    pub api: &'a A,
}

impl<A: RecommendationApi> SeedRecommendationsUseCase<'_, A> {
    /// Reset the collection, then create `rows` in order.
    ///
    /// Stops at the first failure. Returns the number of rows created.
    pub async fn execute(&self, rows: &[RecommendationPayload]) -> Result<usize, SeedError> {
        self.api.reset().await.map_err(|e| SeedError {
            created: 0,
            source: e.into(),
        })?;
        for (created, row) in rows.iter().enumerate() {
            self.api.create(row).await.map_err(|e| SeedError {
                created,
                source: e.into(),
            })?;
        }
        info!(rows = rows.len(), "seeded recommendations");
        Ok(rows.len())
    }
}
