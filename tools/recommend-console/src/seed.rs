//! Seed file loading.
//!
//! A seed file is a JSON array of recommendation bodies, the same shape the
//! create action sends.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use recommend_domain::recommendation::RecommendationPayload;
use recommend_form::domain::port::RecommendationApi;
use recommend_form::usecase::reset::SeedRecommendationsUseCase;

pub fn load_rows(path: &Path) -> Result<Vec<RecommendationPayload>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid seed JSON in {}", path.display()))
}

/// Reset the service and create every row in `path`. Returns rows created.
pub async fn run<A: RecommendationApi>(api: &A, path: &Path) -> Result<usize> {
    let rows = load_rows(path)?;
    Ok(SeedRecommendationsUseCase { api }.execute(&rows).await?)
}
