//! Recommendation record and request bodies.

use serde::{Deserialize, Serialize};

use crate::id::{ProductId, RecommendationId};

/// Recommendation types the service documents. The form accepts free text;
/// the console lists these in its help output.
pub const KNOWN_TYPES: [&str; 3] = ["up-sell", "cross-sell", "accessory"];

/// A recommendation as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub product_id: ProductId,
    pub recommended_product_id: ProductId,
    pub recommendation_type: String,
    pub likes: u32,
    /// Only some deployments report availability. Read-only from the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Body of `POST /recommendations` and `PUT /recommendations/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPayload {
    pub product_id: ProductId,
    pub recommended_product_id: ProductId,
    pub recommendation_type: String,
    /// Omitted when the likes input is left blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

/// Body of `PUT /recommendations/{id}/likes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
    pub recommendation_id: RecommendationId,
}
