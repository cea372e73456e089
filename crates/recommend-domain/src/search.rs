//! Search filters for `GET /recommendations`.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// Collection path of the resource.
pub const COLLECTION_PATH: &str = "/recommendations";

/// Optional filters narrowing a collection query.
///
/// Field order is the wire order: serde_qs emits keys in declaration order,
/// and unset filters are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.recommendation_type.is_none()
            && self.product_id.is_none()
            && self.recommended_product_id.is_none()
            && self.likes.is_none()
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }

    /// Request path for this search, e.g. `/recommendations?product_id=12`.
    ///
    /// An empty filter yields the bare collection path.
    pub fn request_path(&self) -> Result<String, serde_qs::Error> {
        if self.is_empty() {
            return Ok(COLLECTION_PATH.to_owned());
        }
        Ok(format!("{COLLECTION_PATH}?{}", self.to_query_string()?))
    }

    /// Whether `record` satisfies every set filter.
    pub fn matches(&self, record: &crate::recommendation::Recommendation) -> bool {
        self.recommendation_type
            .as_deref()
            .is_none_or(|t| t == record.recommendation_type)
            && self.product_id.is_none_or(|p| p == record.product_id)
            && self
                .recommended_product_id
                .is_none_or(|p| p == record.recommended_product_id)
            && self.likes.is_none_or(|l| l == record.likes)
    }
}
