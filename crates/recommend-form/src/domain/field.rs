//! Form inputs, addressed by stable keys.

use std::fmt;
use std::str::FromStr;

use recommend_domain::recommendation::Recommendation;

/// One input of the recommendation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RecommendationId,
    ProductId,
    RecommendedProductId,
    RecommendationType,
    Likes,
    Available,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 6] = [
        Field::RecommendationId,
        Field::ProductId,
        Field::RecommendedProductId,
        Field::RecommendationType,
        Field::Likes,
        Field::Available,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::RecommendationId => "recommendation_id",
            Self::ProductId => "product_id",
            Self::RecommendedProductId => "recommended_product_id",
            Self::RecommendationType => "recommendation_type",
            Self::Likes => "likes",
            Self::Available => "available",
        }
    }

    /// `available` mirrors the server and cannot be typed into.
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Available)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// Raw text of every form input, exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub recommendation_id: String,
    pub product_id: String,
    pub recommended_product_id: String,
    pub recommendation_type: String,
    pub likes: String,
    pub available: String,
}

impl FormFields {
    /// Field values mirroring `record`.
    pub fn from_record(record: &Recommendation) -> Self {
        Self {
            recommendation_id: record.id.to_string(),
            product_id: record.product_id.to_string(),
            recommended_product_id: record.recommended_product_id.to_string(),
            recommendation_type: record.recommendation_type.clone(),
            likes: record.likes.to_string(),
            available: record.available.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RecommendationId => &self.recommendation_id,
            Field::ProductId => &self.product_id,
            Field::RecommendedProductId => &self.recommended_product_id,
            Field::RecommendationType => &self.recommendation_type,
            Field::Likes => &self.likes,
            Field::Available => &self.available,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::RecommendationId => &mut self.recommendation_id,
            Field::ProductId => &mut self.product_id,
            Field::RecommendedProductId => &mut self.recommended_product_id,
            Field::RecommendationType => &mut self.recommendation_type,
            Field::Likes => &mut self.likes,
            Field::Available => &mut self.available,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
