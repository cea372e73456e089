//! Turns raw form text into typed request values.
//!
//! Every action validates here before a request is built, so malformed input
//! never reaches the wire.

use std::str::FromStr;

use recommend_domain::id::{ProductId, RecommendationId};
use recommend_domain::recommendation::RecommendationPayload;
use recommend_domain::search::SearchFilter;

use crate::domain::field::{Field, FormFields};
use crate::error::ValidationError;

fn trimmed(fields: &FormFields, field: Field) -> Option<&str> {
    let value = fields.get(field).trim();
    (!value.is_empty()).then_some(value)
}

fn optional_number<T: FromStr>(
    fields: &FormFields,
    field: Field,
) -> Result<Option<T>, ValidationError> {
    trimmed(fields, field)
        .map(|v| v.parse().map_err(|_| ValidationError::NotANumber(field)))
        .transpose()
}

fn required_number<T: FromStr>(fields: &FormFields, field: Field) -> Result<T, ValidationError> {
    optional_number(fields, field)?.ok_or(ValidationError::Missing(field))
}

fn required_text(fields: &FormFields, field: Field) -> Result<String, ValidationError> {
    trimmed(fields, field)
        .map(str::to_owned)
        .ok_or(ValidationError::Missing(field))
}

/// The identifier in the form. Required by update, retrieve, delete and like.
pub fn recommendation_id(fields: &FormFields) -> Result<RecommendationId, ValidationError> {
    required_number::<u32>(fields, Field::RecommendationId).map(RecommendationId)
}

/// Body for create and update. `likes` is optional; blank means omitted.
pub fn payload(fields: &FormFields) -> Result<RecommendationPayload, ValidationError> {
    Ok(RecommendationPayload {
        product_id: required_number::<u32>(fields, Field::ProductId).map(ProductId)?,
        recommended_product_id: required_number::<u32>(fields, Field::RecommendedProductId)
            .map(ProductId)?,
        recommendation_type: required_text(fields, Field::RecommendationType)?,
        likes: optional_number(fields, Field::Likes)?,
    })
}

/// Filters from whichever search fields are non-blank.
pub fn search_filter(fields: &FormFields) -> Result<SearchFilter, ValidationError> {
    Ok(SearchFilter {
        recommendation_type: trimmed(fields, Field::RecommendationType).map(str::to_owned),
        product_id: optional_number::<u32>(fields, Field::ProductId)?.map(ProductId),
        recommended_product_id: optional_number::<u32>(fields, Field::RecommendedProductId)?
            .map(ProductId),
        likes: optional_number(fields, Field::Likes)?,
    })
}
