use recommend_core::error::ErrorBody;
use recommend_domain::id::RecommendationId;
use recommend_domain::recommendation::{LikeRequest, Recommendation, RecommendationPayload};
use recommend_domain::search::{COLLECTION_PATH, SearchFilter};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domain::port::RecommendationApi;
use crate::error::ApiError;

/// reqwest client implementing `RecommendationApi` over HTTP/JSON.
///
/// No timeout is configured; the client's defaults apply.
#[derive(Clone)]
pub struct HttpRecommendationApi {
    client: Client,
    base_url: String,
}

impl HttpRecommendationApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, id: RecommendationId) -> String {
        self.url(&format!("{COLLECTION_PATH}/{id}"))
    }
}

/// Send `req`, turning transport failures and non-2xx statuses into errors.
async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    let resp = req.send().await.map_err(|e| {
        warn!(error = %e, "recommendations request failed");
        ApiError::Transport(e.to_string())
    })?;

    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    // The body is best-effort: a read failure still yields the status line.
    let bytes = resp.bytes().await.unwrap_or_default();
    let message = ErrorBody::from_slice(&bytes).reason_or_status(status.as_u16());
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
    send(req).await?.json::<T>().await.map_err(|e| {
        error!(error = %e, "unexpected recommendations response body");
        ApiError::Decode(e.to_string())
    })
}

impl RecommendationApi for HttpRecommendationApi {
    async fn create(&self, payload: &RecommendationPayload) -> Result<Recommendation, ApiError> {
        send_json(self.client.post(self.url(COLLECTION_PATH)).json(payload)).await
    }

    async fn update(
        &self,
        id: RecommendationId,
        payload: &RecommendationPayload,
    ) -> Result<Recommendation, ApiError> {
        send_json(self.client.put(self.item_url(id)).json(payload)).await
    }

    async fn get(&self, id: RecommendationId) -> Result<Recommendation, ApiError> {
        send_json(self.client.get(self.item_url(id))).await
    }

    async fn delete(&self, id: RecommendationId) -> Result<(), ApiError> {
        send(self.client.delete(self.item_url(id))).await?;
        Ok(())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Recommendation>, ApiError> {
        // A query that cannot be encoded never leaves the client.
        let path = filter.request_path().map_err(|e| {
            warn!(error = %e, "search query could not be encoded");
            ApiError::Transport(e.to_string())
        })?;
        send_json(self.client.get(self.url(&path))).await
    }

    async fn like(&self, id: RecommendationId) -> Result<Recommendation, ApiError> {
        let url = self.url(&format!("{COLLECTION_PATH}/{id}/likes"));
        let body = LikeRequest {
            recommendation_id: id,
        };
        send_json(self.client.put(url).json(&body)).await
    }

    async fn reset(&self) -> Result<(), ApiError> {
        send(self.client.delete(self.url(&format!("{COLLECTION_PATH}/reset")))).await?;
        Ok(())
    }
}
