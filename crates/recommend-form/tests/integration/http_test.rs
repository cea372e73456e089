use recommend_domain::id::{ProductId, RecommendationId};
use recommend_domain::recommendation::RecommendationPayload;
use recommend_form::controller::{Action, FormController};
use recommend_form::domain::field::Field;
use recommend_form::domain::port::RecommendationApi;
use recommend_form::domain::state::Flash;
use recommend_form::error::{ApiError, DECODE_MESSAGE, TRANSPORT_MESSAGE};
use recommend_form::infra::http::HttpRecommendationApi;
use recommend_form::render::results_table_html;
use recommend_testing::fixture::{SEED_FILE, load_seed};
use recommend_testing::server::MockServer;
use serde_json::json;

use crate::helpers::example_fields;

async fn controller() -> (FormController<HttpRecommendationApi>, MockServer) {
    let server = MockServer::spawn().await.unwrap();
    let api = HttpRecommendationApi::new(&server.base_url);
    (FormController::new(api), server)
}

fn seed(server: &MockServer) {
    for row in load_seed(SEED_FILE) {
        server.state.insert(row);
    }
}

#[tokio::test]
async fn should_post_payload_with_blank_likes_omitted() {
    let (mut controller, server) = controller().await;
    for (field, value) in example_fields().iter() {
        controller.set_field(field, value);
    }

    let state = controller.dispatch(Action::Create).await;

    let req = server.state.last_request().unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/recommendations");
    assert_eq!(
        req.body,
        Some(json!({
            "product_id": 12,
            "recommended_product_id": 34,
            "recommendation_type": "up-sell",
        }))
    );
    assert_eq!(state.fields.get(Field::RecommendationId), "1");
    assert_eq!(state.fields.get(Field::Likes), "0");
    assert_eq!(state.flash, Some(Flash::success("Success")));
}

#[tokio::test]
async fn should_retrieve_then_like_then_delete() {
    let (mut controller, server) = controller().await;
    seed(&server);

    controller.set_field(Field::RecommendationId, "2");
    let state = controller.dispatch(Action::Retrieve).await;
    assert_eq!(state.fields.get(Field::RecommendationType), "accessory");
    assert_eq!(
        state.flash,
        Some(Flash::success("Success. Recommendation retrieved: 2"))
    );

    let state = controller.dispatch(Action::Like).await;
    assert_eq!(state.fields.get(Field::Likes), "4");
    let like = server.state.last_request().unwrap();
    assert_eq!(like.method, "PUT");
    assert_eq!(like.path, "/recommendations/2/likes");
    assert_eq!(like.body, Some(json!({ "recommendation_id": 2 })));

    let state = controller.dispatch(Action::Delete).await;
    assert!(state.fields.is_empty());
    assert!(server.state.records().iter().all(|r| r.id != RecommendationId(2)));
}

#[tokio::test]
async fn should_relay_error_field_when_message_absent() {
    let (mut controller, _server) = controller().await;
    controller.set_field(Field::RecommendationId, "99");

    let state = controller.dispatch(Action::Retrieve).await;

    assert!(state.fields.is_empty());
    assert_eq!(
        state.flash,
        Some(Flash::error("Recommendation with id: 99 was not found"))
    );
}

#[tokio::test]
async fn should_relay_real_reason_when_delete_fails() {
    let (mut controller, server) = controller().await;
    server
        .state
        .fail_next(500, json!({ "message": "database unavailable" }));
    controller.set_field(Field::RecommendationId, "1");

    let state = controller.dispatch(Action::Delete).await;

    assert_eq!(state.flash, Some(Flash::error("database unavailable")));
}

#[tokio::test]
async fn should_relay_error_field_when_message_is_not_text() {
    let (mut controller, server) = controller().await;
    server
        .state
        .fail_next(409, json!({ "message": 42, "error": "Conflict" }));
    controller.set_field(Field::RecommendationId, "1");

    let state = controller.dispatch(Action::Delete).await;

    assert_eq!(state.flash, Some(Flash::error("Conflict")));
}

#[tokio::test]
async fn should_fall_back_to_status_for_bodyless_errors() {
    let server = MockServer::spawn().await.unwrap();
    server.state.fail_next(503, json!(null));
    let api = HttpRecommendationApi::new(&server.base_url);

    let err = api.get(RecommendationId(1)).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 503,
            message: "HTTP 503".to_owned()
        }
    );
}

#[tokio::test]
async fn should_show_generic_message_when_service_unreachable() {
    // Bind and release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpRecommendationApi::new(&format!("http://127.0.0.1:{port}"));
    let mut controller = FormController::new(api);
    controller.set_field(Field::RecommendationId, "1");

    let state = controller.dispatch(Action::Retrieve).await;

    assert_eq!(state.flash, Some(Flash::error(TRANSPORT_MESSAGE)));
}

#[tokio::test]
async fn should_report_unreadable_success_body() {
    let (mut controller, server) = controller().await;
    server.state.fail_next(200, json!({ "unexpected": true }));
    controller.set_field(Field::RecommendationId, "1");

    let state = controller.dispatch(Action::Like).await;

    assert_eq!(state.flash, Some(Flash::error(DECODE_MESSAGE)));
}

#[tokio::test]
async fn should_request_bare_collection_for_empty_search() {
    let (mut controller, server) = controller().await;
    seed(&server);

    let state = controller.dispatch(Action::Search).await;

    let req = server.state.last_request().unwrap();
    assert_eq!(req.path, "/recommendations");
    assert_eq!(req.query, None);
    assert_eq!(state.results.as_ref().map(Vec::len), Some(4));
}

#[tokio::test]
async fn should_encode_filters_and_render_matching_rows() {
    let (mut controller, server) = controller().await;
    seed(&server);
    controller.set_field(Field::ProductId, "12");
    controller.set_field(Field::RecommendationType, "up-sell");

    let state = controller.dispatch(Action::Search).await;

    let req = server.state.last_request().unwrap();
    assert_eq!(
        req.query.as_deref(),
        Some("recommendation_type=up-sell&product_id=12")
    );
    let rows = state.results.clone().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recommended_product_id, ProductId(34));
    assert!(results_table_html(&rows).contains("<td>1</td><td>12</td><td>34</td><td>up-sell</td><td>0</td>"));
}

#[tokio::test]
async fn should_not_let_reserved_characters_split_the_query() {
    let (mut controller, server) = controller().await;
    seed(&server);
    controller.set_field(Field::RecommendationType, "up-sell&product_id=78");

    let state = controller.dispatch(Action::Search).await;

    // Injected pair stays inside the type value, so nothing matches.
    assert_eq!(state.results, Some(vec![]));
    let query = server.state.last_request().unwrap().query.unwrap();
    assert!(!query.contains("&product_id=78"), "unencoded query: {query}");
}

#[tokio::test]
async fn should_reset_collection_and_form() {
    let (mut controller, server) = controller().await;
    server.state.insert(RecommendationPayload {
        product_id: ProductId(1),
        recommended_product_id: ProductId(2),
        recommendation_type: "up-sell".to_owned(),
        likes: Some(0),
    });
    controller.set_field(Field::RecommendationId, "1");

    let state = controller.dispatch(Action::Reset).await;

    assert!(state.fields.is_empty());
    assert!(!state.has_error());
    assert!(server.state.records().is_empty());
    assert_eq!(server.state.last_request().unwrap().path, "/recommendations/reset");
}
