use recommend_domain::id::{ProductId, RecommendationId};
use recommend_domain::recommendation::RecommendationPayload;
use recommend_domain::search::SearchFilter;
use recommend_form::controller::{Action, FormController};
use recommend_form::domain::field::{Field, FormFields};
use recommend_form::domain::state::{Flash, FlashLevel};
use recommend_form::error::{ApiError, TRANSPORT_MESSAGE};

use crate::helpers::{Call, Reply, ScriptedApi, example_fields, server_error, test_record};

fn controller_with(fields: FormFields, replies: Vec<Reply>) -> (FormController<ScriptedApi>, ScriptedApi) {
    let api = ScriptedApi::new(replies);
    let mut controller = FormController::new(api.clone());
    for (field, value) in fields.iter() {
        controller.set_field(field, value);
    }
    (controller, api)
}

#[tokio::test]
async fn should_create_and_mirror_returned_record() {
    let (mut controller, api) =
        controller_with(example_fields(), vec![Reply::Record(test_record(7, 0))]);

    let state = controller.dispatch(Action::Create).await;

    assert_eq!(state.fields, FormFields::from_record(&test_record(7, 0)));
    assert_eq!(state.fields.get(Field::RecommendationId), "7");
    assert_eq!(state.fields.get(Field::Likes), "0");
    assert_eq!(state.flash, Some(Flash::success("Success")));

    let calls = api.calls_handle();
    assert_eq!(
        *calls.lock().unwrap(),
        vec![Call::Create(RecommendationPayload {
            product_id: ProductId(12),
            recommended_product_id: ProductId(34),
            recommendation_type: "up-sell".to_owned(),
            likes: None,
        })]
    );
}

#[tokio::test]
async fn should_not_send_request_for_non_numeric_input() {
    let mut fields = example_fields();
    fields.set(Field::ProductId, "twelve");
    let (mut controller, api) = controller_with(fields.clone(), vec![]);

    let state = controller.dispatch(Action::Create).await;

    assert!(api.calls_handle().lock().unwrap().is_empty());
    assert_eq!(
        state.flash,
        Some(Flash::error("product_id must be a non-negative integer"))
    );
    assert_eq!(state.fields, fields);
}

#[tokio::test]
async fn should_update_by_id_in_form() {
    let mut fields = example_fields();
    fields.set(Field::RecommendationId, "7");
    fields.set(Field::RecommendationType, "cross-sell");
    let mut updated = test_record(7, 0);
    updated.recommendation_type = "cross-sell".to_owned();
    let (mut controller, api) = controller_with(fields, vec![Reply::Record(updated.clone())]);

    let state = controller.dispatch(Action::Update).await;

    assert_eq!(state.fields, FormFields::from_record(&updated));
    assert!(matches!(
        api.calls_handle().lock().unwrap()[0],
        Call::Update(RecommendationId(7), _)
    ));
}

#[tokio::test]
async fn should_relay_server_message_when_update_fails() {
    let mut fields = example_fields();
    fields.set(Field::RecommendationId, "9");
    let (mut controller, _) = controller_with(
        fields,
        vec![Reply::Fail(server_error(
            404,
            "Recommendation with id: 9 was not found",
        ))],
    );

    let state = controller.dispatch(Action::Update).await;

    assert_eq!(
        state.flash,
        Some(Flash::error("Recommendation with id: 9 was not found"))
    );
}

#[tokio::test]
async fn should_clear_form_when_retrieve_fails() {
    let mut fields = example_fields();
    fields.set(Field::RecommendationId, "9");
    let (mut controller, _) = controller_with(
        fields,
        vec![Reply::Fail(server_error(404, "Recommendation with id: 9 was not found"))],
    );

    let state = controller.dispatch(Action::Retrieve).await;

    assert!(state.fields.is_empty());
    assert_eq!(state.current, None);
    assert!(state.has_error());
}

#[tokio::test]
async fn should_empty_form_after_delete_whatever_the_body() {
    let (mut controller, api) = controller_with(
        FormFields::default(),
        vec![Reply::Record(test_record(3, 1)), Reply::Record(test_record(3, 1))],
    );
    controller.set_field(Field::RecommendationId, "3");
    controller.dispatch(Action::Retrieve).await;

    // The service answering delete with a full record changes nothing.
    let state = controller.dispatch(Action::Delete).await;

    assert!(state.fields.is_empty());
    assert_eq!(
        state.flash,
        Some(Flash::success("Recommendation successfully deleted!"))
    );
    assert_eq!(
        api.calls_handle().lock().unwrap()[1],
        Call::Delete(RecommendationId(3))
    );
}

#[tokio::test]
async fn should_surface_real_reason_when_delete_fails() {
    let (mut controller, _) = controller_with(
        FormFields::default(),
        vec![Reply::Fail(server_error(409, "Recommendation is locked"))],
    );
    controller.set_field(Field::RecommendationId, "3");

    let state = controller.dispatch(Action::Delete).await;

    assert_eq!(state.flash, Some(Flash::error("Recommendation is locked")));
}

#[tokio::test]
async fn should_search_unfiltered_when_form_empty() {
    let rows = vec![test_record(2, 0), test_record(1, 4)];
    let (mut controller, api) =
        controller_with(FormFields::default(), vec![Reply::Records(rows.clone())]);

    let state = controller.dispatch(Action::Search).await;

    assert_eq!(state.results, Some(rows));
    assert_eq!(
        *api.calls_handle().lock().unwrap(),
        vec![Call::Search(SearchFilter::default())]
    );
}

#[tokio::test]
async fn should_search_with_non_blank_fields_only() {
    let mut fields = FormFields::default();
    fields.set(Field::RecommendationType, "accessory");
    fields.set(Field::Likes, "3");
    let (mut controller, api) = controller_with(fields, vec![Reply::Records(vec![])]);

    let state = controller.dispatch(Action::Search).await;

    assert_eq!(state.results, Some(vec![]));
    assert_eq!(
        *api.calls_handle().lock().unwrap(),
        vec![Call::Search(SearchFilter {
            recommendation_type: Some("accessory".to_owned()),
            likes: Some(3),
            ..Default::default()
        })]
    );
}

#[tokio::test]
async fn should_take_like_count_from_response() {
    let (mut controller, api) = controller_with(
        FormFields::from_record(&test_record(5, 1)),
        vec![Reply::Record(test_record(5, 10))],
    );

    let state = controller.dispatch(Action::Like).await;

    assert_eq!(state.fields.get(Field::Likes), "10");
    assert_eq!(
        *api.calls_handle().lock().unwrap(),
        vec![Call::Like(RecommendationId(5))]
    );
}

#[tokio::test]
async fn should_clear_without_network() {
    let (mut controller, api) = controller_with(example_fields(), vec![]);

    let state = controller.dispatch(Action::Clear).await;

    assert!(state.fields.is_empty());
    assert!(api.calls_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_show_generic_message_on_transport_failure() {
    let (mut controller, _) = controller_with(
        FormFields::default(),
        vec![Reply::Fail(ApiError::Transport(
            "error sending request: connection refused".to_owned(),
        ))],
    );

    let state = controller.dispatch(Action::Reset).await;

    let flash = state.flash.clone().unwrap();
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, TRANSPORT_MESSAGE);
}

#[tokio::test]
async fn should_apply_overlapping_outcomes_in_completion_order() {
    let mut fields = FormFields::default();
    fields.set(Field::RecommendationId, "1");
    let (mut controller, _) = controller_with(
        FormFields::default(),
        vec![Reply::Record(test_record(1, 0)), Reply::Record(test_record(2, 8))],
    );

    let snapshot = fields.clone();
    let (first, second) = tokio::join!(
        controller.execute(Action::Retrieve, &snapshot),
        controller.execute(Action::Retrieve, &snapshot),
    );
    // The second response arrives last and wins.
    controller.apply(first);
    controller.apply(second);

    assert_eq!(controller.state().fields.get(Field::RecommendationId), "2");
    assert_eq!(controller.state().fields.get(Field::Likes), "8");
}

#[tokio::test]
async fn should_ignore_typing_into_available() {
    let (mut controller, _api) = controller_with(FormFields::default(), vec![]);

    controller.set_field(Field::Available, "true");
    controller.set_field(Field::Likes, "4");

    assert_eq!(controller.state().fields.get(Field::Available), "");
    assert_eq!(controller.state().fields.get(Field::Likes), "4");
}
