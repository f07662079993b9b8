use super::*;
use axum::http::StatusCode;

use crate::state::test_helpers::{seed_case_study, test_app_state};

#[tokio::test]
async fn list_returns_only_published_in_order() {
    let state = test_app_state();
    seed_case_study(&state, "Hidden", false).await;
    seed_case_study(&state, "Visible", true).await;

    let Json(items) = list_case_studies(State(state)).await.expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].slug, "visible");
}

#[tokio::test]
async fn detail_by_slug_404s_when_unpublished() {
    let state = test_app_state();
    seed_case_study(&state, "Draft Story", false).await;
    seed_case_study(&state, "Live Story", true).await;

    let Json(item) = get_case_study(State(state.clone()), Path("live-story".into()))
        .await
        .expect("detail");
    assert_eq!(item.title, "Live Story");

    let err = get_case_study(State(state), Path("draft-story".into())).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn integrations_list_is_empty_without_rows() {
    let Json(items) = list_integrations(State(test_app_state())).await.expect("list");
    assert!(items.is_empty());
}
