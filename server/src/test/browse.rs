use axum::http::StatusCode;
use larder_core::{ChipKind, Direction, QuickFilter, SortKey};
use serde_json::json;

use crate::{
    model::browse::BrowseView,
    test::{seed, setup_server},
};

fn names(view: &BrowseView) -> Vec<&str> {
    view.recipes.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn browse_without_state_lists_everything() {
    let server = setup_server();
    seed(&server).await;

    let response = server.get("/browse").await;
    response.assert_status_ok();

    let view = response.json::<BrowseView>();
    assert_eq!(vec!["Apple Pie", "Beef Stew", "Garden Salad"], names(&view));
    assert_eq!(3, view.total);
    assert!(view.chips.is_empty());
    assert_eq!(SortKey::Alphabetical, view.sort_by);
    assert_eq!("", view.url_query);
}

#[tokio::test]
async fn browse_query_overlays_filters_and_sort() {
    let server = setup_server();
    seed(&server).await;

    let view = server
        .get("/browse?category=dessert&category=main&sortBy=cook-time&direction=desc")
        .await
        .json::<BrowseView>();

    assert_eq!(vec!["Beef Stew", "Apple Pie"], names(&view));
    assert_eq!(vec!["dessert", "main"], view.spec.categories);
    assert_eq!(Direction::Descending, view.direction);
    assert_eq!("Dessert", view.chips[0].label);
    assert_eq!("main", view.chips[1].label);
}

#[tokio::test]
async fn browse_kept_state_survives_next_request() {
    let server = setup_server();
    seed(&server).await;

    server
        .get("/browse?favoritesOnly=true&keep=true")
        .await
        .assert_status_ok();

    let view = server.get("/browse").await.json::<BrowseView>();
    assert_eq!(vec!["Garden Salad"], names(&view));
    assert_eq!(vec![QuickFilter::Favorites], view.quick_filters);
    assert_eq!("favoritesOnly=true", view.url_query);

    // URL parameter wins over the saved value
    server
        .get("/browse?favoritesOnly=true&keep=true")
        .await
        .assert_status_ok();
    let view = server
        .get("/browse?favoritesOnly=false")
        .await
        .json::<BrowseView>();
    assert_eq!(3, view.recipes.len());
}

#[tokio::test]
async fn browse_quick_filter_query_is_idempotent() {
    let server = setup_server();
    seed(&server).await;

    for _ in 0..2 {
        let view = server.get("/browse?quick=under-30").await.json::<BrowseView>();
        assert_eq!(Some(30), view.spec.max_cook_time);
        assert!(view.recipes.is_empty());
    }
}

#[tokio::test]
async fn browse_unknown_quick_filter_bad_request() {
    let server = setup_server();

    let response = server.get("/browse?quick=spicy").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!("Unknown quick filter: spicy", body["error"]);
}

#[tokio::test]
async fn browse_intents_update_state() {
    let server = setup_server();
    seed(&server).await;

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "toggleQuickFilter", "id": "vegetarian" }))
        .await
        .json::<BrowseView>();
    assert_eq!(vec!["Garden Salad"], names(&view));

    let chip = view.chips[0].clone();
    assert_eq!(ChipKind::Dietary, chip.kind);

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "removeChip", "chip": chip }))
        .await
        .json::<BrowseView>();
    assert!(view.chips.is_empty());
    assert_eq!(3, view.recipes.len());

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "setSort", "sortBy": "createdAt", "direction": "descending" }))
        .await
        .json::<BrowseView>();
    assert_eq!(SortKey::CreatedAt, view.sort_by);
    assert_eq!(vec!["Garden Salad", "Beef Stew", "Apple Pie"], names(&view));

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "togglePanel" }))
        .await
        .json::<BrowseView>();
    assert!(view.panel_open);
}

#[tokio::test]
async fn browse_clear_all_keeps_sort() {
    let server = setup_server();
    seed(&server).await;

    server
        .get("/browse?category=main&search=stew&sortBy=alphabetical&direction=desc&keep=true")
        .await
        .assert_status_ok();

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "clearAll" }))
        .await
        .json::<BrowseView>();

    assert!(view.spec.is_empty());
    assert_eq!(Direction::Descending, view.direction);
    assert_eq!(vec!["Garden Salad", "Beef Stew", "Apple Pie"], names(&view));
}

#[tokio::test]
async fn browse_delete_state_resets() {
    let server = setup_server();
    seed(&server).await;

    server
        .get("/browse?category=dessert&keep=true")
        .await
        .assert_status_ok();

    server
        .delete("/browse/state")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let view = server.get("/browse").await.json::<BrowseView>();
    assert!(view.spec.is_empty());
    assert_eq!(3, view.recipes.len());
}

#[tokio::test]
async fn browse_state_is_per_session() {
    let mut server = setup_server();
    seed(&server).await;
    server
        .get("/browse?category=dessert&keep=true")
        .await
        .assert_status_ok();

    // Dropping the cookie starts a new session
    server.clear_cookies();

    let view = server.get("/browse").await.json::<BrowseView>();
    assert_eq!(3, view.recipes.len());
}

#[tokio::test]
async fn browse_restores_saved_state_once() {
    let server = setup_server();
    seed(&server).await;

    server
        .post("/browse/intent")
        .json(&json!({ "action": "setCategory", "value": "dessert", "included": true }))
        .await
        .assert_status_ok();

    let view = server.get("/browse").await.json::<BrowseView>();
    assert_eq!(vec!["Apple Pie"], names(&view));

    // A plain refresh starts from defaults again
    let view = server.get("/browse").await.json::<BrowseView>();
    assert!(view.spec.is_empty());
    assert_eq!(3, view.recipes.len());
}

#[tokio::test]
async fn browse_huge_new_window_ok() {
    let server = setup_server();
    seed(&server).await;

    let response = server.get("/browse?newDays=100000000").await;
    response.assert_status_ok();

    let view = response.json::<BrowseView>();
    assert_eq!(3, view.recipes.len());
}

#[tokio::test]
async fn browse_panel_intent() {
    let server = setup_server();

    let view = server
        .post("/browse/intent")
        .json(&json!({ "action": "setPanelOpen", "open": true }))
        .await
        .json::<BrowseView>();

    assert!(view.panel_open);
}
