mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use foodgram::api::handlers::download_shopping_cart_handler;
use foodgram::domain::entities::RecipeCollection;
use foodgram::domain::shopping_list::IngredientLine;
use foodgram::state::AppState;

const DOWNLOAD_PATH: &str = "/api/recipes/download_shopping_cart";

fn app(state: &AppState) -> Router {
    let router = Router::new().route(DOWNLOAD_PATH, get(download_shopping_cart_handler));
    common::with_auth(router, state).with_state(state.clone())
}

#[tokio::test]
async fn test_download_aggregates_cart_ingredients() {
    let (state, store) = common::create_test_state();
    store.insert_recipe(1, "Pancakes");
    store.insert_recipe(2, "Omelette");
    store.set_ingredients(
        1,
        vec![
            IngredientLine::new("Salt", "g", 10),
            IngredientLine::new("Sugar", "g", 5),
        ],
    );
    store.set_ingredients(2, vec![IngredientLine::new("Salt", "g", 20)]);
    store.put(RecipeCollection::ShoppingCart, common::TEST_USER_ID, 1);
    store.put(RecipeCollection::ShoppingCart, common::TEST_USER_ID, 2);

    let server = TestServer::new(app(&state)).unwrap();

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Salt (g) — 30\nSugar (g) — 5");
}

#[tokio::test]
async fn test_download_sets_attachment_headers() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(&state)).unwrap();

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn test_download_empty_cart_returns_empty_body() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(&state)).unwrap();

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_download_ignores_favorites_and_other_users() {
    let (state, store) = common::create_test_state();
    common::add_token(&state, &store, "other-token", 2);
    store.insert_recipe(1, "Pancakes");
    store.insert_recipe(2, "Omelette");
    store.set_ingredients(1, vec![IngredientLine::new("Flour", "g", 200)]);
    store.set_ingredients(2, vec![IngredientLine::new("Eggs", "pcs", 3)]);
    store.put(RecipeCollection::Favorites, common::TEST_USER_ID, 1);
    store.put(RecipeCollection::ShoppingCart, 2, 2);

    let server = TestServer::new(app(&state)).unwrap();

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "");

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer("other-token"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Eggs (pcs) — 3");
}

#[tokio::test]
async fn test_download_without_token_is_unauthorized() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(&state)).unwrap();

    let response = server.get(DOWNLOAD_PATH).await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[tokio::test]
async fn test_download_with_unknown_token_is_unauthorized() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(&state)).unwrap();

    let response = server
        .get(DOWNLOAD_PATH)
        .add_header("Authorization", common::bearer("not-a-real-token"))
        .await;

    response.assert_status_unauthorized();
}
