use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{method_not_allowed, not_found};
use crate::{
    extract::{ValidJson, ValidPath, ValidQuery},
    models::{Integer, Item, ItemCreated, ItemCreatedContent},
};

pub const ITEM_CREATED: &str = "Item criado com sucesso!";

pub fn router() -> Router {
    Router::new()
        // `GET /` goes to `root`
        .route("/", get(root).fallback(method_not_allowed))
        .route("/item/:item_id", get(item_by_id).fallback(method_not_allowed))
        .route(
            "/item",
            get(item_by_name)
                .post(create_item)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
}

// === Routes ===
async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

async fn item_by_id(ValidPath(item_id): ValidPath<Integer>) -> Json<Value> {
    debug!(%item_id, "item lookup by id");
    Json(json!({ "ID": item_id }))
}

#[derive(Debug, Deserialize)]
struct ByName {
    nome: String,
}
async fn item_by_name(ValidQuery(ByName { nome }): ValidQuery<ByName>) -> Json<Value> {
    debug!(nome = %nome, "item lookup by name");
    Json(json!({ "Nome": nome }))
}

// validated and echoed back, nothing is kept
async fn create_item(ValidJson(item): ValidJson<Item>) -> (StatusCode, Json<ItemCreated>) {
    debug!(titulo = %item.title, "item accepted");
    let status = StatusCode::CREATED;
    let created = ItemCreated {
        status_code: status.as_u16(),
        content: ItemCreatedContent {
            message: ITEM_CREATED,
            item,
        },
    };
    (status, Json(created))
}
