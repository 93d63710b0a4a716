use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{method_not_allowed, not_found};
use crate::{
    db::MemDb,
    extract::{ValidJson, ValidPath, ValidQuery},
    models::{Integer, Task, TaskCreated},
};

pub const TASK_CREATED: &str = "Tarefa criada com sucesso!";

// === App State ===
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: MemDb<Task>,
}
impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route(
            "/tarefas",
            get(task_by_query)
                .post(create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tarefas/:tarefa_id",
            get(task_by_id).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

// === Routes ===
async fn root() -> Json<Value> {
    Json(json!({ "mensagem": "Olá Mundo" }))
}

async fn create_task(
    State(state): State<AppState>,
    ValidJson(task): ValidJson<Task>,
) -> (StatusCode, Json<TaskCreated>) {
    let position = state.tasks.push(task.clone()).await;
    info!(position, titulo = %task.title, "task stored");
    let created = TaskCreated {
        message: TASK_CREATED,
        task,
    };
    (StatusCode::CREATED, Json(created))
}

// Echoes the id; the stored tasks are not consulted.
async fn task_by_id(ValidPath(tarefa_id): ValidPath<Integer>) -> Json<Value> {
    debug!(%tarefa_id, "task lookup by path");
    Json(json!({ "ID": tarefa_id }))
}

#[derive(Debug, Deserialize)]
struct ById {
    tarefa_id: Integer,
}
// Same as `task_by_id`, but from the query string.
async fn task_by_query(ValidQuery(ById { tarefa_id }): ValidQuery<ById>) -> Json<Value> {
    debug!(%tarefa_id, "task lookup by query");
    Json(json!({ "ID da Tarefa": tarefa_id }))
}
