use anyhow::Result;
use echo_services::{
    config::{ServiceConfig, TASK_SERVICE_PORT},
    routes::task::{self, AppState},
    server, telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    telemetry::init();

    let config = ServiceConfig::load("TASK_SERVICE", TASK_SERVICE_PORT)?;
    // tasks live only as long as this process
    let state = AppState::new();
    server::serve("task-service", task::router(state), &config).await
}
