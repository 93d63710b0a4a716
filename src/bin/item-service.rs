use anyhow::Result;
use echo_services::{
    config::{ServiceConfig, ITEM_SERVICE_PORT},
    routes, server, telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    telemetry::init();

    let config = ServiceConfig::load("ITEM_SERVICE", ITEM_SERVICE_PORT)?;
    server::serve("item-service", routes::item::router(), &config).await
}
