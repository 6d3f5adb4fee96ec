mod app;
mod cli;
mod commands;
mod configuration;
mod context;
mod error;
mod listing;
mod query;
mod storage;
mod tracing;

#[tokio::main]
async fn main() {
    crate::tracing::init();

    if let Err(e) = app::run().await {
        log::error!("❌ {:#}", e);
        std::process::exit(1);
    }
}
