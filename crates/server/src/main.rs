use std::sync::Arc;

use tracing::info;

use mcqgen_core::{config, Config};
use mcqgen_llm::McqGenerator;
use mcqgen_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    config::load_dotenv();
    let config = Config::from_env();
    config.validate()?;
    config.log_summary();

    std::fs::create_dir_all(&config.scratch.dir)?;

    let generator = McqGenerator::from_config(&config.llm)?;
    let state = Arc::new(AppState {
        generator,
        scratch_dir: config.scratch.dir.clone(),
    });

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
