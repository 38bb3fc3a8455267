use crate::{web, Config};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, host: &str, port: u16) -> Result<()> {
    let config = Config::load(config_path)?;

    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting production server at http://{}", addr);

    web::serve_production(config, &addr).await?;

    Ok(())
}
