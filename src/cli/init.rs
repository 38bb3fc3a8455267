use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "The Lone Traveler".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("public/uploads"))?;

    let config = format!(
        r#"[site]
title = "{}"
description = "A personal travel-photography portfolio"
url = "http://localhost:3000"
language = "en"

[server]
host = "127.0.0.1"
port = 3000

[uploads]
dir = "./public/uploads"
max_upload_size = "10MB"
"#,
        site_name
    );

    std::fs::write(path.join("traveler.toml"), config)?;

    tracing::info!("Created new Traveler site at {:?}", path);
    tracing::info!("Run 'traveler serve' to start the server");

    Ok(())
}
