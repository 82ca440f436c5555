use std::path::{Path, PathBuf};

use anyhow::Context;
use bfly_server::config::DB_PATH_VAR;
use bfly_server::{ButterflyServer, ServerConfig};
use bfly_store::{seed_document, DocumentStore};
use colored::Colorize;
use tracing::info;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::InitDb(args) => cmd_init_db(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args, |key| std::env::var(key).ok())?;
    println!(
        "{} Serving {} on {}",
        "✓".green().bold(),
        config.db_path.display().to_string().bold(),
        config.bind_addr.to_string().cyan()
    );
    ButterflyServer::new(config).serve().await?;
    Ok(())
}

async fn cmd_init_db(args: InitDbArgs) -> anyhow::Result<()> {
    let path = args
        .db
        .or_else(|| std::env::var(DB_PATH_VAR).ok().filter(|p| !p.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| ServerConfig::default().db_path);
    let store = init_db(&path).await?;
    let document = store.snapshot().await;
    println!("{} Initialized datastore at {}", "✓".green().bold(), path.display().to_string().bold());
    println!("  Butterflies: {}", document.butterflies.len().to_string().cyan());
    println!("  Users: {}", document.users.len().to_string().cyan());
    println!("  Ratings: {}", document.ratings.len().to_string().cyan());
    Ok(())
}

/// Config precedence: defaults, then the TOML file, then the environment,
/// then command-line flags.
fn resolve_config(
    args: &ServeArgs,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ServerConfig> {
    let base = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let mut config = base.apply_vars(lookup)?;
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid --bind address {bind:?}"))?;
    }
    if let Some(db) = &args.db {
        config.db_path = db.clone();
    }
    Ok(config)
}

/// Delete any existing datastore at `path` and write the seed document.
async fn init_db(path: &Path) -> anyhow::Result<DocumentStore> {
    if tokio::fs::try_exists(path).await? {
        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("removing {}", path.display()))?;
        info!(path = %path.display(), "removed existing datastore");
    }
    DocumentStore::create(path, seed_document())
        .await
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfly_store::{Document, JsonFileBackend, StoreCell};
    use std::sync::Arc;

    fn serve_args(bind: Option<&str>, db: Option<&str>, config: Option<PathBuf>) -> ServeArgs {
        ServeArgs {
            bind: bind.map(Into::into),
            db: db.map(PathBuf::from),
            config,
        }
    }

    #[test]
    fn flags_beat_env() {
        let args = serve_args(Some("0.0.0.0:9999"), Some("flag.json"), None);
        let config = resolve_config(&args, |key| match key {
            "PORT" => Some("1234".into()),
            "DB_PATH" => Some("env.json".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9999");
        assert_eq!(config.db_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bfly.toml");
        std::fs::write(&file, "bind_addr = \"127.0.0.1:7000\"\ndb_path = \"file.json\"\n").unwrap();
        let args = serve_args(None, None, Some(file));
        let config = resolve_config(&args, |key| (key == "DB_PATH").then(|| "env.json".into())).unwrap();
        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.db_path, PathBuf::from("env.json"));
    }

    #[test]
    fn bad_bind_flag() {
        let args = serve_args(Some("not-an-address"), None, None);
        assert!(resolve_config(&args, |_| None).is_err());
    }

    #[tokio::test]
    async fn init_db_writes_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("butterflies.db.json");
        init_db(&path).await.unwrap();

        let cell = StoreCell::with_backend(Arc::new(JsonFileBackend::new(&path)));
        let store = cell.initialize().await.unwrap();
        assert_eq!(store.snapshot().await, seed_document());
    }

    #[tokio::test]
    async fn init_db_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        let mut stale = Document::new();
        stale.extra.insert("stale".into(), serde_json::Value::Bool(true));
        DocumentStore::create(&path, stale).await.unwrap();

        let store = init_db(&path).await.unwrap();
        let document = store.snapshot().await;
        assert!(document.extra.is_empty());
        assert_eq!(document.record_count(), 21);
    }
}
