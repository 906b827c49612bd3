//! The `proctor serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use proctor_core::fixture::{self, Roster};
use proctor_core::service::SubmissionService;
use proctor_store::{seed_store, MemoryStore, SeedSummary};

use crate::config::load_config;

pub async fn execute(
    fixtures: Option<PathBuf>,
    bind: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let fixtures = fixtures.unwrap_or(config.fixtures);
    let bind = bind.unwrap_or(config.bind);

    let rosters = load_rosters(&fixtures)?;
    anyhow::ensure!(
        !rosters.is_empty(),
        "no roster files found at {}",
        fixtures.display()
    );

    let store = MemoryStore::new();
    let mut summary = SeedSummary::default();
    for roster in &rosters {
        for warning in fixture::validate_roster(roster) {
            tracing::warn!(
                context = warning.context.as_deref().unwrap_or("roster"),
                "{}",
                warning.message
            );
        }
        summary.add(seed_store(&store, roster)?);
    }
    tracing::info!(
        students = summary.students,
        exams = summary.exams,
        questions = summary.questions,
        alternatives = summary.alternatives,
        "store seeded"
    );

    let service = Arc::new(SubmissionService::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, proctor_api::app(service))
        .await
        .context("server error")?;
    Ok(())
}

pub(crate) fn load_rosters(path: &std::path::Path) -> Result<Vec<Roster>> {
    if path.is_dir() {
        fixture::load_roster_directory(path)
    } else {
        Ok(vec![fixture::parse_roster(path)?])
    }
}
