//! `discover` command handler.
//!
//! Called from `main` once configuration has loaded, so missing credentials
//! fail before any request is made. Per-page and per-preview failures are
//! logged inside the pipeline and never abort the run.

mod pipeline;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tgscout_core::AppConfig;
use tgscout_scoring::Scorer;
use tgscout_search::{CseClient, PreviewClient};

use crate::storage;
use pipeline::DiscoveryOptions;

/// Runs discovery end to end and returns the path the candidates were
/// written to.
///
/// `queries` and `max_pages` fall back to the configured values when empty
/// or `None`.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or the output file
/// cannot be written.
pub(crate) async fn run_discover(
    config: &AppConfig,
    max_pages: Option<u32>,
    output: Option<PathBuf>,
    min_score: u32,
    queries: Vec<String>,
) -> anyhow::Result<PathBuf> {
    let opts = discovery_options(config, max_pages, min_score, queries);
    let output = output.unwrap_or_else(|| {
        default_output_path(&config.output_dir, &tgscout_core::now_filename())
    });

    let search = CseClient::new(
        &config.google_api_key,
        &config.google_cse_cx,
        config.request_timeout_secs,
    )?;
    let preview = PreviewClient::new(&config.preview_user_agent, config.request_timeout_secs)?;
    let scorer = Scorer::default();

    tracing::info!(
        queries = opts.queries.len(),
        max_pages = opts.max_pages,
        min_score = opts.min_score,
        "starting discovery"
    );
    let candidates = pipeline::run_discovery(&search, &preview, &scorer, &opts).await;

    storage::write_candidates(&output, &candidates)?;
    tracing::info!(
        path = %output.display(),
        candidates = candidates.len(),
        "candidates written"
    );

    Ok(output)
}

/// Merges command-line overrides with configured defaults.
fn discovery_options(
    config: &AppConfig,
    max_pages: Option<u32>,
    min_score: u32,
    queries: Vec<String>,
) -> DiscoveryOptions {
    let queries = if queries.is_empty() {
        config.default_queries.clone()
    } else {
        queries
    };

    DiscoveryOptions {
        queries,
        max_pages: max_pages.unwrap_or(config.max_pages_per_query),
        min_score,
        page_delay: Duration::from_millis(config.page_delay_ms),
    }
}

fn default_output_path(output_dir: &Path, stamp: &str) -> PathBuf {
    output_dir.join(format!("candidates_{stamp}.csv"))
}
