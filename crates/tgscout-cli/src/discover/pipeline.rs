//! Query → hits → unique handles → previews → scores.
//!
//! Network collaborators are injected through [`SearchSource`] and
//! [`PreviewSource`]. Every call is awaited in turn; a failed page or a
//! missing preview is logged and the run carries on.

use std::collections::HashSet;
use std::time::Duration;

use tgscout_core::{
    canonical_url, classify_tme_url, extract_handle, now_iso, Candidate, SearchHit,
};
use tgscout_scoring::Scorer;
use tgscout_search::{PreviewSource, SearchPage, SearchSource, RESULTS_PER_PAGE};

/// Substring a result link must contain to be considered at all.
const TME_MARKER: &str = "t.me/";

/// Per-run knobs for [`run_discovery`].
#[derive(Debug, Clone)]
pub(crate) struct DiscoveryOptions {
    pub queries: Vec<String>,
    pub max_pages: u32,
    pub min_score: u32,
    /// Pause after every page request, successful or not.
    pub page_delay: Duration,
}

/// Runs every query through `search` and returns the `t.me` hits in result
/// order.
///
/// Page `n` (0-based) is requested at offset `1 + n * 10`. A failed page is
/// logged and skipped without retry.
pub(crate) async fn collect_hits<S: SearchSource>(
    search: &S,
    queries: &[String],
    max_pages: u32,
    page_delay: Duration,
) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for query in queries {
        for page in 0..max_pages {
            let Some(start) = page_start(page) else {
                tracing::warn!(
                    query = %query,
                    page,
                    "result offset out of range — stopping query"
                );
                break;
            };
            tracing::info!(query = %query, start, "searching");

            match search.search(query, start).await {
                Ok(results) => {
                    let before = hits.len();
                    hits.extend(tme_hits(query, results));
                    tracing::debug!(
                        query = %query,
                        start,
                        hits = hits.len() - before,
                        "page done"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        query = %query,
                        start,
                        error = %e,
                        "search page failed — skipping"
                    );
                }
            }

            tokio::time::sleep(page_delay).await;
        }
    }

    hits
}

/// 1-based result offset of 0-based `page`, or `None` if it does not fit in `u32`.
fn page_start(page: u32) -> Option<u32> {
    page.checked_mul(RESULTS_PER_PAGE)?.checked_add(1)
}

fn tme_hits(query: &str, page: SearchPage) -> impl Iterator<Item = SearchHit> + '_ {
    page.items
        .into_iter()
        .filter(|item| item.link.contains(TME_MARKER))
        .map(move |item| SearchHit {
            query: query.to_string(),
            url: item.link,
            google_title: item.title,
            google_snippet: item.snippet,
        })
}

/// Reduces hits to one per handle, in first-seen order.
///
/// The first hit for a handle wins outright; later hits for the same handle
/// are discarded. Hits with no extractable handle are dropped.
pub(crate) fn dedupe_hits(hits: Vec<SearchHit>) -> Vec<(String, SearchHit)> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for hit in hits {
        let Some(handle) = extract_handle(&hit.url) else {
            tracing::debug!(url = %hit.url, "no channel handle in link");
            continue;
        };
        if seen.insert(handle.clone()) {
            unique.push((handle, hit));
        }
    }

    unique
}

/// Runs the full discovery pipeline and returns the surviving candidates in
/// first-seen order.
///
/// All candidates from one run share a single `discovered_at`. The
/// `url_type` is classified from the link the search returned, not the
/// canonical URL.
pub(crate) async fn run_discovery<S, P>(
    search: &S,
    preview: &P,
    scorer: &Scorer,
    opts: &DiscoveryOptions,
) -> Vec<Candidate>
where
    S: SearchSource,
    P: PreviewSource,
{
    let hits = collect_hits(search, &opts.queries, opts.max_pages, opts.page_delay).await;
    let unique = dedupe_hits(hits);
    tracing::info!(handles = unique.len(), "unique handles found");

    let discovered_at = now_iso();
    let mut candidates = Vec::with_capacity(unique.len());

    for (handle, hit) in unique {
        let (title, description) = match preview.fetch(&handle).await {
            Some(p) => (p.title, p.description),
            None => (String::new(), String::new()),
        };

        let score = scorer.total_score(&handle, &title, &description);
        if score < opts.min_score {
            tracing::debug!(
                handle = %handle,
                score,
                min_score = opts.min_score,
                "below threshold"
            );
            continue;
        }

        let url_type = classify_tme_url(&hit.url);
        tracing::debug!(handle = %handle, score, url_type = %url_type, "candidate kept");

        candidates.push(Candidate {
            url: canonical_url(&handle),
            url_type,
            handle,
            title,
            description,
            google_query: hit.query,
            google_title: hit.google_title,
            google_snippet: hit.google_snippet,
            score,
            discovered_at: discovered_at.clone(),
        });
    }

    tracing::info!(kept = candidates.len(), "discovery complete");
    candidates
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
