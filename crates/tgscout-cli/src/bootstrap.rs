//! `bootstrap-keywords` command handler.
//!
//! Reads a candidates CSV from an earlier `discover` run and suggests
//! frequent tokens as new keywords. Needs no credentials.

use std::fmt::Write as _;
use std::path::Path;

use tgscout_scoring::bootstrap_keywords;

use crate::storage;

/// Mines `input` for the `top_n` most frequent tokens and prints them, or
/// writes them to `output` when given.
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `output` cannot be written.
pub(crate) fn run_bootstrap_keywords(
    input: &Path,
    top_n: usize,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let channels = storage::read_channel_texts(input)?;
    tracing::info!(path = %input.display(), channels = channels.len(), "loaded channel texts");

    let suggestions = bootstrap_keywords(&channels, top_n);
    let rendered = render_suggestions(&suggestions);

    match output {
        Some(path) => {
            storage::ensure_parent_dir(path)?;
            std::fs::write(path, rendered)?;
            tracing::info!(
                path = %path.display(),
                suggestions = suggestions.len(),
                "keyword suggestions written"
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// One `token<TAB>count` line per suggestion.
fn render_suggestions(suggestions: &[(String, usize)]) -> String {
    let mut out = String::new();
    for (token, count) in suggestions {
        let _ = writeln!(out, "{token}\t{count}");
    }
    out
}
