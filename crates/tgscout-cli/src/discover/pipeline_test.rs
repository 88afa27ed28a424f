use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use tgscout_core::UrlType;
use tgscout_search::{Preview, SearchError, SearchItem};

use super::*;

/// In-memory search keyed by `(query, start)`. `None` pages fail; unknown
/// keys return an empty page.
#[derive(Default)]
struct FakeSearch {
    pages: HashMap<(String, u32), Option<Vec<SearchItem>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeSearch {
    fn page(mut self, query: &str, start: u32, links: &[&str]) -> Self {
        let items = links
            .iter()
            .map(|link| SearchItem {
                link: (*link).to_string(),
                title: format!("title of {link}"),
                snippet: format!("snippet for {query}"),
            })
            .collect();
        self.pages.insert((query.to_string(), start), Some(items));
        self
    }

    fn failing(mut self, query: &str, start: u32) -> Self {
        self.pages.insert((query.to_string(), start), None);
        self
    }
}

#[async_trait]
impl SearchSource for FakeSearch {
    async fn search(&self, query: &str, start: u32) -> Result<SearchPage, SearchError> {
        self.calls.lock().expect("lock").push((query.to_string(), start));
        match self.pages.get(&(query.to_string(), start)) {
            Some(Some(items)) => Ok(SearchPage {
                items: items.clone(),
            }),
            Some(None) => Err(SearchError::UnexpectedStatus {
                status: 500,
                url: format!("fake://search?q={query}&start={start}"),
            }),
            None => Ok(SearchPage::default()),
        }
    }
}

#[derive(Default)]
struct FakePreview {
    previews: HashMap<String, Preview>,
    calls: Mutex<Vec<String>>,
}

impl FakePreview {
    fn with(mut self, handle: &str, title: &str, description: &str) -> Self {
        self.previews.insert(
            handle.to_string(),
            Preview {
                title: title.to_string(),
                description: description.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl PreviewSource for FakePreview {
    async fn fetch(&self, handle: &str) -> Option<Preview> {
        self.calls.lock().expect("lock").push(handle.to_string());
        self.previews.get(handle).cloned()
    }
}

fn options(queries: &[&str], max_pages: u32, min_score: u32) -> DiscoveryOptions {
    DiscoveryOptions {
        queries: queries.iter().map(ToString::to_string).collect(),
        max_pages,
        min_score,
        page_delay: Duration::ZERO,
    }
}

fn hit(query: &str, url: &str) -> SearchHit {
    SearchHit {
        query: query.to_string(),
        url: url.to_string(),
        google_title: format!("title {query}"),
        google_snippet: format!("snippet {query}"),
    }
}

#[tokio::test]
async fn requests_pages_at_ten_result_offsets() {
    let search = FakeSearch::default();
    let queries = vec!["a".to_string(), "b".to_string()];

    collect_hits(&search, &queries, 3, Duration::ZERO).await;

    assert_eq!(
        search.calls.into_inner().expect("lock"),
        vec![
            ("a".to_string(), 1),
            ("a".to_string(), 11),
            ("a".to_string(), 21),
            ("b".to_string(), 1),
            ("b".to_string(), 11),
            ("b".to_string(), 21),
        ]
    );
}

#[tokio::test]
async fn keeps_only_tme_links() {
    let search = FakeSearch::default().page(
        "kitap",
        1,
        &[
            "https://t.me/kitapdeposu",
            "https://example.com/kitap",
            "https://www.t.me/s/romanlar",
        ],
    );

    let hits = collect_hits(&search, &["kitap".to_string()], 1, Duration::ZERO).await;

    let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls, vec!["https://t.me/kitapdeposu", "https://www.t.me/s/romanlar"]);
    assert_eq!(hits[0].query, "kitap");
    assert_eq!(hits[0].google_title, "title of https://t.me/kitapdeposu");
}

#[tokio::test]
async fn failed_page_is_skipped_and_later_pages_still_run() {
    let search = FakeSearch::default()
        .failing("kitap", 1)
        .page("kitap", 11, &["https://t.me/ikincisayfa"]);

    let hits = collect_hits(&search, &["kitap".to_string()], 2, Duration::ZERO).await;

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://t.me/ikincisayfa");
    assert_eq!(search.calls.lock().expect("lock").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn pauses_after_every_page_including_failed_ones() {
    let search = FakeSearch::default()
        .failing("kitap", 1)
        .page("kitap", 11, &["https://t.me/ikincisayfa"]);
    let delay = Duration::from_millis(200);

    let started = tokio::time::Instant::now();
    collect_hits(&search, &["kitap".to_string()], 3, delay).await;
    let elapsed = started.elapsed();

    assert_eq!(search.calls.lock().expect("lock").len(), 3);
    assert!(elapsed >= delay * 3, "elapsed {elapsed:?} < 3 x {delay:?}");
}

#[tokio::test(start_paused = true)]
async fn single_failed_page_still_pauses() {
    let search = FakeSearch::default().failing("kitap", 1);
    let delay = Duration::from_secs(1);

    let started = tokio::time::Instant::now();
    let hits = collect_hits(&search, &["kitap".to_string()], 1, delay).await;

    assert!(hits.is_empty());
    assert!(started.elapsed() >= delay);
}

#[test]
fn page_offsets_start_at_one_in_steps_of_ten() {
    assert_eq!(page_start(0), Some(1));
    assert_eq!(page_start(1), Some(11));
    assert_eq!(page_start(2), Some(21));
}

#[test]
fn page_offset_overflow_is_none() {
    assert_eq!(page_start(429_496_729), Some(4_294_967_291));
    assert_eq!(page_start(429_496_730), None);
    assert_eq!(page_start(u32::MAX), None);
}

#[test]
fn dedupe_keeps_first_hit_per_handle() {
    let hits = vec![
        hit("first", "https://t.me/kitapdeposu/15"),
        hit("second", "https://t.me/romanlar"),
        hit("third", "https://t.me/kitapdeposu"),
        hit("fourth", "https://t.me/s/romanlar"),
    ];

    let unique = dedupe_hits(hits);

    let summary: Vec<(&str, &str)> = unique
        .iter()
        .map(|(handle, h)| (handle.as_str(), h.query.as_str()))
        .collect();
    assert_eq!(summary, vec![("kitapdeposu", "first"), ("romanlar", "second")]);
    assert_eq!(unique[0].1.google_snippet, "snippet first");
}

#[test]
fn dedupe_drops_links_without_a_handle() {
    let hits = vec![
        hit("q", "https://t.me/+AbCd1234"),
        hit("q", "https://t.me/joinchat/AbCd"),
        hit("q", "https://t.me/c/12345/7"),
        hit("q", "not a url t.me/"),
        hit("q", "https://t.me/gercekkanal"),
    ];

    let unique = dedupe_hits(hits);

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].0, "gercekkanal");
}

#[tokio::test]
async fn builds_candidates_in_first_seen_order() {
    let search = FakeSearch::default()
        .page("kpss kitap", 1, &["https://t.me/kpssarsivi/120", "https://t.me/romankulubu"])
        .page("roman pdf", 1, &["https://t.me/romankulubu", "https://t.me/s/edebiyatdunyasi"]);
    let preview = FakePreview::default()
        .with("kpssarsivi", "KPSS Arşivi", "Çıkmış sorular ve deneme pdf")
        .with("romankulubu", "Roman Kulübü", "Her gün bir roman")
        .with("edebiyatdunyasi", "Edebiyat Dünyası", "Öykü ve şiir");
    let scorer = Scorer::default();

    let candidates = run_discovery(
        &search,
        &preview,
        &scorer,
        &options(&["kpss kitap", "roman pdf"], 1, 0),
    )
    .await;

    let handles: Vec<&str> = candidates.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["kpssarsivi", "romankulubu", "edebiyatdunyasi"]);

    let first = &candidates[0];
    assert_eq!(first.url, "https://t.me/kpssarsivi");
    assert_eq!(first.url_type, UrlType::Message);
    assert_eq!(first.title, "KPSS Arşivi");
    assert_eq!(first.google_query, "kpss kitap");
    assert_eq!(
        first.score,
        scorer.total_score("kpssarsivi", "KPSS Arşivi", "Çıkmış sorular ve deneme pdf")
    );
    assert!(first.score > 0);

    assert_eq!(candidates[1].google_query, "kpss kitap", "first hit wins");
    assert_eq!(candidates[1].url_type, UrlType::ChannelOrUser);
    assert_eq!(candidates[2].url_type, UrlType::ChannelOrUser);
    assert_eq!(candidates[2].url, "https://t.me/edebiyatdunyasi");
}

#[tokio::test]
async fn all_candidates_share_one_timestamp() {
    let search = FakeSearch::default().page(
        "q",
        1,
        &["https://t.me/bir", "https://t.me/iki", "https://t.me/uc"],
    );
    let preview = FakePreview::default();

    let candidates =
        run_discovery(&search, &preview, &Scorer::default(), &options(&["q"], 1, 0)).await;

    assert_eq!(candidates.len(), 3);
    assert!(candidates
        .iter()
        .all(|c| c.discovered_at == candidates[0].discovered_at));
    assert!(candidates[0].discovered_at.ends_with("+00:00"));
}

#[tokio::test]
async fn missing_preview_scores_zero_and_is_dropped_by_threshold() {
    let search = FakeSearch::default().page(
        "q",
        1,
        &["https://t.me/kitapdeposu", "https://t.me/gizlikanal"],
    );
    let preview = FakePreview::default().with(
        "kitapdeposu",
        "Kitap Deposu",
        "Ücretsiz e-kitap arşivi",
    );

    let kept = run_discovery(&search, &preview, &Scorer::default(), &options(&["q"], 1, 0)).await;
    let missing = kept
        .iter()
        .find(|c| c.handle == "gizlikanal")
        .expect("zero-score candidate kept at threshold 0");
    assert_eq!(missing.score, 0);
    assert_eq!(missing.title, "");
    assert_eq!(missing.description, "");

    let filtered =
        run_discovery(&search, &preview, &Scorer::default(), &options(&["q"], 1, 1)).await;
    let handles: Vec<&str> = filtered.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["kitapdeposu"]);
}

#[tokio::test]
async fn non_turkish_preview_is_dropped_above_zero_threshold() {
    let search = FakeSearch::default().page("q", 1, &["https://t.me/bookclub"]);
    let preview =
        FakePreview::default().with("bookclub", "Book Club", "Daily novels and stories in English");

    let candidates =
        run_discovery(&search, &preview, &Scorer::default(), &options(&["q"], 1, 1)).await;

    assert!(candidates.is_empty());
    assert_eq!(preview.calls.into_inner().expect("lock"), vec!["bookclub".to_string()]);
}

#[tokio::test]
async fn no_queries_means_no_requests() {
    let search = FakeSearch::default();
    let preview = FakePreview::default();

    let candidates =
        run_discovery(&search, &preview, &Scorer::default(), &options(&[], 3, 0)).await;

    assert!(candidates.is_empty());
    assert!(search.calls.lock().expect("lock").is_empty());
}
