use std::path::PathBuf;

/// Desktop browser User-Agent sent with Telegram preview requests.
///
/// `t.me` serves a reduced page to unknown clients, so a realistic UA is used
/// unless overridden via `TGSCOUT_PREVIEW_USER_AGENT`.
pub const DEFAULT_PREVIEW_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Search queries used when neither the CLI nor `TGSCOUT_DEFAULT_QUERIES`
/// provides any.
pub const DEFAULT_QUERIES: &[&str] = &[
    // General Turkish book archives
    "telegram türkçe kitap pdf",
    "telegram türkçe pdf kitap arşivi",
    "telegram türkçe kitap arşivi",
    "telegram ekitap arşivi",
    "telegram e kitap pdf",
    "telegram roman pdf arşiv",
    "telegram felsefe kitap pdf",
    "telegram edebiyat kitap pdf",
    // Exam preparation (KPSS / YKS / ...)
    "telegram kpss kitap pdf",
    "telegram kpss pdf kitap arşivi",
    "telegram yks kitap pdf",
    "telegram tyt kitap pdf",
    "telegram ayt kitap pdf",
    "telegram dgs kitap pdf",
    "telegram ales kitap pdf",
    "telegram yds pdf kitap",
    // Lecture notes and past exam questions
    "telegram ders notu pdf",
    "telegram çıkmış soru pdf",
    "telegram çıkmış sorular kitap pdf",
    // Audiobooks
    "telegram sesli kitap pdf",
];

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub google_cse_cx: String,
    pub default_queries: Vec<String>,
    pub max_pages_per_query: u32,
    pub request_timeout_secs: u64,
    pub preview_user_agent: String,
    pub page_delay_ms: u64,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("google_cse_cx", &"[redacted]")
            .field("default_queries", &self.default_queries.len())
            .field("max_pages_per_query", &self.max_pages_per_query)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("preview_user_agent", &self.preview_user_agent)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
