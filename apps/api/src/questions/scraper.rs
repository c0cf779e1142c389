//! Interview-question scraper: fetches an article page and pairs each `h3`
//! question with the paragraph that follows it.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Maximum number of question/answer pairs returned per page.
pub const MAX_QUESTIONS: usize = 20;
/// Used when a question heading has no following paragraph.
pub const NO_ANSWER: &str = "No answer available.";

const USER_AGENT: &str = "Mozilla/5.0";
const FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),
}

/// Retrieves a page body by URL.
///
/// Carried in `AppState` as `Arc<dyn PageFetcher>`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by `reqwest`.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching interview questions page: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Fetches `url` and parses it into at most `MAX_QUESTIONS` pairs.
pub async fn scrape_questions(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<Vec<QuestionAnswer>, FetchError> {
    let html = fetcher.fetch(url).await?;
    let questions = parse_questions(&html);
    info!("Parsed {} questions from {}", questions.len(), url);
    Ok(questions)
}

/// Extracts question/answer pairs from an article.
///
/// A heading counts as a question when it contains `?` or is longer than
/// 10 characters. Its answer is the first later sibling `<p>`.
pub fn parse_questions(html: &str) -> Vec<QuestionAnswer> {
    let document = Html::parse_document(html);
    let Ok(headings) = Selector::parse("h3") else {
        return Vec::new();
    };

    document
        .select(&headings)
        .filter_map(|heading| {
            let question = element_text(&heading);
            if !is_question(&question) {
                return None;
            }

            let answer = heading
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|sibling| sibling.value().name() == "p")
                .map(|p| element_text(&p))
                .unwrap_or_else(|| NO_ANSWER.to_string());

            Some(QuestionAnswer { question, answer })
        })
        .take(MAX_QUESTIONS)
        .collect()
}

fn is_question(text: &str) -> bool {
    text.contains('?') || text.chars().count() > 10
}

fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<String>())
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
