//! Test doubles and fixtures shared by handler and router tests.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::llm_client::{LlmError, TextGenerator};
use crate::questions::catalog::RoleCatalog;
use crate::questions::scraper::{FetchError, PageFetcher};
use crate::state::AppState;

/// What a `FakeGenerator` answers with.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    Empty,
    Fail,
}

/// Records every prompt it receives and replies with a canned answer.
pub struct FakeGenerator {
    reply: FakeReply,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(reply: &str) -> Arc<Self> {
        Self::new(FakeReply::Text(reply.to_string()))
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            FakeReply::Text(text) => Ok(text.clone()),
            FakeReply::Empty => Err(LlmError::EmptyContent),
            FakeReply::Fail => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

/// Serves one fixed outcome for every URL and records what was requested.
pub struct FakeFetcher {
    outcome: Result<String, u16>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(html: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(html.to_string()),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status),
            requested: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match &self.outcome {
            Ok(html) => Ok(html.clone()),
            Err(status) => Err(FetchError::Status(*status)),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        google_api_key: "test-key".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

pub fn test_state(generator: Arc<dyn TextGenerator>, fetcher: Arc<dyn PageFetcher>) -> AppState {
    AppState {
        generator,
        fetcher,
        roles: Arc::new(RoleCatalog::default()),
        config: test_config(),
    }
}

/// Builds a minimal DOCX package with one paragraph per entry.
pub fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Builds a single-page PDF that draws `text` in Helvetica.
///
/// `text` must not contain unbalanced parentheses or backslashes.
pub fn pdf_fixture(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = pdf.len();
    let mut trailer = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        trailer.push_str(&format!("{offset:010} 00000 n \n"));
    }
    trailer.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(trailer.as_bytes());
    pdf
}
