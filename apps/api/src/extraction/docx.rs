//! DOCX text extraction: reads `word/document.xml` out of the ZIP container
//! and emits one line per paragraph.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use roxmltree::{Document, Node};

use super::ExtractionError;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";
/// Upper bound on the decompressed size of `word/document.xml`.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

pub fn extract(path: &Path) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(File::open(path)?)?;
    let xml = read_capped(archive.by_name(DOCUMENT_PART)?, MAX_DOCUMENT_XML_BYTES)?;

    paragraphs_text(&xml)
}

/// Reads `reader` to a string, failing once more than `limit` bytes arrive.
fn read_capped(reader: impl Read, limit: u64) -> Result<String, ExtractionError> {
    let mut xml = String::new();
    reader.take(limit + 1).read_to_string(&mut xml)?;
    if xml.len() as u64 > limit {
        return Err(ExtractionError::TooLarge { limit });
    }
    Ok(xml)
}

/// Concatenates every paragraph's text, each followed by `\n`.
///
/// Paragraphs nested inside others (text boxes) are emitted on their own and
/// are not folded into the enclosing paragraph.
pub fn paragraphs_text(xml: &str) -> Result<String, ExtractionError> {
    let doc = Document::parse(xml)?;
    let mut text = String::new();

    for paragraph in doc.descendants().filter(|n| is_w(n, "p")) {
        for node in paragraph.descendants().filter(|n| owning_paragraph(n) == Some(paragraph)) {
            if is_w(&node, "t") {
                text.push_str(node.text().unwrap_or_default());
            } else if is_w(&node, "tab") {
                text.push('\t');
            } else if is_w(&node, "br") || is_w(&node, "cr") {
                text.push('\n');
            }
        }
        text.push('\n');
    }

    Ok(text)
}

fn is_w(node: &Node, name: &str) -> bool {
    node.is_element() && node.has_tag_name((WORDPROCESSING_NS, name))
}

/// The innermost `w:p` strictly above `node`.
fn owning_paragraph<'a, 'input>(node: &Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.ancestors().skip(1).find(|n| is_w(n, "p"))
}
