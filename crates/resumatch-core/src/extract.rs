//! Plain-text extraction from uploaded resume documents
//!
//! Supports the two formats resumes arrive in: PDF (via pdf-extract) and
//! DOCX (via docx-rs). Extraction is best-effort at the page/paragraph
//! level: pages with no extractable text contribute nothing, but a file
//! that cannot be parsed as its declared type is a hard error.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use serde::{Deserialize, Serialize};

use crate::error::ResumatchError;

/// Supported resume document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Detect the file type from a filename extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            _ => None,
        }
    }
}

/// Extract plain text from document bytes of the given type
///
/// PDF: concatenated text of each page in order; pages with no extractable
/// text (e.g. scanned images) yield the empty string. DOCX: paragraph texts
/// in document order, each followed by a newline.
pub fn extract_text(bytes: &[u8], file_type: FileType) -> Result<String, ResumatchError> {
    match file_type {
        FileType::Pdf => extract_pdf(bytes),
        FileType::Docx => extract_docx(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ResumatchError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ResumatchError::PdfParse(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ResumatchError> {
    let docx = read_docx(bytes).map_err(|e| ResumatchError::DocxParse(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}
