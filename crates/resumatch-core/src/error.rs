use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumatchError {
    #[error("Failed to parse PDF: {0}")]
    PdfParse(String),

    #[error("Failed to parse DOCX: {0}")]
    DocxParse(String),

    #[error("Failed to build DOCX: {0}")]
    ExportError(String),
}
