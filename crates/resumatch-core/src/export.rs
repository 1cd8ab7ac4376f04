//! DOCX serialization of optimized resume text

use docx_rs::{Docx, Paragraph, Run};

use crate::error::ResumatchError;

/// Heading placed at the top of every exported document
const HEADING: &str = "Optimized Resume";

/// Serialize optimized text into DOCX bytes
///
/// The document starts with a fixed heading, then one paragraph per
/// non-blank line of the input. Blank lines are dropped rather than kept as
/// empty paragraphs. Output is deterministic for identical input text.
pub fn export_docx(text: &str) -> Result<Vec<u8>, ResumatchError> {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(HEADING).size(40).bold()),
    );

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ResumatchError::ExportError(e.to_string()))?;

    Ok(buffer.into_inner())
}
