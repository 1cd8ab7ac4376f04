//! Suggestion-block generation for a scored resume

use crate::compare::Analysis;

/// At most this many missing keywords are surfaced in the suggestion block
const MAX_SUGGESTED_KEYWORDS: usize = 10;

/// Append optimization suggestions to the resume text
///
/// When the analysis found missing keywords, a fixed-format block listing up
/// to the first ten of them and the score (one decimal place) is appended.
/// When nothing is missing the text is returned unchanged, so re-applying
/// with the same clean analysis is a no-op.
pub fn optimize(resume_text: &str, analysis: &Analysis) -> String {
    if analysis.missing_keywords.is_empty() {
        return resume_text.to_string();
    }

    let keywords = analysis
        .missing_keywords
        .iter()
        .take(MAX_SUGGESTED_KEYWORDS)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\n--- OPTIMIZATION SUGGESTIONS ---\n\
         Consider adding these keywords: {}\n\
         Your resume matches {:.1}% of job requirements.\n",
        resume_text, keywords, analysis.score
    )
}
