//! Keyword comparison between resume text and a job description
//!
//! Tokenizes both texts into lowercase word sets and scores the resume by
//! the fraction of job-description tokens it covers. Exact token equality
//! only; no stemming or fuzzy credit.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// Result of comparing a resume against a job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Percentage of unique job-description tokens found in the resume, 0-100
    pub score: f64,
    /// Job-description tokens absent from the resume, sorted lexicographically
    pub missing_keywords: Vec<String>,
}

/// Tokenize text into a deduplicated set of lowercase words
///
/// A word is a maximal run of alphanumeric/underscore characters. Order and
/// frequency are discarded; BTreeSet keeps downstream output deterministic.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Compare resume text with a job description
///
/// Score is 100 x |job ∩ resume| / |job|, or 0.0 when the job description
/// has no tokens. Missing keywords are the job tokens the resume lacks.
pub fn compare(resume_text: &str, job_description: &str) -> Analysis {
    let resume_words = tokenize(resume_text);
    let job_words = tokenize(job_description);

    let missing_keywords: Vec<String> = job_words.difference(&resume_words).cloned().collect();

    let score = if job_words.is_empty() {
        0.0
    } else {
        let matched = job_words.intersection(&resume_words).count();
        (matched as f64 / job_words.len() as f64) * 100.0
    };

    tracing::debug!(
        score,
        missing = missing_keywords.len(),
        job_tokens = job_words.len(),
        "compared resume against job description"
    );

    Analysis {
        score,
        missing_keywords,
    }
}
