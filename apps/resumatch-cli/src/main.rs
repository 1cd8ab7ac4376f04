//! Resumatch CLI
//!
//! Scores a resume (PDF or DOCX) against a job description and optionally
//! writes an optimized DOCX with the missing keywords appended. The heavy
//! lifting lives in resumatch-core; this binary only handles file I/O.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resumatch_core::{compare, export_docx, extract_text, optimize, FileType};

/// Command-line arguments for resumatch
#[derive(Parser, Debug)]
#[command(name = "resumatch")]
#[command(about = "Score a resume against a job description")]
struct Args {
    /// Path to the resume file (.pdf or .docx)
    resume: PathBuf,

    /// Job description text
    #[arg(long, conflicts_with = "job_file")]
    job: Option<String>,

    /// Path to a file containing the job description
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Write the optimized resume as DOCX to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the analysis as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();

    let extension = args
        .resume
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let Some(file_type) = FileType::from_extension(extension) else {
        bail!("Unsupported resume format '{}' (expected .pdf or .docx)", extension);
    };

    let bytes = std::fs::read(&args.resume)
        .with_context(|| format!("Failed to read {}", args.resume.display()))?;

    let job_description = match (&args.job, &args.job_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };

    let resume_text = extract_text(&bytes, file_type)
        .with_context(|| format!("Failed to extract text from {}", args.resume.display()))?;
    info!(chars = resume_text.len(), "extracted resume text");

    let analysis = compare(&resume_text, &job_description);
    let optimized = optimize(&resume_text, &analysis);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("ATS score: {:.1}%", analysis.score);
        if analysis.missing_keywords.is_empty() {
            println!("No missing keywords.");
        } else {
            println!("Missing keywords: {}", analysis.missing_keywords.join(", "));
        }
    }

    if let Some(output) = &args.output {
        let docx_bytes = export_docx(&optimized).context("Failed to build optimized DOCX")?;
        std::fs::write(output, docx_bytes)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!(path = %output.display(), "wrote optimized resume");
    }

    Ok(())
}
