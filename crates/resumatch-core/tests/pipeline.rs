//! End-to-end pipeline tests: document bytes in, analysis and DOCX bytes out

use docx_rs::{Docx, Paragraph, Run};
use lopdf::{Dictionary, Object};
use pretty_assertions::assert_eq;
use resumatch_core::{compare, export_docx, extract_text, optimize, tokenize, FileType};

/// Build a one-page PDF containing the given text, with a standard
/// Helvetica font so the text is extractable
fn create_test_pdf(text: &str) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(Object::Dictionary(font_dict));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    let resources_id = doc.add_object(Object::Dictionary(resources));

    let content = format!("BT /F1 12 Tf 50 700 Td ({}) Tj ET", text);
    let content_id = doc.add_object(Object::Stream(lopdf::Stream::new(
        Dictionary::new(),
        content.into_bytes(),
    )));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Reference(resources_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ]),
    );
    let page_id = doc.add_object(Object::Dictionary(page_dict));

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(1));
    pages_dict.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog_dict.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog_dict));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn create_test_docx(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for para in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*para)));
    }
    let mut buffer = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

#[test]
fn test_docx_resume_through_full_pipeline() {
    let resume_bytes = create_test_docx(&["Python developer", "Flask experience"]);

    let resume_text = extract_text(&resume_bytes, FileType::Docx).unwrap();
    let analysis = compare(&resume_text, "Python Flask SQL developer");
    assert_eq!(analysis.score, 75.0);
    assert_eq!(analysis.missing_keywords, vec!["sql".to_string()]);

    let optimized = optimize(&resume_text, &analysis);
    assert!(optimized.starts_with(&resume_text));
    assert!(optimized.contains("Consider adding these keywords: sql"));
    assert!(optimized.contains("75.0%"));

    let output = export_docx(&optimized).unwrap();
    let output_text = extract_text(&output, FileType::Docx).unwrap();
    let paragraphs: Vec<&str> = output_text.lines().collect();
    assert_eq!(paragraphs[0], "Optimized Resume");
    assert_eq!(paragraphs[1], "Python developer");
    assert_eq!(paragraphs[2], "Flask experience");
    assert_eq!(paragraphs[3], "--- OPTIMIZATION SUGGESTIONS ---");
}

#[test]
fn test_pdf_resume_text_is_extractable() {
    let resume_bytes = create_test_pdf("Rust developer with tokio experience");

    let text = extract_text(&resume_bytes, FileType::Pdf).unwrap();
    let words = tokenize(&text);
    assert!(words.contains("rust"));
    assert!(words.contains("tokio"));

    let analysis = compare(&text, "rust tokio");
    assert_eq!(analysis.score, 100.0);
    assert!(analysis.missing_keywords.is_empty());
}

#[test]
fn test_empty_job_description_leaves_resume_unchanged() {
    let resume_bytes = create_test_docx(&["Just a resume"]);
    let resume_text = extract_text(&resume_bytes, FileType::Docx).unwrap();

    let analysis = compare(&resume_text, "");
    assert_eq!(analysis.score, 0.0);
    assert!(analysis.missing_keywords.is_empty());

    let optimized = optimize(&resume_text, &analysis);
    assert_eq!(optimized, resume_text);
}
