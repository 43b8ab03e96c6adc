//! Document loading — turns an uploaded byte blob into plain text.
//!
//! Formats are declared by filename extension, never sniffed. PDF pages are
//! concatenated in page order; DOCX paragraphs are joined with a newline in
//! document order. A structurally invalid container is an error, not empty
//! text: swallowing it would produce a legitimate-looking zero-skill report.

use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Upload formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

/// Maps a filename to a known format by extension, case-insensitive.
/// Unknown or missing extensions yield `None`; the caller decides whether
/// that degrades to empty text or is rejected (strict mode).
pub fn detect_format(filename: &str) -> Option<DocumentFormat> {
    let ext = Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(DocumentFormat::Pdf),
        "docx" => Some(DocumentFormat::Docx),
        _ => None,
    }
}

/// Extracts the plain-text content of an uploaded document.
pub fn load_text(bytes: &[u8], format: DocumentFormat) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::DocumentParse(format!("PDF extraction failed: {e}"))),
        DocumentFormat::Docx => docx_text(bytes),
    }
}

fn docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::DocumentParse(format!("DOCX extraction failed: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
