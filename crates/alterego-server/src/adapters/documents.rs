//! Document Text Extraction
//!
//! Turns profile documents into plain text, page by page.

use std::fs;
use std::path::Path;

use alterego::DomainError;

/// Extract the text of each page, in page order.
///
/// PDFs are parsed with lopdf. `.txt` and `.md` files are a single page.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, DomainError> {
    if !path.is_file() {
        return Err(DomainError::resource_missing(path));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => extract_pdf_pages(path),
        Some("txt") | Some("md") => {
            let text = read_text(path)?;
            Ok(vec![text])
        }
        _ => Err(DomainError::invalid_document(
            path,
            "unsupported document type (expected .pdf, .txt or .md)",
        )),
    }
}

/// Read a UTF-8 text file whole
pub fn read_text(path: &Path) -> Result<String, DomainError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DomainError::resource_missing(path),
        _ => DomainError::invalid_document(path, e),
    })
}

/// Concatenate page texts, dropping pages with no text
pub fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect()
}

fn extract_pdf_pages(path: &Path) -> Result<Vec<String>, DomainError> {
    let document =
        lopdf::Document::load(path).map_err(|e| DomainError::invalid_document(path, e))?;

    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    page = page_number,
                    error = %e,
                    "Skipping page without extractable text"
                );
            }
        }
    }

    Ok(pages)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use std::io::Write;

    /// Write a PDF with one page per entry; an empty entry makes a page with no text
    pub(crate) fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_pages(&dir.path().join("resume.pdf")).unwrap_err();
        assert!(matches!(err, DomainError::ResourceMissing { .. }));
    }

    #[test]
    fn test_text_file_is_one_page() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Rust engineer\nLisbon").unwrap();

        let pages = extract_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["Rust engineer\nLisbon".to_string()]);
    }

    #[test]
    fn test_garbage_pdf_is_invalid() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write!(file, "not a pdf at all").unwrap();

        let err = extract_pages(file.path()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDocument { .. }));
    }

    #[test]
    fn test_pdf_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&path, &["Page one text", "Page two text"]);

        let pages = extract_pages(&path).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Page one text"));
        assert!(pages[1].contains("Page two text"));

        let joined = join_pages(pages.clone());
        assert_eq!(joined, format!("{}{}", pages[0], pages[1]));
    }

    #[test]
    fn test_pdf_blank_page_is_dropped_when_joined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkedin.pdf");
        write_pdf(&path, &["Experience", "", "Education"]);

        let joined = join_pages(extract_pages(&path).unwrap());

        let experience = joined.find("Experience").unwrap();
        let education = joined.find("Education").unwrap();
        assert!(experience < education);
        assert!(joined[experience + "Experience".len()..education].trim().is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let err = extract_pages(file.path()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDocument { .. }));
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let joined = join_pages(vec![
            "Page one. ".to_string(),
            "   ".to_string(),
            "Page three.".to_string(),
        ]);
        assert_eq!(joined, "Page one. Page three.");
    }
}
