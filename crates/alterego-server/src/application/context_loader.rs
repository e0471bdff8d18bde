//! Context Loader
//!
//! Reads the persona's documents once at startup. Any missing or unreadable
//! document is fatal: the server must not answer with a partial identity.

use alterego::{DomainError, PersonaContext, ProfileDocument};

use crate::adapters::documents::{extract_pages, join_pages, read_text};
use crate::config::PersonaSettings;

pub struct ContextLoader {
    settings: PersonaSettings,
}

impl ContextLoader {
    pub fn new(settings: PersonaSettings) -> Self {
        Self { settings }
    }

    pub fn load(&self) -> Result<PersonaContext, DomainError> {
        let summary = read_text(&self.settings.summary_path())?;
        let mut persona = PersonaContext::new(&self.settings.name, summary);

        for (label, file) in &self.settings.documents {
            let path = self.settings.dir.join(file);
            let pages = extract_pages(&path)?;
            let page_count = pages.len();
            let text = join_pages(pages);

            tracing::info!(
                document = %label,
                path = %path.display(),
                pages = page_count,
                chars = text.len(),
                "Loaded profile document"
            );

            persona = persona.with_document(ProfileDocument::new(label, text));
        }

        Ok(persona)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::documents::tests::write_pdf;
    use std::fs;
    use std::path::Path;

    fn settings(dir: &Path) -> PersonaSettings {
        PersonaSettings {
            name: "Ada Lovelace".to_string(),
            dir: dir.to_path_buf(),
            summary_file: "summary.txt".to_string(),
            documents: vec![
                ("LinkedIn Profile".to_string(), "linkedin.txt".to_string()),
                ("Resume".to_string(), "resume.md".to_string()),
            ],
        }
    }

    #[test]
    fn test_loads_summary_and_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("summary.txt"), "Mathematician.\n").unwrap();
        fs::write(dir.path().join("linkedin.txt"), "Analytical Engine notes").unwrap();
        fs::write(dir.path().join("resume.md"), "# Ada\nFirst programmer").unwrap();

        let persona = ContextLoader::new(settings(dir.path())).load().unwrap();

        assert_eq!(persona.name, "Ada Lovelace");
        assert_eq!(persona.summary, "Mathematician.\n");
        assert_eq!(persona.document_labels(), vec!["LinkedIn Profile", "Resume"]);
        assert_eq!(
            persona.profile_text(),
            "Analytical Engine notes# Ada\nFirst programmer"
        );
    }

    #[test]
    fn test_loads_pdf_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("summary.txt"), "Mathematician.").unwrap();
        write_pdf(&dir.path().join("linkedin.pdf"), &["Experience", "Education"]);
        write_pdf(&dir.path().join("resume.pdf"), &["First programmer"]);

        let persona = ContextLoader::new(PersonaSettings {
            documents: vec![
                ("LinkedIn Profile".to_string(), "linkedin.pdf".to_string()),
                ("Resume".to_string(), "resume.pdf".to_string()),
            ],
            ..settings(dir.path())
        })
        .load()
        .unwrap();

        assert_eq!(persona.document_labels(), vec!["LinkedIn Profile", "Resume"]);
        let linkedin = &persona.documents[0].text;
        assert!(linkedin.find("Experience").unwrap() < linkedin.find("Education").unwrap());
        assert!(persona.documents[1].text.contains("First programmer"));
        assert!(persona.profile_text().ends_with(&persona.documents[1].text));
    }

    #[test]
    fn test_missing_summary_is_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("linkedin.txt"), "profile").unwrap();
        fs::write(dir.path().join("resume.md"), "resume").unwrap();

        let err = ContextLoader::new(settings(dir.path())).load().unwrap_err();
        match err {
            DomainError::ResourceMissing { path } => {
                assert_eq!(path, dir.path().join("summary.txt"))
            }
            other => panic!("Expected ResourceMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_profile_document_is_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("summary.txt"), "summary").unwrap();
        fs::write(dir.path().join("linkedin.txt"), "profile").unwrap();

        let err = ContextLoader::new(settings(dir.path())).load().unwrap_err();
        assert!(matches!(err, DomainError::ResourceMissing { .. }));
        assert!(err.is_fatal());
    }
}
