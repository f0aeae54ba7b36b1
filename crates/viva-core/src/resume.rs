//! Resume artifact types.

use crate::error::{Result, VivaError};

/// File extensions the service accepts for resumes.
const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// A resume file staged for upload.
///
/// Construction validates the artifact locally so an obviously bad file
/// never produces a network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl ResumeFile {
    /// Creates a resume artifact after local validation.
    ///
    /// # Errors
    ///
    /// Returns [`VivaError::Validation`] if the content is empty or the
    /// file name does not carry an accepted extension (PDF/DOCX,
    /// case-insensitive).
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(VivaError::validation(format!(
                "resume file '{file_name}' is empty"
            )));
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(VivaError::validation(format!(
                "'{file_name}' is not an accepted resume type (expected PDF or DOCX)"
            )));
        }

        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type inferred from the file extension.
    pub fn mime_type(&self) -> &'static str {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
            _ => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_and_docx() {
        assert!(ResumeFile::new("resume.pdf", vec![1, 2, 3]).is_ok());
        assert!(ResumeFile::new("resume.docx", vec![1, 2, 3]).is_ok());
        assert!(ResumeFile::new("RESUME.PDF", vec![1, 2, 3]).is_ok());
    }

    #[test]
    fn rejects_empty_content_without_touching_the_network() {
        let err = ResumeFile::new("resume.pdf", Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_unsupported_extensions() {
        for name in ["resume.txt", "resume", "resume.doc", ".pdf.bak"] {
            let err = ResumeFile::new(name, vec![1]).unwrap_err();
            assert!(err.is_validation(), "{name} should be rejected");
        }
    }

    #[test]
    fn mime_type_follows_the_extension() {
        let pdf = ResumeFile::new("a.pdf", vec![1]).unwrap();
        assert_eq!(pdf.mime_type(), "application/pdf");
        let docx = ResumeFile::new("a.docx", vec![1]).unwrap();
        assert!(docx.mime_type().contains("wordprocessingml"));
    }
}
