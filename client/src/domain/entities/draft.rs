//! Draft domain entity
//!
//! The user's not-yet-submitted text and/or selected image file.

use std::path::Path;

use super::share::ImageFormat;
use crate::error::DraftError;

/// An image file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl DraftFile {
    /// Build a draft file from raw bytes; only images are accepted
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, DraftError> {
        if bytes.is_empty() {
            return Err(DraftError::Empty(path.to_path_buf()));
        }
        let format =
            ImageFormat::sniff(&bytes).ok_or_else(|| DraftError::NotAnImage(path.to_path_buf()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("upload.{}", format.extension()));

        Ok(Self {
            name,
            mime: format.mime(),
            bytes,
        })
    }

    pub async fn load(path: &Path) -> Result<Self, DraftError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| DraftError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }
}

/// What a submission sends to `POST /share`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewShare {
    /// Sent as the multipart `file` field
    File(DraftFile),
    /// Sent as the multipart `content` field
    Text(String),
}

/// Draft lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    TextPending,
    /// A file is selected; any typed text is ignored on submit
    FilePending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    file: Option<DraftFile>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&DraftFile> {
        self.file.as_ref()
    }

    pub fn state(&self) -> DraftState {
        if self.file.is_some() {
            DraftState::FilePending
        } else if !self.text.is_empty() {
            DraftState::TextPending
        } else {
            DraftState::Empty
        }
    }

    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn insert_line_break(&mut self) {
        self.text.push('\n');
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn select_file(&mut self, file: DraftFile) {
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.file = None;
    }

    /// The request this draft would produce. A selected file wins over text.
    pub fn submission(&self) -> Option<NewShare> {
        if let Some(file) = &self.file {
            Some(NewShare::File(file.clone()))
        } else if !self.text.is_empty() {
            Some(NewShare::Text(self.text.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PNG: [u8; 9] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

    fn png_file() -> DraftFile {
        DraftFile::from_bytes(Path::new("/tmp/cat.png"), PNG.to_vec()).unwrap()
    }

    #[test]
    fn empty_draft_has_no_submission() {
        let draft = Draft::new();
        assert_eq!(draft.state(), DraftState::Empty);
        assert_eq!(draft.submission(), None);
    }

    #[test]
    fn typing_moves_to_text_pending() {
        let mut draft = Draft::new();
        draft.type_text("hello");
        assert_eq!(draft.state(), DraftState::TextPending);
        assert_eq!(draft.submission(), Some(NewShare::Text("hello".to_string())));

        draft.clear_text();
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn line_break_is_kept_in_text() {
        let mut draft = Draft::new();
        draft.type_text("line one");
        draft.insert_line_break();
        draft.type_text("line two");
        assert_eq!(draft.text(), "line one\nline two");
    }

    #[test]
    fn whitespace_text_still_counts() {
        let mut draft = Draft::new();
        draft.type_text(" ");
        assert_eq!(draft.submission(), Some(NewShare::Text(" ".to_string())));
    }

    #[test]
    fn file_wins_over_text() {
        let mut draft = Draft::new();
        draft.type_text("hello");
        draft.select_file(png_file());

        assert_eq!(draft.state(), DraftState::FilePending);
        match draft.submission() {
            Some(NewShare::File(file)) => assert_eq!(file.name, "cat.png"),
            other => panic!("expected file submission, got {:?}", other),
        }
        // text stays in the draft
        assert_eq!(draft.text(), "hello");
    }

    #[test]
    fn clearing_file_returns_to_text() {
        let mut draft = Draft::new();
        draft.type_text("hello");
        draft.select_file(png_file());
        draft.clear_file();
        assert_eq!(draft.state(), DraftState::TextPending);

        draft.clear();
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn draft_file_sniffs_mime() {
        let file = png_file();
        assert_eq!(file.mime, "image/png");
    }

    #[test]
    fn draft_file_rejects_non_images() {
        let err = DraftFile::from_bytes(Path::new("notes.txt"), b"plain".to_vec()).unwrap_err();
        assert!(matches!(err, DraftError::NotAnImage(p) if p == PathBuf::from("notes.txt")));
    }

    #[test]
    fn draft_file_rejects_empty() {
        let err = DraftFile::from_bytes(Path::new("x.png"), Vec::new()).unwrap_err();
        assert!(matches!(err, DraftError::Empty(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_read_error() {
        let err = DraftFile::load(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, DraftError::Read { .. }));
    }
}
