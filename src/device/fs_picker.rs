//! Filesystem-backed pickers
//!
//! The terminal has no native file dialog, so a pick is a typed path that is
//! resolved against the configured document directory and checked on disk.

use super::traits::{
    DocumentPicker, ImagePicker, PickOutcome, PickRequest, PickedDocument, PickedImage,
};
use crate::error::PickerError;
use async_trait::async_trait;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Extensions accepted by the photo picker (compared lowercase)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "bmp"];

/// Display name given to every picked photo
pub const PHOTO_NAME: &str = "photo";

/// Picks documents and photos from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsPicker {
    /// Relative paths are resolved against this directory
    base_dir: Option<PathBuf>,
}

impl FsPicker {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Turn typed input into a path. `None` means the user entered nothing.
    fn resolve(&self, raw: &str) -> Option<PathBuf> {
        let trimmed = raw.trim();
        // Terminals quote dropped paths
        let unquoted = trimmed
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
            .unwrap_or(trimmed);
        if unquoted.is_empty() {
            return None;
        }

        let path = match unquoted.strip_prefix("~/") {
            Some(rest) => match BaseDirs::new() {
                Some(dirs) => dirs.home_dir().join(rest),
                None => PathBuf::from(unquoted),
            },
            None => PathBuf::from(unquoted),
        };

        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path),
        }
    }

    /// Require a regular file and return its canonical path
    async fn locate(path: &Path) -> Result<PathBuf, PickerError> {
        let io_err = |source| PickerError::Io {
            path: path.to_path_buf(),
            source,
        };
        let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
        if !metadata.is_file() {
            return Err(PickerError::NotAFile(path.to_path_buf()));
        }
        tokio::fs::canonicalize(path).await.map_err(io_err)
    }

    fn is_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentPicker for FsPicker {
    async fn pick_document(
        &self,
        request: PickRequest,
    ) -> Result<PickOutcome<PickedDocument>, PickerError> {
        let Some(path) = self.resolve(&request.raw_path) else {
            return Ok(PickOutcome::Cancelled);
        };
        let located = Self::locate(&path).await?;
        let name = located
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| located.display().to_string());

        tracing::debug!("document picked: {}", located.display());
        Ok(PickOutcome::Picked(PickedDocument {
            name,
            locator: located.display().to_string(),
        }))
    }
}

#[async_trait]
impl ImagePicker for FsPicker {
    async fn pick_image(&self, request: PickRequest) -> Result<PickOutcome<PickedImage>, PickerError> {
        let Some(path) = self.resolve(&request.raw_path) else {
            return Ok(PickOutcome::Cancelled);
        };
        let located = Self::locate(&path).await?;
        if !Self::is_image(&located) {
            return Err(PickerError::NotAnImage(path));
        }

        tracing::debug!("image picked: {}", located.display());
        Ok(PickOutcome::Picked(PickedImage {
            locator: located.display().to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scratch_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("transcript.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("me.JPG"), b"\xff\xd8").unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();
        dir
    }

    mod resolve {
        use super::*;

        #[test]
        fn test_blank_input_is_none() {
            let picker = FsPicker::default();
            assert!(picker.resolve("").is_none());
            assert!(picker.resolve("   ").is_none());
            assert!(picker.resolve("''").is_none());
        }

        #[test]
        fn test_strips_quotes() {
            let picker = FsPicker::default();
            assert_eq!(picker.resolve("'/tmp/a b.pdf'"), Some(PathBuf::from("/tmp/a b.pdf")));
            assert_eq!(picker.resolve("\"/tmp/c.pdf\""), Some(PathBuf::from("/tmp/c.pdf")));
        }

        #[test]
        fn test_relative_joins_base_dir() {
            let picker = FsPicker::new(Some(PathBuf::from("/docs")));
            assert_eq!(picker.resolve("a.pdf"), Some(PathBuf::from("/docs/a.pdf")));
            assert_eq!(picker.resolve("/abs/a.pdf"), Some(PathBuf::from("/abs/a.pdf")));
        }

        #[test]
        fn test_relative_without_base_dir_is_kept() {
            let picker = FsPicker::default();
            assert_eq!(picker.resolve("a.pdf"), Some(PathBuf::from("a.pdf")));
        }
    }

    mod documents {
        use super::*;

        #[tokio::test]
        async fn test_picks_existing_file() {
            let dir = scratch_dir();
            let picker = FsPicker::new(Some(dir.path().to_path_buf()));

            let outcome = picker
                .pick_document(PickRequest::new("transcript.pdf"))
                .await
                .unwrap();

            let PickOutcome::Picked(doc) = outcome else {
                panic!("expected a picked document");
            };
            assert_eq!(doc.name, "transcript.pdf");
            assert!(doc.locator.ends_with("transcript.pdf"));
            assert!(Path::new(&doc.locator).is_absolute());
        }

        #[tokio::test]
        async fn test_blank_request_cancels() {
            let picker = FsPicker::default();
            let outcome = picker.pick_document(PickRequest::new(" ")).await.unwrap();
            assert_eq!(outcome, PickOutcome::Cancelled);
        }

        #[tokio::test]
        async fn test_missing_file_is_io_error() {
            let dir = scratch_dir();
            let picker = FsPicker::new(Some(dir.path().to_path_buf()));
            let err = picker
                .pick_document(PickRequest::new("nope.pdf"))
                .await
                .unwrap_err();
            assert!(matches!(err, PickerError::Io { .. }));
        }

        #[tokio::test]
        async fn test_directory_is_rejected() {
            let dir = scratch_dir();
            let picker = FsPicker::new(Some(dir.path().to_path_buf()));
            let err = picker
                .pick_document(PickRequest::new("folder"))
                .await
                .unwrap_err();
            assert!(matches!(err, PickerError::NotAFile(_)));
        }
    }

    mod images {
        use super::*;

        #[tokio::test]
        async fn test_picks_image_with_uppercase_extension() {
            let dir = scratch_dir();
            let picker = FsPicker::new(Some(dir.path().to_path_buf()));

            let outcome = picker.pick_image(PickRequest::new("me.JPG")).await.unwrap();

            let PickOutcome::Picked(image) = outcome else {
                panic!("expected a picked image");
            };
            assert!(image.locator.ends_with("me.JPG"));
        }

        #[tokio::test]
        async fn test_non_image_is_rejected() {
            let dir = scratch_dir();
            let picker = FsPicker::new(Some(dir.path().to_path_buf()));
            let err = picker
                .pick_image(PickRequest::new("transcript.pdf"))
                .await
                .unwrap_err();
            assert!(matches!(err, PickerError::NotAnImage(_)));
        }

        #[tokio::test]
        async fn test_blank_request_cancels() {
            let picker = FsPicker::default();
            let outcome = picker.pick_image(PickRequest::new("")).await.unwrap();
            assert_eq!(outcome, PickOutcome::Cancelled);
        }
    }
}
