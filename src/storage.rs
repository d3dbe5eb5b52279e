//! Filesystem-backed attachment store.
//!
//! Receipts and courier pinpoint screenshots are write-once files under
//! purpose-scoped folders, disambiguated by upload timestamp:
//! `receipts/gcash/<millis>_<filename>` and `receipts/maxim/<millis>_<filename>`.
//! Files are never deleted, even when their owning order is (retained for
//! audit).

use crate::error::AppError;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// Payment receipt screenshots.
    Gcash,
    /// Courier pinpoint screenshots.
    Maxim,
}

impl Purpose {
    pub fn parse(s: &str) -> Option<Purpose> {
        match s {
            "gcash" => Some(Purpose::Gcash),
            "maxim" => Some(Purpose::Maxim),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Gcash => "gcash",
            Purpose::Maxim => "maxim",
        }
    }

    fn dir(&self) -> String {
        format!("receipts/{}", self.as_str())
    }
}

#[derive(Debug)]
pub struct StoredAttachment {
    /// Store-relative path, the reference persisted on the order row.
    pub path: String,
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("receipts/gcash"))?;
        fs::create_dir_all(root.join("receipts/maxim"))?;
        Ok(Self { root })
    }

    /// Validate and persist one upload; returns the store-relative path.
    pub fn store(
        &self,
        purpose: Purpose,
        original_name: &str,
        data: &[u8],
    ) -> Result<StoredAttachment, AppError> {
        if data.is_empty() {
            return Err(AppError::validation("file", "Empty file provided"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(
                "file",
                format!(
                    "File too large. Maximum size is {}MB",
                    MAX_FILE_SIZE / 1024 / 1024
                ),
            ));
        }

        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::validation(
                "file",
                format!(
                    "Unsupported file format '{}'. Supported: {}",
                    ext,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ));
        }

        let filename = format!(
            "{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );
        let rel = format!("{}/{}", purpose.dir(), filename);

        fs::write(self.root.join(&rel), data)
            .map_err(|e| AppError::upload(format!("Failed to store attachment: {e}")))?;

        Ok(StoredAttachment {
            path: rel,
            size: data.len(),
        })
    }

    /// Whether a previously-returned reference still resolves to a stored
    /// file. Rejects anything that is not a well-formed store path.
    pub fn exists(&self, reference: &str) -> bool {
        match self.resolve(reference) {
            Some(path) => path.is_file(),
            None => false,
        }
    }

    /// Read one stored object back, with its content type.
    pub fn read(
        &self,
        purpose: Purpose,
        filename: &str,
    ) -> Result<(Vec<u8>, &'static str), AppError> {
        let reference = format!("{}/{}", purpose.dir(), filename);
        let path = self
            .resolve(&reference)
            .ok_or_else(|| AppError::not_found("Attachment not found"))?;
        let data = fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::not_found("Attachment not found"),
            _ => AppError::internal(format!("Failed to read attachment: {e}")),
        })?;
        Ok((data, content_type_for(filename)))
    }

    /// Maps a store-relative reference to a real path, refusing anything
    /// outside `receipts/<purpose>/<single filename>`.
    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let mut parts = reference.split('/');
        let (bucket, purpose, filename) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || bucket != "receipts" {
            return None;
        }
        Purpose::parse(purpose)?;
        if filename.is_empty() || filename == "." || filename == ".." {
            return None;
        }
        if filename.contains('\\') {
            return None;
        }
        Some(self.root.join(reference))
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, AttachmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AttachmentStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn store_builds_purpose_scoped_path() {
        let (_dir, store) = store();
        let stored = store
            .store(Purpose::Gcash, "receipt.png", b"fake image bytes")
            .unwrap();
        assert!(stored.path.starts_with("receipts/gcash/"));
        assert!(stored.path.ends_with("_receipt.png"));
        assert!(store.exists(&stored.path));
    }

    #[test]
    fn store_sanitizes_hostile_filenames() {
        let (_dir, store) = store();
        let stored = store
            .store(Purpose::Maxim, "../../../etc/passwd.png", b"data")
            .unwrap();
        assert!(stored.path.starts_with("receipts/maxim/"));
        // Separators are neutralized: bucket, purpose, single filename.
        assert_eq!(stored.path.matches('/').count(), 2);
        assert!(store.exists(&stored.path));
    }

    #[test]
    fn store_rejects_empty_and_unsupported() {
        let (_dir, store) = store();
        assert!(store.store(Purpose::Gcash, "receipt.png", b"").is_err());
        assert!(store.store(Purpose::Gcash, "receipt.exe", b"x").is_err());
        assert!(store.store(Purpose::Gcash, "noextension", b"x").is_err());
    }

    #[test]
    fn exists_rejects_malformed_references() {
        let (_dir, store) = store();
        assert!(!store.exists("receipts/gcash/../secret.png"));
        assert!(!store.exists("elsewhere/gcash/file.png"));
        assert!(!store.exists("receipts/other/file.png"));
        assert!(!store.exists("receipts/gcash/a/b.png"));
        assert!(!store.exists("receipts/gcash/missing.png"));
    }

    #[test]
    fn read_returns_bytes_and_content_type() {
        let (_dir, store) = store();
        let stored = store.store(Purpose::Gcash, "shot.jpg", b"jpegdata").unwrap();
        let filename = stored.path.rsplit('/').next().unwrap();
        let (data, ct) = store.read(Purpose::Gcash, filename).unwrap();
        assert_eq!(data, b"jpegdata");
        assert_eq!(ct, "image/jpeg");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let (_dir, store) = store();
        assert!(store.read(Purpose::Maxim, "nope.png").is_err());
    }
}
