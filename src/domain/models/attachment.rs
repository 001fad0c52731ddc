use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AchievementId;

pub const IMAGE_JPEG: &str = "image/jpeg";
pub const IMAGE_PNG: &str = "image/png";
pub const APPLICATION_PDF: &str = "application/pdf";

/// Which of the two attachment slots a payload belongs to.
///
/// Each slot carries two independent tables: one guessing a content type from a
/// source file extension at submission time, and one choosing an export file
/// extension from the stored content type. They do not always agree: a `.bmp`
/// image is stored as `image/png` and comes back out as `.png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Certificate,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Certificate => "certificate",
        }
    }

    /// Content type inferred from the file extension, case-insensitively.
    pub fn content_type_for_path(&self, path: &Path) -> &'static str {
        let ext = lowercase_extension(path);
        match self {
            AttachmentKind::Image => match ext.as_deref() {
                Some("jpg") | Some("jpeg") => IMAGE_JPEG,
                _ => IMAGE_PNG,
            },
            AttachmentKind::Certificate => match ext.as_deref() {
                Some("pdf") => APPLICATION_PDF,
                _ => IMAGE_JPEG,
            },
        }
    }

    /// Whether the extension maps to its content type directly rather than
    /// through the fallback branch.
    pub fn is_recognised_extension(&self, path: &Path) -> bool {
        let ext = lowercase_extension(path);
        match self {
            AttachmentKind::Image => matches!(ext.as_deref(), Some("jpg" | "jpeg" | "png")),
            AttachmentKind::Certificate => matches!(ext.as_deref(), Some("pdf" | "jpg" | "jpeg")),
        }
    }

    /// Export extension (with leading dot) chosen from a stored content type.
    pub fn extension_for(&self, content_type: &str) -> &'static str {
        match self {
            AttachmentKind::Image => {
                if content_type == IMAGE_JPEG {
                    ".jpg"
                } else {
                    ".png"
                }
            }
            AttachmentKind::Certificate => {
                if content_type == APPLICATION_PDF {
                    ".pdf"
                } else {
                    ".jpg"
                }
            }
        }
    }

    /// `<registration>_image.jpg`, or `<registration>_<id>_image.jpg` when keyed
    /// by identifier. The result is always a single path component.
    pub fn export_file_name(
        &self,
        registration_number: &str,
        id: Option<&AchievementId>,
        content_type: &str,
    ) -> String {
        let registration = file_stem_safe(registration_number);
        let stem = match id {
            Some(id) => format!("{}_{}", registration, id),
            None => registration,
        };
        format!("{}_{}{}", stem, self.as_str(), self.extension_for(content_type))
    }
}

/// Replaces path separators, NUL and `..` in free text so it cannot escape the
/// directory it is joined onto.
fn file_stem_safe(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect::<String>()
        .replace("..", "_")
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

/// A binary payload together with its content-type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    data: Vec<u8>,
    content_type: String,
}

impl Attachment {
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    /// Builds an attachment for `kind` from bytes read off `path`.
    pub fn from_source(kind: AttachmentKind, path: &Path, data: Vec<u8>) -> Self {
        Self::new(data, kind.content_type_for_path(path))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
