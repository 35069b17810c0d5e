//! Sampling document upload rules.
//!
//! Uploaded files are stored under a configured directory with a name
//! derived from the activity, the content digest and the sanitized original
//! filename, so two uploads of the same bytes for the same activity land on
//! the same path.

use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::types::DbId;

/// Default upload limit (25 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Longest filename stem kept after sanitizing.
const MAX_FILENAME_CHARS: usize = 100;

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]` becomes
/// `_`. Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '_') {
        return None;
    }

    let kept: String = if trimmed.chars().count() > MAX_FILENAME_CHARS {
        // Keep the extension when truncating.
        match trimmed.rsplit_once('.') {
            Some((stem, ext)) if ext.len() <= 10 => {
                let stem: String = stem.chars().take(MAX_FILENAME_CHARS - ext.len() - 1).collect();
                format!("{stem}.{ext}")
            }
            _ => trimmed.chars().take(MAX_FILENAME_CHARS).collect(),
        }
    } else {
        trimmed.to_string()
    };
    Some(kept)
}

/// Name under which an upload is stored.
pub fn stored_file_name(sampling_activity_id: DbId, digest: &str, filename: &str) -> String {
    let short = &digest[..digest.len().min(12)];
    format!("activity_{sampling_activity_id}_{short}_{filename}")
}

/// Reject empty uploads and uploads above `max_bytes`.
pub fn validate_upload_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("document file is empty".into()));
    }
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "document is {len} bytes, the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Best-effort MIME type from the file extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "csv" => "text/csv",
        "txt" => "text/plain",
        "json" => "application/json",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}
