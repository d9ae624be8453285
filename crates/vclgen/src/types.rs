//! Output of a generation run.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Generated VCL plus integrity metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedVcl {
    pub content: String,
    pub content_hash: String,
    pub size_bytes: usize,
    pub generated_at: chrono::DateTime<Utc>,
}

impl GeneratedVcl {
    pub fn new(content: String) -> Self {
        let content_hash = Self::compute_hash(&content);
        let size_bytes = content.len();
        Self {
            content,
            content_hash,
            size_bytes,
            generated_at: Utc::now(),
        }
    }

    /// FNV-1a hash of the content, for cheap diff/integrity checks.
    pub fn compute_hash(content: &str) -> String {
        let mut hash: u64 = 0xcbf29ce484222325;
        for byte in content.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        format!("{:016x}", hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let h1 = GeneratedVcl::compute_hash("set var.sum = 0;");
        let h2 = GeneratedVcl::compute_hash("set var.sum = 0;");
        assert_eq!(h1, h2);
        assert_ne!(h1, GeneratedVcl::compute_hash("set var.sum = 1;"));
    }

    #[test]
    fn metadata_tracks_content() {
        let vcl = GeneratedVcl::new("declare local var.norm STRING;\n".into());
        assert_eq!(vcl.size_bytes, vcl.content.len());
        assert_eq!(vcl.content_hash, GeneratedVcl::compute_hash(&vcl.content));
    }

    #[test]
    fn serde_round_trip() {
        let vcl = GeneratedVcl::new("# empty\n".into());
        let json = serde_json::to_string(&vcl).unwrap();
        let back: GeneratedVcl = serde_json::from_str(&json).unwrap();
        assert_eq!(back.content, vcl.content);
        assert_eq!(back.content_hash, vcl.content_hash);
    }
}
