//! Analysis result cache
//!
//! Caches analysis payloads keyed by a SHA-256 over the resume content
//! and the job description, so repeated analyses of the same input skip
//! the network round trip.

use crate::error::Result;
use chrono::{DateTime, Utc};
use resume_ai_common::types::AnalysisPayload;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".resume-ai-cache.json";

/// On-disk cache structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// version for compatibility checks
    version: u32,
    /// input hash -> cached analysis
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub resume_name: String,
    pub created_at: DateTime<Utc>,
    pub payload: AnalysisPayload,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// Load the cache from a directory. Missing, unreadable or
    /// version-mismatched files start a fresh cache.
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, CacheFile>(reader) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                tracing::warn!("cache version mismatch, starting fresh");
                Self::default()
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(dir))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&AnalysisPayload> {
        self.entries.get(key).map(|entry| &entry.payload)
    }

    pub fn insert(&mut self, key: String, resume_name: String, payload: AnalysisPayload) {
        self.entries.insert(
            key,
            CacheEntry {
                resume_name,
                created_at: Utc::now(),
                payload,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delete the cache file. Returns whether one existed.
    pub fn clear(dir: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(dir);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// Cache key over the resume content and job description
pub fn compute_key(resume: &[u8], job_description: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(resume);
    hasher.update([0x1f]);
    if let Some(job_description) = job_description {
        hasher.update(job_description.as_bytes());
    }
    hex::encode(hasher.finalize())
}
