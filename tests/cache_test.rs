//! Analysis cache tests
//!
//! Verifies cache save/load behavior and key derivation.

use resume_ai_common::mock::sample_response;
use resume_ai_common::types::AnalysisPayload;
use resume_ai_rust::cache::{compute_key, CacheFile};
use tempfile::tempdir;

fn sample_payload() -> AnalysisPayload {
    AnalysisPayload::Structured(sample_response(false))
}

/// Empty cache for a fresh directory
#[test]
fn test_cache_empty() {
    let dir = tempdir().expect("failed to create temp dir");
    let cache = CacheFile::load(dir.path());

    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

/// Save and reload round-trips entries
#[test]
fn test_cache_save_and_load() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut cache = CacheFile::load(dir.path());
    let key = compute_key(b"resume body", None);
    cache.insert(key.clone(), "resume.txt".to_string(), sample_payload());
    cache.save(dir.path()).expect("cache save failed");

    let loaded = CacheFile::load(dir.path());
    assert_eq!(loaded.len(), 1);

    let hit = loaded.get(&key).expect("cache entry missing");
    assert_eq!(*hit, sample_payload());
}

/// A different job description misses the cache
#[test]
fn test_cache_miss_on_different_job_description() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut cache = CacheFile::load(dir.path());
    let key = compute_key(b"resume body", Some("backend role"));
    cache.insert(key, "resume.txt".to_string(), sample_payload());

    let other_key = compute_key(b"resume body", Some("frontend role"));
    assert!(cache.get(&other_key).is_none());
}

/// A version-mismatched cache file is discarded
#[test]
fn test_cache_version_mismatch_discarded() {
    let dir = tempdir().expect("failed to create temp dir");

    std::fs::write(
        CacheFile::cache_path(dir.path()),
        r#"{"version": 99, "entries": {}}"#,
    )
    .expect("failed to write cache file");

    let cache = CacheFile::load(dir.path());
    assert!(cache.is_empty());
}

/// A corrupt cache file starts fresh instead of erroring
#[test]
fn test_cache_corrupt_file_starts_fresh() {
    let dir = tempdir().expect("failed to create temp dir");

    std::fs::write(CacheFile::cache_path(dir.path()), "not json at all")
        .expect("failed to write cache file");

    let cache = CacheFile::load(dir.path());
    assert!(cache.is_empty());
}

/// Clearing removes the file and reports whether one existed
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("failed to create temp dir");

    assert!(!CacheFile::clear(dir.path()).expect("clear failed"));

    let mut cache = CacheFile::load(dir.path());
    cache.insert(
        compute_key(b"resume", None),
        "resume.txt".to_string(),
        sample_payload(),
    );
    cache.save(dir.path()).expect("cache save failed");

    assert!(CacheFile::clear(dir.path()).expect("clear failed"));
    assert!(!CacheFile::cache_path(dir.path()).exists());
}
