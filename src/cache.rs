use std::fs;
use std::path::PathBuf;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::config::config_directory;
use crate::domain::board::BoardPayload;
use crate::error::{AppError, AppResult};

const CACHE_FILE_NAME: &str = "board_cache.json";
const CACHE_LIMIT: usize = 8;

#[derive(Default, Serialize, Deserialize)]
struct CacheFile {
    entries: Vec<CacheEntry>,
}

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    payload: BoardPayload,
}

/// Stores the last successfully fetched payload per source so `--offline`
/// works and a failed fetch can fall back to stale data.
pub struct BoardSnapshotCache {
    file_path: PathBuf,
    file: CacheFile,
}

impl BoardSnapshotCache {
    pub fn load() -> AppResult<Self> {
        let dir = config_directory()?;
        let path = dir.join(CACHE_FILE_NAME);
        let file = match fs::read_to_string(&path) {
            Ok(contents) => parse_cache_file(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => CacheFile::default(),
            Err(err) => return Err(AppError::Io(err)),
        };

        Ok(Self {
            file_path: path,
            file,
        })
    }

    pub fn get(&self, key: &str) -> Option<BoardPayload> {
        self.file
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.payload.clone())
    }

    pub fn insert(&mut self, key: String, payload: &BoardPayload) {
        self.file.entries.retain(|entry| entry.key != key);
        self.file.entries.push(CacheEntry {
            key,
            payload: payload.clone(),
        });

        if self.file.entries.len() > CACHE_LIMIT {
            let overflow = self.file.entries.len() - CACHE_LIMIT;
            self.file.entries.drain(0..overflow);
        }
    }

    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.file)
            .map_err(|err| AppError::Cache(format!("failed to write cache: {err}")))?;
        fs::write(&self.file_path, data)?;
        Ok(())
    }

    pub fn compute_key(source_url: &str) -> String {
        let mut hasher = Hasher::new();
        hasher.update(source_url.trim().as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

/// A cache file that no longer parses is discarded, not a fatal error; the
/// next successful fetch rewrites it.
fn parse_cache_file(contents: &str) -> CacheFile {
    match serde_json::from_str(contents) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: ignoring unreadable board cache: {err}");
            CacheFile::default()
        }
    }
}
