use crate::error::{RoadError, RsResult};
use crate::model::RoadSegment;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Where scored segments live between ingestion and lookup.
///
/// `snapshot` must always hand back a complete collection: a concurrent
/// `replace_all` swaps the whole set, never part of it.
pub trait SegmentStore: Send + Sync {
    fn snapshot(&self) -> RsResult<Arc<Vec<RoadSegment>>>;
    fn replace_all(&self, segments: Vec<RoadSegment>) -> RsResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    segments: RwLock<Arc<Vec<RoadSegment>>>,
}

impl MemoryStore {
    pub fn new(segments: Vec<RoadSegment>) -> Self {
        Self {
            segments: RwLock::new(Arc::new(segments)),
        }
    }
}

impl SegmentStore for MemoryStore {
    fn snapshot(&self) -> RsResult<Arc<Vec<RoadSegment>>> {
        let guard = self
            .segments
            .read()
            .map_err(|e| RoadError::Store(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    fn replace_all(&self, segments: Vec<RoadSegment>) -> RsResult<()> {
        let fresh = Arc::new(segments);
        let mut guard = self
            .segments
            .write()
            .map_err(|e| RoadError::Store(e.to_string()))?;
        *guard = fresh;
        Ok(())
    }
}

/// Segments serialized as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SegmentStore for JsonFileStore {
    fn snapshot(&self) -> RsResult<Arc<Vec<RoadSegment>>> {
        if !self.path.exists() {
            return Err(RoadError::Store(format!(
                "no segment store at '{}', run `ingest` first",
                self.path.display()
            )));
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let segments: Vec<RoadSegment> = serde_json::from_reader(reader)?;
        Ok(Arc::new(segments))
    }

    fn replace_all(&self, segments: Vec<RoadSegment>) -> RsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Readers only ever see the old file or the new one.
        let staging = self.staging_path();
        {
            let mut writer = BufWriter::new(File::create(&staging)?);
            serde_json::to_writer(&mut writer, &segments)?;
            writer.flush()?;
        }
        fs::rename(&staging, &self.path)?;

        info!(
            path = %self.path.display(),
            segments = segments.len(),
            "segment store replaced"
        );
        Ok(())
    }
}
