//! Asynchronous image preview
//!
//! Each selection spawns a read on the tokio runtime. Completions come back
//! over a channel and are applied on the UI task by [`ImagePreview::poll`].
//! Every selection bumps a generation counter and only the completion for the
//! latest generation is applied, so a slow read of an earlier file can never
//! replace the preview of a newer one.

use super::data_uri::{data_uri_mime, data_uri_payload_len};
use super::reader::{FileReader, PreviewError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A successfully read image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub data_url: String,
}

impl LoadedImage {
    pub fn mime(&self) -> &str {
        data_uri_mime(&self.data_url).unwrap_or("unknown")
    }

    pub fn payload_len(&self) -> usize {
        data_uri_payload_len(&self.data_url)
    }
}

/// What changed after draining completions
#[derive(Debug)]
pub enum PreviewUpdate {
    Loaded(PathBuf),
    Failed { path: PathBuf, error: PreviewError },
}

#[derive(Debug)]
struct Completion {
    generation: u64,
    path: PathBuf,
    result: Result<String, PreviewError>,
}

pub struct ImagePreview {
    reader: Arc<dyn FileReader>,
    generation: u64,
    pending: Option<PathBuf>,
    current: Option<LoadedImage>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl ImagePreview {
    pub fn new(reader: Arc<dyn FileReader>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            reader,
            generation: 0,
            pending: None,
            current: None,
            tx,
            rx,
        }
    }

    /// Start reading `path`. Must be called from within a tokio runtime.
    /// Returns the generation of this selection.
    pub fn select(&mut self, path: PathBuf) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        tracing::info!("Loading image preview from {}", path.display());

        self.pending = Some(path.clone());
        let reader = Arc::clone(&self.reader);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = reader.read_as_data_url(&path).await;
            // The receiver lives as long as the preview; a closed channel only
            // means the app is shutting down.
            let _ = tx.send(Completion {
                generation,
                path,
                result,
            });
        });
        generation
    }

    /// Forget the current image and any read in flight
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.current = None;
    }

    /// Apply finished reads. Stale completions are dropped.
    pub fn poll(&mut self) -> Vec<PreviewUpdate> {
        let mut updates = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            if let Some(update) = self.apply(completion) {
                updates.push(update);
            }
        }
        updates
    }

    fn apply(&mut self, completion: Completion) -> Option<PreviewUpdate> {
        if completion.generation != self.generation {
            tracing::debug!(
                "Discarding stale preview of {} (generation {} < {})",
                completion.path.display(),
                completion.generation,
                self.generation
            );
            return None;
        }

        self.pending = None;
        match completion.result {
            Ok(data_url) => {
                tracing::info!("Image preview ready for {}", completion.path.display());
                self.current = Some(LoadedImage {
                    path: completion.path.clone(),
                    data_url,
                });
                Some(PreviewUpdate::Loaded(completion.path))
            }
            Err(error) => {
                tracing::warn!("Image preview failed: {error}");
                self.current = None;
                Some(PreviewUpdate::Failed {
                    path: completion.path,
                    error,
                })
            }
        }
    }

    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    /// Path of the read in flight, if any
    pub fn pending(&self) -> Option<&Path> {
        self.pending.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
