//! Destination directory access
//!
//! The directory is owned by another service. The assistant only ever asks
//! for the current list of active destinations, once per command, and never
//! keeps the answer around: activation can change between two commands.

use crate::core::error::{CommandError, Result};
use crate::core::types::{Destination, DestinationId};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Read access to the live destination directory
#[async_trait]
pub trait DestinationDirectory: Send + Sync {
    /// Active destinations in directory order
    async fn list_active_destinations(&self) -> Result<Vec<Destination>>;
}

/// In-process directory, shared between clones
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    entries: Arc<RwLock<Vec<Destination>>>,
}

impl InMemoryDirectory {
    pub fn new(entries: Vec<Destination>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Toggle a destination. Returns false when the id is unknown.
    pub async fn set_active(&self, id: &DestinationId, active: bool) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|d| &d.id == id) {
            Some(destination) => {
                destination.active = active;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl DestinationDirectory for InMemoryDirectory {
    async fn list_active_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|d| d.active)
            .cloned()
            .collect())
    }
}

#[derive(Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    destinations: Vec<Destination>,
}

/// Directory backed by a TOML file of `[[destinations]]` tables
///
/// The file is read again on every call so edits show up immediately.
pub struct TomlDirectory {
    path: PathBuf,
}

impl TomlDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse directory TOML, keeping only active entries
    pub fn parse(content: &str) -> Result<Vec<Destination>> {
        let file: DirectoryFile = toml::from_str(content)?;
        Ok(file
            .destinations
            .into_iter()
            .filter(|d| d.active)
            .collect())
    }
}

#[async_trait]
impl DestinationDirectory for TomlDirectory {
    async fn list_active_destinations(&self) -> Result<Vec<Destination>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CommandError::Directory(format!(
                "Failed to read directory file {:?}: {}",
                self.path, e
            ))
        })?;
        let destinations = Self::parse(&content)?;
        debug!(path = ?self.path, count = destinations.len(), "Directory loaded");
        Ok(destinations)
    }
}
