//! Core type definitions used throughout the codebase

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a destination as issued by the directory service
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
pub struct DestinationId(pub String);

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl DestinationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single entry of the destination directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Destination {
    pub fn new(id: impl Into<DestinationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Document kinds that can be generated for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdfKind {
    /// Boarding list
    Embarque,
    /// Driver sheet
    Motorista,
    /// Rooming list
    Hotel,
}

impl PdfKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfKind::Embarque => "embarque",
            PdfKind::Motorista => "motorista",
            PdfKind::Hotel => "hotel",
        }
    }

    /// Human-readable document label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            PdfKind::Embarque => "boarding list",
            PdfKind::Motorista => "driver sheet",
            PdfKind::Hotel => "hotel rooming list",
        }
    }
}

impl std::fmt::Display for PdfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_defaults_to_active() {
        let dest: Destination = serde_json::from_str(r#"{"id": "d1", "name": "Gramado"}"#).unwrap();
        assert!(dest.active);
        assert_eq!(dest.id, DestinationId::from("d1"));
    }

    #[test]
    fn test_destination_id_is_transparent() {
        let json = serde_json::to_string(&DestinationId::from("d7")).unwrap();
        assert_eq!(json, "\"d7\"");
        assert_eq!(DestinationId::from("d7").to_string(), "d7");
    }

    #[test]
    fn test_pdf_kind_serialization() {
        assert_eq!(serde_json::to_string(&PdfKind::Hotel).unwrap(), "\"hotel\"");
        assert_eq!(PdfKind::Motorista.as_str(), "motorista");
    }
}
