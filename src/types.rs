//! Core types and traits for the lookup gateway

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Media kinds a lookup request may ask for.
///
/// `Video` is reserved: it deserializes, but every lookup for it is rejected
/// with [`LookupError::UnsupportedKind`] before any provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Requested image orientation.
///
/// Known values are typed; anything else is carried through verbatim and
/// left to the provider to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Square,
    Other(String),
}

impl From<String> for Orientation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "landscape" => Orientation::Landscape,
            "portrait" => Orientation::Portrait,
            "square" => Orientation::Square,
            _ => Orientation::Other(value),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Square => write!(f, "square"),
            Orientation::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Inbound lookup request, deserialized at the HTTP boundary
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Media kind; defaults to `image`
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    /// Search text. Must be non-empty after trimming.
    pub prompt: String,
    /// Requested orientation; defaults to landscape
    #[serde(default)]
    pub orientation: Orientation,
}

impl LookupRequest {
    /// Convenience constructor for a plain image lookup
    pub fn image(prompt: &str) -> Self {
        Self {
            kind: MediaKind::Image,
            prompt: prompt.to_string(),
            orientation: Orientation::default(),
        }
    }
}

/// Upstream providers the gateway can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Pexels,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Pexels => write!(f, "pexels"),
        }
    }
}

/// A single image hit, normalized from the provider's native schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHit {
    /// URL of the large-size rendition
    pub image_url: String,
    /// Attribution name of the photographer
    pub photographer: String,
    /// Provider that produced the hit
    pub provider: ProviderId,
    /// Raw provider payload for the hit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

/// Trait every image search provider implements
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync + fmt::Debug {
    /// Identifier reported in normalized responses
    fn id(&self) -> ProviderId;

    /// Search for images matching `query`, in provider relevance order.
    ///
    /// An empty vector means the provider answered but had nothing; the
    /// caller decides how to surface that.
    async fn search(
        &self,
        query: &str,
        orientation: &Orientation,
    ) -> Result<Vec<ImageHit>, LookupError>;
}
