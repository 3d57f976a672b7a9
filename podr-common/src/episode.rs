//! Episode model and upstream record mapping
//!
//! The episode source backend serves records with audio metadata nested
//! under a `file` object. `EpisodeRecord` mirrors that wire shape;
//! `Episode` is the flattened value type the rest of the system uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A podcast episode, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique stable identifier assigned by the episode source
    pub id: String,

    /// Episode title for display
    pub title: String,

    /// Participating members, pre-joined display string
    pub members: String,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,

    /// Cover art locator
    pub thumbnail: String,

    /// Episode description (may contain markup from the source)
    pub description: String,

    /// Audio duration in whole seconds
    pub duration: u64,

    /// Audio media locator
    pub url: String,
}

/// Episode record as served by the backend (`GET /episodes`)
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail: String,
    pub description: String,
    pub file: EpisodeFile,
}

/// Nested audio file metadata within an episode record
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeFile {
    pub url: String,
    pub duration: u64,
}

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            members: record.members,
            published_at: record.published_at,
            thumbnail: record.thumbnail,
            description: record.description,
            duration: record.file.duration,
            url: record.file.url,
        }
    }
}
