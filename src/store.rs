use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A published episode. Immutable once appended to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub script: String,
    /// Absent when the provider response carried no recognized audio key.
    pub audio_url: Option<String>,
    /// RFC-822 timestamp, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
    pub pub_date: String,
}

/// In-memory, append-only episode sequence. Lives for the process lifetime;
/// iteration order is insertion order (oldest first).
#[derive(Debug, Default)]
pub struct EpisodeStore {
    episodes: Mutex<Vec<Episode>>,
}

impl EpisodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, episode: Episode) {
        self.episodes.lock().unwrap().push(episode);
    }

    /// Point-in-time copy of all episodes, oldest first.
    pub fn snapshot(&self) -> Vec<Episode> {
        self.episodes.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.episodes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
