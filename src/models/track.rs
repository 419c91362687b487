/// Status tag of a track line in `tracks.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackStatus {
    Pending,
    InProgress,
    Completed,
}

impl TrackStatus {
    /// Parse the text between the brackets of a status tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pending" => Some(TrackStatus::Pending),
            "in-progress" => Some(TrackStatus::InProgress),
            "completed" => Some(TrackStatus::Completed),
            _ => None,
        }
    }
}

/// Number of tracks per status across the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl TrackCounts {
    pub fn record(&mut self, status: TrackStatus) {
        match status {
            TrackStatus::Completed => self.completed += 1,
            TrackStatus::InProgress => self.in_progress += 1,
            TrackStatus::Pending => self.pending += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.pending
    }
}

/// The track currently being worked on, as read from its ledger line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTrack {
    /// Directory name under `conductor/tracks/`, when the line carries one
    pub id: Option<String>,
    /// Text after the `Track:` label
    pub description: Option<String>,
    /// The raw ledger line, trimmed
    pub line: String,
}

impl ActiveTrack {
    /// Human-readable label for the brief.
    pub fn label(&self) -> String {
        match (&self.description, &self.id) {
            (Some(desc), Some(id)) => format!("{desc} ({id})"),
            (Some(desc), None) => desc.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => self.line.clone(),
        }
    }
}

/// Parsed view over `tracks.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackRegistry {
    pub counts: TrackCounts,
    pub active: Option<ActiveTrack>,
}
