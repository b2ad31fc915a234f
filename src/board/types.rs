use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The palette notes cycle through; a fresh note picks one at random.
pub const NOTE_COLORS: [&str; 8] = [
    "#fcfa5d", "#6eed2a", "#f989d6", "#20dff8", "#ff9999", "#99ff99", "#9999ff", "#ffcc99",
];

/// A single note as the board edits and transmits it.
///
/// This shape is a client convention only: the server stores each element
/// opaquely, so a note has no server-side identity and `id` exists purely for
/// rendering and diffing before a save round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub text: String,
    pub color: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    /// A fresh empty note with a random palette color.
    pub fn blank() -> Self {
        let color = NOTE_COLORS[rand::random::<usize>() % NOTE_COLORS.len()];
        Self {
            text: String::new(),
            color: color.to_string(),
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Some(Utc::now()),
        }
    }

    /// Whether the note holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The palette color after `current`, wrapping around.
    ///
    /// An off-palette color restarts at the first entry, same as the original
    /// board behaved when `indexOf` came back -1.
    pub fn next_color(current: &str) -> &'static str {
        let position = NOTE_COLORS.iter().position(|c| *c == current);
        match position {
            Some(i) => NOTE_COLORS[(i + 1) % NOTE_COLORS.len()],
            None => NOTE_COLORS[0],
        }
    }
}

/// Tri-state save indicator surfaced to the user instead of raw error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    Saving,
    Saved,
    Error,
}
