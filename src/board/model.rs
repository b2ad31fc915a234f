use super::remote::ApiClient;
use super::types::{Note, SaveStatus};
use crate::store::types::SetId;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Quiet period after the last edit before a save fires.
const SAVE_DEBOUNCE: Duration = Duration::from_secs(1);

/// What a fired save decided to do, resolved under the state lock.
enum SaveAction {
    Create(Vec<Note>),
    Replace(SetId, Vec<Note>),
    Delete(SetId),
}

struct BoardState {
    notes: Vec<Note>,
    set_id: Option<SetId>,
    status: SaveStatus,
    /// Raised by mutations, cleared by a successful save or an intentional skip.
    dirty: bool,
    /// Advisory guard against overlapping network operations.
    busy: bool,
    last_saved: Option<DateTime<Utc>>,
    /// The visible location. Rewritten in place on create and delete; never
    /// triggers a reload.
    path: String,
}

/// View-model for one sticky board.
///
/// All behavior flows through a single change-reaction path: any mutation to
/// the note sequence marks the board dirty and arms the debounce timer; the
/// timer firing picks create, replace, or delete from the current state. The
/// timer is a single slot, so arming always cancels whatever was pending.
pub struct Board {
    api: ApiClient,
    state: Mutex<BoardState>,
    pending_save: Mutex<Option<JoinHandle<()>>>,
}

impl Board {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Mutex::new(BoardState {
                notes: Vec::new(),
                set_id: None,
                status: SaveStatus::Saved,
                dirty: false,
                busy: false,
                last_saved: None,
                path: "/".to_string(),
            }),
            pending_save: Mutex::new(None),
        }
    }

    /// Initializes the board from the visible location.
    ///
    /// A single 24-hex path segment is treated as an existing identifier and
    /// fetched; the fetched content seeds the editable state, the one time
    /// server content ever does. Anything else, including a fetch that fails,
    /// silently falls back to a fresh single blank note with no identifier.
    pub async fn load(&self, location: &str) {
        let segment = location.strip_prefix('/').unwrap_or(location);

        let mut st = self.state.lock().await;
        st.path = location.to_string();

        let Some(id) = SetId::parse(segment) else {
            st.notes = vec![Note::blank()];
            st.set_id = None;
            st.status = SaveStatus::Saved;
            return;
        };

        // The lock is not held across the fetch.
        drop(st);
        let fetched = self.api.fetch(&id).await;
        let mut st = self.state.lock().await;

        match fetched {
            Ok(Some(set)) => {
                tracing::info!("Loaded sticky set {} ({} notes)", id, set.stickies.len());
                st.notes = notes_from_values(set.stickies);
                st.set_id = Some(id);
                st.status = SaveStatus::Saved;
                st.dirty = false;
            }
            Ok(None) => {
                tracing::info!("Sticky set {} not found, starting fresh", id);
                st.notes = vec![Note::blank()];
                st.set_id = None;
                st.status = SaveStatus::Saved;
            }
            Err(err) => {
                tracing::warn!("Failed to load sticky set {}: {}", id, err);
                st.notes = vec![Note::blank()];
                st.set_id = None;
                st.status = SaveStatus::Error;
            }
        }
    }

    /// Appends a fresh blank note.
    pub async fn add_note(self: &Arc<Self>) {
        {
            let mut st = self.state.lock().await;
            st.notes.push(Note::blank());
        }
        self.changed().await;
    }

    /// Replaces the text of the note at `index`.
    pub async fn set_text(self: &Arc<Self>, index: usize, text: &str) {
        {
            let mut st = self.state.lock().await;
            match st.notes.get_mut(index) {
                Some(note) => note.text = text.to_string(),
                None => return,
            }
        }
        self.changed().await;
    }

    /// Advances the note at `index` to the next palette color.
    pub async fn cycle_color(self: &Arc<Self>, index: usize) {
        {
            let mut st = self.state.lock().await;
            match st.notes.get_mut(index) {
                Some(note) => note.color = Note::next_color(&note.color).to_string(),
                None => return,
            }
        }
        self.changed().await;
    }

    /// Removes the note at `index`, permitted only while its text is blank.
    pub async fn remove_note(self: &Arc<Self>, index: usize) {
        {
            let mut st = self.state.lock().await;
            if !st.notes.get(index).is_some_and(Note::is_blank) {
                return;
            }
            st.notes.remove(index);
        }
        self.changed().await;
    }

    /// Moves the note at `from` to position `to` (drag reorder).
    pub async fn move_note(self: &Arc<Self>, from: usize, to: usize) {
        {
            let mut st = self.state.lock().await;
            if from == to || from >= st.notes.len() || to >= st.notes.len() {
                return;
            }
            let note = st.notes.remove(from);
            st.notes.insert(to, note);
        }
        self.changed().await;
    }

    /// Cancels any pending timer and runs the save decision immediately.
    pub async fn flush(self: &Arc<Self>) {
        if let Some(pending) = self.pending_save.lock().await.take() {
            pending.abort();
        }
        self.fire().await;
    }

    pub async fn notes(&self) -> Vec<Note> {
        self.state.lock().await.notes.clone()
    }

    pub async fn set_id(&self) -> Option<SetId> {
        self.state.lock().await.set_id.clone()
    }

    pub async fn status(&self) -> SaveStatus {
        self.state.lock().await.status
    }

    pub async fn path(&self) -> String {
        self.state.lock().await.path.clone()
    }

    pub async fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.last_saved
    }

    pub async fn has_unsaved_changes(&self) -> bool {
        self.state.lock().await.dirty
    }

    /// The single change-reaction path: mark dirty and re-arm the timer.
    async fn changed(self: &Arc<Self>) {
        {
            let mut st = self.state.lock().await;
            st.status = SaveStatus::Saving;
            st.dirty = true;
        }

        let mut slot = self.pending_save.lock().await;
        if let Some(pending) = slot.take() {
            pending.abort();
        }

        let board = Arc::clone(self);
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(SAVE_DEBOUNCE).await;
            board.fire().await;
        }));
    }

    /// Runs one save decision against the current state.
    ///
    /// Dropped outright if a save is already in flight; the next mutation's
    /// debounce is the retry. A board with no identifier and no content skips
    /// the network entirely so empty drafts are never persisted.
    async fn fire(&self) {
        let action = {
            let mut st = self.state.lock().await;
            if st.busy {
                tracing::debug!("Save already in flight, dropping this one");
                return;
            }

            match decide(&st.notes, st.set_id.as_ref()) {
                Some(action) => {
                    st.busy = true;
                    action
                }
                None => {
                    st.status = SaveStatus::Saved;
                    st.dirty = false;
                    return;
                }
            }
        };

        match action {
            SaveAction::Create(notes) => match self.api.create(&notes).await {
                Ok(set) => {
                    let mut st = self.state.lock().await;
                    tracing::info!("Created sticky set {}", set.id);
                    st.path = format!("/{}", set.id);
                    st.set_id = Some(set.id);
                    st.status = SaveStatus::Saved;
                    st.dirty = false;
                    st.last_saved = Some(Utc::now());
                    st.busy = false;
                }
                Err(err) => self.save_failed("create", err).await,
            },
            SaveAction::Replace(id, notes) => match self.api.replace(&id, &notes).await {
                Ok(_) => {
                    // Acknowledgment only; returned content never re-enters
                    // the editable state.
                    let mut st = self.state.lock().await;
                    st.status = SaveStatus::Saved;
                    st.dirty = false;
                    st.last_saved = Some(Utc::now());
                    st.busy = false;
                }
                Err(err) => self.save_failed("save", err).await,
            },
            SaveAction::Delete(id) => match self.api.delete(&id).await {
                Ok(_) => {
                    let mut st = self.state.lock().await;
                    tracing::info!("Deleted sticky set {}, starting fresh", id);
                    st.notes = vec![Note::blank()];
                    st.set_id = None;
                    st.path = "/".to_string();
                    st.status = SaveStatus::Saved;
                    st.dirty = false;
                    st.last_saved = None;
                    st.busy = false;
                }
                Err(err) => self.save_failed("delete", err).await,
            },
        }
    }

    async fn save_failed(&self, operation: &str, err: anyhow::Error) {
        tracing::error!("Failed to {} sticky set: {}", operation, err);
        let mut st = self.state.lock().await;
        st.status = SaveStatus::Error;
        st.busy = false;
    }
}

/// Picks the save operation the current state calls for.
///
/// No identifier and nothing but blank notes means no call at all; an empty
/// sequence on a known identifier becomes a delete, mirroring the server's
/// rejection of empty replace payloads.
fn decide(notes: &[Note], set_id: Option<&SetId>) -> Option<SaveAction> {
    match set_id {
        None => {
            if notes.iter().all(Note::is_blank) {
                None
            } else {
                Some(SaveAction::Create(notes.to_vec()))
            }
        }
        Some(id) => {
            if notes.is_empty() {
                Some(SaveAction::Delete(id.clone()))
            } else {
                Some(SaveAction::Replace(id.clone(), notes.to_vec()))
            }
        }
    }
}

/// Converts stored opaque values back into renderable notes.
///
/// Elements that do not match the note convention are skipped with a warning;
/// a sequence that yields nothing renderable falls back to one blank note.
fn notes_from_values(values: Vec<Value>) -> Vec<Note> {
    let notes: Vec<Note> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(note) => Some(note),
            Err(err) => {
                tracing::warn!("Skipping malformed note value: {}", err);
                None
            }
        })
        .collect();

    if notes.is_empty() {
        vec![Note::blank()]
    } else {
        notes
    }
}
