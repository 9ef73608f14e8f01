use log::{debug, info, warn};
use serde::Serialize;

use crate::action::Action;
use crate::clipboard::{ClipboardSource, DisabledClipboard, SystemClipboard};
use crate::config::{EditorConfig, NotificationConfig};
use crate::error::EditorError;
use crate::model::{Collection, Field, IngredientRow};
use crate::notification::Notification;
use crate::parser::{self, MalformedLine};
use crate::scroll::{NoScroll, ScrollTarget};

/// Coarse editor state, derived from the row sets and the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorState {
    /// Nothing pending, no toast
    Idle,
    /// The text box holds at least one well-formed line
    EditingPending,
    /// Rows were just confirmed and the success toast is still up
    Confirming,
}

/// Serializable copy of what the user currently sees
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub state: EditorState,
    pub confirmed: Vec<IngredientRow>,
    pub pending: Vec<IngredientRow>,
    pub text: String,
    pub malformed_lines: usize,
    pub notification: Option<String>,
}

/// The ingredient entry form: confirmed rows, pending rows parsed from the
/// text box, and the success toast.
pub struct IngredientEditor {
    confirmed: Vec<IngredientRow>,
    pending: Vec<IngredientRow>,
    text: String,
    malformed: Vec<MalformedLine>,
    notification: Option<Notification>,
    notification_config: NotificationConfig,
    clipboard: Box<dyn ClipboardSource>,
    scroll: Box<dyn ScrollTarget>,
}

impl IngredientEditor {
    /// Creates a new builder for the editor
    ///
    /// # Example
    /// ```
    /// use ingredient_editor::{IngredientEditor, StaticClipboard};
    ///
    /// let editor = IngredientEditor::builder()
    ///     .clipboard(StaticClipboard::new("2 cups flour"))
    ///     .build();
    /// assert_eq!(editor.confirmed().len(), 1);
    /// ```
    pub fn builder() -> IngredientEditorBuilder {
        IngredientEditorBuilder::default()
    }

    pub fn confirmed(&self) -> &[IngredientRow] {
        &self.confirmed
    }

    pub fn pending(&self) -> &[IngredientRow] {
        &self.pending
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-blank lines of the current text that the parser dropped
    pub fn malformed_lines(&self) -> &[MalformedLine] {
        &self.malformed
    }

    /// The toast, if it is still visible
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible())
    }

    pub fn can_confirm(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Delete buttons are only offered while more than one confirmed row exists
    pub fn can_delete_confirmed(&self) -> bool {
        self.confirmed.len() > 1
    }

    pub fn state(&self) -> EditorState {
        if !self.pending.is_empty() {
            EditorState::EditingPending
        } else if self.notification().is_some() {
            EditorState::Confirming
        } else {
            EditorState::Idle
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            state: self.state(),
            confirmed: self.confirmed.clone(),
            pending: self.pending.clone(),
            text: self.text.clone(),
            malformed_lines: self.malformed.len(),
            notification: self.notification().map(|n| n.message().to_string()),
        }
    }

    /// Store the text verbatim and re-derive the pending rows from it
    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let outcome = parser::parse_with_report(&self.text);

        for line in &outcome.malformed {
            debug!("Dropped malformed ingredient {}", line);
        }

        self.malformed = outcome.malformed;
        self.set_pending(outcome.rows);
    }

    /// Replace the text with the clipboard contents.
    ///
    /// Returns false, leaving state untouched, when the clipboard can't be read.
    pub async fn on_paste(&mut self) -> bool {
        match self.clipboard.read_text().await {
            Ok(text) => {
                debug!(
                    "Pasted {} chars from {} clipboard",
                    text.len(),
                    self.clipboard.name()
                );
                self.on_text_changed(text);
                true
            }
            Err(e) => {
                warn!("Failed to read clipboard contents: {}", e);
                false
            }
        }
    }

    pub fn on_clear(&mut self) {
        self.text.clear();
        self.malformed.clear();
        self.set_pending(Vec::new());
    }

    /// Move every pending row to the end of the confirmed table.
    ///
    /// No-op returning false when nothing is pending.
    pub fn on_confirm(&mut self) -> bool {
        if self.pending.is_empty() {
            debug!("Confirm ignored, no pending rows");
            return false;
        }

        let added = self.pending.len();
        let rows = std::mem::take(&mut self.pending);
        self.confirmed.extend(rows);
        self.text.clear();
        self.malformed.clear();
        self.scroll.scroll_to_end();

        self.notification = Some(Notification::show(
            self.notification_config.message.clone(),
            self.notification_config.auto_hide(),
        ));

        info!(
            "Confirmed {} ingredient rows ({} total)",
            added,
            self.confirmed.len()
        );
        true
    }

    pub fn on_delete_confirmed_row(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(Collection::Confirmed, index)?;
        if !self.can_delete_confirmed() {
            return Err(EditorError::LastConfirmedRow);
        }

        let removed = self.confirmed.remove(index);
        debug!("Deleted confirmed row {}: '{}'", index, removed);
        Ok(())
    }

    /// Insert a blank row before `index`; `index == len` appends
    pub fn on_insert_row_above(&mut self, index: usize) -> Result<(), EditorError> {
        if index > self.confirmed.len() {
            return Err(EditorError::RowOutOfRange {
                collection: Collection::Confirmed,
                index,
                len: self.confirmed.len(),
            });
        }

        self.confirmed.insert(index, IngredientRow::default());
        debug!("Inserted blank confirmed row at {}", index);
        Ok(())
    }

    /// Set one field of one row. Pending edits are written back to the text box.
    pub fn on_edit_field(
        &mut self,
        collection: Collection,
        index: usize,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.check_index(collection, index)?;

        match collection {
            Collection::Confirmed => self.confirmed[index].set(field, value),
            Collection::Pending => {
                self.pending[index].set(field, value);
                self.reconcile_text();
                self.scroll.scroll_to_end();
            }
        }

        debug!("Edited {} row {} {}", collection, index, field.as_str());
        Ok(())
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.dismiss();
        }
    }

    /// Apply one user action. Returns whether the view needs re-rendering.
    pub async fn dispatch(&mut self, action: Action) -> Result<bool, EditorError> {
        match action {
            Action::SetText(text) => self.on_text_changed(text),
            Action::Paste => return Ok(self.on_paste().await),
            Action::Clear => self.on_clear(),
            Action::Confirm => return Ok(self.on_confirm()),
            Action::DeleteConfirmed(index) => self.on_delete_confirmed_row(index)?,
            Action::InsertAbove(index) => self.on_insert_row_above(index)?,
            Action::EditField {
                collection,
                index,
                field,
                value,
            } => self.on_edit_field(collection, index, field, value)?,
            Action::DismissNotification => self.dismiss_notification(),
            Action::Render | Action::Snapshot => return Ok(false),
        }
        Ok(true)
    }

    fn set_pending(&mut self, rows: Vec<IngredientRow>) {
        self.pending = rows;
        self.scroll.scroll_to_end();
    }

    /// Rewrite the text box from the pending rows after a direct row edit.
    /// Pending is not re-parsed, so an edited field may hold spaces or be empty.
    fn reconcile_text(&mut self) {
        self.text = parser::serialize(&self.pending);
        self.malformed.clear();
    }

    fn check_index(&self, collection: Collection, index: usize) -> Result<(), EditorError> {
        let len = match collection {
            Collection::Confirmed => self.confirmed.len(),
            Collection::Pending => self.pending.len(),
        };
        if index >= len {
            return Err(EditorError::RowOutOfRange {
                collection,
                index,
                len,
            });
        }
        Ok(())
    }
}

/// Builder for wiring the editor's collaborators
#[derive(Default)]
pub struct IngredientEditorBuilder {
    config: Option<EditorConfig>,
    clipboard: Option<Box<dyn ClipboardSource>>,
    scroll: Option<Box<dyn ScrollTarget>>,
    confirmed: Vec<IngredientRow>,
}

impl IngredientEditorBuilder {
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the clipboard chosen from configuration
    pub fn clipboard(mut self, clipboard: impl ClipboardSource + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn scroll_target(mut self, scroll: impl ScrollTarget + 'static) -> Self {
        self.scroll = Some(Box::new(scroll));
        self
    }

    /// Start with these confirmed rows instead of a single blank row
    pub fn confirmed_rows(mut self, rows: Vec<IngredientRow>) -> Self {
        self.confirmed = rows;
        self
    }

    pub fn build(self) -> IngredientEditor {
        let config = self.config.unwrap_or_default();

        let clipboard = self.clipboard.unwrap_or_else(|| {
            if config.clipboard.enabled {
                Box::new(SystemClipboard)
            } else {
                Box::new(DisabledClipboard)
            }
        });

        let mut confirmed = self.confirmed;
        if confirmed.is_empty() {
            confirmed.push(IngredientRow::default());
        }

        IngredientEditor {
            confirmed,
            pending: Vec::new(),
            text: String::new(),
            malformed: Vec::new(),
            notification: None,
            notification_config: config.notification,
            clipboard,
            scroll: self.scroll.unwrap_or_else(|| Box::new(NoScroll)),
        }
    }
}

impl Default for IngredientEditor {
    fn default() -> Self {
        Self::builder().build()
    }
}
