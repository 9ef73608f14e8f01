//! A form widget for entering recipe ingredients.
//!
//! Freeform `<quantity> <unit> <ingredient>` lines typed or pasted into a text
//! box become pending rows; confirming moves them into the editable ingredient
//! table.

pub mod action;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod notification;
pub mod parser;
pub mod scroll;
pub mod view;

pub use action::Action;
pub use clipboard::{ClipboardSource, DisabledClipboard, StaticClipboard, SystemClipboard};
pub use config::{EditorConfig, ViewConfig};
pub use editor::{EditorSnapshot, EditorState, IngredientEditor, IngredientEditorBuilder};
pub use error::EditorError;
pub use model::{Collection, Field, IngredientRow};
pub use notification::Notification;
pub use parser::{parse, parse_with_report, serialize, MalformedLine, ParseOutcome};
pub use scroll::{NoScroll, ScrollCounter, ScrollTarget};
pub use view::render;
