//! User actions, as sent by a host to the editor.
//!
//! The host binary reads one action per line:
//!
//! ```text
//! text 2 cups flour\n1 tsp salt
//! edit pending 0 unit tbsp
//! confirm
//! ```

use std::str::FromStr;

use crate::error::EditorError;
use crate::model::{Collection, Field};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the raw text; `\n` escapes become line breaks
    SetText(String),
    Paste,
    Clear,
    Confirm,
    DeleteConfirmed(usize),
    InsertAbove(usize),
    EditField {
        collection: Collection,
        index: usize,
        field: Field,
        value: String,
    },
    DismissNotification,
    /// Host-only: print the HTML view
    Render,
    /// Host-only: print the state as JSON
    Snapshot,
}

impl Action {
    /// Actions the host answers itself without touching editor state
    pub fn is_host_query(&self) -> bool {
        matches!(self, Action::Render | Action::Snapshot)
    }
}

/// Split off the first space-delimited word, returning it and the remainder
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""))
}

fn parse_index(word: &str) -> Result<usize, EditorError> {
    word.parse::<usize>()
        .map_err(|_| EditorError::InvalidCommand(format!("expected a row index, got '{}'", word)))
}

impl FromStr for Action {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = next_word(line);

        match command.to_lowercase().as_str() {
            "text" => Ok(Action::SetText(rest.replace("\\n", "\n"))),
            "paste" => Ok(Action::Paste),
            "clear" => Ok(Action::Clear),
            "confirm" => Ok(Action::Confirm),
            "dismiss" => Ok(Action::DismissNotification),
            "render" => Ok(Action::Render),
            "json" => Ok(Action::Snapshot),
            "delete" => Ok(Action::DeleteConfirmed(parse_index(rest.trim())?)),
            "insert" => Ok(Action::InsertAbove(parse_index(rest.trim())?)),
            "edit" => {
                let (collection, rest) = next_word(rest);
                let (index, rest) = next_word(rest);
                let (field, value) = next_word(rest);
                Ok(Action::EditField {
                    collection: collection.parse()?,
                    index: parse_index(index)?,
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "" => Err(EditorError::InvalidCommand("empty command".to_string())),
            other => Err(EditorError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            ))),
        }
    }
}
