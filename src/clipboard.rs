use async_trait::async_trait;
use log::debug;

use crate::error::EditorError;

/// Source of text for the Paste action
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Get the backend name (e.g., "system", "static")
    fn name(&self) -> &str;

    /// Read the current clipboard contents as plain text
    async fn read_text(&self) -> Result<String, EditorError>;
}

/// The OS clipboard, read through `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSource for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    async fn read_text(&self) -> Result<String, EditorError> {
        // arboard blocks on X11/Wayland round trips
        let result = tokio::task::spawn_blocking(|| -> Result<String, arboard::Error> {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.get_text()
        })
        .await
        .map_err(|e| EditorError::ClipboardUnavailable(e.to_string()))?;

        let text = result.map_err(|e| EditorError::ClipboardUnavailable(e.to_string()))?;
        debug!("Read {} chars from system clipboard", text.len());
        Ok(text)
    }
}

/// Clipboard with fixed contents, for hosts without a system clipboard
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    text: String,
}

impl StaticClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ClipboardSource for StaticClipboard {
    fn name(&self) -> &str {
        "static"
    }

    async fn read_text(&self) -> Result<String, EditorError> {
        Ok(self.text.clone())
    }
}

/// Clipboard that always refuses access
#[derive(Debug, Clone, Default)]
pub struct DisabledClipboard;

#[async_trait]
impl ClipboardSource for DisabledClipboard {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn read_text(&self) -> Result<String, EditorError> {
        Err(EditorError::ClipboardUnavailable(
            "clipboard access is disabled in configuration".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_clipboard_returns_text() {
        let clipboard = StaticClipboard::new("2 cups flour");
        assert_eq!(clipboard.read_text().await.unwrap(), "2 cups flour");
        assert_eq!(clipboard.name(), "static");
    }

    #[tokio::test]
    async fn test_disabled_clipboard_fails() {
        let result = DisabledClipboard.read_text().await;
        assert!(matches!(result, Err(EditorError::ClipboardUnavailable(_))));
    }
}
