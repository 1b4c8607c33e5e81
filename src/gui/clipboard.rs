//! Clipboard access for the Paste button

use arboard::Clipboard;

/// Read a URL from the clipboard, trimmed of surrounding whitespace
pub fn paste_url() -> Result<String, String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .get_text()
        .map(|text| text.trim().to_string())
        .map_err(|e| format!("Failed to read clipboard: {}", e))
}
