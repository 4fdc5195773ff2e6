// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/clipboard.rs
//
// Clipboard collaborator used by the copy action.

use anyhow::Context;

/// Destination for copied coordinate text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard, opened on first use and kept alive afterwards so the
/// copied text survives on platforms where the owner must stay around.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("failed to open the clipboard")?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .context("failed to write to the clipboard")
    }
}
