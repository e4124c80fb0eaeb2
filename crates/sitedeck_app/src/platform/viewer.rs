use std::io::{self, Write};

use sitedeck_core::ViewerFrame;
use sitedeck_logging::{deck_debug, deck_warn};

pub const EMBED_NOTICE: &str = "If a site stays blank, its owner blocks embedding \
(X-Frame-Options). Use `open` to view it in your browser.";

/// Terminal stand-in for the embedded frame.
///
/// Content is "loaded" again only when the frame cache key changes, the same
/// contract an embedded browser view follows.
#[derive(Debug, Default)]
pub struct TerminalViewer {
    loaded_key: Option<String>,
    notice_shown: bool,
}

impl TerminalViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the content was (re)loaded.
    pub fn present(
        &mut self,
        frame: Option<&ViewerFrame>,
        out: &mut impl Write,
    ) -> io::Result<bool> {
        let Some(frame) = frame else {
            if self.loaded_key.take().is_some() {
                writeln!(out, "[viewer] nothing selected")?;
            }
            return Ok(false);
        };

        let key = frame.cache_key();
        if self.loaded_key.as_deref() == Some(key.as_str()) {
            return Ok(false);
        }
        deck_debug!("Viewer loading {} with key {}", frame.url, key);
        writeln!(out, "[viewer] loading {}", frame.url)?;
        if !self.notice_shown {
            writeln!(out, "[viewer] {EMBED_NOTICE}")?;
            self.notice_shown = true;
        }
        self.loaded_key = Some(key);
        Ok(true)
    }
}

/// Open `url` in the system browser.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    webbrowser::open(url).inspect_err(|err| {
        deck_warn!("Failed to open {} in browser: {}", url, err);
    })
}
