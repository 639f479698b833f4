use dagens_engine::PanelContent;
use dagens_runtime::Surface;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shows the loading placeholder on an interactive stderr and clears it when
/// the final content arrives. Final content itself goes to stdout through
/// the presenters, so this surface never prints it.
pub struct ProgressSurface {
    enabled: bool,
    showing: AtomicBool,
}

impl ProgressSurface {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            showing: AtomicBool::new(false),
        }
    }

    pub fn for_stderr() -> Self {
        Self::new(std::io::stderr().is_terminal())
    }
}

impl Surface for ProgressSurface {
    fn replace(&self, content: &PanelContent) {
        if !self.enabled {
            return;
        }

        let mut stderr = std::io::stderr().lock();
        if self.showing.swap(false, Ordering::SeqCst) {
            let _ = write!(stderr, "\r\x1b[2K");
        }
        if *content == PanelContent::loading()
            && let Some(text) = content.as_text()
        {
            let _ = write!(stderr, "{}", text.dimmed());
            self.showing.store(true, Ordering::SeqCst);
        }
        let _ = stderr.flush();
    }
}
