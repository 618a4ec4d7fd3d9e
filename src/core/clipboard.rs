//! Copy to clipboard with a short-lived "copied" acknowledgement.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;

/// How long the acknowledgement stays visible after a copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// Put `text` on the system clipboard. Failure (no clipboard, headless session)
/// is not an error for callers; it is logged and reported as `false`.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Clipboard unavailable: {}", e);
            false
        }
    }
}

/// Confirmation for a successful one-shot copy from the command line. On X11
/// and Wayland the copied text is served by this process, so it only survives
/// the exit when a clipboard manager picks it up.
pub fn copied_notice() -> &'static str {
    if cfg!(target_os = "linux") {
        "Copied to clipboard (kept after exit only if a clipboard manager is running)."
    } else {
        "Copied to clipboard."
    }
}

/// "Copied" flag, set on trigger and cleared by a one-shot timer task.
#[derive(Debug, Clone, Default)]
pub struct CopyAck {
    copied: Arc<AtomicBool>,
}

impl CopyAck {
    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    /// Set the flag and schedule its reset after [`COPY_ACK_DURATION`].
    pub fn trigger(&self, rt: &Handle) {
        self.copied.store(true, Ordering::SeqCst);
        let copied = Arc::clone(&self.copied);
        rt.spawn(async move {
            tokio::time::sleep(COPY_ACK_DURATION).await;
            copied.store(false, Ordering::SeqCst);
        });
    }
}

/// Copy `text` and acknowledge. The acknowledgement does not depend on the
/// copy succeeding.
pub fn copy_with_ack(text: &str, ack: &CopyAck, rt: &Handle) {
    copy_to_clipboard(text);
    ack.trigger(rt);
}
