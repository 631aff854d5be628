//! Leptos Clipboard Utilities
//!
//! Copy-to-clipboard for Leptos with a transient "copied" indicator.
//! The indicator resets after a fixed delay; a newer copy replaces any
//! pending reset so the flag never drops early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Default time the indicator stays on after a copy
pub const DEFAULT_RESET_MS: u32 = 2000;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available outside a browser window")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write text to the system clipboard via `navigator.clipboard.writeText`
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    if web_sys::window().is_none() {
        return Err(ClipboardError::Unavailable);
    }
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Indicator state, independent of any timer.
///
/// Every copy bumps the generation; a reset only applies when it carries
/// the latest generation, so stale timers are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    generation: u64,
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Mark copied and return the generation the matching reset must carry
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Clear the flag if `generation` is still current. Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.copied {
            self.copied = false;
            true
        } else {
            false
        }
    }

    /// Clear immediately and invalidate any outstanding generation
    pub fn reset(&mut self) {
        self.generation += 1;
        self.copied = false;
    }
}

/// Copy indicator signals
#[derive(Clone, Copy)]
pub struct CopySignals {
    pub copied_read: ReadSignal<bool>,
    copied_write: WriteSignal<bool>,
    /// Pointer is over the copy target (shows the copy icon)
    pub hover_read: ReadSignal<bool>,
    hover_write: WriteSignal<bool>,
    state: StoredValue<CopyState>,
    /// Pending reset; replacing it drops (and cancels) the old timer
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    reset_ms: u32,
}

pub fn create_copy_signals(reset_ms: u32) -> CopySignals {
    let (copied_read, copied_write) = signal(false);
    let (hover_read, hover_write) = signal(false);
    CopySignals {
        copied_read,
        copied_write,
        hover_read,
        hover_write,
        state: StoredValue::new(CopyState::default()),
        pending: StoredValue::new_local(None),
        reset_ms,
    }
}

impl CopySignals {
    /// Write `text` to the clipboard; flips the indicator only on success
    pub fn copy(&self, text: String) {
        let signals = *self;
        spawn_local(async move {
            match write_text(&text).await {
                Ok(()) => {
                    log::debug!(target: "clipboard", "copied {:?}", text);
                    signals.mark_copied();
                }
                Err(e) => log::warn!(target: "clipboard", "copy of {:?} failed: {}", text, e),
            }
        });
    }

    /// Turn the indicator on and (re)schedule its reset.
    ///
    /// Storing the new `Timeout` drops the previous one, which clears its
    /// `setTimeout`. Should an old callback still run, its generation is
    /// stale and `expire` ignores it.
    pub fn mark_copied(&self) {
        let mut generation = 0;
        self.state.update_value(|s| generation = s.begin());
        self.copied_write.set(true);

        let signals = *self;
        let timeout = Timeout::new(self.reset_ms, move || signals.expire(generation));
        self.pending.set_value(Some(timeout));
    }

    /// Turn the indicator off now, cancelling any pending reset
    pub fn reset(&self) {
        let was_copied = self.state.with_value(CopyState::is_copied);
        self.state.update_value(CopyState::reset);
        self.pending.set_value(None);
        if was_copied {
            self.copied_write.set(false);
        }
    }

    fn expire(&self, generation: u64) {
        let mut cleared = false;
        self.state.update_value(|s| cleared = s.expire(generation));
        if cleared {
            self.copied_write.set(false);
        }
    }
}

/// Create mouseenter handler for the copy target
pub fn make_on_mouseenter(signals: CopySignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| signals.hover_write.set(true)
}

/// Create mouseleave handler for the copy target
pub fn make_on_mouseleave(signals: CopySignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| signals.hover_write.set(false)
}

/// Create click handler that copies the text produced by `text`
pub fn make_on_click<F>(signals: CopySignals, text: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn() -> Option<String> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(text) = text() {
            signals.copy(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_copied() {
        let mut state = CopyState::default();
        assert!(!state.is_copied());

        let generation = state.begin();
        assert!(state.is_copied());
        assert_eq!(generation, 1);
    }

    #[test]
    fn test_expire_after_single_copy() {
        let mut state = CopyState::default();
        let generation = state.begin();

        assert!(state.expire(generation));
        assert!(!state.is_copied());
        // A second firing of the same timer changes nothing
        assert!(!state.expire(generation));
    }

    #[test]
    fn test_newer_copy_supersedes_pending_reset() {
        let mut state = CopyState::default();
        let first = state.begin();
        let second = state.begin();

        // The first timer fires late: indicator must stay on
        assert!(!state.expire(first));
        assert!(state.is_copied());

        assert!(state.expire(second));
        assert!(!state.is_copied());
    }

    #[test]
    fn test_reset_invalidates_outstanding_generation() {
        let mut state = CopyState::default();
        let generation = state.begin();
        state.reset();
        assert!(!state.is_copied());

        let next = state.begin();
        assert!(!state.expire(generation));
        assert!(state.is_copied());
        assert!(state.expire(next));
    }

    #[test]
    fn test_uncancelled_timers_only_latest_clears() {
        // Every scheduled reset fires, oldest first, as if none were dropped
        let mut state = CopyState::default();
        let scheduled: Vec<u64> = (0..3).map(|_| state.begin()).collect();

        for stale in &scheduled[..2] {
            assert!(!state.expire(*stale));
            assert!(state.is_copied());
        }
        assert!(state.expire(scheduled[2]));
        assert!(!state.is_copied());
    }

    #[test]
    fn test_timer_from_before_reset_cannot_clear_new_copy() {
        let mut state = CopyState::default();
        let before = state.begin();
        state.reset();
        let after = state.begin();

        // Fired out of order: the newer timer first, then the stale one
        assert!(state.expire(after));
        assert!(!state.expire(before));
        assert!(!state.is_copied());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard is not available outside a browser window"
        );
    }
}
