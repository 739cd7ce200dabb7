//! Cancellable repeating timer for the typewriter reveal.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Owns at most one `setInterval` handle.
///
/// `cancel` is idempotent and safe after the owning component is gone, so
/// it can be called from the tick itself, the skip button and `on_cleanup`.
#[derive(Clone, Copy)]
pub struct Ticker {
    handle: StoredValue<Option<IntervalHandle>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            handle: StoredValue::new(None),
        }
    }

    /// Call `on_tick` every `period` until it returns `false` or the ticker
    /// is cancelled. Restarting replaces any running interval.
    pub fn start(self, period: Duration, on_tick: impl Fn() -> bool + 'static) -> Result<(), JsValue> {
        self.cancel();
        let handle = set_interval_with_handle(
            move || {
                if !on_tick() {
                    self.cancel();
                }
            },
            period,
        )?;
        self.handle.set_value(Some(handle));
        Ok(())
    }

    pub fn cancel(self) {
        if let Some(Some(handle)) = self.handle.try_update_value(Option::take) {
            handle.clear();
        }
    }

    pub fn is_running(self) -> bool {
        self.handle.try_with_value(Option::is_some).unwrap_or(false)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
