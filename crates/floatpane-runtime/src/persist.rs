#![forbid(unsafe_code)]

//! Serialization of panel geometry to and from the backing store.
//!
//! Geometry is stored as a small JSON object under a single fixed key.
//! Loading is forgiving by design: a missing entry, unreadable backend,
//! malformed JSON, or non-finite numbers all fall back to the default
//! placement for the current viewport, so a corrupt record can never
//! wedge the panel offscreen or crash hydration. Whatever comes out of
//! the store is re-clamped against the live viewport before use, since
//! the viewport that produced the record may no longer exist.

use floatpane_core::geometry::{Rect, ViewportSize};
use floatpane_layout::policy::{clamp, default_rect};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::PanelStore;

/// Store key the panel geometry is persisted under.
pub const STORAGE_KEY: &str = "property-inspector:panel-state";

/// Wire form of a persisted panel rectangle.
///
/// Kept separate from [`Rect`] so the storage schema can evolve without
/// touching geometry types. Unknown fields in stored records are
/// ignored, which lets newer writers coexist with older readers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct PanelRecord {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl From<Rect> for PanelRecord {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<PanelRecord> for Rect {
    fn from(record: PanelRecord) -> Self {
        Rect::new(record.x, record.y, record.width, record.height)
    }
}

/// Load the persisted rectangle, clamped against `viewport`.
///
/// Returns [`default_rect`] for the viewport when the store has no
/// record, the backend errors, or the stored payload does not parse.
/// Never returns an error: persistence problems are logged and absorbed
/// here so hydration always produces a usable rectangle.
pub fn load_rect<S: PanelStore>(store: &S, viewport: ViewportSize) -> Rect {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = STORAGE_KEY, "no persisted geometry, using default");
            return default_rect(viewport);
        }
        Err(err) => {
            warn!(key = STORAGE_KEY, error = %err, "store read failed, using default");
            return default_rect(viewport);
        }
    };

    match serde_json::from_str::<PanelRecord>(&raw) {
        Ok(record) => clamp(record.into(), viewport),
        Err(err) => {
            warn!(key = STORAGE_KEY, error = %err, "persisted geometry malformed, using default");
            default_rect(viewport)
        }
    }
}

/// Persist `rect` under [`STORAGE_KEY`].
///
/// Write failures are logged and swallowed; persistence is best-effort
/// and must never interrupt an interaction.
pub fn save_rect<S: PanelStore>(store: &mut S, rect: Rect) {
    let record = PanelRecord::from(rect);
    let payload = match serde_json::to_string(&record) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(key = STORAGE_KEY, error = %err, "failed to serialize panel geometry");
            return;
        }
    };
    if let Err(err) = store.set(STORAGE_KEY, &payload) {
        warn!(key = STORAGE_KEY, error = %err, "failed to persist panel geometry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError, StoreResult};

    const VIEWPORT: ViewportSize = ViewportSize::new(1280.0, 720.0);

    #[test]
    fn roundtrip_preserves_in_bounds_rect() {
        let mut store = MemoryStore::new();
        let rect = Rect::new(100.0, 80.0, 360.0, 420.0);
        save_rect(&mut store, rect);
        assert_eq!(load_rect(&store, VIEWPORT), rect);
    }

    #[test]
    fn missing_record_yields_default() {
        let store = MemoryStore::new();
        assert_eq!(load_rect(&store, VIEWPORT), default_rect(VIEWPORT));
    }

    #[test]
    fn wildly_out_of_range_record_is_pulled_back_on_screen() {
        let store = MemoryStore::with_entry(
            STORAGE_KEY,
            r#"{"x":9999.0,"y":9999.0,"width":2000.0,"height":50.0}"#,
        );
        // Size clamps to 620x220, then position clamps to the margin tier.
        assert_eq!(
            load_rect(&store, VIEWPORT),
            Rect::new(636.0, 476.0, 620.0, 220.0)
        );
    }

    #[test]
    fn non_json_record_yields_exactly_the_default() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "definitely not json");
        assert_eq!(load_rect(&store, VIEWPORT), default_rect(VIEWPORT));
    }

    #[test]
    fn record_missing_a_field_yields_the_default() {
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"{"x":10.0,"y":10.0,"width":300.0}"#);
        assert_eq!(load_rect(&store, VIEWPORT), default_rect(VIEWPORT));
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let store = MemoryStore::with_entry(
            STORAGE_KEY,
            r#"{"x":100.0,"y":80.0,"width":360.0,"height":420.0,"schema":2}"#,
        );
        assert_eq!(
            load_rect(&store, VIEWPORT),
            Rect::new(100.0, 80.0, 360.0, 420.0)
        );
    }

    #[test]
    fn failing_store_read_yields_default() {
        struct BrokenStore;
        impl PanelStore for BrokenStore {
            fn get(&self, _key: &str) -> StoreResult<Option<String>> {
                Err(StoreError::Unavailable("offline".into()))
            }
            fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
                Err(StoreError::Unavailable("offline".into()))
            }
        }

        assert_eq!(load_rect(&BrokenStore, VIEWPORT), default_rect(VIEWPORT));
        // And a failing write must not panic.
        save_rect(&mut BrokenStore, Rect::new(0.0, 0.0, 300.0, 300.0));
    }
}
