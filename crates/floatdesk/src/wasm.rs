//! WASM exports for the window engine
//!
//! This module provides wasm-bindgen exports for the DesktopEngine. The
//! host builds the DOM, forwards normalized pointer events here, and
//! applies the JSON view projections every frame.

use std::fmt;

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::ConfigError;
use crate::window::{Content, WindowOptions, WindowStatePatch};

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Log an exception thrown by a host callback; returns whether it succeeded
fn report_callback<T, E: fmt::Debug>(id: u64, what: &str, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            warn!(id, error = ?err, "{} threw", what);
            false
        }
    }
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the console panic hook and tracing subscriber
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    crate::console::init();
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: DesktopEngine::new(),
        }
    }

    /// Create a controller from a JSON config (missing fields use defaults)
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopController, JsValue> {
        let config = DesktopConfig::from_json(config_json).map_err(to_js)?;
        Ok(Self {
            engine: DesktopEngine::with_config(config),
        })
    }

    // =========================================================================
    // Desktop area
    // =========================================================================

    /// Initialize the desktop area from the container's viewport rect
    #[wasm_bindgen]
    pub fn init(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.engine.init(x, y, width, height);
    }

    /// Container resized: rescale every window
    #[wasm_bindgen]
    pub fn resize(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.engine.resize(x, y, width, height);
    }

    /// Get desktop area as JSON
    #[wasm_bindgen]
    pub fn get_desktop_area_json(&self) -> String {
        let position = self.engine.desktop_area_position();
        let size = self.engine.desktop_area_size();
        serde_json::to_string(&serde_json::json!({
            "position": position,
            "size": size,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window; `options_json` may be empty for defaults
    #[wasm_bindgen]
    pub fn open_window(
        &mut self,
        window_type: &str,
        content: Option<String>,
        options_json: &str,
    ) -> Result<u64, JsValue> {
        let options = WindowOptions::from_json(options_json).map_err(to_js)?;
        Ok(self
            .engine
            .open(window_type, content.map(Content::from), options, date_now()))
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.engine.close(id, date_now())
    }

    /// Close a window and call `callback(id)` after teardown
    #[wasm_bindgen]
    pub fn close_window_with(&mut self, id: u64, callback: js_sys::Function) -> bool {
        self.engine.close_with(id, date_now(), move |wid| {
            let result = callback.call1(&JsValue::NULL, &JsValue::from(wid));
            report_callback(wid, "close callback", result);
        })
    }

    /// Register a JS function to run once when the window is torn down
    #[wasm_bindgen]
    pub fn add_cleanup_action(&mut self, id: u64, action: js_sys::Function) -> bool {
        self.engine.add_cleanup_action(id, move || {
            report_callback(id, "cleanup action", action.call0(&JsValue::NULL));
        })
    }

    /// Replace a window's content payload
    #[wasm_bindgen]
    pub fn load_content(&mut self, id: u64, content: &str) -> bool {
        self.engine.load_content(id, content)
    }

    /// Frontmost window id, optionally of one type
    #[wasm_bindgen]
    pub fn get_top_window(&self, window_type: Option<String>) -> Option<u64> {
        self.engine.get_top_window(window_type.as_deref()).map(|w| w.id)
    }

    /// Bring a window to the front
    #[wasm_bindgen]
    pub fn move_to_top(&mut self, id: u64) -> bool {
        self.engine.move_to_top(id)
    }

    /// Clear the frontstage marker from every window
    #[wasm_bindgen]
    pub fn lose_focus(&mut self) {
        self.engine.lose_focus();
    }

    /// Toggle fullscreen on a window
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self, id: u64) -> bool {
        self.engine.toggle_fullscreen(id).unwrap_or(false)
    }

    /// Get a window's state as JSON (`null` for unknown ids)
    #[wasm_bindgen]
    pub fn get_window_state_json(&self, id: u64) -> String {
        serde_json::to_string(&self.engine.window_state(id)).unwrap_or_else(|_| "null".to_string())
    }

    /// Apply a partial state update given as JSON
    #[wasm_bindgen]
    pub fn set_window_state_json(&mut self, id: u64, patch_json: &str) -> Result<bool, JsValue> {
        let patch: WindowStatePatch = serde_json::from_str(patch_json)
            .map_err(ConfigError::from)
            .map_err(to_js)?;
        Ok(self.engine.set_window_state(id, patch))
    }

    /// Get all window views as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.engine.window_views()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the snap preview as JSON
    #[wasm_bindgen]
    pub fn get_ghost_json(&self) -> String {
        serde_json::to_string(&self.engine.ghost_view()).unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Fire due open/close timers
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(date_now())
    }

    /// Check if any open/close timer is pending
    #[wasm_bindgen]
    pub fn has_pending_transitions(&self) -> bool {
        self.engine.has_pending_transitions()
    }

    /// Ids of windows whose DOM nodes should now be detached
    #[wasm_bindgen]
    pub fn take_detached(&mut self) -> Vec<u64> {
        self.engine.take_detached()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Update pointer state from viewport coordinates
    #[wasm_bindgen]
    pub fn update_pointer_position(&mut self, x: f32, y: f32) {
        self.engine.update_pointer_position(x, y);
    }

    /// Get pointer state and snap zone as JSON
    #[wasm_bindgen]
    pub fn get_pointer_state_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "position": self.engine.pointer_state().position,
            "zone": self.engine.snap_zone(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Handle pointer down
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, pointer_id: u32, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(pointer_id, x, y, date_now());
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, pointer_id: u32, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(pointer_id, x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, pointer_id: u32) -> String {
        let result = self.engine.handle_pointer_up(pointer_id);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Window or document lost focus
    #[wasm_bindgen]
    pub fn blur(&mut self) {
        self.engine.handle_blur();
    }

    /// Start a drag on a window
    #[wasm_bindgen]
    pub fn start_drag(&mut self, id: u64, pointer_id: u32, x: f32, y: f32) -> bool {
        self.engine.start_drag(id, pointer_id, x, y)
    }

    /// Start a resize on a window (`direction` is n, s, e, w, ne, nw, se or sw)
    #[wasm_bindgen]
    pub fn start_resize(&mut self, id: u64, direction: &str, pointer_id: u32, x: f32, y: f32) -> bool {
        self.engine.start_resize(id, direction, pointer_id, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_callback() {
        assert!(report_callback(1, "close callback", Ok::<(), &str>(())));
        assert!(!report_callback(1, "cleanup action", Err::<(), _>("boom")));
    }
}
