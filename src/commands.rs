//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

use wasm_bindgen::prelude::*;
use crate::models::Photo;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejections arrive as plain strings from `Result<_, String>` commands
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// True when running inside the Tauri webview (`withGlobalTauri`)
fn tauri_available() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("__TAURI__")).unwrap_or(false))
        .unwrap_or(false)
}

// ========================
// Photo Commands
// ========================

/// One-shot fetch of the photo list through the backend
pub async fn fetch_photos() -> Result<Vec<Photo>, String> {
    if !tauri_available() {
        return Err("Tauri bridge unavailable".to_string());
    }
    let result = invoke("fetch_photos", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
