//! RPC method handler for the Saved.io JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the managers and services
//! reachable through `App`.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait, BookmarkUpdate};
use crate::services::bookmark_form::{infer_title_from_url, normalize_list_name, validate_list_name};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::Bookmark;
use crate::types::settings::SortOrder;

fn str_param<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    str_param(params, key).ok_or_else(|| format!("missing {}", key))
}

/// Requested order, or the configured default when absent.
fn order_param(app: &App, params: &Value) -> Result<SortOrder, String> {
    match params.get("order") {
        None | Some(Value::Null) => Ok(app.settings_engine.get_settings().bookmarks.sort_order),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("invalid order: {}", e)),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "rpc call");
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.add" => {
            let url = required_str(params, "url")?;
            let title = str_param(params, "title");
            let note = str_param(params, "note").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            // An absent list falls back to the configured default; "" or null means none.
            let list = match params.get("list") {
                None => a.settings_engine.get_settings().bookmarks.default_list.as_deref(),
                Some(v) => v.as_str(),
            };
            let mut mgr = BookmarkManager::new(a.db.connection());
            let bm = mgr.add_bookmark(url, title, list, note).map_err(|e| e.to_string())?;
            to_json(&bm)
        }
        "bookmark.import" => {
            let bookmark: Bookmark = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid bookmark: {}", e))?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            mgr.import_bookmark(&bookmark).map_err(|e| e.to_string())?;
            Ok(json!({"id": bookmark.id}))
        }
        "bookmark.get" => {
            let id = required_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = BookmarkManager::new(a.db.connection());
            let bm = mgr.get_bookmark(id).map_err(|e| e.to_string())?;
            to_json(&bm)
        }
        "bookmark.update" => {
            let id = required_str(params, "id")?;
            let list_name = match params.get("list") {
                None => None,
                Some(Value::Null) => Some(None),
                Some(v) => Some(Some(v.as_str().ok_or("invalid list")?)),
            };
            let update = BookmarkUpdate {
                url: str_param(params, "url"),
                title: str_param(params, "title"),
                note: str_param(params, "note"),
                list_name,
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            let bm = mgr.update_bookmark(id, &update).map_err(|e| e.to_string())?;
            to_json(&bm)
        }
        "bookmark.delete" => {
            let id = required_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            mgr.remove_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.list" => {
            let list = str_param(params, "list");
            let a = app.lock().map_err(|e| e.to_string())?;
            let order = order_param(&a, params)?;
            let mgr = BookmarkManager::new(a.db.connection());
            let bms = mgr.list_bookmarks(list, order).map_err(|e| e.to_string())?;
            to_json(&bms)
        }
        "bookmark.favorites" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let order = order_param(&a, params)?;
            let mgr = BookmarkManager::new(a.db.connection());
            let bms = mgr.favorites(order).map_err(|e| e.to_string())?;
            to_json(&bms)
        }
        "bookmark.open" => {
            let id = required_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            let clicks = mgr.record_click(id).map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "click_counter": clicks}))
        }
        "bookmark.favorite" => {
            let id = required_str(params, "id")?;
            let favorite = params
                .get("favorite")
                .and_then(|v| v.as_bool())
                .ok_or("missing favorite")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            mgr.set_favorite(id, favorite).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.infer_title" => {
            let url = required_str(params, "url")?;
            Ok(json!({"title": infer_title_from_url(url)}))
        }

        // ─── Lists ───
        "list.names" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = BookmarkManager::new(a.db.connection());
            let names = mgr.list_names().map_err(|e| e.to_string())?;
            to_json(&names)
        }
        "list.validate" => {
            let name = normalize_list_name(required_str(params, "name")?);
            Ok(match validate_list_name(&name) {
                Ok(()) => json!({"valid": true, "name": name}),
                Err(reason) => json!({
                    "valid": false,
                    "name": name,
                    "reason": reason.reason(),
                    "message_key": reason.message_id().key(),
                }),
            })
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.settings_engine.get_settings())
        }
        "settings.set" => {
            let key = required_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
