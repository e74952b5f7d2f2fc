//! RPC method handler for the calgroups JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches method calls to the engine
//! services via the `App` struct. The protocol keeps the original content
//! script's action names (`getCalendars`, `setCalendarVisibility`, `checkUI`)
//! verbatim.
//!
//! The caller is expected to serialize requests: two concurrent scans against
//! the same page interleave scroll manipulation unpredictably. The stdio
//! server satisfies this by handling one request at a time.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::group_store::{GroupStore, GroupStoreTrait};
use crate::page::PageAdapter;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::sync_coordinator::SyncCoordinator;
use crate::services::ui_health;
use crate::types::calendar::VisibilityTarget;

use serde_json::{json, Value};

/// Dispatch an RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method<P: PageAdapter>(
    app: &Mutex<App<P>>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        // ─── Discovery ───
        "getCalendars" => {
            let force_refresh = params
                .get("forceRefresh")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let a = app.lock().map_err(|e| e.to_string())?;
            let coordinator = SyncCoordinator::new(&a.page, &a.db, a.settings());
            let response = coordinator
                .get_calendars(force_refresh)
                .await
                .map_err(|e| e.to_string())?;
            serde_json::to_value(response).map_err(|e| e.to_string())
        }

        // ─── Visibility sync ───
        "setCalendarVisibility" => {
            let calendars = params
                .get("calendars")
                .and_then(|v| v.as_array())
                .ok_or("missing calendars")?;
            let targets = parse_targets(calendars)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let coordinator = SyncCoordinator::new(&a.page, &a.db, a.settings());
            let outcome = coordinator.set_visibility(&targets).await;
            serde_json::to_value(outcome).map_err(|e| e.to_string())
        }

        // ─── Diagnostics ───
        "checkUI" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let report = ui_health::check_ui(&a.page, a.settings());
            serde_json::to_value(report).map_err(|e| e.to_string())
        }

        // ─── Groups (options-UI boundary) ───
        "group.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let store = GroupStore::new(conn);
            let groups = store.list_groups().map_err(|e| e.to_string())?;
            let visibility = store.group_visibility().map_err(|e| e.to_string())?;
            let active = store.active_group().map_err(|e| e.to_string())?;
            Ok(json!({
                "groups": groups,
                "groupVisibility": visibility,
                "activeGroupName": active,
            }))
        }
        "group.add" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let calendars: Vec<String> = params
                .get("calendars")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let mut store = GroupStore::new(conn);
            store
                .add_group(name, calendars)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "group.remove" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let mut store = GroupStore::new(conn);
            store.remove_group(name).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "group.toggle" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let mut store = GroupStore::new(conn);

            let group = store
                .list_groups()
                .map_err(|e| e.to_string())?
                .remove(name)
                .ok_or_else(|| format!("Group not found: {}", name))?;

            // Flip the stored visibility and remember the group as active,
            // then drive every member toward the new state.
            let visible = !store
                .group_visibility()
                .map_err(|e| e.to_string())?
                .get(name)
                .copied()
                .unwrap_or(false);
            store
                .set_group_visibility(name, visible)
                .map_err(|e| e.to_string())?;
            store
                .set_active_group(Some(name))
                .map_err(|e| e.to_string())?;

            let targets: Vec<VisibilityTarget> = group
                .calendars
                .iter()
                .map(|calendar| VisibilityTarget {
                    name: calendar.clone(),
                    visible,
                })
                .collect();
            let coordinator = SyncCoordinator::new(&a.page, &a.db, a.settings());
            let outcome = coordinator.set_visibility(&targets).await;
            Ok(json!({
                "visible": visible,
                "success": outcome.success,
                "toggled": outcome.toggled,
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Parses the wire form `[{name, visible}, ...]` into targets.
fn parse_targets(calendars: &[Value]) -> Result<Vec<VisibilityTarget>, String> {
    calendars
        .iter()
        .map(|entry| {
            let name = entry
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or("calendar entry missing name")?;
            let visible = entry
                .get("visible")
                .and_then(|v| v.as_bool())
                .ok_or("calendar entry missing visible")?;
            Ok(VisibilityTarget {
                name: name.to_string(),
                visible,
            })
        })
        .collect()
}
