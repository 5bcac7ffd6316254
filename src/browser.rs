/// Bridge to chrome.windows / chrome.tabs

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::state::PopupAction;
use crate::tab_data::{GroupId, RawWindow, TabGroup, TabId, into_snapshot};

/// Delay before the snapshot fetch. Fetching immediately leaves the popup
/// stuck at the wrong size (https://bugs.chromium.org/p/chromium/issues/detail?id=428044).
pub const SNAPSHOT_FETCH_DELAY_MS: i32 = 100;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentWindowId() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getAllWindows() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusWindow(window_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;
}

/// Commands the popup sends back to the browser. None of them report
/// success: a stale id is the browser's problem.
pub trait TabGroupSource {
    fn activate_tab(&self, tab: TabId);
    fn focus_group(&self, group: GroupId);
    fn remove_tab(&self, tab: TabId);
}

/// The real browser, reached through `popup.js`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeTabs;

impl TabGroupSource for ChromeTabs {
    fn activate_tab(&self, tab: TabId) {
        log::debug!("Activating tab {}", tab.0);
        spawn_local(async move {
            if let Err(e) = activateTab(tab.0).await {
                log::debug!("activateTab({}) rejected: {:?}", tab.0, e);
            }
        });
    }

    fn focus_group(&self, group: GroupId) {
        log::debug!("Focusing window {}", group.0);
        spawn_local(async move {
            if let Err(e) = focusWindow(group.0).await {
                log::debug!("focusWindow({}) rejected: {:?}", group.0, e);
            }
        });
    }

    fn remove_tab(&self, tab: TabId) {
        log::debug!("Removing tab {}", tab.0);
        spawn_local(async move {
            if let Err(e) = removeTab(tab.0).await {
                log::debug!("removeTab({}) rejected: {:?}", tab.0, e);
            }
        });
    }
}

/// Make the tab active and bring its window to the front
pub fn activate_tab<S: TabGroupSource + ?Sized>(source: &S, group: GroupId, tab: TabId) {
    source.activate_tab(tab);
    source.focus_group(group);
}

/// Ask the browser to close the tab and return the action that mirrors
/// the removal in the local snapshot
pub fn close_tab<S: TabGroupSource + ?Sized>(source: &S, group: GroupId, tab: TabId) -> PopupAction {
    source.remove_tab(tab);
    PopupAction::TabClosed { group, tab }
}

// Helper functions

pub async fn fetch_current_group_id() -> Result<GroupId, String> {
    let id_js = getCurrentWindowId()
        .await
        .map_err(|e| format!("Failed to get current window: {:?}", e))?;

    let id: i32 = serde_wasm_bindgen::from_value(id_js)
        .map_err(|e| format!("Failed to parse window id: {:?}", e))?;

    Ok(GroupId(id))
}

/// Full window/tab snapshot, fetched after `delay_ms`
pub async fn fetch_all_groups(delay_ms: i32) -> Result<Vec<TabGroup>, String> {
    sleep(delay_ms).await?;

    let windows_js = getAllWindows()
        .await
        .map_err(|e| format!("Failed to get windows: {:?}", e))?;

    let windows: Vec<RawWindow> = serde_wasm_bindgen::from_value(windows_js)
        .map_err(|e| format!("Failed to parse windows: {:?}", e))?;

    Ok(into_snapshot(windows))
}

async fn sleep(delay_ms: i32) -> Result<(), String> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms)
        });

        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Delay failed: {:?}", e))
}
