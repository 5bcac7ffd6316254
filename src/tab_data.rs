/// Data structures for Tab Switcher
use serde::{Deserialize, Serialize};

/// Browser-assigned tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i32);

/// Browser-assigned window identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i32);

/// A single tab inside a browser window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub active: bool,
    pub pinned: bool,
    pub fav_icon_url: Option<String>,
}

impl Tab {
    pub fn new(id: i32, title: &str, url: &str) -> Tab {
        Tab {
            id: TabId(id),
            title: title.to_string(),
            url: url.to_string(),
            active: false,
            pinned: false,
            fav_icon_url: None,
        }
    }

    /// Text the filter term is matched against
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.url)
    }

    /// Title shown in the list; untitled tabs fall back to their URL
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A browser window and its tabs, in browser order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroup {
    pub id: GroupId,
    pub tabs: Vec<Tab>,
    pub focused: bool,
    pub incognito: bool,
}

impl TabGroup {
    pub fn new(id: i32, tabs: Vec<Tab>) -> TabGroup {
        TabGroup {
            id: GroupId(id),
            tabs,
            focused: false,
            incognito: false,
        }
    }
}

/// `chrome.tabs.Tab` as handed over by the bridge. Every field is optional
/// there, so nothing is trusted until `into_snapshot` has checked it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTab {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub active: bool,
    pub pinned: bool,
    pub fav_icon_url: Option<String>,
}

/// `chrome.windows.Window` fetched with `populate: true`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawWindow {
    pub id: Option<i32>,
    pub tabs: Vec<RawTab>,
    pub focused: bool,
    pub incognito: bool,
}

impl RawTab {
    fn validate(self) -> Option<Tab> {
        let Some(id) = self.id else {
            log::warn!("Dropping tab without id: {:?}", self.url);
            return None;
        };

        Some(Tab {
            id: TabId(id),
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            active: self.active,
            pinned: self.pinned,
            fav_icon_url: self.fav_icon_url.filter(|u| !u.is_empty()),
        })
    }
}

impl RawWindow {
    fn validate(self) -> Option<TabGroup> {
        let Some(id) = self.id else {
            log::warn!("Dropping window without id ({} tabs)", self.tabs.len());
            return None;
        };

        Some(TabGroup {
            id: GroupId(id),
            tabs: self.tabs.into_iter().filter_map(RawTab::validate).collect(),
            focused: self.focused,
            incognito: self.incognito,
        })
    }
}

/// Convert raw windows into a snapshot, dropping records without ids
pub fn into_snapshot(windows: Vec<RawWindow>) -> Vec<TabGroup> {
    windows.into_iter().filter_map(RawWindow::validate).collect()
}
