/// Popup state and the reducer that owns every mutation of it

use std::rc::Rc;

use yew::functional::Reducible;

use crate::pipeline::visible_groups;
use crate::tab_data::{GroupId, TabGroup, TabId};

/// Progress of the one-time snapshot fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Everything the popup renders from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupState {
    pub groups: Vec<TabGroup>,
    pub current_group: Option<GroupId>,
    pub filter_term: String,
    pub status: LoadStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    SetCurrentGroup(GroupId),
    SnapshotLoaded(Vec<TabGroup>),
    SnapshotFailed(String),
    SetFilterTerm(String),
    TabClosed { group: GroupId, tab: TabId },
}

impl PopupState {
    pub fn new() -> Self {
        PopupState::default()
    }

    /// Groups to display: current window first, then filtered by the term
    pub fn visible_groups(&self) -> Vec<TabGroup> {
        visible_groups(&self.groups, self.current_group, &self.filter_term)
    }

    /// Remove one tab from one window. Returns false, touching nothing,
    /// when either id is stale.
    pub fn remove_tab(&mut self, group_id: GroupId, tab_id: TabId) -> bool {
        self.groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .and_then(|group| {
                let index = group.tabs.iter().position(|t| t.id == tab_id)?;
                group.tabs.remove(index);
                Some(())
            })
            .is_some()
    }

    /// Apply one action, returning whether anything changed
    pub fn apply(&mut self, action: PopupAction) -> bool {
        match action {
            PopupAction::SetCurrentGroup(id) => {
                let changed = self.current_group != Some(id);
                self.current_group = Some(id);
                changed
            }
            PopupAction::SnapshotLoaded(groups) => {
                log::info!("Loaded {} windows", groups.len());
                self.groups = groups;
                self.status = LoadStatus::Ready;
                true
            }
            PopupAction::SnapshotFailed(message) => {
                self.status = LoadStatus::Failed(message);
                true
            }
            PopupAction::SetFilterTerm(term) => {
                let changed = self.filter_term != term;
                self.filter_term = term;
                changed
            }
            PopupAction::TabClosed { group, tab } => {
                let removed = self.remove_tab(group, tab);
                if !removed {
                    log::debug!("Closed tab {:?} not found in window {:?}", tab, group);
                }
                removed
            }
        }
    }
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
