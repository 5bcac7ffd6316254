/// Popup UI for Tab Switcher extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::browser::{
    ChromeTabs, SNAPSHOT_FETCH_DELAY_MS, activate_tab, close_tab, fetch_all_groups,
    fetch_current_group_id,
};
use crate::state::{LoadStatus, PopupAction, PopupState};
use crate::tab_data::{GroupId, TabId};
use crate::ui::components::{FilterBar, TabGroupList};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PopupState::new);

    // Fetch the current window id and the full snapshot once, on mount
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let current = dispatcher.clone();
            spawn_local(async move {
                match fetch_current_group_id().await {
                    Ok(id) => current.dispatch(PopupAction::SetCurrentGroup(id)),
                    Err(e) => log::warn!("{}", e),
                }
            });

            spawn_local(async move {
                match fetch_all_groups(SNAPSHOT_FETCH_DELAY_MS).await {
                    Ok(groups) => dispatcher.dispatch(PopupAction::SnapshotLoaded(groups)),
                    Err(e) => {
                        log::warn!("{}", e);
                        dispatcher.dispatch(PopupAction::SnapshotFailed(e));
                    }
                }
            });
            || ()
        });
    }

    let on_filter_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |term: String| {
            dispatcher.dispatch(PopupAction::SetFilterTerm(term));
        })
    };

    let on_activate = Callback::from(move |(group, tab): (GroupId, TabId)| {
        activate_tab(&ChromeTabs, group, tab);
    });

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(group, tab): (GroupId, TabId)| {
            dispatcher.dispatch(close_tab(&ChromeTabs, group, tab));
        })
    };

    let groups = state.visible_groups();

    html! {
        <div class="popup-container">
            <FilterBar
                filter_term={state.filter_term.clone()}
                on_change={on_filter_change}
            />

            {match &state.status {
                LoadStatus::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                LoadStatus::Failed(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Could not load tabs"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                LoadStatus::Ready => if groups.is_empty() {
                    html! {
                        <div class="empty-state">
                            if state.filter_term.is_empty() {
                                <p>{"No open tabs."}</p>
                            } else {
                                <p>{format!("No tabs match \"{}\".", state.filter_term)}</p>
                            }
                        </div>
                    }
                } else {
                    html! {
                        <TabGroupList
                            {groups}
                            current_group={state.current_group}
                            {on_activate}
                            {on_close}
                        />
                    }
                },
            }}
        </div>
    }
}
