/// Reusable UI components

use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::domain::display_domain;
use crate::tab_data::{GroupId, Tab, TabGroup, TabId};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter_term: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-input"
                placeholder="Filter tabs..."
                autofocus={true}
                value={props.filter_term.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub group_id: GroupId,
    pub tab: Tab,
    pub on_activate: Callback<(GroupId, TabId)>,
    pub on_close: Callback<(GroupId, TabId)>,
}

#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let ids = (props.group_id, props.tab.id);

    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| on_activate.emit(ids))
    };

    // The row itself activates the tab, so the close click must not bubble
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(ids);
        })
    };

    let tab = &props.tab;
    let class = if tab.active { "tab-row tab-row-active" } else { "tab-row" };

    html! {
        <div {class} {onclick} title={tab.url.clone()}>
            if let Some(icon) = &tab.fav_icon_url {
                <img class="tab-favicon" src={icon.clone()} alt="" />
            } else {
                <span class="tab-favicon"></span>
            }
            <div class="tab-text">
                <span class="tab-title">
                    if tab.pinned {
                        {"📌 "}
                    }
                    {tab.label()}
                </span>
                if let Some(domain) = display_domain(&tab.url) {
                    <span class="tab-domain">{domain}</span>
                }
            </div>
            <button class="tab-close" title="Close tab" onclick={on_close_click}>
                {"✕"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabGroupCardProps {
    pub group: TabGroup,
    pub heading: AttrValue,
    pub on_activate: Callback<(GroupId, TabId)>,
    pub on_close: Callback<(GroupId, TabId)>,
}

#[function_component(TabGroupCard)]
pub fn tab_group_card(props: &TabGroupCardProps) -> Html {
    let group = &props.group;
    let count = group.tabs.len();

    html! {
        <section class="tab-group">
            <div class="tab-group-header">
                <span>
                    {props.heading.clone()}
                    if group.incognito {
                        {" (incognito)"}
                    }
                </span>
                <span>{format!("{} {}", count, if count == 1 { "tab" } else { "tabs" })}</span>
            </div>
            {for group.tabs.iter().map(|tab| html! {
                <TabRow
                    key={tab.id.0}
                    group_id={group.id}
                    tab={tab.clone()}
                    on_activate={props.on_activate.clone()}
                    on_close={props.on_close.clone()}
                />
            })}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabGroupListProps {
    pub groups: Vec<TabGroup>,
    pub current_group: Option<GroupId>,
    pub on_activate: Callback<(GroupId, TabId)>,
    pub on_close: Callback<(GroupId, TabId)>,
}

#[function_component(TabGroupList)]
pub fn tab_group_list(props: &TabGroupListProps) -> Html {
    html! {
        <div class="tab-group-list">
            {for props.groups.iter().enumerate().map(|(index, group)| {
                let heading = if Some(group.id) == props.current_group {
                    "Current window".to_string()
                } else {
                    format!("Window {}", index + 1)
                };

                html! {
                    <TabGroupCard
                        key={group.id.0}
                        group={group.clone()}
                        {heading}
                        on_activate={props.on_activate.clone()}
                        on_close={props.on_close.clone()}
                    />
                }
            })}
        </div>
    }
}
