/// List transforms applied to the snapshot on every render

use crate::tab_data::{GroupId, TabGroup};

/// Move the current window to the front, keeping the others in order.
/// Unset or unknown ids leave the order as it is.
pub fn move_current_first(groups: &[TabGroup], current: Option<GroupId>) -> Vec<TabGroup> {
    let position = current.and_then(|id| groups.iter().position(|group| group.id == id));

    let mut sorted = groups.to_vec();
    if let Some(index) = position {
        let group = sorted.remove(index);
        sorted.insert(0, group);
    }
    sorted
}

/// Case-sensitive subsequence test: every char of `needle` appears in
/// `haystack` in the same order, not necessarily adjacent.
pub fn fuzzy_matches(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|wanted| remaining.any(|ch| ch == wanted))
}

/// Keep only tabs whose "title url" fuzzily matches `term`, dropping
/// windows left without tabs. An empty term keeps everything.
pub fn filter_groups(groups: &[TabGroup], term: &str) -> Vec<TabGroup> {
    if term.is_empty() {
        return groups.to_vec();
    }

    let needle = term.to_lowercase();

    groups
        .iter()
        .filter_map(|group| {
            let tabs: Vec<_> = group
                .tabs
                .iter()
                .filter(|tab| fuzzy_matches(&needle, &tab.search_text().to_lowercase()))
                .cloned()
                .collect();

            if tabs.is_empty() {
                None
            } else {
                Some(TabGroup {
                    tabs,
                    ..group.clone()
                })
            }
        })
        .collect()
}

/// What the popup displays for a given snapshot, current window and term
pub fn visible_groups(groups: &[TabGroup], current: Option<GroupId>, term: &str) -> Vec<TabGroup> {
    filter_groups(&move_current_first(groups, current), term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_data::{Tab, TabId};

    fn create_test_group(id: i32, tabs: &[(i32, &str, &str)]) -> TabGroup {
        TabGroup::new(
            id,
            tabs.iter()
                .map(|(tab_id, title, url)| Tab::new(*tab_id, title, url))
                .collect(),
        )
    }

    fn sample_snapshot() -> Vec<TabGroup> {
        vec![
            create_test_group(1, &[(10, "Rust Docs", "https://doc.rust-lang.org")]),
            create_test_group(
                2,
                &[
                    (20, "Gmail", "https://mail.google.com"),
                    (21, "GitHub", "https://github.com/yewstack/yew"),
                ],
            ),
            create_test_group(3, &[(30, "Hacker News", "https://news.ycombinator.com")]),
        ]
    }

    fn group_ids(groups: &[TabGroup]) -> Vec<i32> {
        groups.iter().map(|g| g.id.0).collect()
    }

    fn tab_ids(group: &TabGroup) -> Vec<i32> {
        group.tabs.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_move_current_first() {
        let snapshot = sample_snapshot();

        let sorted = move_current_first(&snapshot, Some(GroupId(3)));

        assert_eq!(group_ids(&sorted), vec![3, 1, 2]);
        // input untouched
        assert_eq!(group_ids(&snapshot), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_current_first_middle_keeps_relative_order() {
        let sorted = move_current_first(&sample_snapshot(), Some(GroupId(2)));
        assert_eq!(group_ids(&sorted), vec![2, 1, 3]);
        assert_eq!(tab_ids(&sorted[0]), vec![20, 21]);
    }

    #[test]
    fn test_move_current_first_unset_or_empty() {
        let snapshot = sample_snapshot();

        assert_eq!(move_current_first(&snapshot, None), snapshot);
        assert!(move_current_first(&[], Some(GroupId(1))).is_empty());
    }

    #[test]
    fn test_move_current_first_unknown_id_is_noop() {
        let snapshot = sample_snapshot();
        assert_eq!(move_current_first(&snapshot, Some(GroupId(99))), snapshot);
    }

    #[test]
    fn test_fuzzy_matches() {
        assert!(fuzzy_matches("gml", "gmail mail.google.com"));
        assert!(fuzzy_matches("", "anything"));
        assert!(fuzzy_matches("abc", "abc"));
        assert!(!fuzzy_matches("gml", "docs docs.google.com"));
        assert!(!fuzzy_matches("ba", "ab"));
        assert!(!fuzzy_matches("abcd", "abc"));
        assert!(!fuzzy_matches("x", ""));
    }

    #[test]
    fn test_fuzzy_matches_needs_repeated_chars() {
        assert!(fuzzy_matches("oo", "google"));
        assert!(!fuzzy_matches("ooo", "google"));
    }

    #[test]
    fn test_filter_empty_term_keeps_everything() {
        let snapshot = sample_snapshot();
        assert_eq!(filter_groups(&snapshot, ""), snapshot);
    }

    #[test]
    fn test_filter_drops_empty_groups() {
        let filtered = filter_groups(&sample_snapshot(), "github");

        assert_eq!(group_ids(&filtered), vec![2]);
        assert_eq!(tab_ids(&filtered[0]), vec![21]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_groups(&sample_snapshot(), "HaCkEr");
        assert_eq!(group_ids(&filtered), vec![3]);
    }

    #[test]
    fn test_filter_matches_across_title_and_url() {
        // "Docs" from the title, "rust-lang" from the url
        let filtered = filter_groups(&sample_snapshot(), "docsrustlang");
        assert_eq!(group_ids(&filtered), vec![1]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_groups(&sample_snapshot(), "zzz").is_empty());
    }

    #[test]
    fn test_filtered_tabs_all_match() {
        let term = "gh";
        let filtered = filter_groups(&sample_snapshot(), term);

        assert!(!filtered.is_empty());
        for group in &filtered {
            assert!(!group.tabs.is_empty());
            for tab in &group.tabs {
                assert!(fuzzy_matches(term, &tab.search_text().to_lowercase()));
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let snapshot = sample_snapshot();
        for term in ["", "g", "gml", "https", "news", "zzz"] {
            let once = filter_groups(&snapshot, term);
            assert_eq!(filter_groups(&once, term), once, "term {:?}", term);
        }
    }

    #[test]
    fn test_filter_keeps_group_fields() {
        let mut snapshot = sample_snapshot();
        snapshot[1].focused = true;

        let filtered = filter_groups(&snapshot, "gmail");
        assert!(filtered[0].focused);
        assert_eq!(filtered[0].tabs[0].id, TabId(20));
    }

    #[test]
    fn test_visible_groups_gmail_example() {
        let snapshot = vec![create_test_group(
            1,
            &[(1, "Gmail", "mail.google.com"), (2, "Docs", "docs.google.com")],
        )];

        assert_eq!(move_current_first(&snapshot, Some(GroupId(1))), snapshot);

        let visible = visible_groups(&snapshot, Some(GroupId(1)), "gml");
        assert_eq!(visible.len(), 1);
        assert_eq!(tab_ids(&visible[0]), vec![1]);
    }

    #[test]
    fn test_visible_groups_orders_then_filters() {
        let visible = visible_groups(&sample_snapshot(), Some(GroupId(3)), "https");
        assert_eq!(group_ids(&visible), vec![3, 1, 2]);
    }
}
