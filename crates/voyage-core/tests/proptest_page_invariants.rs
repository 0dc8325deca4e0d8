//! Property tests for page controller invariants.
//!
//! 1. Navigation toggle is a pure two-state flip
//! 2. Exactly one tab, panel and image selected after every activation
//! 3. Roving focus stays in range and wraps at both ends
//! 4. Moving focus never changes the selection

use proptest::prelude::*;
use voyage_core::{Config, ElementId, Event, Key, Page};
use voyage_navigation::{EXPANDED_ATTR, ICON_PROPERTY, VISIBLE_ATTR};
use voyage_tabs::{HIDDEN_ATTR, SELECTED_ATTR};

fn page_html(tab_count: usize) -> String {
    let mut images = String::new();
    let mut tabs = String::new();
    let mut panels = String::new();

    for i in 0..tab_count {
        let first = i == 0;
        images.push_str(&format!(
            r#"<picture id="i{i}"{}><img src="{i}.png" alt=""></picture>"#,
            if first { "" } else { r#" class="hidden""# }
        ));
        tabs.push_str(&format!(
            r#"<button id="t{i}" role="tab" aria-selected="{first}" tabindex="{}" aria-controls="p{i}" data-image="i{i}">Tab {i}</button>"#,
            if first { 0 } else { -1 }
        ));
        panels.push_str(&format!(
            r#"<article id="p{i}" role="tabpanel"{}>Panel {i}</article>"#,
            if first { "" } else { " hidden" }
        ));
    }

    format!(
        r#"<!DOCTYPE html><html><body>
<header>
  <button class="mobile-nav-toggle" aria-expanded="false"></button>
  <nav><ul class="primary-navigation" data-visible="false"></ul></nav>
</header>
<main>{images}<div role="tablist">{tabs}</div>{panels}</main>
</body></html>"#
    )
}

fn tab_ids(page: &Page) -> Vec<ElementId> {
    let tabs = page.tabs().expect("tabs wired");
    (0..tabs.len()).map(|i| tabs.tab_at(i).expect("tab")).collect()
}

fn nav_flags(page: &Page) -> (Option<String>, Option<String>, Option<String>) {
    let nav = page.nav().expect("nav wired");
    let doc = page.document();
    (
        doc.attribute(nav.container(), VISIBLE_ATTR).map(str::to_string),
        doc.attribute(nav.toggle(), EXPANDED_ATTR).map(str::to_string),
        doc.style(nav.toggle(), ICON_PROPERTY).map(str::to_string),
    )
}

/// (selected tabs, visible panels, visible images)
fn selection(page: &Page) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let tabs = page.tabs().expect("tabs wired");
    let doc = page.document();
    let map = tabs.map();

    let selected = (0..tabs.len())
        .filter(|&i| doc.attribute(tabs.tab_at(i).expect("tab"), SELECTED_ATTR) == Some("true"))
        .collect();
    let panels = map
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, &p)| !doc.has_attribute(p, HIDDEN_ATTR))
        .map(|(i, _)| i)
        .collect();
    let images = map
        .images()
        .iter()
        .enumerate()
        .filter(|(_, &img)| !doc.has_class(img, "hidden"))
        .map(|(i, _)| i)
        .collect();

    (selected, panels, images)
}

fn arrow() -> impl Strategy<Value = Key> {
    prop_oneof![Just(Key::ArrowLeft), Just(Key::ArrowRight)]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Navigation toggle parity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nav_toggle_parity(activations in 0usize..40) {
        let mut page = Page::load(&page_html(3), &Config::default());
        let toggle = page.nav().expect("nav wired").toggle();
        let close = Config::default().navigation.icons.close;
        let hamburger = Config::default().navigation.icons.hamburger;

        for _ in 0..activations {
            page.dispatch(&Event::Click { target: toggle }).expect("dispatch");

            let (visible, expanded, icon) = nav_flags(&page);
            prop_assert_eq!(&visible, &expanded, "expanded flag must mirror visibility");
            let expected_icon = if visible.as_deref() == Some("true") {
                &close
            } else {
                &hamburger
            };
            prop_assert_eq!(icon, Some(format!("url('{}')", expected_icon)));
        }

        let (visible, _, _) = nav_flags(&page);
        let expected = if activations % 2 == 0 { "false" } else { "true" };
        prop_assert_eq!(visible.as_deref(), Some(expected));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Selection invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exactly_one_selected_after_activation(
        tab_count in 1usize..6,
        picks in prop::collection::vec(0usize..6, 1..20),
    ) {
        let mut page = Page::load(&page_html(tab_count), &Config::default());
        let tabs = tab_ids(&page);

        for pick in picks {
            let index = pick % tab_count;
            page.dispatch(&Event::Click { target: tabs[index] }).expect("dispatch");

            let (selected, panels, images) = selection(&page);
            prop_assert_eq!(&selected, &vec![index]);
            prop_assert_eq!(&panels, &vec![index]);
            prop_assert_eq!(&images, &vec![index]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Focus stays in range and wraps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focus_wraps_within_range(
        tab_count in 1usize..6,
        keys in prop::collection::vec(arrow(), 1..30),
    ) {
        let mut page = Page::load(&page_html(tab_count), &Config::default());
        let tabs = tab_ids(&page);
        let tablist = page.tabs().expect("tabs wired").tablist();

        for key in keys {
            let before = page.state().focused_tab.expect("focus");
            page.dispatch(&Event::KeyDown { target: tablist, key: key.clone() }).expect("dispatch");
            let after = page.state().focused_tab.expect("focus");

            prop_assert!(after < tab_count);
            let expected = match key {
                Key::ArrowRight => (before + 1) % tab_count,
                _ => (before + tab_count - 1) % tab_count,
            };
            prop_assert_eq!(after, expected);

            let focusable: Vec<_> = tabs
                .iter()
                .filter(|&&t| page.document().attribute(t, "tabindex") == Some("0"))
                .collect();
            prop_assert_eq!(focusable, vec![&tabs[after]]);
            prop_assert_eq!(page.document().focused(), Some(tabs[after]));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Focus and selection are independent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focus_never_changes_selection(
        tab_count in 1usize..6,
        selected in 0usize..6,
        keys in prop::collection::vec(arrow(), 1..30),
    ) {
        let mut page = Page::load(&page_html(tab_count), &Config::default());
        let tabs = tab_ids(&page);
        let tablist = page.tabs().expect("tabs wired").tablist();

        page.dispatch(&Event::Click { target: tabs[selected % tab_count] }).expect("dispatch");
        let before = selection(&page);

        for key in keys {
            page.dispatch(&Event::KeyDown { target: tablist, key }).expect("dispatch");
            prop_assert_eq!(&selection(&page), &before);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Concrete scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn three_right_arrows_cycle_back_to_first() {
    let mut page = Page::load(&page_html(3), &Config::default());
    let tablist = page.tabs().expect("tabs wired").tablist();

    let seen: Vec<_> = (0..3)
        .map(|_| {
            page.dispatch(&Event::KeyDown {
                target: tablist,
                key: Key::ArrowRight,
            })
            .expect("dispatch");
            page.state().focused_tab.expect("focus")
        })
        .collect();

    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn activating_third_tab_shows_only_its_content() {
    let mut page = Page::load(&page_html(3), &Config::default());
    let tabs = tab_ids(&page);

    page.dispatch(&Event::Click { target: tabs[2] }).expect("dispatch");

    assert_eq!(selection(&page), (vec![2], vec![2], vec![2]));
}

#[test]
fn two_activations_restore_nav() {
    let mut page = Page::load(&page_html(1), &Config::default());
    let toggle = page.nav().expect("nav wired").toggle();
    let initial_visible = nav_flags(&page).0;

    page.dispatch(&Event::Click { target: toggle }).expect("dispatch");
    assert_eq!(
        nav_flags(&page),
        (
            Some("true".to_string()),
            Some("true".to_string()),
            Some("url('./assets/shared/icon-close.svg')".to_string()),
        )
    );

    page.dispatch(&Event::Click { target: toggle }).expect("dispatch");
    let (visible, expanded, icon) = nav_flags(&page);
    assert_eq!(visible, initial_visible);
    assert_eq!(expanded.as_deref(), Some("false"));
    assert_eq!(
        icon.as_deref(),
        Some("url('./assets/shared/icon-hamburger.svg')")
    );
}
