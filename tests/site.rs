//! Browser tests for rendering, navigation, view handover, and timers.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use imfz::app::{AppContext, Site};
use imfz::components::Shell;
use imfz::components::hooks::use_interval;
use imfz::components::views::WorksView;
use imfz::config::motion;
use imfz::core::ClockTime;
use imfz::models::{Page, SiteContent};
use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::Mountable;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = document();
    let el = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

fn select(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
}

/// Let pending effects and re-renders run.
async fn settle() {
    TimeoutFuture::new(50).await;
}

/// Wait until an outgoing view has finished its exit.
async fn settle_view() {
    TimeoutFuture::new(motion::HOME_EXIT_MS + 100).await;
}

fn click_tab(root: &Element, page: Page) {
    select(root, &format!("button[data-page=\"{}\"]", page.id()))
        .unchecked_into::<HtmlElement>()
        .click();
}

#[wasm_bindgen_test]
fn works_view_renders_one_card_per_project_in_order() {
    let root = container();
    let content = SiteContent::bundled().unwrap();
    let expected: Vec<String> = content.projects.iter().map(|p| p.id.to_string()).collect();

    let _handle = mount_to(root.clone(), move || {
        provide_context(AppContext::new(content, ClockTime::new(1, 1, 0, 0, 0), 0.0));
        view! { <WorksView /> }
    });

    let ids: Vec<String> = select_all(&root, "[data-project-id]")
        .iter()
        .filter_map(|el| el.get_attribute("data-project-id"))
        .collect();
    assert_eq!(ids, expected);
    assert!(root.text_content().unwrap().contains("/ 03 SELECTED"));
    assert_eq!(select_all(&root, "[data-project-id] [role=\"button\"]").len(), 3);
}

#[wasm_bindgen_test]
fn project_without_url_is_not_a_button() {
    let root = container();
    let mut content = SiteContent::bundled().unwrap();
    content.projects[1].url = None;

    let _handle = mount_to(root.clone(), move || {
        provide_context(AppContext::new(content, ClockTime::new(1, 1, 0, 0, 0), 0.0));
        view! { <WorksView /> }
    });

    let plain = select(&root, "[data-project-id=\"2\"]");
    assert!(plain.query_selector("[role=\"button\"]").unwrap().is_none());
    assert!(!plain.text_content().unwrap().contains("View Case Study"));

    let linked = select(&root, "[data-project-id=\"1\"]");
    assert!(linked.query_selector("[role=\"button\"]").unwrap().is_some());
    assert!(linked.text_content().unwrap().contains("View Case Study"));
}

fn mount_shell(root: &HtmlElement, roll: f64) -> (AppContext, UnmountHandle<impl Mountable>) {
    let ctx = StoredValue::new(None::<AppContext>);
    let handle = mount_to(root.clone(), move || {
        let app = AppContext::new(
            SiteContent::bundled().unwrap(),
            ClockTime::new(1, 1, 0, 0, 0),
            roll,
        );
        ctx.set_value(Some(app));
        provide_context(app);
        view! { <Shell /> }
    });
    (ctx.get_value().unwrap(), handle)
}

fn shown_views(root: &Element) -> Vec<String> {
    select_all(root, "[data-view]")
        .iter()
        .filter_map(|el| el.get_attribute("data-view"))
        .collect()
}

#[wasm_bindgen_test]
async fn clicking_a_tab_switches_exactly_to_that_page() {
    let root = container();
    let (app, _handle) = mount_shell(&root, 0.5);

    assert_eq!(shown_views(&root), ["home"]);

    for page in [Page::Works, Page::About, Page::Home] {
        click_tab(&root, page);
        assert_eq!(app.page.get_untracked(), page);
        settle_view().await;

        assert_eq!(shown_views(&root), [page.id()]);

        let current = select_all(&root, "button[aria-current=\"page\"]");
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].get_attribute("data-page").as_deref(), Some(page.id()));
    }
}

#[wasm_bindgen_test]
async fn home_exits_before_the_next_view_mounts() {
    let root = container();
    let (app, _handle) = mount_shell(&root, 0.0);

    click_tab(&root, Page::Works);
    settle().await;

    // Selection is immediate; the home view is still on screen, exiting
    assert_eq!(app.page.get_untracked(), Page::Works);
    assert_eq!(shown_views(&root), ["home"]);
    assert!(root.query_selector("[data-exiting]").unwrap().is_some());

    settle_view().await;
    assert_eq!(shown_views(&root), ["works"]);
    assert!(root.query_selector("[data-exiting]").unwrap().is_none());

    // Works leaves without an exit animation
    click_tab(&root, Page::About);
    settle().await;
    assert_eq!(shown_views(&root), ["about"]);
}

#[wasm_bindgen_test]
async fn reselecting_home_during_its_exit_keeps_it() {
    let root = container();
    let (app, _handle) = mount_shell(&root, 0.0);

    click_tab(&root, Page::About);
    settle().await;
    click_tab(&root, Page::Home);
    settle_view().await;

    assert_eq!(app.page.get_untracked(), Page::Home);
    assert_eq!(shown_views(&root), ["home"]);
    assert!(root.query_selector("[data-exiting]").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn status_widget_shows_one_option_for_the_session() {
    let root = container();
    let content = SiteContent::bundled().unwrap();
    let options: Vec<String> = content.statuses.iter().map(|s| s.text.clone()).collect();
    let (_app, _handle) = mount_shell(&root, 0.9);

    let first = select(&root, "[data-role=\"status\"]").text_content().unwrap();
    assert!(options.contains(&first));

    // Leave home and come back; the status does not re-roll
    for page in [Page::Works, Page::Home] {
        click_tab(&root, page);
        settle_view().await;
    }
    let again = select(&root, "[data-role=\"status\"]").text_content().unwrap();
    assert_eq!(again, first);
}

#[wasm_bindgen_test]
async fn interval_stops_firing_after_unmount() {
    let root = container();
    let ticks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&ticks);

    let handle = mount_to(root.clone(), move || {
        use_interval(20, move || counter.set(counter.get() + 1));
        view! { <p>"ticking"</p> }
    });

    TimeoutFuture::new(200).await;
    assert!(ticks.get() > 0);

    drop(handle);
    let stopped_at = ticks.get();
    TimeoutFuture::new(200).await;
    assert_eq!(ticks.get(), stopped_at);
}

#[wasm_bindgen_test]
async fn clock_ticks_while_mounted_and_is_removed_on_unmount() {
    let root = container();
    let handle = mount_to(root.clone(), || {
        view! { <Site content=SiteContent::bundled().unwrap() /> }
    });

    let clock = select(&root, "[data-role=\"clock\"]");
    let before = clock.text_content().unwrap();
    assert_eq!(before.len(), "00:00:00".len());

    TimeoutFuture::new(1_100).await;
    let after = clock.text_content().unwrap();
    assert_ne!(before, after);

    drop(handle);
    settle().await;
    assert!(root.query_selector("[data-role=\"clock\"]").unwrap().is_none());
}
