//! Pill-style tab bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/nav.module.css");

/// Segmented control with one tab per page.
///
/// A single pill slides under the active tab; its transition uses the
/// spring easing published on the root element.
///
/// # Props
/// - `active`: Currently selected page
/// - `on_select`: Invoked with the clicked tab's page
#[component]
pub fn NavControl(#[prop(into)] active: Signal<Page>, on_select: Callback<Page>) -> impl IntoView {
    let pill_style = move || format!("transform: translateX({}%);", active.get().index() * 100);

    let tabs = Page::ALL
        .into_iter()
        .map(|page| {
            let is_active = move || active.get() == page;
            let tab_class = move || {
                if is_active() {
                    format!("{} {}", css::tab, css::active)
                } else {
                    css::tab.to_string()
                }
            };

            view! {
                <button
                    type="button"
                    class=tab_class
                    data-page=page.id()
                    aria-current=move || is_active().then_some("page")
                    on:click=move |_| on_select.run(page)
                >
                    <span class=css::icon><Icon icon=ic::page(page) /></span>
                    <span class=css::label>{page.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=css::track aria-label="Sections">
            <div class=css::pill style=pill_style aria-hidden="true"></div>
            {tabs}
        </nav>
    }
}

/// Fixed bottom bar hosting the [`NavControl`].
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let on_select = Callback::new(move |page: Page| ctx.select_page(page));

    view! {
        <div class=css::dock>
            <div class=css::dockInner>
                <NavControl active=ctx.page on_select=on_select />
            </div>
        </div>
    }
}
