//! Page layout and view switching.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::background::LiquidBackground;
use crate::components::footer::Footer;
use crate::components::hooks::{use_reduced_motion, use_view_transition};
use crate::components::nav::TabBar;
use crate::components::topbar::TopBar;
use crate::components::views::{AboutView, HomeView, WorksView};
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Shell component laying out the site around the active view.
///
/// Only one view is mounted. On a switch the outgoing view plays its exit
/// animation first, then the selected view mounts and plays its entry.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let transition = use_view_transition(ctx.page.into(), use_reduced_motion());

    let stage_class = move || {
        if transition.exiting.get() {
            format!("{} {}", css::stage, css::exiting)
        } else {
            css::stage.to_string()
        }
    };

    view! {
        <div class=css::screen>
            <LiquidBackground />
            <TopBar />

            <main class=css::main>
                <div
                    class=stage_class
                    data-exiting=move || transition.exiting.get().then_some("true")
                >
                    {move || match transition.shown.get() {
                        Page::Home => view! { <HomeView /> }.into_any(),
                        Page::Works => view! { <WorksView /> }.into_any(),
                        Page::About => view! { <AboutView /> }.into_any(),
                    }}
                </div>
            </main>

            <TabBar />
            <Footer />
        </div>
    }
}
