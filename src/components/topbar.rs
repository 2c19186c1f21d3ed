//! Top bar with brand mark and live clock.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::hooks::use_wide_viewport;
use crate::config::{APP_NAME, ESTABLISHED};

stylance::import_crate_style!(css, "src/components/topbar.module.css");

/// Brand monogram on the left, date and time on the right.
///
/// The clock is hidden on narrow viewports.
#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let initial = ctx.content.with_value(|c| c.profile.initial.clone());
    let wide = use_wide_viewport();

    view! {
        <div class=css::bar>
            <div class=css::brand>
                <div class=css::monogram>{initial}</div>
                <div>
                    <div class=css::brandName>{APP_NAME}</div>
                    <div class=css::established>{format!("EST. {}", ESTABLISHED)}</div>
                </div>
            </div>
            <Clock visible=wide />
        </div>
    }
}

/// Date and time text refreshed by the clock ticker.
#[component]
fn Clock(visible: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let date = move || ctx.clock.with(|c| c.date_label());
    let time = move || ctx.clock.with(|c| c.time_label());

    view! {
        <div class=move || if visible.get() { css::clock } else { css::clockHidden }>
            <span class=css::date data-role="date">{date}</span>
            <time class=css::time data-role="clock" datetime=time>{time}</time>
        </div>
    }
}
