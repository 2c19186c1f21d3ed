//! Custom hooks for site components.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::{clock, layout, motion};
use crate::core::ClockTime;
use crate::models::Page;

/// Run `on_tick` every `period_ms` while the calling owner is alive.
///
/// The interval is dropped (and so cancelled) when the owner is cleaned up.
pub fn use_interval(period_ms: u32, on_tick: impl FnMut() + 'static) {
    let timer = StoredValue::new_local(Some(Interval::new(period_ms, on_tick)));

    on_cleanup(move || {
        if let Some(timer) = timer.try_update_value(Option::take).flatten() {
            drop(timer);
            log::debug!("{}ms interval stopped", period_ms);
        }
    });
}

/// Refresh `ctx.clock` every second while the calling owner is alive.
pub fn use_clock_ticker(ctx: AppContext) {
    use_interval(clock::TICK_MS, move || ctx.tick(ClockTime::now()));
    log::debug!("clock started");
}

/// How long `outgoing` stays on screen after another page is selected.
pub fn exit_delay_ms(outgoing: Page, reduced_motion: bool) -> u32 {
    match outgoing {
        Page::Home if !reduced_motion => motion::HOME_EXIT_MS,
        _ => 0,
    }
}

/// The page on screen while views hand over.
#[derive(Clone, Copy)]
pub struct ViewTransition {
    /// Page whose view is mounted.
    pub shown: Signal<Page>,
    /// Whether the mounted view is playing its exit animation.
    pub exiting: Signal<bool>,
}

/// Trail `selected` so the outgoing view can finish its exit animation
/// before the next one mounts.
///
/// At most one handover is pending; selecting again replaces it, and
/// selecting the page still on screen cancels the exit.
pub fn use_view_transition(selected: Signal<Page>, reduced_motion: Signal<bool>) -> ViewTransition {
    let shown = RwSignal::new(selected.get_untracked());
    let exiting = RwSignal::new(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let target = selected.get();
        let outgoing = shown.get_untracked();
        pending.set_value(None);

        if target == outgoing {
            exiting.set(false);
            return;
        }

        let delay = exit_delay_ms(outgoing, reduced_motion.get_untracked());
        if delay == 0 {
            shown.set(target);
            exiting.set(false);
            return;
        }

        exiting.set(true);
        let handover = Timeout::new(delay, move || {
            shown.set(target);
            exiting.set(false);
        });
        pending.set_value(Some(handover));
    });

    on_cleanup(move || {
        if let Some(handover) = pending.try_update_value(Option::take).flatten() {
            drop(handover);
        }
    });

    ViewTransition {
        shown: shown.into(),
        exiting: exiting.into(),
    }
}

/// Whether the viewport is wide enough for the full top bar.
pub fn use_wide_viewport() -> Signal<bool> {
    use_media_query(layout::WIDE_QUERY)
}

/// Whether the user asked for reduced motion.
pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query(motion::REDUCED_MOTION_QUERY)
}
