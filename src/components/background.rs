//! Animated gradient backdrop.

use leptos::prelude::*;

use crate::components::hooks::use_reduced_motion;

stylance::import_crate_style!(css, "src/components/background.module.css");

/// Three slowly drifting blurred blobs over black, plus a grain layer.
///
/// Loop durations come from `--blob-N-duration` on the root element.
/// Animation stops when the user prefers reduced motion.
#[component]
pub fn LiquidBackground() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let layer_class = move || {
        if reduced_motion.get() {
            format!("{} {}", css::blobs, css::still)
        } else {
            css::blobs.to_string()
        }
    };

    view! {
        <div class=css::backdrop aria-hidden="true">
            <div class=layer_class>
                <div class=css::blobBlue></div>
                <div class=css::blobIndigo></div>
                <div class=css::blobPurple></div>
            </div>
            <div class=css::grain></div>
        </div>
    }
}
