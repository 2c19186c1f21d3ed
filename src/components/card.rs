//! Glass card primitive used by every panel on the site.

use leptos::{ev, prelude::*};

stylance::import_crate_style!(css, "src/components/card.module.css");

/// Frosted glass card.
///
/// # Props
/// - `class`: Extra classes for layout and padding
/// - `on_click`: Makes the card a button (pointer cursor, focusable,
///   Enter/Space activation)
/// - `no_hover`: Disables the hover and press feedback
#[component]
pub fn MaterialCard(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    #[prop(optional)] no_hover: bool,
) -> impl IntoView {
    let mut classes = vec![css::card];
    if !no_hover {
        classes.push(css::interactive);
    }
    if on_click.is_some() {
        classes.push(css::clickable);
    }
    let class = format!("{} {}", classes.join(" "), class);

    let handle_click = move |_: ev::MouseEvent| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    let handle_keydown = move |e: ev::KeyboardEvent| {
        if let Some(cb) = on_click
            && matches!(e.key().as_str(), "Enter" | " ")
        {
            e.prevent_default();
            cb.run(());
        }
    };

    view! {
        <div
            class=class
            role=on_click.map(|_| "button")
            tabindex=on_click.map(|_| "0")
            on:click=handle_click
            on:keydown=handle_keydown
        >
            {children()}
        </div>
    }
}
