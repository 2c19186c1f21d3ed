//! Site footer.

use leptos::prelude::*;

use crate::config::{ESTABLISHED, SITE_DOMAIN};

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::row>
                <div class=css::motto>{format!("Digital Sanctuary since {}", ESTABLISHED)}</div>
                <div class=css::credit>{format!("Designed with Intention / {}", SITE_DOMAIN)}</div>
            </div>
        </footer>
    }
}
