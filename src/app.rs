//! Root application module.
//!
//! Contains the App component, the AppContext definition, and the
//! site-level setup (content loading, motion variables, clock ticker)
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::Shell;
use crate::components::hooks::use_clock_ticker;
use crate::config::motion;
use crate::core::ClockTime;
use crate::models::{Page, SiteContent, StatusOption};
use crate::utils::dom::set_root_style_var;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena-backed handles, which
/// are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view; changed only by explicit navigation.
    pub page: RwSignal<Page>,
    /// Latest clock reading, refreshed every second.
    pub clock: RwSignal<ClockTime>,
    /// Status shown by the home page widget, fixed for the session.
    pub status: StoredValue<StatusOption>,
    /// Static site content.
    pub content: StoredValue<SiteContent>,
}

impl AppContext {
    /// Creates the context for a fresh session.
    ///
    /// `roll` is a uniform sample in `[0, 1)` choosing the session status.
    pub fn new(content: SiteContent, now: ClockTime, roll: f64) -> Self {
        let status = content.status_for(roll);
        log::debug!("session status: {}", status.text);

        Self {
            page: RwSignal::new(Page::default()),
            clock: RwSignal::new(now),
            status: StoredValue::new(status),
            content: StoredValue::new(content),
        }
    }

    /// Switch the active view.
    pub fn select_page(&self, page: Page) {
        if self.page.get_untracked() != page {
            log::debug!("page: {} -> {}", self.page.get_untracked().id(), page.id());
        }
        self.page.set(page);
    }

    /// Record a new clock reading.
    pub fn tick(&self, now: ClockTime) {
        self.clock.set(now);
    }
}

/// Expose the tab spring to the stylesheets as CSS custom properties.
fn apply_motion_vars() {
    let spring = motion::SPRING;
    set_root_style_var(
        "--spring-ease",
        &spring.css_easing(motion::EASING_SAMPLES, motion::SETTLE_TOLERANCE),
    );
    set_root_style_var(
        "--spring-duration",
        &spring.css_duration(motion::SETTLE_TOLERANCE),
    );
    set_root_style_var("--view-exit-duration", &format!("{}ms", motion::HOME_EXIT_MS));
    for (i, secs) in motion::BLOB_DURATIONS_SECS.iter().enumerate() {
        set_root_style_var(&format!("--blob-{}-duration", i + 1), &format!("{}s", secs));
    }
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Loads the bundled site content
/// - Shows a reload screen if the content cannot be loaded
/// - Renders the site otherwise
#[component]
pub fn App() -> impl IntoView {
    let content = SiteContent::bundled().inspect_err(|e| log::error!("{}", e));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #e4e4e7;
                    font-family: 'SF Pro Display', 'Inter', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                        <p style="color: #71717a; margin-bottom: 2rem;">
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #f87171;
                            font-size: 0.9rem;
                            margin-bottom: 2rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #fff;
                                color: #000;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-weight: 600;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {content.map(|content| view! { <Site content=content /> })}
        </ErrorBoundary>
    }
}

/// The site for one session.
///
/// Creates and provides the [`AppContext`], publishes the motion variables,
/// and runs the clock ticker for as long as it stays mounted.
#[component]
pub fn Site(content: SiteContent) -> impl IntoView {
    let ctx = AppContext::new(content, ClockTime::now(), js_sys::Math::random());
    provide_context(ctx);

    apply_motion_vars();
    use_clock_ticker(ctx);

    view! { <Shell /> }
}
