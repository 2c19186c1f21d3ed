//! Story, passions, and contact links.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ContactLink;
use crate::utils::{LinkTarget, classify_link};

stylance::import_crate_style!(css, "src/components/views/about.module.css");

#[component]
pub fn AboutView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let profile = ctx.content.with_value(|c| c.profile.clone());
    let manifesto = profile.manifesto;

    view! {
        <div class=css::view data-view="about">
            <section class=css::intro>
                <h2 class=css::headline>{profile.headline}</h2>
                <p class=css::manifesto>
                    {manifesto.before}
                    <span class=css::emphasis>{manifesto.emphasis}</span>
                    {manifesto.after}
                </p>
            </section>

            <div class=css::columns>
                <div class=css::column>
                    <div class=css::block>
                        <h4 class=css::blockTitle>"Story / 故事"</h4>
                        <p class=css::story>{profile.story}</p>
                    </div>
                    <div class=css::block>
                        <h4 class=css::blockTitle>
                            <span class=css::heart><Icon icon=ic::HEART /></span>
                            "Passions / 爱好"
                        </h4>
                        <div class=css::chips>
                            {profile
                                .passions
                                .into_iter()
                                .map(|p| view! { <span class=css::chip>{p}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class=css::column>
                    <div class=css::block>
                        <h4 class=css::blockTitle>"Connect / 联络"</h4>
                        <div class=css::links>
                            {profile
                                .links
                                .into_iter()
                                .map(|link| view! { <ConnectLink link=link /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConnectLink(link: ContactLink) -> impl IntoView {
    let target = classify_link(&link.href).unwrap_or(LinkTarget::Placeholder);
    let new_tab = target.opens_new_tab();

    view! {
        <a
            class=css::link
            href=target.href().to_string()
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
        >
            <span class=css::linkLabel>{link.label}</span>
            <Icon icon=ic::glyph(link.glyph) />
        </a>
    }
}
