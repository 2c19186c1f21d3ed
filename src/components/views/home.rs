//! Landing view: greeting, session status, and shortcuts.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::MaterialCard;
use crate::components::icons as ic;
use crate::components::theme::{accent_class, accent_wash};
use crate::config::{SITE_DOMAIN, links};
use crate::models::{Page, Shelf, StatusOption};
use crate::utils::dom::open_link;

stylance::import_crate_style!(css, "src/components/views/home.module.css");

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, tagline, shelves) = ctx.content.with_value(|c| {
        (
            c.profile.owner.clone(),
            c.profile.tagline.clone(),
            c.shelves.clone(),
        )
    });

    let go = move |page: Page| Callback::new(move |_: ()| ctx.select_page(page));
    let open = |href: &'static str| Callback::new(move |_: ()| open_link(href));

    view! {
        <div class=css::view data-view="home">
            <header class=css::hero>
                <div class=css::heroRow>
                    <div class=css::heroText>
                        <div class=css::badge>
                            <span class=css::pulse></span>
                            {format!("Currently online / {}", SITE_DOMAIN)}
                        </div>
                        <h1 class=css::greeting>
                            "Hi, 我是 "
                            <span class=css::gradientName>{owner}</span>
                        </h1>
                    </div>
                    <StatusWidget status=ctx.status.get_value() />
                </div>
                <p class=css::tagline>{tagline}</p>
            </header>

            <div class=css::featureGrid>
                <MaterialCard class=css::worksCard on_click=Some(go(Page::Works))>
                    <div class=css::worksBackdrop><Icon icon=ic::LAYERS /></div>
                    <div class=css::worksText>
                        <h3 class=css::worksTitle>
                            "精选项目"
                            <span class=css::worksArrow><Icon icon=ic::ARROW_UP_RIGHT /></span>
                        </h3>
                        <p class=css::muted>"点击探索我近期构建的数字化案例。"</p>
                    </div>
                </MaterialCard>
                {shelves.into_iter().map(|shelf| view! { <ShelfCard shelf=shelf /> }).collect_view()}
            </div>

            <div class=css::actionGrid>
                <ActionCard
                    icon=ic::USER
                    title="关于我"
                    subtitle="故事、背景与联系方式"
                    hover_class=css::hoverWhite
                    on_click=go(Page::About)
                />
                <ActionCard
                    icon=ic::GLOBE
                    title="博客"
                    subtitle="深度技术沉淀与分享"
                    hover_class=css::hoverBlue
                    on_click=open(links::BLOG_URL)
                />
                <ActionCard
                    icon=ic::MAIL
                    title="联络"
                    subtitle="开启一段新的合作之旅"
                    hover_class=css::hoverOrange
                    on_click=open(links::CONTACT_MAILTO)
                />
            </div>
        </div>
    }
}

/// Card showing the status picked for this session.
#[component]
fn StatusWidget(status: StatusOption) -> impl IntoView {
    let text_class = format!("{} {}", css::statusText, accent_class(status.accent));

    view! {
        <MaterialCard class=css::statusCard no_hover=true>
            <div class=css::statusIcon><Icon icon=ic::glyph(status.glyph) /></div>
            <div>
                <div class=css::eyebrow>"Current Status"</div>
                <div class=text_class data-role="status">{status.text}</div>
            </div>
        </MaterialCard>
    }
}

/// "Currently enjoying" card.
#[component]
fn ShelfCard(shelf: Shelf) -> impl IntoView {
    let card_class = format!("{} {}", css::shelfCard, accent_wash(shelf.accent));
    let icon_class = format!("{} {}", css::shelfIcon, accent_class(shelf.accent));

    view! {
        <MaterialCard class=card_class no_hover=true>
            <span class=icon_class><Icon icon=ic::glyph(shelf.glyph) /></span>
            <div class=css::eyebrow>{shelf.label}</div>
            <div class=css::shelfTitle>
                {shelf.title}
                <br />
                <span class=css::shelfSubtitle>{shelf.subtitle}</span>
            </div>
        </MaterialCard>
    }
}

/// Shortcut card in the bottom row of the home view.
#[component]
fn ActionCard(
    icon: IconData,
    title: &'static str,
    subtitle: &'static str,
    hover_class: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <MaterialCard class=format!("{} {}", css::actionCard, hover_class) on_click=Some(on_click)>
            <div class=css::actionIcon><Icon icon=icon /></div>
            <div>
                <h3 class=css::actionTitle>{title}</h3>
                <p class=css::actionSubtitle>{subtitle}</p>
            </div>
        </MaterialCard>
    }
}
