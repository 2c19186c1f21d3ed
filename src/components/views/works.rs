//! Project showcase.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::MaterialCard;
use crate::components::icons as ic;
use crate::components::theme::accent_class;
use crate::models::Project;
use crate::utils::dom::open_link;

stylance::import_crate_style!(css, "src/components/views/works.module.css");

/// Counter shown next to the works heading, e.g. `/ 03 SELECTED`.
pub fn selected_count_label(count: usize) -> String {
    format!("/ {:02} SELECTED", count)
}

#[component]
pub fn WorksView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|c| c.projects.clone());
    let counter = selected_count_label(projects.len());

    view! {
        <div class=css::view data-view="works">
            <div class=css::heading>
                <div>
                    <h2 class=css::title>"作品选集"</h2>
                    <p class=css::subtitle>"在这里，我用代码实现对美学的坚持。"</p>
                </div>
                <span class=css::counter>{counter}</span>
            </div>

            <div class=css::list>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let on_click = project
        .url
        .clone()
        .map(|url| Callback::new(move |_: ()| open_link(&url)));
    let linked = on_click.is_some();
    let card_class = if linked {
        format!("{} {}", css::card, css::linked)
    } else {
        css::card.to_string()
    };
    let icon_class = format!("{} {}", css::icon, accent_class(project.accent));

    view! {
        <div data-project-id=project.id.to_string()>
            <MaterialCard class=card_class on_click=on_click no_hover=!linked>
                <div class=css::row>
                    <div class=css::iconTile>
                        <span class=icon_class><Icon icon=ic::glyph(project.glyph) /></span>
                    </div>
                    <div class=css::body>
                        <span class=css::tag>{project.tag}</span>
                        <h4 class=css::projectTitle>{project.title}</h4>
                        <p class=css::description>{project.description}</p>
                    </div>
                    <Show when=move || linked>
                        <div class=css::cta>
                            "View Case Study"
                            <Icon icon=ic::ARROW_UP_RIGHT />
                        </div>
                    </Show>
                </div>
            </MaterialCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_count_label() {
        assert_eq!(selected_count_label(3), "/ 03 SELECTED");
        assert_eq!(selected_count_label(12), "/ 12 SELECTED");
        assert_eq!(selected_count_label(0), "/ 00 SELECTED");
    }
}
