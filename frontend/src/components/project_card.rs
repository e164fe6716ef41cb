use yew::prelude::*;

use crate::config::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

/// A card with a `link` opens it in a new tab; without one the card is plain, non-navigable markup.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let card = html! {
        <div class="project-card">
            <div class={classes!("project-banner", project.accent.css_class())}>
                <div class="project-icon">{ project.icon.clone() }</div>
            </div>
            <div class="project-body">
                <div class="project-heading">
                    <h3>{ project.title.clone() }</h3>
                    <span class={classes!("project-category", project.accent.css_class())}>
                        { project.category.clone() }
                    </span>
                </div>
                <p class="project-description">{ project.description.clone() }</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={tag.clone()} class="project-tag">{ tag.clone() }</span>
                    }) }
                </div>
            </div>
        </div>
    };

    match &project.link {
        Some(link) => html! {
            <a class="project-link" href={link.clone()} target="_blank" rel="noopener noreferrer">
                { card }
            </a>
        },
        None => card,
    }
}
