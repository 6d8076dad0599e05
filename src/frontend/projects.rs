use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Category, Project};
use crate::interaction::ProjectsState;

/// Project showcase: category filter buttons over a stable-ordered grid,
/// plus a detail overlay for the selected project. External links on the
/// cards stay inert with respect to the modal.
#[function_component(Projects)]
pub fn projects() -> Html {
    let state = use_state(ProjectsState::default);

    let set_filter = {
        let state = state.clone();
        Callback::from(move |tag: &'static str| {
            let mut next = (*state).clone();
            next.set_filter_tag(tag);
            state.set(next);
        })
    };

    let open = {
        let state = state.clone();
        Callback::from(move |project: &'static Project| {
            let mut next = (*state).clone();
            next.open(project);
            state.set(next);
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.close();
            state.set(next);
        })
    };

    let filter_buttons: Html = Category::FILTERS
        .iter()
        .map(|&category| {
            let onclick = {
                let set_filter = set_filter.clone();
                Callback::from(move |_: MouseEvent| set_filter.emit(category.as_str()))
            };
            let class = classes!(
                "filter-button",
                (state.filter() == category).then_some("active"),
            );

            html! {
                <button {class} type="button" key={category.as_str()} {onclick}>
                    {category.label()}
                </button>
            }
        })
        .collect();

    let cards: Html = state
        .visible()
        .into_iter()
        .map(|project| {
            let onclick = {
                let open = open.clone();
                Callback::from(move |_: MouseEvent| open.emit(project))
            };

            html! {
                <article class="project-card" key={project.id} {onclick}>
                    <div class="project-image" style={format!("background: {};", project.accent)}>
                        <span class="project-glyph" aria-hidden="true">{"⌨"}</span>
                    </div>
                    <div class="project-body">
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <ul class="tech-tags">
                            { for project.technologies.iter().map(|tech| html! {
                                <li class="tech-tag" key={*tech}>{*tech}</li>
                            }) }
                        </ul>
                        {project_links(project, 18)}
                    </div>
                </article>
            }
        })
        .collect();

    html! {
        <section id="projects" class="projects">
            <div class="projects-inner">
                <header class="projects-header">
                    <h2 class="section-title">{"My Projects"}</h2>
                    <p class="section-subtitle">
                        {"A selection of my main study projects, where I applied front-end \
                          skills to build interactive, functional applications."}
                    </p>
                </header>

                <div class="filter-bar" role="group" aria-label="Filter projects by category">
                    {filter_buttons}
                </div>

                <div class="projects-grid">{cards}</div>
            </div>

            if let Some(project) = state.selected() {
                <div class="modal-overlay" onclick={close.clone()}>
                    <div
                        class="modal-content"
                        role="dialog"
                        aria-label={project.title}
                        onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                    >
                        <button
                            class="modal-close"
                            type="button"
                            aria-label="Close project details"
                            onclick={close}
                        >
                            {"✕"}
                        </button>

                        <div class="project-image large" style={format!("background: {};", project.accent)}>
                            <span class="project-glyph" aria-hidden="true">{"⌨"}</span>
                        </div>

                        <h3 class="project-title large">{project.title}</h3>
                        <p class="project-full-description">{project.full_description}</p>

                        <ul class="tech-tags">
                            { for project.technologies.iter().map(|tech| html! {
                                <li class="tech-tag" key={*tech}>{*tech}</li>
                            }) }
                        </ul>

                        {project_links(project, 24)}
                    </div>
                </div>
            }
        </section>
    }
}

/// GitHub and live-demo links. Clicks must not bubble into the card's
/// modal-open handler.
fn project_links(project: &'static Project, size: u32) -> Html {
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="project-links">
            <a
                class="project-link github"
                href={project.github_url}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("{} source on GitHub", project.title)}
                style={format!("font-size: {size}px;")}
                onclick={stop.clone()}
            >
                {"⎇"}
            </a>
            <a
                class="project-link live"
                href={project.live_url}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("{} live demo", project.title)}
                style={format!("font-size: {size}px;")}
                onclick={stop}
            >
                {"↗"}
            </a>
        </div>
    }
}
