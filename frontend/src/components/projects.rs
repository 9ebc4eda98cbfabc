use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use super::{animate_class, reveal_class, stagger_style};
use crate::config::DEFAULT_VISIBILITY_THRESHOLD;
use crate::content::{Content, Project};
use crate::tracking::hooks::use_section_visibility;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub content: Rc<Content>,
}

/// Keeps a selected index inside the project list.
pub fn clamp_selection(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn featured(project: &Project) -> Html {
    html! {
        <div class="featured">
            <div class="featured__image">
                <img src={project.image.clone()} alt={project.title.clone()} />
                <span class={project.status.class()}>{project.status.label()}</span>
            </div>
            <div class="featured__details">
                <div class="featured__title">
                    <h3>{&project.title}</h3>
                    <span class="featured__year">{&project.year}</span>
                </div>
                <p>{&project.long_description}</p>

                <h4>{"Technologies Used"}</h4>
                <div class="tags">
                    { for project.technologies.iter().map(|tech| html! { <span class="tag">{tech}</span> }) }
                </div>

                <h4>{"Key Features"}</h4>
                <ul class="features">
                    { for project.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                </ul>

                <div class="featured__actions">
                    <a class="btn-solid" href={project.github.clone()} target="_blank" rel="noopener noreferrer">
                        {"View Code"}
                    </a>
                    if let Some(demo) = project.demo_url() {
                        <a class="btn-outline" href={demo.to_string()} target="_blank" rel="noopener noreferrer">
                            {"Live Demo"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_section_visibility(section_ref.clone(), DEFAULT_VISIBILITY_THRESHOLD);
    let selected = use_state(|| 0usize);
    let projects = &props.content.projects;
    let current = clamp_selection(*selected, projects.len());

    let select = {
        let selected = selected.clone();
        let len = projects.len();
        move |index: usize| {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(clamp_selection(index, len)))
        }
    };

    html! {
        <section ref={section_ref} id={SectionId::Projects.as_str()} class="section section--tinted">
            <style>
                {r#"
                    .selector {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .selector button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        border: none;
                        cursor: pointer;
                        background: #e4e4e7;
                        color: #3f3f46;
                        transition: all 300ms ease;
                    }
                    .selector button.selected {
                        background: #3b82f6;
                        color: #fff;
                        transform: scale(1.05);
                        box-shadow: 0 8px 20px rgba(59, 130, 246, 0.25);
                    }
                    .featured {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 4rem;
                    }
                    .featured__image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                    }
                    .featured__image img {
                        width: 100%;
                        height: 20rem;
                        object-fit: cover;
                    }
                    .featured__image .status-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                    }
                    .featured__title {
                        display: flex;
                        align-items: baseline;
                        gap: 1rem;
                    }
                    .featured__year {
                        color: #71717a;
                        font-size: 0.875rem;
                    }
                    .featured__actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .featured__actions a {
                        text-decoration: none;
                    }
                    .tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #e4e4e7;
                        font-size: 0.875rem;
                    }
                    .features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.5rem;
                        color: #52525b;
                    }
                    .status-badge {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: #fff;
                    }
                    .status-completed { background: #22c55e; }
                    .status-in-progress { background: #f97316; }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .project-card {
                        background: #fafafa;
                        border: 1px solid #d4d4d8;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 300ms ease, border-color 300ms ease;
                    }
                    .project-card:hover {
                        transform: translateY(-4px);
                        border-color: #3b82f6;
                    }
                    .project-card img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .project-card__body {
                        padding: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .featured,
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={reveal_class(is_visible)}>
                    <div class="section-header">
                        <h2>{"Featured Projects"}</h2>
                        <div class="section-rule" />
                        <p>{"A showcase of my work in AI/ML, web development, and algorithm implementation."}</p>
                    </div>

                    <div class="selector">
                        {
                            projects.iter().enumerate().map(|(index, project)| html! {
                                <button
                                    key={index}
                                    class={classes!((index == current).then_some("selected"))}
                                    onclick={select(index)}
                                >
                                    {project.short_title()}
                                </button>
                            }).collect::<Html>()
                        }
                    </div>

                    if let Some(project) = projects.get(current) {
                        { featured(project) }
                    }

                    <h3 class="section-subtitle">{"All Projects"}</h3>
                    <div class="project-grid">
                        {
                            projects.iter().enumerate().map(|(index, project)| html! {
                                <div
                                    key={index}
                                    class={classes!("project-card", animate_class(is_visible, "fade-in"))}
                                    style={stagger_style(index)}
                                    onclick={select(index)}
                                >
                                    <img src={project.image.clone()} alt={project.title.clone()} />
                                    <div class="project-card__body">
                                        <span class={project.status.class()}>{project.status.label()}</span>
                                        <h4>{&project.title}</h4>
                                        <p>{&project.description}</p>
                                        <span class="featured__year">{&project.year}</span>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_selection;

    #[test]
    fn selection_stays_in_bounds() {
        assert_eq!(clamp_selection(2, 4), 2);
        assert_eq!(clamp_selection(9, 4), 3);
        assert_eq!(clamp_selection(0, 0), 0);
    }
}
