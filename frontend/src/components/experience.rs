use std::rc::Rc;

use yew::prelude::*;

use super::{animate_class, reveal_class, stagger_style};
use crate::config::DEFAULT_VISIBILITY_THRESHOLD;
use crate::content::{Content, ExperienceEntry};
use crate::tracking::hooks::use_section_visibility;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub content: Rc<Content>,
}

fn kind_class(kind: &str) -> &'static str {
    match kind {
        "Research" => "timeline-dot dot-purple",
        "Internship" => "timeline-dot dot-blue",
        "Education" => "timeline-dot dot-green",
        _ => "timeline-dot",
    }
}

fn entry(index: usize, entry: &ExperienceEntry, is_visible: bool) -> Html {
    html! {
        <div
            key={entry.title.clone()}
            class={classes!("timeline-entry", animate_class(is_visible, "slide-up"))}
            style={stagger_style(index)}
        >
            <span class={kind_class(&entry.kind)} />
            <div class="timeline-card">
                <div class="timeline-meta">
                    <span class="timeline-kind">{&entry.kind}</span>
                    <span>{&entry.period}</span>
                    <span>{&entry.location}</span>
                </div>
                <h3>{&entry.title}</h3>
                <p class="timeline-company">{&entry.company}</p>
                <p>{&entry.description}</p>
                <ul>
                    { for entry.highlights.iter().map(|highlight| html! { <li>{highlight}</li> }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_section_visibility(section_ref.clone(), DEFAULT_VISIBILITY_THRESHOLD);

    html! {
        <section ref={section_ref} id={SectionId::Experience.as_str()} class="section">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        padding-left: 2rem;
                        border-left: 1px solid #d4d4d8;
                    }
                    .timeline-entry {
                        position: relative;
                        margin-bottom: 3rem;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: -2.45rem;
                        top: 1.5rem;
                        width: 0.9rem;
                        height: 0.9rem;
                        border-radius: 50%;
                        background: #a1a1aa;
                    }
                    .dot-purple { background: #8b5cf6; }
                    .dot-blue { background: #3b82f6; }
                    .dot-green { background: #22c55e; }
                    .timeline-card {
                        background: #fff;
                        border: 1px solid #e4e4e7;
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .timeline-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #71717a;
                    }
                    .timeline-kind {
                        font-weight: 600;
                        color: #3f3f46;
                    }
                    .timeline-company {
                        color: #3b82f6;
                        font-weight: 500;
                    }
                    .timeline-card li {
                        color: #52525b;
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={reveal_class(is_visible)}>
                    <div class="section-header">
                        <h2>{"Experience & Research"}</h2>
                        <div class="section-rule" />
                        <p>{"My journey through AI/ML engineering, research, and continuous learning."}</p>
                    </div>
                    <div class="timeline">
                        {
                            props.content.experience.iter().enumerate()
                                .map(|(index, item)| entry(index, item, is_visible))
                                .collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
