use std::rc::Rc;

use yew::prelude::*;

use super::{animate_class, reveal_class, stagger_style};
use crate::config::DEFAULT_VISIBILITY_THRESHOLD;
use crate::content::Content;
use crate::tracking::hooks::use_section_visibility;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<Content>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_section_visibility(section_ref.clone(), DEFAULT_VISIBILITY_THRESHOLD);
    let about = &props.content.about;

    html! {
        <section ref={section_ref} id={SectionId::About.as_str()} class="section section--tinted">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-text p {
                        color: #3f3f46;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .fun-fact {
                        background: #e4e4e7;
                        border: 1px solid #d4d4d8;
                        border-radius: 1rem;
                        padding: 1.5rem;
                    }
                    .traits {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .trait-card {
                        background: #fafafa;
                        border: 1px solid #d4d4d8;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        transition: transform 300ms ease, border-color 300ms ease;
                    }
                    .trait-card:hover {
                        transform: translateY(-4px);
                        border-color: #3b82f6;
                    }
                    @media (max-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={reveal_class(is_visible)}>
                    <div class="section-header">
                        <h2>{"About Me"}</h2>
                        <div class="section-rule" />
                        <p>{&about.lead}</p>
                    </div>

                    <div class="about-grid">
                        <div class="about-text">
                            <h3>{&about.heading}</h3>
                            { for about.paragraphs.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                            <div class="fun-fact">
                                <p><strong>{"Fun Fact:"}</strong></p>
                                <p>{&about.fun_fact}</p>
                            </div>
                        </div>

                        <div class="traits">
                            {
                                about.traits.iter().enumerate().map(|(index, item)| html! {
                                    <div
                                        key={item.title.clone()}
                                        class={classes!("trait-card", animate_class(is_visible, "fade-in"))}
                                        style={stagger_style(index)}
                                    >
                                        <h4>{&item.title}</h4>
                                        <p>{&item.description}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
