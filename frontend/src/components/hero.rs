use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use super::reveal_class;
use crate::content::Content;
use crate::tracking::dom::scroll_to_section;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<Content>,
}

fn scroll_button(target: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |_| scroll_to_section(target))
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let owner = &props.content.owner;
    let is_visible = use_state(|| false);

    // The hero is on screen at load, so it animates in on mount rather than
    // waiting for an intersection signal.
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    let socials = props
        .content
        .contact
        .socials
        .iter()
        .map(|social| (social.name.clone(), social.url.clone()))
        .collect::<Vec<_>>();

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(135deg, #fafafa, #f4f4f5 50%, #e4e4e7);
                    }
                    .hero__float {
                        position: absolute;
                        border-radius: 50%;
                        animation: float 6s ease-in-out infinite;
                    }
                    .hero__content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .hero__name {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 300;
                        line-height: 1.1;
                        margin-bottom: 0.5rem;
                    }
                    .hero__name span {
                        display: block;
                    }
                    .hero__name span:last-child {
                        color: #52525b;
                    }
                    .hero__rule {
                        height: 1px;
                        width: 6rem;
                        margin: 0 auto 1.5rem;
                        background: #3b82f6;
                    }
                    .hero__headline {
                        font-size: 1.5rem;
                        color: #52525b;
                        font-weight: 300;
                    }
                    .hero__tagline {
                        max-width: 42rem;
                        margin: 0.5rem auto 3rem;
                        color: #71717a;
                        line-height: 1.6;
                    }
                    .hero__tagline strong {
                        color: #3b82f6;
                        font-weight: 500;
                    }
                    .hero__actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }
                    .btn-solid,
                    .btn-outline {
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        font-size: 1rem;
                        transition: all 300ms ease;
                    }
                    .btn-solid {
                        background: #18181b;
                        color: #fff;
                        border: 2px solid #18181b;
                    }
                    .btn-solid:hover {
                        transform: scale(1.05);
                    }
                    .btn-outline {
                        background: transparent;
                        color: #18181b;
                        border: 2px solid #18181b;
                    }
                    .btn-outline:hover {
                        background: #18181b;
                        color: #fff;
                    }
                    .hero__socials {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    .hero__socials a {
                        padding: 0.75rem 1rem;
                        border: 1px solid #d4d4d8;
                        border-radius: 9999px;
                        color: inherit;
                        text-decoration: none;
                    }
                    .hero__down {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        animation: bounce 1s infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="hero__float" style="top: 5rem; left: 2.5rem; width: 8rem; height: 8rem; background: rgba(59, 130, 246, 0.05);" />
            <div class="hero__float" style="bottom: 8rem; right: 4rem; width: 6rem; height: 6rem; background: rgba(139, 92, 246, 0.05); animation-delay: 2s;" />
            <div class="hero__float" style="top: 50%; right: 2.5rem; width: 4rem; height: 4rem; background: rgba(34, 197, 94, 0.05); animation-delay: 4s;" />

            <div class="hero__content">
                <div class={reveal_class(*is_visible)}>
                    <h1 class="hero__name">
                        <span>{&owner.first_name}</span>
                        <span>{&owner.last_name}</span>
                    </h1>
                    <div class="hero__rule" />
                    <p class="hero__headline">{&owner.headline}</p>
                    <p class="hero__tagline">
                        {&owner.tagline}{" "}<strong>{&owner.institution}</strong>{"."}
                    </p>

                    <div class="hero__actions">
                        <button class="btn-solid" onclick={scroll_button(SectionId::Projects)}>
                            {"View My Work"}
                        </button>
                        <button class="btn-outline" onclick={scroll_button(SectionId::Contact)}>
                            {"Get In Touch"}
                        </button>
                    </div>

                    <div class="hero__socials">
                        {
                            socials.into_iter().take(2).map(|(name, url)| html! {
                                <a key={name.clone()} href={url} target="_blank" rel="noopener noreferrer">{&name}</a>
                            }).collect::<Html>()
                        }
                        <a href={format!("mailto:{}", owner.email)}>{"Email"}</a>
                    </div>

                    <button class="hero__down" onclick={scroll_button(SectionId::About)} aria-label="Scroll to about">
                        {"↓"}
                    </button>
                </div>
            </div>
        </section>
    }
}
