use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SECTION_ORDER;
use crate::tracking::dom::scroll_to_section;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
    pub brand: String,
}

pub fn nav_link_class(id: SectionId, active: SectionId) -> Classes {
    classes!("nav-link", (id == active).then_some("active"))
}

/// Solid once the probe point has left the hero.
pub fn header_class(active: SectionId) -> Classes {
    classes!("top-nav", (active != SectionId::Home).then_some("scrolled"))
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active, brand } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |id: SectionId| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(id);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={header_class(*active)}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 4px;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 300ms ease, box-shadow 300ms ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(250, 250, 250, 0.9);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 1px 12px rgba(0, 0, 0, 0.06);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 600;
                        color: #18181b;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #52525b;
                        text-decoration: none;
                        transition: color 200ms ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: #3b82f6;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 4px 0;
                        background: #18181b;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 1.5rem;
                            background: #fafafa;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href={SectionId::Home.anchor()} class="nav-logo" onclick={go_to(SectionId::Home)}>
                    {brand}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        SECTION_ORDER.iter().map(|id| html! {
                            <a
                                key={id.as_str()}
                                href={id.anchor()}
                                class={nav_link_class(*id, *active)}
                                onclick={go_to(*id)}
                            >
                                {id.label()}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_link_is_highlighted() {
        let highlighted: Vec<SectionId> = SECTION_ORDER
            .iter()
            .copied()
            .filter(|id| nav_link_class(*id, SectionId::Projects).contains("active"))
            .collect();
        assert_eq!(highlighted, vec![SectionId::Projects]);
    }

    #[test]
    fn header_turns_solid_outside_home() {
        assert!(!header_class(SectionId::Home).contains("scrolled"));
        for id in &SECTION_ORDER[1..] {
            assert!(header_class(*id).contains("scrolled"));
        }
    }
}
