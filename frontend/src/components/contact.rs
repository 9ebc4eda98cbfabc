use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::{animate_class, reveal_class, stagger_style};
use crate::config::{DEFAULT_VISIBILITY_THRESHOLD, SUBMIT_DELAY_MS};
use crate::contact::{ContactAction, ContactFormState, Field, FormPhase, Notice};
use crate::content::{opens_new_tab, Content};
use crate::tracking::hooks::use_section_visibility;
use crate::tracking::SectionId;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: Rc<Content>,
}

/// `(name, value)` of whichever form control raised the event.
fn read_control(e: &InputEvent) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

fn link_target(href: &str) -> (&'static str, Option<&'static str>) {
    if opens_new_tab(href) {
        ("_blank", Some("noopener noreferrer"))
    } else {
        ("_self", None)
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_section_visibility(section_ref.clone(), DEFAULT_VISIBILITY_THRESHOLD);
    let state = use_reducer(ContactFormState::default);
    let is_mounted = use_is_mounted();
    let info = &props.content.contact;

    // Simulated delivery: resolves after a fixed delay and always succeeds.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase| {
                if *phase == FormPhase::Submitting {
                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                        if is_mounted() {
                            dispatcher.dispatch(ContactAction::Resolve);
                        } else {
                            debug!("contact form unmounted before the message resolved");
                        }
                    });
                }
                || ()
            },
            state.form.phase(),
        );
    }

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some((name, value)) = read_control(&e) {
                if let Some(field) = Field::from_name(&name) {
                    dispatcher.dispatch(ContactAction::Edit(field, value));
                }
            }
        })
    };

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ContactAction::Dismiss))
    };

    let draft = state.form.draft();
    let submitting = state.form.is_submitting();

    let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
        html! {
            <div class="form-field">
                <label for={field.name()}>{format!("{} *", field.label())}</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    value={draft.get(field).to_string()}
                    oninput={oninput.clone()}
                    placeholder={placeholder}
                    required=true
                />
            </div>
        }
    };

    html! {
        <section ref={section_ref} id={SectionId::Contact.as_str()} class="section">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .channel,
                    .social {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        background: #f4f4f5;
                        border-radius: 1rem;
                        color: inherit;
                        text-decoration: none;
                        transition: transform 300ms ease, background 300ms ease;
                    }
                    .channel:hover,
                    .social:hover {
                        transform: translateY(-4px);
                        background: #e4e4e7;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .contact-form {
                        background: #f4f4f5;
                        border: 1px solid #d4d4d8;
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                        color: #3f3f46;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #a1a1aa;
                        border-radius: 0.75rem;
                        background: #fafafa;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #18181b;
                        color: #fff;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .spinner {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        margin-right: 0.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    .form-notice {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                    }
                    .form-notice.success {
                        background: #dcfce7;
                        color: #166534;
                    }
                    .form-notice.error {
                        background: #fee2e2;
                        color: #991b1b;
                    }
                    .form-notice button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @media (max-width: 1024px) {
                        .contact-grid,
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={reveal_class(is_visible)}>
                    <div class="section-header">
                        <h2>{"Let's Connect"}</h2>
                        <div class="section-rule" />
                        <p>{&info.lead}</p>
                    </div>

                    <div class="contact-grid">
                        <div>
                            <h3>{"Get in Touch"}</h3>
                            <p>{&info.intro}</p>

                            {
                                info.channels.iter().enumerate().map(|(index, channel)| {
                                    let href = channel.href();
                                    let (target, rel) = link_target(&href);
                                    html! {
                                        <a
                                            key={channel.title.clone()}
                                            href={href}
                                            target={target}
                                            rel={rel}
                                            class={classes!("channel", animate_class(is_visible, "slide-in-left"))}
                                            style={stagger_style(index)}
                                        >
                                            <div>
                                                <h4>{&channel.title}</h4>
                                                <p>{&channel.value}</p>
                                            </div>
                                        </a>
                                    }
                                }).collect::<Html>()
                            }

                            <h4>{"Connect Online"}</h4>
                            <div class="socials">
                                {
                                    info.socials.iter().enumerate().map(|(index, social)| html! {
                                        <a
                                            key={social.name.clone()}
                                            href={social.url.clone()}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            title={format!("{} - {}", social.name, social.username)}
                                            class={classes!("social", animate_class(is_visible, "fade-in"))}
                                            style={stagger_style(index)}
                                        >
                                            <div>
                                                <strong>{&social.name}</strong>
                                                <div>{&social.username}</div>
                                            </div>
                                        </a>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class={classes!(animate_class(is_visible, "slide-in-right"))}>
                            <form class="contact-form" {onsubmit}>
                                <h3>{"Send a Message"}</h3>

                                if let Some(notice) = state.notice.as_ref() {
                                    <div class={classes!("form-notice", if matches!(notice, Notice::Sent) { "success" } else { "error" })}>
                                        <span>{notice.text()}</span>
                                        <button type="button" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
                                    </div>
                                }

                                <div class="form-row">
                                    { text_input(Field::Name, "text", "Your name") }
                                    { text_input(Field::Email, "email", "your.email@example.com") }
                                </div>
                                { text_input(Field::Subject, "text", "What's this about?") }

                                <div class="form-field">
                                    <label for={Field::Message.name()}>{format!("{} *", Field::Message.label())}</label>
                                    <textarea
                                        id={Field::Message.name()}
                                        name={Field::Message.name()}
                                        value={draft.message.clone()}
                                        oninput={oninput.clone()}
                                        rows="6"
                                        placeholder="Tell me about your project, research idea, or just say hi!"
                                        required=true
                                    />
                                </div>

                                <button type="submit" class="submit-button" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner" />
                                        {"Sending..."}
                                    } else {
                                        {"Send Message"}
                                    }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::link_target;

    #[test]
    fn web_links_open_in_a_new_tab() {
        assert_eq!(
            link_target("https://maps.google.com/?q=Gwalior"),
            ("_blank", Some("noopener noreferrer"))
        );
        assert_eq!(link_target("mailto:someone@example.com"), ("_self", None));
    }
}
