use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod tracking;
mod components;

use components::{
    about::About,
    contact::Contact,
    experience::Experience,
    footer::Footer,
    header::Header,
    hero::Hero,
    projects::Projects,
    scroll_progress::ScrollProgressBar,
};
use content::Content;
use tracking::hooks::use_active_section;

const GLOBAL_STYLE: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #fafafa;
        color: #18181b;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .section {
        padding: 6rem 0;
        background: #fafafa;
    }
    .section--tinted {
        background: #f4f4f5;
    }
    .section-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-header h2 {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 300;
        margin-bottom: 1rem;
    }
    .section-header p {
        max-width: 42rem;
        margin: 0 auto;
        color: #52525b;
        line-height: 1.6;
    }
    .section-rule {
        height: 1px;
        width: 4rem;
        margin: 0 auto 2rem;
        background: #3b82f6;
    }
    .section-subtitle {
        text-align: center;
        margin: 5rem 0 2rem;
    }
    .reveal {
        opacity: 0;
        transform: translateY(2.5rem);
        transition: opacity 1s ease, transform 1s ease;
    }
    .reveal.reveal--shown {
        opacity: 1;
        transform: translateY(0);
    }
    .fade-in { animation: fadeIn 0.6s ease-out both; }
    .slide-up { animation: slideUp 0.6s ease-out both; }
    .slide-in-left { animation: slideInLeft 0.6s ease-out both; }
    .slide-in-right { animation: slideInRight 0.6s ease-out both; }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slideUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-30px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(30px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .site-footer {
        background: #e4e4e7;
        color: #52525b;
        padding: 2rem 1.5rem;
        text-align: center;
    }
"#;

fn load_content() -> Rc<Content> {
    match Content::embedded() {
        Ok(content) => Rc::new(content),
        Err(err) => {
            error!("site content is malformed, rendering empty page: {}", err);
            Rc::new(Content::default())
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());
    let active = use_active_section();
    let content: Rc<Content> = (*content).clone();

    html! {
        <>
            <style>{GLOBAL_STYLE}</style>
            <ScrollProgressBar />
            <Header active={active} brand={content.owner.full_name()} />
            <main>
                <Hero content={content.clone()} />
                <About content={content.clone()} />
                <Experience content={content.clone()} />
                <Projects content={content.clone()} />
                <Contact content={content.clone()} />
            </main>
            <Footer owner={content.owner.full_name()} note={content.footer.clone()} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
