use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: String,
    pub note: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. {}", year, props.owner, props.note)}</p>
        </footer>
    }
}
