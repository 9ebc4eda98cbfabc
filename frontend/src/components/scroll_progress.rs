use yew::prelude::*;

use crate::tracking::hooks::use_scroll_progress;

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let percent = use_scroll_progress();

    html! {
        <div class="scroll-progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{:.0}", percent)}>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        z-index: 60;
                        background: #d4d4d8;
                    }
                    .scroll-progress__fill {
                        height: 100%;
                        background: linear-gradient(90deg, #3b82f6, #8b5cf6);
                        transition: width 150ms ease-out;
                    }
                "#}
            </style>
            <div class="scroll-progress__fill" style={format!("width: {}%;", percent)} />
        </div>
    }
}
