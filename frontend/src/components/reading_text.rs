use yew::prelude::*;

use crate::config;
use crate::hooks::scroll::use_scroll_progress;
use crate::scroll::reveal::RevealConfig;

#[derive(Properties, PartialEq)]
pub struct ReadingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or(config::reveal())]
    pub reveal: RevealConfig,
}

/// Paragraph whose characters darken one after another as it scrolls
/// through the reading window.
#[function_component(ReadingText)]
pub fn reading_text(props: &ReadingTextProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), config::reading_window());

    let chars: Vec<char> = props.text.chars().collect();
    let len = chars.len();
    let reveal = props.reveal;

    html! {
        <p ref={node} class={classes!("reading-text", props.class.clone())} style={props.style.clone()}>
            {
                for chars.into_iter().enumerate().map(|(i, c)| html! {
                    <span style={format!("color: {};", reveal.color(i, len, progress))}>{c.to_string()}</span>
                })
            }
        </p>
    }
}
