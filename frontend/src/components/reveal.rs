use yew::prelude::*;

use crate::hooks::scroll::use_scroll_trigger;
use crate::scroll::visibility::VisibilityOptions;

#[derive(Clone, Copy, PartialEq)]
pub enum RevealKind {
    Fade,
    SlideUp,
    SlideLeft,
}

impl RevealKind {
    fn class(self) -> &'static str {
        match self {
            RevealKind::Fade => "reveal-fade",
            RevealKind::SlideUp => "reveal-slide-up",
            RevealKind::SlideLeft => "reveal-slide-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealKind::Fade)]
    pub kind: RevealKind,
    #[prop_or_default]
    pub options: VisibilityOptions,
    /// Transition delay in milliseconds, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_scroll_trigger(node.clone(), props.options.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.kind.class(), visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
