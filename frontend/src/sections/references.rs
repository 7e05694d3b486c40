use yew::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::reveal::Reveal;
use crate::content;
use crate::sections::hero::SectionProps;

#[function_component(References)]
pub fn references(props: &SectionProps) -> Html {
    html! {
        <section id="references" class="references">
            <Reveal>
                <h2>{"Selected clients"}</h2>
            </Reveal>
            <Accordion items={content::references()} compact={props.breakpoint.is_mobile()} />
        </section>
    }
}
