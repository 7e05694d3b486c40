use yew::prelude::*;

use crate::components::ticker::Ticker;
use crate::content;
use crate::sections::hero::SectionProps;

#[function_component(Sponsors)]
pub fn sponsors(props: &SectionProps) -> Html {
    // Fewer logos fit on a phone, so slow the strip down.
    let duration = if props.breakpoint.is_mobile() { 40 } else { 30 };

    html! {
        <section class="sponsors">
            <p class="sponsors-label">{"Trusted by"}</p>
            <Ticker logos={content::sponsors()} duration_secs={duration} />
        </section>
    }
}
