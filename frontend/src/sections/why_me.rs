use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::reading_text::ReadingText;
use crate::content;
use crate::hooks::layout::use_layout;
use crate::layout::tables::WHY_ME;
use crate::sections::hero::SectionProps;

#[function_component(WhyMe)]
pub fn why_me(props: &SectionProps) -> Html {
    let layout = use_layout(&WHY_ME, props.breakpoint);

    let statement_style = layout.style(&[
        ("font-size", "statement.font-size"),
        ("max-width", "statement.max-width"),
    ]);

    html! {
        <section id="why-me" class="why-me">
            <h2>{"Why work with me"}</h2>
            <ReadingText text={content::WHY_ME_STATEMENT} class="why-me-statement" style={statement_style} />
            <Carousel
                slides={content::reasons()}
                style={layout.style(&[("height", "slide.height")])}
                image_style={layout.style(&[("width", "slide.image-width")])}
            />
        </section>
    }
}
