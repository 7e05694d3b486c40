use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealKind};
use crate::content;
use crate::hooks::layout::use_layout;
use crate::layout::breakpoint::Breakpoint;
use crate::layout::tables::HERO;
use crate::scroll::visibility::VisibilityOptions;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub breakpoint: Breakpoint,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let layout = use_layout(&HERO, props.breakpoint);

    let title_style = format!(
        "position: absolute; {}",
        layout.style(&[
            ("top", "title.top"),
            ("left", "title.left"),
            ("font-size", "title.font-size"),
        ])
    );
    let subtitle_style = layout.style(&[
        ("font-size", "subtitle.font-size"),
        ("max-width", "subtitle.max-width"),
    ]);
    let portrait_style = format!(
        "position: absolute; {}",
        layout.style(&[
            ("width", "portrait.width"),
            ("right", "portrait.right"),
            ("top", "portrait.top"),
        ])
    );

    // The portrait sits under the copy on phones, beside it otherwise.
    let portrait_class = classes!("hero-portrait", props.breakpoint.is_mobile().then(|| "centered"));

    html! {
        <section id="top" class="hero" style={layout.style(&[("padding", "padding")])}>
            <div class="hero-copy" style={title_style}>
                <Reveal kind={RevealKind::SlideUp} options={VisibilityOptions::new(0.0, true)}>
                    <h1>{content::HERO_TITLE}</h1>
                </Reveal>
                <Reveal kind={RevealKind::Fade} delay_ms={200}>
                    <p class="hero-subtitle" style={subtitle_style}>{content::HERO_SUBTITLE}</p>
                </Reveal>
                <a href="#contact" class="hero-cta">{"Start a project"}</a>
            </div>
            <img class={portrait_class} style={portrait_style} src="/assets/portrait.jpg" alt={content::STUDIO} />
        </section>
    }
}
