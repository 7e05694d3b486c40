use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealKind};
use crate::content;
use crate::hooks::layout::use_layout;
use crate::layout::tables::CONTACT;
use crate::sections::hero::SectionProps;

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let layout = use_layout(&CONTACT, props.breakpoint);

    let block_style = format!(
        "display: flex; {}",
        layout.style(&[("padding", "block.padding"), ("flex-direction", "block.direction")])
    );

    html! {
        <section id="contact" class="contact" style={block_style}>
            <Reveal kind={RevealKind::SlideLeft}>
                <h2 style={layout.style(&[("font-size", "headline.font-size")])}>
                    {"Have a project in mind?"}
                </h2>
            </Reveal>
            <div class="contact-details">
                <p>{"Tell me about it. I reply within two working days."}</p>
                <a class="contact-email" href={format!("mailto:{}", content::CONTACT_EMAIL)}>
                    {content::CONTACT_EMAIL}
                </a>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <span>{format!("© {} {}", year, content::STUDIO)}</span>
            <nav class="footer-links">
                <a href="#services">{"Services"}</a>
                <a href="#references">{"Clients"}</a>
                <a href="#contact">{"Contact"}</a>
            </nav>
        </footer>
    }
}
