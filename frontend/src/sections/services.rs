use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealKind};
use crate::content::SERVICES;
use crate::hooks::layout::use_layout;
use crate::layout::tables;
use crate::scroll::visibility::VisibilityOptions;
use crate::sections::hero::SectionProps;

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let layout = use_layout(&tables::SERVICES, props.breakpoint);

    let grid_style = format!(
        "display: grid; {}",
        layout.style(&[("grid-template-columns", "grid.columns"), ("gap", "grid.gap")])
    );
    let card_style = layout.style(&[("padding", "card.padding"), ("min-height", "card.min-height")]);

    html! {
        <section id="services" class="services">
            <h2 style={layout.style(&[("font-size", "heading.font-size")])}>{"What I do"}</h2>
            <div class="services-grid" style={grid_style}>
                {
                    for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        // Cards animate in and out as they cross the viewport.
                        <Reveal
                            kind={RevealKind::SlideUp}
                            options={VisibilityOptions::new(0.2, false).with_root_margin("0px 0px -10% 0px")}
                            delay_ms={(i as u32 % 3) * 120}
                        >
                            <div class="service-card" style={card_style.clone()}>
                                <img src={service.icon} alt="" class="service-icon" />
                                <h3>{service.title}</h3>
                                <p>{service.text}</p>
                            </div>
                        </Reveal>
                    })
                }
            </div>
        </section>
    }
}
