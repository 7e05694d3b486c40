use yew::prelude::*;

use crate::hooks::layout::use_breakpoint;
use crate::sections::contact::{Contact, Footer};
use crate::sections::hero::Hero;
use crate::sections::references::References;
use crate::sections::services::Services;
use crate::sections::sponsors::Sponsors;
use crate::sections::why_me::WhyMe;
use crate::Nav;

const STYLES: &str = r#"
    .landing-page {
        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: #000;
        background: #fff;
        overflow-x: hidden;
    }
    .hero {
        position: relative;
        min-height: 100vh;
    }
    .hero-portrait.centered {
        transform: translateX(50%);
    }
    .hero-cta {
        display: inline-block;
        margin-top: 2rem;
        padding: 0.9rem 2rem;
        border-radius: 999px;
        background: #000;
        color: #fff;
        text-decoration: none;
    }
    .reveal {
        opacity: 0;
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal-slide-up { transform: translateY(40px); }
    .reveal-slide-left { transform: translateX(40px); }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .reading-text span {
        transition: color 0.1s linear;
    }
    .accordion-item .accordion-body {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.4s ease;
    }
    .accordion-item.open .accordion-body {
        max-height: 600px;
    }
    .carousel-slide { display: none; }
    .carousel-slide.active { display: flex; }
    .ticker { overflow: hidden; }
    .ticker-track {
        display: flex;
        width: max-content;
        animation: ticker linear infinite;
    }
    @keyframes ticker {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let breakpoint = use_breakpoint();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class={classes!("landing-page", breakpoint.name())}>
            <style>{STYLES}</style>
            <Nav breakpoint={breakpoint} />
            <Hero breakpoint={breakpoint} />
            <Services breakpoint={breakpoint} />
            <References breakpoint={breakpoint} />
            <WhyMe breakpoint={breakpoint} />
            <Sponsors breakpoint={breakpoint} />
            <Contact breakpoint={breakpoint} />
            <Footer />
        </div>
    }
}
