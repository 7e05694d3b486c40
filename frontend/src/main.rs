use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod scroll {
    pub mod host;
    pub mod progress;
    pub mod reveal;
    pub mod visibility;
    #[cfg(test)]
    pub mod fake;
}
mod layout {
    pub mod breakpoint;
    pub mod resolver;
    pub mod tables;
}
mod hooks {
    pub mod layout;
    pub mod scroll;
}
mod components {
    pub mod accordion;
    pub mod carousel;
    pub mod reading_text;
    pub mod reveal;
    pub mod ticker;
}
mod sections {
    pub mod contact;
    pub mod hero;
    pub mod references;
    pub mod services;
    pub mod sponsors;
    pub mod why_me;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use hooks::scroll::use_scroll_trigger;
use layout::breakpoint::Breakpoint;
use pages::{home::Home, not_found::NotFound};
use scroll::visibility::VisibilityOptions;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


fn page_at_top() -> bool {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .map_or(true, |y| y <= 0.0)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub breakpoint: Breakpoint,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    // The sentinel covers the top of the page; once it leaves the viewport
    // the nav switches to its solid style.
    let sentinel = use_node_ref();
    let starts_at_top = *use_state(page_at_top);
    let at_top = use_scroll_trigger(
        sentinel.clone(),
        VisibilityOptions::new(0.0, false).initially_visible(starts_at_top),
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let mobile = props.breakpoint.is_mobile();
    let menu_class = classes!("nav-right", (mobile && *menu_open).then(|| "mobile-menu-open"));

    html! {
        <>
            <div ref={sentinel} class="nav-sentinel" style="position: absolute; top: 0; left: 0; width: 1px; height: 120px;"></div>
            <nav class={classes!("top-nav", (!at_top).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#top" class="nav-logo">{content::STUDIO}</a>
                    {
                        if mobile {
                            html! {
                                <button class="burger-menu" onclick={toggle_menu}>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class={menu_class}>
                        <a href="#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                        <a href="#references" class="nav-link" onclick={close_menu.clone()}>{"Clients"}</a>
                        <a href="#why-me" class="nav-link" onclick={close_menu.clone()}>{"Why me"}</a>
                        <a href="#contact" class="nav-contact-button" onclick={close_menu}>{"Contact"}</a>
                    </div>
                </div>
            </nav>
        </>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", content::STUDIO);
    yew::Renderer::<App>::new().render();
}
