use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Logo {
    pub name: AttrValue,
    pub src: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub logos: Vec<Logo>,
    /// Seconds for one full pass of the list.
    #[prop_or(30)]
    pub duration_secs: u32,
}

/// Endless logo strip. The list is rendered twice so the CSS animation can
/// loop at -50% without a visible seam.
#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let logo = |logo: &Logo| html! {
        <li class="ticker-item">
            <img src={logo.src.clone()} alt={logo.name.clone()} loading="lazy" />
        </li>
    };

    html! {
        <div class="ticker">
            <ul class="ticker-track" style={format!("animation-duration: {}s;", props.duration_secs)}>
                { for props.logos.iter().map(logo) }
                { for props.logos.iter().map(logo) }
            </ul>
        </div>
    }
}
