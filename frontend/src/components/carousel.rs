use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Go(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Go(target) if target < self.len => target,
            CarouselAction::Go(_) => self.index,
        };
        Self { index, ..self }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: AttrValue,
    pub text: AttrValue,
    pub image: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub image_style: AttrValue,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.slides.len();
    let state = use_reducer(move || CarouselState::new(len));
    let paused = use_state(|| false);

    {
        let dispatcher = state.dispatcher();
        let millis = if *paused || len < 2 { 0 } else { config::CAROUSEL_INTERVAL_MS };
        use_interval(move || dispatcher.dispatch(CarouselAction::Next), millis);
    }

    if len == 0 {
        return html! {};
    }

    let step = |action: CarouselAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(action);
        })
    };
    let hover = |value: bool| {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(value))
    };

    html! {
        <div class="carousel" style={props.style.clone()} onmouseenter={hover(true)} onmouseleave={hover(false)}>
            <div class="carousel-track">
                {
                    for props.slides.iter().enumerate().map(|(i, slide)| html! {
                        <article class={classes!("carousel-slide", (i == state.index()).then(|| "active"))}>
                            <img src={slide.image.clone()} alt={slide.title.clone()} style={props.image_style.clone()} loading="lazy" />
                            <div class="carousel-copy">
                                <h3>{&slide.title}</h3>
                                <p>{&slide.text}</p>
                            </div>
                        </article>
                    })
                }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={step(CarouselAction::Prev)}>{"←"}</button>
                <div class="carousel-dots">
                    {
                        for (0..len).map(|i| html! {
                            <button
                                class={classes!("carousel-dot", (i == state.index()).then(|| "active"))}
                                onclick={step(CarouselAction::Go(i))}
                            />
                        })
                    }
                </div>
                <button class="carousel-arrow" onclick={step(CarouselAction::Next)}>{"→"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let state = CarouselState::new(3);
        assert_eq!(state.apply(CarouselAction::Prev).index(), 2);
        let state = state
            .apply(CarouselAction::Next)
            .apply(CarouselAction::Next)
            .apply(CarouselAction::Next);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn go_ignores_out_of_range_targets() {
        let state = CarouselState::new(4).apply(CarouselAction::Go(2));
        assert_eq!(state.index(), 2);
        assert_eq!(state.apply(CarouselAction::Go(9)).index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let state = CarouselState::new(0);
        assert_eq!(state.apply(CarouselAction::Next), state);
        assert_eq!(state.apply(CarouselAction::Prev), state);
    }
}
