use web_sys::MouseEvent;
use yew::prelude::*;

/// Which item of an accordion is expanded. At most one is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    #[cfg(test)]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub body: AttrValue,
    pub image: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class={classes!("accordion", props.compact.then(|| "compact"))}>
            {
                for props.items.iter().enumerate().map(|(index, item)| {
                    let toggle = {
                        let state = state.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            state.set(state.toggle(index));
                        })
                    };
                    let open = state.is_open(index);
                    html! {
                        <div class={classes!("accordion-item", open.then(|| "open"))}>
                            <button class="accordion-header" onclick={toggle}>
                                <span class="accordion-title">{&item.title}</span>
                                <span class="accordion-subtitle">{&item.subtitle}</span>
                                <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                            </button>
                            <div class="accordion-body">
                                {
                                    if let Some(image) = &item.image {
                                        html! { <img src={image.clone()} alt={item.title.clone()} loading="lazy" /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <p>{&item.body}</p>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
