use web_sys::Element;
use yew::prelude::*;

use crate::scroll::host::WebHost;
use crate::scroll::progress::{ScrollProgressTracker, TransitionWindow};
use crate::scroll::visibility::{VisibilityOptions, ViewportVisibilityTrigger};

/// Progress of `node` through `window`, 0 until the node is attached.
#[hook]
pub fn use_scroll_progress(node: NodeRef, window: TransitionWindow) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |(node, window)| {
                let tracker = WebHost::new().and_then(|host| {
                    ScrollProgressTracker::mount(host, node.clone(), *window, move |p| setter.set(p))
                });
                if let Err(err) = &tracker {
                    log::warn!("scroll progress disabled: {}", err);
                }
                move || drop(tracker)
            },
            (node, window),
        );
    }

    *progress
}

/// Whether `node` is in view, starting from `options.initially_visible`.
#[hook]
pub fn use_scroll_trigger(node: NodeRef, options: VisibilityOptions) -> bool {
    let visible = use_state(|| options.initially_visible);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let trigger = match node.cast::<Element>() {
                    Some(element) => WebHost::new()
                        .and_then(|host| {
                            ViewportVisibilityTrigger::observe(
                                host,
                                &element,
                                options.clone(),
                                move |v| setter.set(v),
                            )
                        })
                        .map_err(|err| log::warn!("visibility trigger disabled: {}", err))
                        .ok(),
                    None => {
                        log::debug!("visibility trigger skipped, node not attached");
                        None
                    }
                };
                move || drop(trigger)
            },
            (node, options),
        );
    }

    *visible
}
