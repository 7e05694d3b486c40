use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::layout::breakpoint::Breakpoint;
use crate::layout::resolver::{LayoutSet, LayoutTable};
use crate::scroll::host::{HostEvent, ScrollHost, WebHost};

pub fn current_breakpoint() -> Breakpoint {
    match WebHost::new() {
        Ok(host) => config::BREAKPOINTS.classify(host.viewport_width()),
        Err(_) => Breakpoint::Desktop,
    }
}

/// Resolves `breakpoint` in `table`. A missing entry panics when layouts
/// are strict, otherwise the nearest smaller entry is used.
pub fn resolve_layout(table: &LayoutTable, breakpoint: Breakpoint) -> LayoutSet {
    match table.resolve(breakpoint) {
        Ok(set) => set,
        Err(err) if config::strict_layouts() => panic!("{}", err),
        Err(err) => {
            log::error!("{}", err);
            table.resolve_or_smaller(breakpoint).unwrap_or_default()
        }
    }
}

/// Current breakpoint, re-classified after resizing settles.
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let breakpoint = use_state(current_breakpoint);

    {
        let setter = breakpoint.setter();
        use_effect_with_deps(
            move |_| {
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let registration = WebHost::new().and_then(|host| {
                    let pending = Rc::clone(&pending);
                    let id = host.add_listener(
                        HostEvent::Resize,
                        Rc::new(move || {
                            let setter = setter.clone();
                            // Replacing the timeout cancels the previous one.
                            *pending.borrow_mut() = Some(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                                setter.set(current_breakpoint());
                            }));
                        }),
                    )?;
                    Ok((host, id))
                });
                if let Err(err) = &registration {
                    log::warn!("breakpoint tracking disabled: {}", err);
                }

                move || {
                    if let Ok((host, id)) = registration {
                        host.remove_listener(id);
                    }
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    *breakpoint
}

#[hook]
pub fn use_layout(table: &'static LayoutTable, breakpoint: Breakpoint) -> Rc<LayoutSet> {
    use_memo(
        move |(breakpoint, _)| resolve_layout(table, *breakpoint),
        (breakpoint, table.name()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resolver::LayoutValue;

    #[test]
    fn resolves_present_breakpoints() {
        let table = LayoutTable::from_json("t", r#"{ "tablet": { "gap": 8 } }"#).unwrap();
        let set = resolve_layout(&table, Breakpoint::Tablet);
        assert_eq!(set.get("gap"), Some(&LayoutValue::Px(8.0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "layout table `t` has no entry for breakpoint `desktop`")]
    fn missing_breakpoint_fails_loudly_in_development() {
        let table = LayoutTable::from_json("t", r#"{ "tablet": { "gap": 8 } }"#).unwrap();
        resolve_layout(&table, Breakpoint::Desktop);
    }
}
