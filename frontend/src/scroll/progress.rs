use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::host::{Anchor, FrameId, HostError, HostEvent, ListenerId, ScrollHost};

/// Smallest change in progress that is worth a re-render.
pub const DEFAULT_HYSTERESIS: f64 = 0.01;

/// The part of the viewport an element's top edge travels through while its
/// progress goes from 0 to 1. Factors are fractions of the viewport height,
/// measured from the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionWindow {
    pub start_factor: f64,
    pub end_factor: f64,
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self {
            start_factor: 0.6,
            end_factor: 0.0,
        }
    }
}

impl TransitionWindow {
    pub fn points(&self, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height * self.start_factor,
            viewport_height * self.end_factor,
        )
    }

    pub fn progress(&self, top: f64, viewport_height: f64) -> f64 {
        if !top.is_finite() {
            return 0.0;
        }
        let (start, end) = self.points(viewport_height);
        if top > start {
            0.0
        } else if top < end {
            1.0
        } else {
            let span = start - end;
            if span <= 0.0 {
                return 0.0;
            }
            ((start - top) / span).clamp(0.0, 1.0)
        }
    }
}

#[derive(Default)]
struct TrackerState {
    progress: f64,
    pending: Option<FrameId>,
    listeners: Vec<ListenerId>,
    live: bool,
}

struct TrackerInner<H: ScrollHost> {
    host: H,
    anchor: Box<dyn Anchor>,
    window: TransitionWindow,
    hysteresis: f64,
    on_change: Box<dyn Fn(f64)>,
    state: RefCell<TrackerState>,
}

impl<H: ScrollHost> TrackerInner<H> {
    fn on_frame(&self) {
        let live = {
            let mut state = self.state.borrow_mut();
            state.pending = None;
            state.live
        };
        if live {
            self.measure();
        }
    }

    fn measure(&self) {
        let top = match self.anchor.top() {
            Some(top) => top,
            None => return,
        };
        let next = self.window.progress(top, self.host.viewport_height());
        let changed = {
            let mut state = self.state.borrow_mut();
            let delta = (next - state.progress).abs();
            // Clamped endpoints always land, however small the final step.
            let at_edge = next == 0.0 || next == 1.0;
            if delta > self.hysteresis || (at_edge && delta > 0.0) {
                state.progress = next;
                true
            } else {
                false
            }
        };
        if changed {
            (self.on_change)(next);
        }
    }
}

// At most one frame is outstanding; events arriving while it is pending are
// absorbed, the frame reads the latest geometry when it fires.
fn schedule<H: ScrollHost + 'static>(inner: &Rc<TrackerInner<H>>) {
    {
        let state = inner.state.borrow();
        if !state.live || state.pending.is_some() {
            return;
        }
    }
    let weak = Rc::downgrade(inner);
    let requested = inner.host.request_frame(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.on_frame();
        }
    }));
    match requested {
        Ok(id) => inner.state.borrow_mut().pending = Some(id),
        Err(err) => log::warn!("animation frame request failed: {}", err),
    }
}

/// Tracks how far the viewport has scrolled through an element's
/// transition window.
///
/// Mounting registers scroll and resize listeners and measures once.
/// Dropping the tracker removes the listeners and cancels a pending frame.
pub struct ScrollProgressTracker<H: ScrollHost> {
    inner: Rc<TrackerInner<H>>,
}

impl<H: ScrollHost + 'static> ScrollProgressTracker<H> {
    pub fn mount(
        host: H,
        anchor: impl Anchor + 'static,
        window: TransitionWindow,
        on_change: impl Fn(f64) + 'static,
    ) -> Result<Self, HostError> {
        Self::mount_with_hysteresis(host, anchor, window, DEFAULT_HYSTERESIS, on_change)
    }

    pub fn mount_with_hysteresis(
        host: H,
        anchor: impl Anchor + 'static,
        window: TransitionWindow,
        hysteresis: f64,
        on_change: impl Fn(f64) + 'static,
    ) -> Result<Self, HostError> {
        let tracker = Self {
            inner: Rc::new(TrackerInner {
                host,
                anchor: Box::new(anchor),
                window,
                hysteresis,
                on_change: Box::new(on_change),
                state: RefCell::new(TrackerState {
                    live: true,
                    ..TrackerState::default()
                }),
            }),
        };

        for event in [HostEvent::Scroll, HostEvent::Resize] {
            let weak = Rc::downgrade(&tracker.inner);
            // On failure `tracker` drops here and releases what was added.
            let id = tracker.inner.host.add_listener(
                event,
                Rc::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        schedule(&inner);
                    }
                }),
            )?;
            tracker.inner.state.borrow_mut().listeners.push(id);
        }

        tracker.inner.measure();
        log::debug!("scroll progress tracker mounted at {:.2}", tracker.progress());
        Ok(tracker)
    }
}

impl<H: ScrollHost> ScrollProgressTracker<H> {
    pub fn progress(&self) -> f64 {
        self.inner.state.borrow().progress
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }
}

impl<H: ScrollHost> Drop for ScrollProgressTracker<H> {
    fn drop(&mut self) {
        let (listeners, pending) = {
            let mut state = self.inner.state.borrow_mut();
            state.live = false;
            (std::mem::take(&mut state.listeners), state.pending.take())
        };
        for id in listeners {
            self.inner.host.remove_listener(id);
        }
        if let Some(frame) = pending {
            self.inner.host.cancel_frame(frame);
        }
    }
}
