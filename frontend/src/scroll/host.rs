use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::NodeRef;

use crate::scroll::visibility::{IntersectionSample, VisibilityOptions};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Scroll,
    Resize,
}

impl HostEvent {
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u32);

/// Something with a vertical position relative to the viewport's top edge.
/// `None` means the element is not attached yet.
pub trait Anchor {
    fn top(&self) -> Option<f64>;
}

impl Anchor for NodeRef {
    fn top(&self) -> Option<f64> {
        self.cast::<Element>()
            .map(|element| element.get_bounding_client_rect().top())
    }
}

/// Viewport metrics, window listeners and animation frames.
///
/// Every id handed out must be released exactly once by its owner, either
/// through `remove_listener` / `cancel_frame` or by the frame firing.
pub trait ScrollHost {
    fn viewport_height(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn add_listener(&self, event: HostEvent, listener: Rc<dyn Fn()>) -> Result<ListenerId, HostError>;
    fn remove_listener(&self, id: ListenerId);
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, HostError>;
    fn cancel_frame(&self, id: FrameId);
}

pub trait IntersectionHost {
    type Target;

    fn observe(
        &self,
        target: &Self::Target,
        options: &VisibilityOptions,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
    ) -> Result<ObserverId, HostError>;
    fn disconnect(&self, id: ObserverId);
}

impl<T: ScrollHost + ?Sized> ScrollHost for Rc<T> {
    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }

    fn add_listener(&self, event: HostEvent, listener: Rc<dyn Fn()>) -> Result<ListenerId, HostError> {
        (**self).add_listener(event, listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        (**self).remove_listener(id)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, HostError> {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, id: FrameId) {
        (**self).cancel_frame(id)
    }
}

impl<T: IntersectionHost + ?Sized> IntersectionHost for Rc<T> {
    type Target = T::Target;

    fn observe(
        &self,
        target: &Self::Target,
        options: &VisibilityOptions,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
    ) -> Result<ObserverId, HostError> {
        (**self).observe(target, options, on_sample)
    }

    fn disconnect(&self, id: ObserverId) {
        (**self).disconnect(id)
    }
}

struct PendingFrame {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

struct Observation {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

/// The browser window as a host.
///
/// Closures stay owned here until they can no longer be invoked. A closure
/// is never dropped while it runs: fired frames are reclaimed on the next
/// request, disconnected observers when the host itself goes away.
pub struct WebHost {
    window: Window,
    next_id: Cell<u32>,
    listeners: RefCell<HashMap<ListenerId, (HostEvent, Closure<dyn Fn()>)>>,
    frames: RefCell<HashMap<FrameId, PendingFrame>>,
    spent_frames: Rc<RefCell<Vec<FrameId>>>,
    observations: RefCell<HashMap<ObserverId, Observation>>,
    retired: RefCell<Vec<Observation>>,
}

impl WebHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self {
            window,
            next_id: Cell::new(0),
            listeners: RefCell::new(HashMap::new()),
            frames: RefCell::new(HashMap::new()),
            spent_frames: Rc::new(RefCell::new(Vec::new())),
            observations: RefCell::new(HashMap::new()),
            retired: RefCell::new(Vec::new()),
        })
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        id
    }

    fn reclaim_spent_frames(&self) {
        let spent: Vec<FrameId> = self.spent_frames.borrow_mut().drain(..).collect();
        let mut frames = self.frames.borrow_mut();
        for id in spent {
            frames.remove(&id);
        }
    }

    fn metric(value: Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

impl ScrollHost for WebHost {
    fn viewport_height(&self) -> f64 {
        Self::metric(self.window.inner_height())
    }

    fn viewport_width(&self) -> f64 {
        Self::metric(self.window.inner_width())
    }

    fn add_listener(&self, event: HostEvent, listener: Rc<dyn Fn()>) -> Result<ListenerId, HostError> {
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn Fn()>);
        self.window
            .add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())?;
        let id = ListenerId(self.next_id());
        self.listeners.borrow_mut().insert(id, (event, closure));
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        if let Some((event, closure)) = self.listeners.borrow_mut().remove(&id) {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {}", event.name(), HostError::from(err));
            }
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, HostError> {
        self.reclaim_spent_frames();

        let id = FrameId(self.next_id());
        let spent = Rc::clone(&self.spent_frames);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
            spent.borrow_mut().push(id);
        }) as Box<dyn FnMut()>);

        let handle = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())?;
        self.frames
            .borrow_mut()
            .insert(id, PendingFrame { handle, _closure: closure });
        Ok(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Some(frame) = self.frames.borrow_mut().remove(&id) {
            if let Err(err) = self.window.cancel_animation_frame(frame.handle) {
                log::warn!("failed to cancel animation frame: {}", HostError::from(err));
            }
        }
    }
}

impl IntersectionHost for WebHost {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        options: &VisibilityOptions,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
    ) -> Result<ObserverId, HostError> {
        let closure = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_sample(IntersectionSample {
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        let id = ObserverId(self.next_id());
        self.observations
            .borrow_mut()
            .insert(id, Observation { observer, _closure: closure });
        Ok(id)
    }

    fn disconnect(&self, id: ObserverId) {
        // May run inside the observer's own callback, so the closure is
        // parked instead of dropped.
        if let Some(observation) = self.observations.borrow_mut().remove(&id) {
            observation.observer.disconnect();
            self.retired.borrow_mut().push(observation);
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        for (_, (event, closure)) in self.listeners.get_mut().drain() {
            let _ = self
                .window
                .remove_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref());
        }
        for (_, frame) in self.frames.get_mut().drain() {
            let _ = self.window.cancel_animation_frame(frame.handle);
        }
        for (_, observation) in self.observations.get_mut().drain() {
            observation.observer.disconnect();
        }
    }
}
