//! In-memory host for driving the engine from tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scroll::host::{
    Anchor, FrameId, HostError, HostEvent, IntersectionHost, ListenerId, ObserverId, ScrollHost,
};
use crate::scroll::visibility::{IntersectionSample, VisibilityOptions};

type Listener = (ListenerId, HostEvent, Rc<dyn Fn()>);
type Observer = (ObserverId, VisibilityOptions, Rc<dyn Fn(IntersectionSample)>);

#[derive(Default)]
pub struct FakeHost {
    height: Cell<f64>,
    width: Cell<f64>,
    next_id: Cell<u32>,
    listeners: RefCell<Vec<Listener>>,
    frames: RefCell<Vec<(FrameId, Box<dyn FnOnce()>)>>,
    observers: RefCell<Vec<Observer>>,
    frame_requests: Cell<usize>,
    disconnects: Cell<usize>,
    ignore_cancel: Cell<bool>,
}

impl FakeHost {
    pub fn new(height: f64) -> Rc<Self> {
        let host = Self::default();
        host.height.set(height);
        host.width.set(1280.0);
        Rc::new(host)
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn set_height(&self, height: f64) {
        self.height.set(height);
    }

    /// Cancelled frames still fire, like a callback racing teardown.
    pub fn ignore_cancel(&self) {
        self.ignore_cancel.set(true);
    }

    pub fn fire(&self, event: HostEvent) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        for (_, callback) in frames {
            callback();
        }
    }

    pub fn intersect(&self, sample: IntersectionSample) {
        for callback in self.observer_callbacks() {
            callback(sample);
        }
    }

    pub fn observer_callbacks(&self) -> Vec<Rc<dyn Fn(IntersectionSample)>> {
        self.observers
            .borrow()
            .iter()
            .map(|(_, _, callback)| Rc::clone(callback))
            .collect()
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    pub fn active_observers(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.get()
    }

    /// Options handed to `observe` by the observers still connected.
    pub fn observed_options(&self) -> Vec<VisibilityOptions> {
        self.observers
            .borrow()
            .iter()
            .map(|(_, options, _)| options.clone())
            .collect()
    }
}

impl ScrollHost for FakeHost {
    fn viewport_height(&self) -> f64 {
        self.height.get()
    }

    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn add_listener(&self, event: HostEvent, listener: Rc<dyn Fn()>) -> Result<ListenerId, HostError> {
        let id = ListenerId(self.next_id());
        self.listeners.borrow_mut().push((id, event, listener));
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _, _)| *existing != id);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, HostError> {
        let id = FrameId(self.next_id());
        self.frame_requests.set(self.frame_requests.get() + 1);
        self.frames.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        if !self.ignore_cancel.get() {
            self.frames.borrow_mut().retain(|(existing, _)| *existing != id);
        }
    }
}

impl IntersectionHost for FakeHost {
    type Target = ();

    fn observe(
        &self,
        _target: &(),
        options: &VisibilityOptions,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
    ) -> Result<ObserverId, HostError> {
        let id = ObserverId(self.next_id());
        self.observers
            .borrow_mut()
            .push((id, options.clone(), on_sample));
        Ok(id)
    }

    fn disconnect(&self, id: ObserverId) {
        self.disconnects.set(self.disconnects.get() + 1);
        self.observers.borrow_mut().retain(|(existing, _, _)| *existing != id);
    }
}

/// Element top offset controlled by the test.
#[derive(Clone, Default)]
pub struct FakeAnchor(Rc<Cell<Option<f64>>>);

impl FakeAnchor {
    pub fn at(top: f64) -> Self {
        Self(Rc::new(Cell::new(Some(top))))
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn set(&self, top: f64) {
        self.0.set(Some(top));
    }
}

impl Anchor for FakeAnchor {
    fn top(&self) -> Option<f64> {
        self.0.get()
    }
}
