use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scroll::host::{HostError, IntersectionHost, ObserverId};

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible, in [0, 1].
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
    /// Latch `true` forever after the first entry.
    pub trigger_once: bool,
    /// State reported before the first sample arrives.
    pub initially_visible: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
            initially_visible: false,
        }
    }
}

impl VisibilityOptions {
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            trigger_once,
            ..Self::default()
        }
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn initially_visible(mut self, visible: bool) -> Self {
        self.initially_visible = visible;
        self
    }
}

/// One intersection observation of the target element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl IntersectionSample {
    pub fn with_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    visible: bool,
    latched: bool,
}

impl VisibilityState {
    /// Starting state for `options`. A one-shot trigger that starts visible
    /// is already latched.
    pub fn starting(options: &VisibilityOptions) -> Self {
        Self {
            visible: options.initially_visible,
            latched: options.initially_visible && options.trigger_once,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn latched(&self) -> bool {
        self.latched
    }

    /// Applies a sample and returns whether `visible` flipped.
    pub fn apply(&mut self, sample: IntersectionSample, options: &VisibilityOptions) -> bool {
        if self.latched {
            return false;
        }
        let entered = sample.is_intersecting && sample.ratio >= options.threshold;
        if entered == self.visible {
            return false;
        }
        self.visible = entered;
        if entered && options.trigger_once {
            self.latched = true;
        }
        true
    }
}

struct TriggerInner<H: IntersectionHost> {
    host: H,
    options: VisibilityOptions,
    state: RefCell<VisibilityState>,
    observer: Cell<Option<ObserverId>>,
    on_change: Box<dyn Fn(bool)>,
}

impl<H: IntersectionHost> TriggerInner<H> {
    fn apply(&self, sample: IntersectionSample) {
        let (changed, state) = {
            let mut state = self.state.borrow_mut();
            let changed = state.apply(sample, &self.options);
            (changed, *state)
        };
        if state.latched() {
            self.release();
        }
        if changed {
            (self.on_change)(state.visible());
        }
    }

    fn release(&self) {
        if let Some(id) = self.observer.take() {
            self.host.disconnect(id);
        }
    }
}

/// Reports whether an element has entered the viewport.
///
/// Dropping the trigger disconnects its observer. With `trigger_once` the
/// observer is already disconnected as soon as the state latches.
pub struct ViewportVisibilityTrigger<H: IntersectionHost> {
    inner: Rc<TriggerInner<H>>,
}

impl<H: IntersectionHost + 'static> ViewportVisibilityTrigger<H> {
    pub fn observe(
        host: H,
        target: &H::Target,
        options: VisibilityOptions,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, HostError> {
        let inner = Rc::new(TriggerInner {
            host,
            state: RefCell::new(VisibilityState::starting(&options)),
            options,
            observer: Cell::new(None),
            on_change: Box::new(on_change),
        });

        let weak = Rc::downgrade(&inner);
        let id = inner.host.observe(
            target,
            &inner.options,
            Rc::new(move |sample: IntersectionSample| {
                if let Some(inner) = weak.upgrade() {
                    inner.apply(sample);
                }
            }),
        )?;
        inner.observer.set(Some(id));
        // Latched at start, or by a sample delivered synchronously during
        // `observe` before the id was stored.
        if inner.state.borrow().latched() {
            inner.release();
        }

        log::debug!("visibility trigger observing (threshold {})", inner.options.threshold);
        Ok(Self { inner })
    }
}

#[cfg(test)]
impl<H: IntersectionHost> ViewportVisibilityTrigger<H> {
    pub fn visible(&self) -> bool {
        self.inner.state.borrow().visible()
    }

    pub fn is_observing(&self) -> bool {
        self.inner.observer.get().is_some()
    }
}

impl<H: IntersectionHost> Drop for ViewportVisibilityTrigger<H> {
    fn drop(&mut self) {
        self.inner.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::fake::FakeHost;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |visible| sink.borrow_mut().push(visible))
    }

    #[test]
    fn repeating_trigger_follows_every_crossing() {
        let host = FakeHost::new(800.0);
        let options = VisibilityOptions::new(0.5, false);
        let trigger = ViewportVisibilityTrigger::observe(Rc::clone(&host), &(), options, |_| {})
            .unwrap();

        let mut sequence = vec![trigger.visible()];
        for ratio in [0.7, 0.2, 0.9, 0.1] {
            host.intersect(IntersectionSample::with_ratio(ratio));
            sequence.push(trigger.visible());
        }

        assert_eq!(sequence, vec![false, true, false, true, false]);
        assert!(trigger.is_observing());
    }

    #[test]
    fn emits_only_on_flips() {
        let host = FakeHost::new(800.0);
        let (seen, on_change) = recorder();
        let _trigger = ViewportVisibilityTrigger::observe(
            Rc::clone(&host),
            &(),
            VisibilityOptions::new(0.5, false),
            on_change,
        )
        .unwrap();

        for ratio in [0.1, 0.6, 0.8, 1.0, 0.4, 0.3] {
            host.intersect(IntersectionSample::with_ratio(ratio));
        }

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn one_shot_trigger_latches_and_disconnects() {
        let host = FakeHost::new(800.0);
        let (seen, on_change) = recorder();
        let trigger = ViewportVisibilityTrigger::observe(
            Rc::clone(&host),
            &(),
            VisibilityOptions::new(0.3, true),
            on_change,
        )
        .unwrap();

        host.intersect(IntersectionSample::with_ratio(0.5));
        assert!(trigger.visible());
        assert!(!trigger.is_observing());
        assert_eq!(host.active_observers(), 0);

        host.intersect(IntersectionSample::with_ratio(0.0));
        assert!(trigger.visible());
        assert_eq!(*seen.borrow(), vec![true]);

        drop(trigger);
        assert_eq!(host.disconnects(), 1);
    }

    #[test]
    fn latched_state_ignores_later_exits() {
        let options = VisibilityOptions::new(0.25, true);
        let mut state = VisibilityState::default();

        assert!(state.apply(IntersectionSample::with_ratio(0.25), &options));
        assert!(!state.apply(IntersectionSample::with_ratio(0.0), &options));
        assert!(state.visible());
        assert!(state.latched());
    }

    #[test]
    fn threshold_is_inclusive_and_requires_intersection() {
        let options = VisibilityOptions::new(0.0, false);
        let mut state = VisibilityState::default();

        assert!(!state.apply(
            IntersectionSample { ratio: 0.0, is_intersecting: false },
            &options
        ));
        assert!(state.apply(
            IntersectionSample { ratio: 0.0, is_intersecting: true },
            &options
        ));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityOptions::new(3.0, true).threshold, 1.0);
        assert_eq!(VisibilityOptions::new(-1.0, true).threshold, 0.0);
    }

    #[test]
    fn default_options() {
        let options = VisibilityOptions::default().with_root_margin("0px 0px -10% 0px");
        assert_eq!(options.threshold, 0.1);
        assert!(options.trigger_once);
        assert!(!options.initially_visible);
        assert_eq!(options.root_margin, "0px 0px -10% 0px");
    }

    #[test]
    fn observer_receives_threshold_and_root_margin() {
        let host = FakeHost::new(800.0);
        let options = VisibilityOptions::new(0.35, false).with_root_margin("0px 0px -10% 0px");
        let _trigger =
            ViewportVisibilityTrigger::observe(Rc::clone(&host), &(), options, |_| {}).unwrap();

        let observed = host.observed_options();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].threshold, 0.35);
        assert_eq!(observed[0].root_margin, "0px 0px -10% 0px");
        assert!(!observed[0].trigger_once);
    }

    #[test]
    fn trigger_started_visible_reports_the_first_exit() {
        let host = FakeHost::new(800.0);
        let (seen, on_change) = recorder();
        let trigger = ViewportVisibilityTrigger::observe(
            Rc::clone(&host),
            &(),
            VisibilityOptions::new(0.0, false).initially_visible(true),
            on_change,
        )
        .unwrap();
        assert!(trigger.visible());

        host.intersect(IntersectionSample::with_ratio(1.0));
        assert!(seen.borrow().is_empty());

        host.intersect(IntersectionSample::with_ratio(0.0));
        assert!(!trigger.visible());
        assert_eq!(*seen.borrow(), vec![false]);
        assert!(trigger.is_observing());
    }

    #[test]
    fn one_shot_trigger_started_visible_is_already_latched() {
        let host = FakeHost::new(800.0);
        let trigger = ViewportVisibilityTrigger::observe(
            Rc::clone(&host),
            &(),
            VisibilityOptions::default().initially_visible(true),
            |_| {},
        )
        .unwrap();

        assert!(trigger.visible());
        assert!(!trigger.is_observing());
        assert_eq!(host.active_observers(), 0);
    }

    #[test]
    fn mount_unmount_cycles_leave_no_observers() {
        let host = FakeHost::new(800.0);
        for cycle in 0..5 {
            let trigger = ViewportVisibilityTrigger::observe(
                Rc::clone(&host),
                &(),
                VisibilityOptions::new(0.5, cycle % 2 == 0),
                |_| {},
            )
            .unwrap();
            assert_eq!(host.active_observers(), 1);
            drop(trigger);
            assert_eq!(host.active_observers(), 0);
        }
        assert_eq!(host.disconnects(), 5);
    }

    #[test]
    fn samples_after_drop_are_ignored() {
        let host = FakeHost::new(800.0);
        let (seen, on_change) = recorder();
        let trigger = ViewportVisibilityTrigger::observe(
            Rc::clone(&host),
            &(),
            VisibilityOptions::new(0.5, false),
            on_change,
        )
        .unwrap();
        let stale = host.observer_callbacks();
        drop(trigger);

        for callback in stale {
            callback(IntersectionSample::with_ratio(1.0));
        }
        assert!(seen.borrow().is_empty());
    }
}
