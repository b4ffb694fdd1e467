//! Delivery Animation
//!
//! Per-button state machine behind the "truck" checkout button:
//!
//! ```text
//! Idle --click--> Priming --> Loading --> Shipping --> Delivered --click--> Idle
//! ```
//!
//! The sequence runs on a fixed timeline. Clicks while it runs are ignored;
//! the click after `Delivered` resets every visual offset. Timing goes through
//! a [`Scheduler`] so any timer source can drive it.

use async_trait::async_trait;
use leptos::prelude::*;
use std::time::Duration;

/// Source of the delays between timeline steps
#[async_trait(?Send)]
pub trait Scheduler {
    async fn delay(&self, duration: Duration);
}

/// Browser timers via `gloo-timers`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

#[async_trait(?Send)]
impl Scheduler for TimeoutScheduler {
    async fn delay(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPhase {
    #[default]
    Idle,
    Priming,
    Loading,
    Shipping,
    Delivered,
}

impl DeliveryPhase {
    /// The phase a running sequence moves to next
    pub fn successor(self) -> Option<DeliveryPhase> {
        match self {
            DeliveryPhase::Idle => Some(DeliveryPhase::Priming),
            DeliveryPhase::Priming => Some(DeliveryPhase::Loading),
            DeliveryPhase::Loading => Some(DeliveryPhase::Shipping),
            DeliveryPhase::Shipping => Some(DeliveryPhase::Delivered),
            DeliveryPhase::Delivered => None,
        }
    }

    /// A sequence is running ("animation" marker set, "done" not yet)
    pub fn in_progress(self) -> bool {
        matches!(self, DeliveryPhase::Priming | DeliveryPhase::Loading | DeliveryPhase::Shipping)
    }

    pub fn button_class(self) -> &'static str {
        match self {
            DeliveryPhase::Idle => "truck-button",
            DeliveryPhase::Priming | DeliveryPhase::Loading | DeliveryPhase::Shipping => {
                "truck-button animation"
            }
            DeliveryPhase::Delivered => "truck-button animation done",
        }
    }
}

/// Animated offsets, exposed to the stylesheet as custom properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryVisuals {
    pub progress: f64,
    /// Hatch offset
    pub hx: f64,
    /// Back door offset
    pub bx: f64,
    pub box_scale: f64,
    pub box_opacity: f64,
    pub box_x: f64,
    pub box_y: f64,
    pub truck_x: f64,
    pub truck_y: f64,
    pub truck_y_n: f64,
}

impl Default for DeliveryVisuals {
    fn default() -> Self {
        Self {
            progress: 0.0,
            hx: 0.0,
            bx: 0.0,
            box_scale: 0.5,
            box_opacity: 0.0,
            box_x: -24.0,
            box_y: -6.0,
            truck_x: 4.0,
            truck_y: 0.0,
            truck_y_n: -26.0,
        }
    }
}

impl DeliveryVisuals {
    pub fn button_style(&self) -> String {
        format!(
            "--progress: {}; --hx: {}; --bx: {}; --box-s: {}; --box-o: {}; --truck-y: {}; --truck-y-n: {};",
            self.progress, self.hx, self.bx, self.box_scale, self.box_opacity, self.truck_y, self.truck_y_n
        )
    }

    pub fn box_style(&self) -> String {
        format!("transform: translate({}px, {}px);", self.box_x, self.box_y)
    }

    pub fn truck_style(&self) -> String {
        format!("transform: translateX({}px);", self.truck_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryState {
    pub phase: DeliveryPhase,
    pub visuals: DeliveryVisuals,
}

/// Outcome of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Idle button: the sequence starts
    Started,
    /// Sequence already running: nothing happens
    Ignored,
    /// Delivered button: back to idle
    Reset,
}

/// One timeline step, applied `at_ms` after the click
struct Step {
    at_ms: u64,
    enters: Option<DeliveryPhase>,
    apply: fn(&mut DeliveryVisuals),
}

/// Start of the truck's drive, and its length
const SHIPPING_START_MS: u64 = 1450;
const SHIPPING_MS: u64 = 2400;

/// Ease-in progress of the drive `at_ms` after the click
fn shipping_progress(at_ms: u64) -> f64 {
    let t = (at_ms.saturating_sub(SHIPPING_START_MS) as f64 / SHIPPING_MS as f64).min(1.0);
    t * t
}

const TIMELINE: [Step; 10] = [
    Step {
        at_ms: 500,
        enters: None,
        apply: |v| {
            v.box_scale = 1.0;
            v.box_opacity = 1.0;
        },
    },
    Step { at_ms: 700, enters: None, apply: |v| v.box_x = 0.0 },
    Step {
        at_ms: 920,
        enters: Some(DeliveryPhase::Loading),
        apply: |v| {
            v.hx = -5.0;
            v.bx = 50.0;
        },
    },
    Step { at_ms: 1150, enters: None, apply: |v| v.box_y = 0.0 },
    Step {
        at_ms: 1250,
        enters: None,
        apply: |v| {
            v.truck_y = 1.0;
            v.truck_y_n = -25.0;
        },
    },
    Step {
        at_ms: SHIPPING_START_MS,
        enters: Some(DeliveryPhase::Shipping),
        apply: |v| v.truck_x = 0.0,
    },
    Step {
        at_ms: 1850,
        enters: None,
        apply: |v| {
            v.truck_x = 40.0;
            v.progress = shipping_progress(1850);
        },
    },
    Step {
        at_ms: 2850,
        enters: None,
        apply: |v| {
            v.truck_x = 20.0;
            v.progress = shipping_progress(2850);
        },
    },
    Step {
        at_ms: 3450,
        enters: None,
        apply: |v| {
            v.truck_x = 96.0;
            v.progress = shipping_progress(3450);
        },
    },
    Step {
        at_ms: SHIPPING_START_MS + SHIPPING_MS,
        enters: Some(DeliveryPhase::Delivered),
        apply: |v| v.progress = 1.0,
    },
];

/// Handle to one button's animation state
#[derive(Debug, Clone, Copy)]
pub struct DeliveryAnimation {
    state: RwSignal<DeliveryState>,
}

impl DeliveryAnimation {
    pub fn new() -> Self {
        Self { state: RwSignal::new(DeliveryState::default()) }
    }

    /// Reactive view of the state for rendering
    pub fn state(&self) -> ReadSignal<DeliveryState> {
        self.state.read_only()
    }

    pub fn phase(&self) -> DeliveryPhase {
        self.state.with_untracked(|s| s.phase)
    }

    pub fn visuals(&self) -> DeliveryVisuals {
        self.state.with_untracked(|s| s.visuals)
    }

    /// Apply a click's immediate transition
    pub fn press(&self) -> Press {
        match self.phase() {
            DeliveryPhase::Idle => {
                self.state.update(|s| s.phase = DeliveryPhase::Priming);
                Press::Started
            }
            DeliveryPhase::Delivered => {
                self.state.set(DeliveryState::default());
                Press::Reset
            }
            _ => Press::Ignored,
        }
    }

    /// Run the timeline of a sequence started by [`press`](Self::press)
    pub async fn play<S: Scheduler + ?Sized>(&self, scheduler: &S) {
        if self.phase() != DeliveryPhase::Priming {
            return;
        }

        let mut elapsed_ms = 0;
        for step in &TIMELINE {
            scheduler.delay(Duration::from_millis(step.at_ms - elapsed_ms)).await;
            elapsed_ms = step.at_ms;

            self.state.update(|s| {
                (step.apply)(&mut s.visuals);
                if let Some(next) = step.enters {
                    debug_assert_eq!(s.phase.successor(), Some(next));
                    s.phase = next;
                }
            });
        }
        tracing::debug!(elapsed_ms, "Delivery animation finished");
    }

    /// Handle a click: start and run, ignore, or reset
    pub async fn click<S: Scheduler + ?Sized>(&self, scheduler: &S) -> Press {
        let press = self.press();
        if press == Press::Started {
            self.play(scheduler).await;
        }
        press
    }
}

impl Default for DeliveryAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Resolves every delay immediately, recording it
    #[derive(Default)]
    struct RecordingScheduler {
        delays: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Scheduler for RecordingScheduler {
        async fn delay(&self, duration: Duration) {
            self.delays.borrow_mut().push(duration);
        }
    }

    /// Clicks the button on every delay, as an impatient user would
    struct ClickingScheduler {
        animation: DeliveryAnimation,
        seen: RefCell<Vec<(DeliveryPhase, Press)>>,
    }

    #[async_trait(?Send)]
    impl Scheduler for ClickingScheduler {
        async fn delay(&self, _duration: Duration) {
            let before = self.animation.state.get_untracked();
            let press = self.animation.press();
            assert_eq!(self.animation.state.get_untracked(), before);
            self.seen.borrow_mut().push((before.phase, press));
        }
    }

    #[tokio::test]
    async fn test_full_cycle_reaches_delivered() {
        let animation = DeliveryAnimation::new();
        let scheduler = RecordingScheduler::default();

        assert_eq!(animation.phase(), DeliveryPhase::Idle);
        assert_eq!(animation.click(&scheduler).await, Press::Started);

        assert_eq!(animation.phase(), DeliveryPhase::Delivered);
        let visuals = animation.visuals();
        assert_eq!(visuals.progress, 1.0);
        assert_eq!(visuals.truck_x, 96.0);
        assert_eq!((visuals.box_x, visuals.box_y), (0.0, 0.0));

        let total: Duration = scheduler.delays.borrow().iter().sum();
        assert_eq!(total, Duration::from_millis(3850));
    }

    #[tokio::test]
    async fn test_phases_follow_declared_order() {
        let animation = DeliveryAnimation::new();
        let scheduler = ClickingScheduler { animation, seen: RefCell::new(Vec::new()) };

        animation.click(&scheduler).await;

        let mut phases: Vec<DeliveryPhase> = scheduler.seen.borrow().iter().map(|(p, _)| *p).collect();
        phases.push(animation.phase());
        phases.dedup();
        assert_eq!(
            phases,
            vec![
                DeliveryPhase::Priming,
                DeliveryPhase::Loading,
                DeliveryPhase::Shipping,
                DeliveryPhase::Delivered,
            ]
        );
    }

    #[tokio::test]
    async fn test_clicks_mid_sequence_are_ignored() {
        let animation = DeliveryAnimation::new();
        let scheduler = ClickingScheduler { animation, seen: RefCell::new(Vec::new()) };

        animation.click(&scheduler).await;

        let seen = scheduler.seen.borrow();
        assert_eq!(seen.len(), TIMELINE.len());
        assert!(seen.iter().all(|(phase, press)| phase.in_progress() && *press == Press::Ignored));
        assert_eq!(animation.phase(), DeliveryPhase::Delivered);
    }

    #[tokio::test]
    async fn test_click_after_delivered_resets() {
        let animation = DeliveryAnimation::new();
        let scheduler = RecordingScheduler::default();
        animation.click(&scheduler).await;

        assert_eq!(animation.click(&scheduler).await, Press::Reset);
        assert_eq!(animation.phase(), DeliveryPhase::Idle);
        assert_eq!(animation.visuals(), DeliveryVisuals::default());
        assert_eq!(scheduler.delays.borrow().len(), TIMELINE.len());

        // A reset button runs a second full cycle
        assert_eq!(animation.click(&scheduler).await, Press::Started);
        assert_eq!(animation.phase(), DeliveryPhase::Delivered);
    }

    #[tokio::test]
    async fn test_play_without_press_does_nothing() {
        let animation = DeliveryAnimation::new();
        let scheduler = RecordingScheduler::default();

        animation.play(&scheduler).await;

        assert_eq!(animation.phase(), DeliveryPhase::Idle);
        assert!(scheduler.delays.borrow().is_empty());
    }

    #[test]
    fn test_buttons_do_not_share_state() {
        let first = DeliveryAnimation::new();
        let second = DeliveryAnimation::new();

        assert_eq!(first.press(), Press::Started);
        assert_eq!(second.phase(), DeliveryPhase::Idle);
        assert_eq!(first.press(), Press::Ignored);
    }

    #[test]
    fn test_timeline_is_ordered() {
        assert!(TIMELINE.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
        let entered: Vec<DeliveryPhase> = TIMELINE.iter().filter_map(|s| s.enters).collect();
        assert_eq!(
            entered,
            vec![DeliveryPhase::Loading, DeliveryPhase::Shipping, DeliveryPhase::Delivered]
        );
    }

    #[test]
    fn test_classes_and_styles() {
        assert_eq!(DeliveryPhase::Idle.button_class(), "truck-button");
        assert_eq!(DeliveryPhase::Loading.button_class(), "truck-button animation");
        assert_eq!(DeliveryPhase::Delivered.button_class(), "truck-button animation done");

        let visuals = DeliveryVisuals::default();
        assert!(visuals.button_style().contains("--box-s: 0.5;"));
        assert!(visuals.button_style().contains("--truck-y-n: -26;"));
        assert_eq!(visuals.box_style(), "transform: translate(-24px, -6px);");
        assert_eq!(visuals.truck_style(), "transform: translateX(4px);");
    }
}
