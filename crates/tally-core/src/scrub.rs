// File: crates/tally-core/src/scrub.rs
// Summary: Touch scrubbing state machine: pointer events, selection, scrubber position and reset timer.

use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::closest::{find_nearest, PositionMap};
use crate::geometry::clamp;
use crate::types::SelectedValue;

/// How a chart responds to touch input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrubbingBehavior {
    /// Pointer input is ignored.
    #[default]
    NoScrubbing,
    TouchScrubbing {
        /// Keep the highlight visible after the pointer is released.
        always_highlight: bool,
        /// Default selection is the leftmost x value instead of the rightmost.
        start_on_left: bool,
        /// Return to the default selection a while after release.
        reset_after_delay: bool,
    },
}

impl ScrubbingBehavior {
    /// Touch scrubbing that starts on the left, hides the highlight on release and resets.
    pub const fn touch() -> Self {
        Self::TouchScrubbing { always_highlight: false, start_on_left: true, reset_after_delay: true }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::TouchScrubbing { .. })
    }

    pub fn always_highlight(&self) -> bool {
        matches!(self, Self::TouchScrubbing { always_highlight: true, .. })
    }

    pub fn start_on_left(&self) -> bool {
        match self {
            Self::NoScrubbing => true,
            Self::TouchScrubbing { start_on_left, .. } => *start_on_left,
        }
    }

    pub fn reset_after_delay(&self) -> bool {
        matches!(self, Self::TouchScrubbing { reset_after_delay: true, .. })
    }
}

/// Pointer input in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32 },
    Move { x: f32 },
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrubPhase {
    Idle,
    Scrubbing,
}

/// Whether the host should jump to the new scrubber position or animate to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrubberMotion {
    Snap,
    Animate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubberPosition {
    pub x: f32,
    pub motion: ScrubberMotion,
}

type SelectedObserver = Box<dyn FnMut(SelectedValue)>;
type DraggingObserver = Box<dyn FnMut(bool)>;

/// Selection state for one chart.
///
/// Time is supplied by the host: events and [`Scrubber::tick`] take the current
/// time as a [`Duration`] since any fixed origin.
pub struct Scrubber {
    behavior: ScrubbingBehavior,
    reset_delay: Duration,
    phase: ScrubPhase,
    default_value: Option<i64>,
    selected: Option<SelectedValue>,
    position: Option<ScrubberPosition>,
    min_position: f32,
    max_position: f32,
    pending_reset: Option<Duration>,
    on_selected: Option<SelectedObserver>,
    on_dragging: Option<DraggingObserver>,
}

impl fmt::Debug for Scrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrubber")
            .field("behavior", &self.behavior)
            .field("phase", &self.phase)
            .field("selected", &self.selected)
            .field("position", &self.position)
            .field("pending_reset", &self.pending_reset)
            .finish_non_exhaustive()
    }
}

impl Scrubber {
    pub fn new(behavior: ScrubbingBehavior, reset_delay: Duration) -> Self {
        Self {
            behavior,
            reset_delay,
            phase: ScrubPhase::Idle,
            default_value: None,
            selected: None,
            position: None,
            min_position: 0.0,
            max_position: f32::MAX,
            pending_reset: None,
            on_selected: None,
            on_dragging: None,
        }
    }

    pub fn on_selected_value(&mut self, f: impl FnMut(SelectedValue) + 'static) {
        self.on_selected = Some(Box::new(f));
    }

    pub fn on_dragging(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_dragging = Some(Box::new(f));
    }

    /// Swap the behavior and reset delay, keeping observers. Cancels any pending reset
    /// and ends an active drag.
    pub fn set_behavior(&mut self, behavior: ScrubbingBehavior, reset_delay: Duration) {
        self.behavior = behavior;
        self.reset_delay = reset_delay;
        self.pending_reset = None;
        self.end_drag();
    }

    pub fn behavior(&self) -> ScrubbingBehavior {
        self.behavior
    }

    pub fn phase(&self) -> ScrubPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<SelectedValue> {
        self.selected
    }

    pub fn position(&self) -> Option<ScrubberPosition> {
        self.position
    }

    /// Deadline of the scheduled reset, if any.
    pub fn pending_reset(&self) -> Option<Duration> {
        self.pending_reset
    }

    /// New datasets: end any drag, select the default end of `x_bounds` and drop any pending reset.
    pub fn reset_for_data(&mut self, x_bounds: Option<(i64, i64)>) {
        self.pending_reset = None;
        self.end_drag();
        self.default_value = x_bounds.map(|(min, max)| if self.behavior.start_on_left() { min } else { max });
        match self.default_value {
            Some(x) => self.select(SelectedValue::new(x, self.behavior.always_highlight())),
            None => {
                self.selected = None;
                self.position = None;
            }
        }
    }

    /// New position map: update the clamp range and snap the scrubber onto the selection.
    pub fn sync_positions(&mut self, map: &PositionMap) {
        let (Some(min), Some(max)) = (map.min_position(), map.max_position()) else {
            self.position = None;
            return;
        };
        self.min_position = min;
        self.max_position = max;
        let x = self.selected.and_then(|s| map.position_of(s.x_value)).unwrap_or(min);
        self.position = Some(ScrubberPosition { x, motion: ScrubberMotion::Snap });
    }

    /// Apply one pointer event. Returns true when the overlay needs a redraw.
    pub fn handle(&mut self, event: PointerEvent, map: &PositionMap, now: Duration) -> bool {
        if !self.behavior.is_enabled() {
            return false;
        }
        match (event, self.phase) {
            (PointerEvent::Down { x }, _) => {
                self.pending_reset = None;
                self.phase = ScrubPhase::Scrubbing;
                self.press(x, map)
            }
            (PointerEvent::Move { x }, ScrubPhase::Scrubbing) => self.press(x, map),
            (PointerEvent::Up, ScrubPhase::Scrubbing) => {
                self.release(map, now);
                true
            }
            (PointerEvent::Move { .. } | PointerEvent::Up, ScrubPhase::Idle) => false,
        }
    }

    /// Fire the scheduled reset once `now` reaches its deadline. Returns true when it fired.
    pub fn tick(&mut self, now: Duration, map: &PositionMap) -> bool {
        match self.pending_reset {
            Some(due) if now >= due => {
                self.pending_reset = None;
                let Some(x_value) = self.default_value else { return false };
                trace!(x_value, "scrubber reset to default");
                self.select(SelectedValue::new(x_value, self.behavior.always_highlight()));
                if let Some(x) = map.position_of(x_value) {
                    self.position = Some(ScrubberPosition { x, motion: ScrubberMotion::Animate });
                }
                true
            }
            _ => false,
        }
    }

    fn press(&mut self, x: f32, map: &PositionMap) -> bool {
        self.notify_dragging(true);
        let Some(x_value) = find_nearest(x, map) else { return false };
        trace!(x, x_value, "scrub");
        self.select(SelectedValue::new(x_value, true));
        self.position = Some(ScrubberPosition {
            x: clamp(x, self.min_position, self.max_position),
            motion: ScrubberMotion::Snap,
        });
        true
    }

    fn release(&mut self, map: &PositionMap, now: Duration) {
        self.phase = ScrubPhase::Idle;
        if let Some(current) = self.selected {
            self.select(SelectedValue::new(current.x_value, self.behavior.always_highlight()));
            if let Some(x) = map.position_of(current.x_value) {
                self.position = Some(ScrubberPosition { x, motion: ScrubberMotion::Animate });
            }
        }
        self.notify_dragging(false);
        if self.behavior.reset_after_delay() {
            self.pending_reset = Some(now + self.reset_delay);
            trace!(due = ?self.pending_reset, "reset scheduled");
        }
    }

    fn select(&mut self, value: SelectedValue) {
        if self.selected == Some(value) {
            return;
        }
        self.selected = Some(value);
        if let Some(f) = self.on_selected.as_mut() {
            f(value);
        }
    }

    fn end_drag(&mut self) {
        if self.phase == ScrubPhase::Scrubbing {
            self.phase = ScrubPhase::Idle;
            self.notify_dragging(false);
        }
    }

    fn notify_dragging(&mut self, dragging: bool) {
        if let Some(f) = self.on_dragging.as_mut() {
            f(dragging);
        }
    }
}
