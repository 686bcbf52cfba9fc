//! Progressive reveal of an already computed grid.
//!
//! The animation is a two-state machine driven by a single cancellable timer.
//! Nothing here touches the grid itself: the session asks how many rows to
//! show and when the next tick is due.

use std::time::Duration;

/// Animation speed in [1, 100]. Higher is faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(1);
    pub const MAX: Speed = Speed(100);

    /// Clamp any integer into [1, 100]
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn adjust(self, delta: i64) -> Self {
        Self::new(self.0 as i64 + delta)
    }

    /// Delay between ticks: `max(1, 101 - speed)` milliseconds
    pub fn delay(self) -> Duration {
        let ms = (101 - self.0 as u64).max(1);
        Duration::from_millis(ms)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(50)
    }
}

/// Rows revealed per tick, so a full run always takes about 100 ticks
pub fn rows_per_tick(generations: usize) -> usize {
    generations.div_ceil(100).max(1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    /// `cursor` rows are currently visible
    Animating { cursor: usize },
}

/// The one outstanding timer callback, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTick {
    delay: Duration,
    elapsed: Duration,
}

/// Result of moving the reveal cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Show `rows` rows and wait for the next tick
    Continue { rows: usize },
    /// Show everything; the animation is over
    Finished { rows: usize },
}

impl Step {
    pub fn rows(self) -> usize {
        match self {
            Step::Continue { rows } | Step::Finished { rows } => rows,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Animation {
    state: AnimationState,
    pending: Option<PendingTick>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Idle -> Animating with nothing revealed yet
    pub fn start(&mut self) {
        self.pending = None;
        self.state = AnimationState::Animating { cursor: 0 };
    }

    /// Advance the cursor by one tick's worth of rows.
    /// Reaching `generations` finishes the animation.
    pub fn step(&mut self, generations: usize) -> Step {
        let AnimationState::Animating { cursor } = self.state else {
            return Step::Finished { rows: generations };
        };

        let cursor = cursor + rows_per_tick(generations);
        if cursor >= generations {
            self.cancel();
            Step::Finished { rows: generations }
        } else {
            self.state = AnimationState::Animating { cursor };
            Step::Continue { rows: cursor }
        }
    }

    /// Arm the timer for the next tick. Replaces any earlier one.
    pub fn schedule(&mut self, delay: Duration) {
        if self.is_animating() {
            self.pending = Some(PendingTick {
                delay,
                elapsed: Duration::ZERO,
            });
        }
    }

    /// Drop the pending tick and go back to Idle.
    /// Once this returns no earlier tick can fire.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.state = AnimationState::Idle;
    }

    /// Let `dt` pass on the timer. When the pending tick becomes due it is
    /// consumed and the time left over past its deadline is returned; the
    /// caller reschedules and may feed that remainder back in.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        let pending = self.pending.as_mut()?;

        pending.elapsed += dt;
        if pending.elapsed < pending.delay {
            return None;
        }

        let left = pending.elapsed - pending.delay;
        self.pending = None;
        Some(left)
    }

    /// Consume the pending tick immediately, whatever its remaining delay
    pub fn take_tick(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_delay() {
        assert_eq!(Speed::new(50).delay(), Duration::from_millis(51));
        assert_eq!(Speed::new(100).delay(), Duration::from_millis(1));
        assert_eq!(Speed::new(1).delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(Speed::new(0), Speed::MIN);
        assert_eq!(Speed::new(500), Speed::MAX);
        assert_eq!(Speed::default().adjust(-100).value(), 1);
    }

    #[test]
    fn test_rows_per_tick() {
        assert_eq!(rows_per_tick(100), 1);
        assert_eq!(rows_per_tick(101), 2);
        assert_eq!(rows_per_tick(150), 2);
        assert_eq!(rows_per_tick(300), 3);
        assert_eq!(rows_per_tick(1), 1);
    }

    #[test]
    fn test_step_until_finished() {
        let mut animation = Animation::new();
        animation.start();

        let mut steps = 0;
        loop {
            steps += 1;
            if let Step::Finished { rows } = animation.step(150) {
                assert_eq!(rows, 150);
                break;
            }
        }

        assert_eq!(steps, 75);
        assert_eq!(animation.state(), AnimationState::Idle);
    }

    #[test]
    fn test_advance_fires_once_delay_elapsed() {
        let mut animation = Animation::new();
        animation.start();
        animation.schedule(Duration::from_millis(10));

        assert_eq!(animation.advance(Duration::from_millis(4)), None);
        assert_eq!(animation.advance(Duration::from_millis(4)), None);
        assert_eq!(
            animation.advance(Duration::from_millis(4)),
            Some(Duration::from_millis(2))
        );
        // consumed until rescheduled
        assert_eq!(animation.advance(Duration::from_millis(50)), None);
    }

    #[test]
    fn test_cancel_drops_pending_tick() {
        let mut animation = Animation::new();
        animation.start();
        animation.schedule(Duration::from_millis(1));
        animation.cancel();

        assert!(!animation.has_pending_tick());
        assert_eq!(animation.advance(Duration::from_secs(1)), None);
        assert!(!animation.take_tick());
        assert_eq!(animation.state(), AnimationState::Idle);
    }

    #[test]
    fn test_schedule_ignored_when_idle() {
        let mut animation = Animation::new();
        animation.schedule(Duration::from_millis(1));
        assert!(!animation.has_pending_tick());
    }
}
