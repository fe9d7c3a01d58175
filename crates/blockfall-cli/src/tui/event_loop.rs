use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use super::event::LoopEvent;

/// A periodic deadline. A fresh timer is already due.
#[derive(Debug, Clone, Copy)]
struct Timer {
    interval: Duration,
    last: Option<Instant>,
}

impl Timer {
    const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.last.map(|last| last + self.interval)
    }

    fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_none_or(|deadline| now >= deadline)
    }

    /// Fires the timer if it is due at `now`.
    fn fire(&mut self, now: Instant) -> bool {
        let due = self.is_due(now);
        if due {
            self.last = Some(now);
        }
        due
    }
}

/// Merges the tick timer, redraws and terminal input into one stream of
/// [`LoopEvent`]s.
///
/// Ticks come first, then a redraw if anything happened since the last one
/// (at most one per frame interval), then input.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick: Option<Timer>,
    frame: Timer,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            tick: None,
            frame: Timer::new(Duration::ZERO),
            dirty: true,
        }
    }
}

impl EventLoop {
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick = interval.map(Timer::new);
    }

    /// Minimum time between two redraws. Zero redraws after every event.
    pub(super) fn set_frame_interval(&mut self, interval: Duration) {
        self.frame.interval = interval;
    }

    /// Blocks until the next event.
    pub(super) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due_event(now) {
                return Ok(event);
            }

            let ready = match self.timeout(now) {
                Some(timeout) => event::poll(timeout)?,
                None => true,
            };
            if ready {
                self.dirty = true;
                return Ok(event::read()?.into());
            }
        }
    }

    fn due_event(&mut self, now: Instant) -> Option<LoopEvent> {
        if let Some(tick) = &mut self.tick
            && tick.fire(now)
        {
            self.dirty = true;
            return Some(LoopEvent::Tick);
        }
        if self.dirty && self.frame.fire(now) {
            self.dirty = false;
            return Some(LoopEvent::Render);
        }
        None
    }

    /// How long input may be waited for before a timer event is due. `None`
    /// means no timer is pending.
    fn timeout(&self, now: Instant) -> Option<Duration> {
        let tick = self.tick.map(|tick| tick.deadline().unwrap_or(now));
        let frame = self
            .dirty
            .then(|| self.frame.deadline().unwrap_or(now));
        let deadline = tick.into_iter().chain(frame).min()?;
        Some(deadline.saturating_duration_since(now))
    }
}
