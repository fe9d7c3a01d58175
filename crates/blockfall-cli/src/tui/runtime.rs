use std::{io, time::Duration};

use super::{
    App,
    event::LoopEvent,
    event_loop::EventLoop,
};

/// Owns the event loop and runs an [`App`] on the terminal.
#[derive(Debug, Default)]
pub(crate) struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate in Hz. `None` stops tick events.
    pub(crate) fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Caps redraws at `rate` frames per second.
    pub(crate) fn set_frame_rate(&mut self, rate: f64) {
        self.events
            .set_frame_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Enters the alternate screen and dispatches events to `app` until it
    /// asks to exit. The terminal is restored on return, including on error.
    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => app.update(&mut self),
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Terminal(event) => app.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
