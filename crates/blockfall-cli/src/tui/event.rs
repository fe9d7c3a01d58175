use crossterm::event::Event;

#[derive(Debug, Clone, derive_more::From)]
pub(super) enum LoopEvent {
    /// The tick interval elapsed.
    Tick,
    /// The screen needs redrawing.
    Render,
    Terminal(Event),
}
