//! Minimal terminal runtime: a tick timer, throttled redraws and terminal
//! input, driving an [`App`].

pub(crate) use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
