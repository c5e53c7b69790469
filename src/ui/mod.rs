//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! A small form around the [`crate::grid`] exercise: enter the table
//! dimensions, fill the cells, and run the minimum-positive scan. The form
//! only ever calls into `grid` as a consumer; nothing here touches the
//! header recognizer.
//!
//! The layers mirror each other the usual way:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call
//! [`App::run`] with a terminal to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
