// Dashboard crate: the refresh loop that polls the draft and the terminal UI
// that renders each snapshot.

pub mod app;
pub mod protocol;
pub mod tui;
