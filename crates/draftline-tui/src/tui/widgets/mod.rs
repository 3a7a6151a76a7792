// TUI widget modules for each dashboard panel.

pub mod available;
pub mod draft_log;
pub mod needs;
pub mod quit_confirm;
pub mod recommendations;
pub mod roster;
pub mod status_bar;
pub mod turn_banner;
