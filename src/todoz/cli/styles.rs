use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style names used by the templates.
pub mod names {
    pub const INDEX: &str = "index";
    pub const CHECK_DONE: &str = "check_done";
    pub const CHECK_OPEN: &str = "check_open";
    pub const TASK_DONE: &str = "task_done";
    pub const TASK_OPEN: &str = "task_open";
    pub const FOOTER: &str = "footer";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static TODOZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::CHECK_DONE, Style::new().green())
        .add(names::CHECK_OPEN, Style::new())
        .add(names::TASK_DONE, Style::new().dim())
        .add(names::TASK_OPEN, Style::new())
        .add(names::FOOTER, Style::new().color256(245).italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});
