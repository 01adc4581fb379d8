//! # Rendering Module
//!
//! Turns command results into terminal text through the templates in
//! `templates/`. Layout math (index alignment, truncation) stays in Rust since
//! it needs Unicode-aware widths; templates pick styles by name.

use super::styles::{names, TODOZ_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, STATUS_TEMPLATE};
use super::theme::Renderer;
use serde::Serialize;
use todoz::api::{CmdMessage, MessageLevel, TaskCounts};
use todoz::error::Result;
use todoz::index::DisplayTask;
use todoz::model::FilterMode;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
const CHECKBOX_DONE: &str = "[x]";
const CHECKBOX_OPEN: &str = "[ ]";

const LIST: &str = "list";
const MESSAGES: &str = "messages";
const STATUS: &str = "status";

pub fn build_renderer(use_color: Option<bool>) -> std::result::Result<Renderer, minijinja::Error> {
    let mut renderer = Renderer::new(&TODOZ_THEME, use_color);
    renderer.add_template(LIST, LIST_TEMPLATE)?;
    renderer.add_template(MESSAGES, MESSAGES_TEMPLATE)?;
    renderer.add_template(STATUS, STATUS_TEMPLATE)?;
    Ok(renderer)
}

#[derive(Serialize)]
struct TaskLineData {
    index: String,
    checkbox: &'static str,
    check_style: &'static str,
    description: String,
    text_style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    tasks: Vec<TaskLineData>,
    empty_message: String,
    footer: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct StatusData {
    total: usize,
    complete: usize,
    incomplete: usize,
    filter: String,
}

/// Renders the visible tasks. `total` is the size of the unfiltered collection.
pub fn render_task_list(
    renderer: &Renderer,
    tasks: &[DisplayTask],
    filter: FilterMode,
    total: usize,
) -> String {
    let digits = tasks
        .iter()
        .map(|dt| dt.index.to_string().len())
        .max()
        .unwrap_or(1);

    let lines = tasks
        .iter()
        .map(|dt| {
            let index = format!("  {:>width$}. ", dt.index.0, width = digits);
            let available = LINE_WIDTH.saturating_sub(index.width() + CHECKBOX_OPEN.width() + 1);
            let (checkbox, check_style, text_style) = if dt.task.complete {
                (CHECKBOX_DONE, names::CHECK_DONE, names::TASK_DONE)
            } else {
                (CHECKBOX_OPEN, names::CHECK_OPEN, names::TASK_OPEN)
            };
            TaskLineData {
                index,
                checkbox,
                check_style,
                description: truncate_to_width(&dt.task.description, available),
                text_style,
            }
        })
        .collect();

    let empty_message = if total == 0 {
        "No tasks yet.".to_string()
    } else {
        format!("No {} tasks.", filter)
    };

    let data = ListData {
        tasks: lines,
        empty_message,
        footer: format!("showing {}: {} of {}", filter, tasks.len(), total),
    };

    renderer
        .render(LIST, &data)
        .unwrap_or_else(|e| format!("Render error: {}", e))
}

pub fn render_messages(renderer: &Renderer, messages: &[CmdMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };

    renderer.render(MESSAGES, &data).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_status(renderer: &Renderer, counts: &TaskCounts, filter: FilterMode) -> String {
    let data = StatusData {
        total: counts.total,
        complete: counts.complete,
        incomplete: counts.incomplete,
        filter: filter.to_string(),
    };
    renderer
        .render(STATUS, &data)
        .unwrap_or_else(|e| format!("Render error: {}", e))
}

pub fn render_json(tasks: &[DisplayTask]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
