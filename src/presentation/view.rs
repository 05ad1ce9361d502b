use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::FormState;
use crate::submit::SubmissionState;

use super::components::{render_fields, render_footer};

pub(crate) struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub form: &'a FormState,
    pub submission: &'a SubmissionState,
    pub status_message: &'a str,
    pub dirty: bool,
    pub help: Option<&'a str>,
}

pub(crate) fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(frame.area());

    render_fields(frame, chunks[0], &ctx);
    render_footer(frame, chunks[1], &ctx);
}
