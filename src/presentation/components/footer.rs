use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::submit::SubmissionState;

use super::super::view::UiContext;

pub(crate) fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    if let Some(help) = ctx.help {
        let actions = Paragraph::new(format!("Actions: {help}"))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(actions, rows[0]);
    }

    let mut status = ctx.status_message.to_string();
    if ctx.dirty {
        status.push_str(" • unsent changes");
    }
    let error_count = ctx.form.error_count();
    if error_count > 0 {
        status.push_str(&format!(" • errors: {error_count}"));
    }

    let status_line = Line::from(vec![
        submit_badge(ctx.submission),
        Span::raw(" "),
        Span::raw(status),
    ]);
    let status_widget = Paragraph::new(status_line).wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}

fn submit_badge(state: &SubmissionState) -> Span<'static> {
    match state {
        SubmissionState::Idle => Span::styled("[ Send ]", Style::default().fg(Color::Yellow)),
        SubmissionState::Submitting => Span::styled(
            "[ Sending… ]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        SubmissionState::Succeeded => Span::styled("[ Sent ✓ ]", Style::default().fg(Color::Green)),
        SubmissionState::Failed(_) => Span::styled(
            "[ Failed ]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}
