use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::domain::FieldName;

use super::super::view::UiContext;

pub(crate) fn render_fields(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let content_width = area.width.saturating_sub(6).max(8);
    let focus_index = ctx.form.focus_index();

    let items: Vec<ListItem<'static>> = ctx
        .form
        .active()
        .iter()
        .enumerate()
        .map(|(idx, &field)| build_field_item(field, ctx, idx == focus_index, content_width))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(focus_index));

    let list = List::new(items)
        .block(
            Block::default()
                .title(ctx.title.unwrap_or("Contact us").to_string())
                .borders(Borders::ALL),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn build_field_item(
    field: FieldName,
    ctx: &UiContext<'_>,
    is_focused: bool,
    max_width: u16,
) -> ListItem<'static> {
    let mut lines = Vec::new();
    lines.push(label_line(field, is_focused));

    let value = ctx.form.input().get(field);
    lines.extend(value_lines(value, is_focused, max_width));

    if let Some(error) = ctx.form.error(field) {
        lines.extend(error_lines(error, max_width));
    }
    lines.push(Line::from(" "));

    ListItem::new(lines)
}

fn label_line(field: FieldName, is_focused: bool) -> Line<'static> {
    let mut label = field.label().to_string();
    if field.is_required() {
        label.push_str(" *");
    }
    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![Span::styled(label, label_style)];
    if let Some(hint) = field.hint() {
        spans.push(Span::styled(
            format!("  ({hint})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// The focused value is boxed with a trailing caret; others render flat.
fn value_lines(value: &str, is_focused: bool, max_width: u16) -> Vec<Line<'static>> {
    let clamp_width = max_width.max(4) as usize;
    let mut segments: Vec<String> = wrap(value, clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if segments.is_empty() {
        segments.push(String::new());
    }

    let mut lines = Vec::new();
    if is_focused {
        let inner_width = segments
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        let border = "─".repeat(inner_width + 2);
        let border_style = Style::default().fg(Color::Yellow);
        let value_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        lines.push(Line::from(Span::styled(
            format!("┌{border}┐"),
            border_style,
        )));
        let last = segments.len() - 1;
        for (idx, segment) in segments.into_iter().enumerate() {
            let mut spans = vec![Span::styled("│ ", border_style)];
            let mut width = UnicodeWidthStr::width(segment.as_str());
            spans.push(Span::styled(segment, value_style));
            if idx == last {
                spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
                width += 1;
            }
            let mut padding = String::new();
            while width < inner_width {
                padding.push(' ');
                width += 1;
            }
            spans.push(Span::raw(padding));
            spans.push(Span::styled(" │", border_style));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            format!("└{border}┘"),
            border_style,
        )));
    } else {
        for segment in segments {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines
}

fn error_lines(message: &str, max_width: u16) -> Vec<Line<'static>> {
    wrap(message, max_width as usize)
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                format!("  ✗ {}", line.into_owned()),
                Style::default().fg(Color::Red),
            ))
        })
        .collect()
}
