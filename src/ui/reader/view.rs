use crate::app::RenderState;
use crate::engine::calculate_anchor_position;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PROGRESS_WIDTH: usize = 20;

/// Splits a unit into the text before its anchor grapheme, the anchor, and
/// the text after it.
pub fn split_at_anchor(unit: &str) -> (&str, &str, &str) {
    let anchor = calculate_anchor_position(unit);
    let mut bounds = unit.grapheme_indices(true).skip(anchor);
    match bounds.next() {
        Some((start, grapheme)) => {
            let end = start + grapheme.len();
            (&unit[..start], &unit[start..end], &unit[end..])
        }
        None => (unit, "", ""),
    }
}

/// The current unit, padded so that a centred line puts the anchor in the
/// middle column.
pub fn render_unit(unit: &str, theme: &Theme) -> Paragraph<'static> {
    let (before, anchor, after) = split_at_anchor(unit);
    let left = before.width();
    let right = after.width();

    let text_style = Style::default().fg(theme.text);
    let mut spans = Vec::with_capacity(5);
    if right > left {
        spans.push(Span::styled(" ".repeat(right - left), text_style));
    }
    spans.push(Span::styled(before.to_string(), text_style));
    spans.push(Span::styled(
        anchor.to_string(),
        Style::default().fg(theme.anchor).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(after.to_string(), text_style));
    if left > right {
        spans.push(Span::styled(" ".repeat(left - right), text_style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background))
}

pub fn render_progress_bar(progress: (usize, usize), theme: &Theme) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * PROGRESS_WIDTH) / total
    };

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(theme.text)),
        Span::styled(
            "─".repeat(PROGRESS_WIDTH - filled_len),
            Style::default().fg(theme.dimmed),
        ),
    ])
    .alignment(Alignment::Center)
}

pub fn render_context(units: &[String], alignment: Alignment, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(units.join(" "))
        .alignment(alignment)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

pub fn status_text(state: &RenderState) -> String {
    let (current, total) = state.progress;
    let mut parts = vec![state.status.to_string(), state.speed.to_string()];
    if total > 0 {
        parts.push(format!("{current}/{total}"));
    }
    if let Some(source) = &state.source {
        parts.push(source.clone());
    }
    parts.join(" · ")
}

pub fn render_status_line(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(status_text(state))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Input line of the command deck, or the last message when nothing is typed.
pub fn render_command_deck(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let line = if state.input.is_empty() {
        match &state.message {
            Some(message) => Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(theme.dimmed),
            )),
            None => Line::from(Span::styled("▌", Style::default().fg(theme.anchor))),
        }
    } else {
        Line::from(vec![
            Span::styled("▌", Style::default().fg(theme.anchor)),
            Span::styled(state.input.clone(), Style::default().fg(theme.text)),
        ])
    };

    Paragraph::new(line).style(Style::default().bg(theme.background))
}

pub fn render_placeholder(theme: &Theme) -> Paragraph<'static> {
    let text = "Type @filename to load a file\n\
                Or @@ to load from clipboard\n\
                Or type any text to read it\n\
                :q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}
