use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{App, Focus};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const LABEL_WIDTH: usize = 19;
const OVERLAY_TITLE: &str = " new position ";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_form(self, area, buf);

        // the result overlay paints on top of the form until dismissed
        if self.session.finished {
            render_result_overlay(self, area, buf);
        }
    }
}

fn render_form(app: &App, area: Rect, buf: &mut Buffer) {
    // styles
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let italic_dim_style = Style::default()
        .patch(dim_style)
        .add_modifier(Modifier::ITALIC);
    let magenta_bold_style = Style::default().patch(bold_style).fg(Color::Magenta);
    let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(
            [
                Constraint::Length(2), // title + padding
                Constraint::Length(2), // axis selector + padding
                Constraint::Length(1), // previous position
                Constraint::Length(1), // start offset
                Constraint::Length(1), // end offset
                Constraint::Length(1), // padding
                Constraint::Length(1), // result
                Constraint::Min(0),    // filler
                Constraint::Length(1), // legend
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("recenter", magenta_bold_style),
        Span::styled("  ·  center an artwork on one axis", italic_dim_style),
    ]));
    title.render(chunks[0], buf);

    let session = &app.session;
    let axis_value = format!("‹ {} ›", session.axis.to_string().to_lowercase());

    let rows = [
        (chunks[1], "Axis", axis_value.as_str(), Focus::Axis, false),
        (
            chunks[2],
            "Previous position",
            session.previous_position.as_str(),
            Focus::PreviousPosition,
            true,
        ),
        (
            chunks[3],
            session.axis.start_label(),
            session.offset_start.as_str(),
            Focus::OffsetStart,
            true,
        ),
        (
            chunks[4],
            session.axis.end_label(),
            session.offset_end.as_str(),
            Focus::OffsetEnd,
            true,
        ),
    ];

    for (chunk, label, value, focus, editable) in rows {
        Paragraph::new(entry_row(label, value, app.focus == focus, editable)).render(chunk, buf);
    }

    let result_row = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:<width$}", "New position", width = LABEL_WIDTH),
            dim_style,
        ),
        Span::styled(session.result.clone(), cyan_bold_style),
    ]);
    Paragraph::new(result_row).render(chunks[6], buf);

    let hint = if app.focus == Focus::Axis {
        "(tab) next field / (space) toggle axis / (enter) calculate / (ctrl-r) reset / (esc)ape"
    } else {
        "(tab) next field / (↑ ↓) step 0.1 / (enter) calculate / (ctrl-r) reset / (esc)ape"
    };
    let legend = Paragraph::new(Span::styled(hint, italic_style));
    legend.render(chunks[8], buf);
}

fn entry_row(label: &str, value: &str, focused: bool, editable: bool) -> Line<'static> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let marker_style = Style::default().patch(bold_style).fg(Color::Yellow);
    let underlined_dim_style = Style::default()
        .patch(dim_style)
        .add_modifier(Modifier::UNDERLINED);

    let marker = if focused { "❯ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), dim_style),
    ];

    if focused {
        spans.push(Span::styled(value.to_string(), bold_style));
        if editable {
            // underlined blank marks where the next digit lands
            spans.push(Span::styled(" ", underlined_dim_style));
        }
    } else {
        spans.push(Span::raw(value.to_string()));
    }

    Line::from(spans)
}

fn render_result_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);

    let status = if app.copied {
        Span::styled(
            "copied to clipboard",
            Style::default().patch(italic_style).fg(Color::Green),
        )
    } else {
        Span::styled(
            "clipboard unavailable, copy by hand",
            Style::default().patch(italic_style).fg(Color::Red),
        )
    };
    let legend = "(enter) continue / (r)eset / (q)uit";

    let content_width = [
        app.session.result.width(),
        status.content.width(),
        legend.width(),
        OVERLAY_TITLE.width(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0) as u16;

    let rect = centered_rect(content_width + 6, 7, area);
    Clear.render(rect, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(dim_style)
        .title(Line::from(Span::styled(OVERLAY_TITLE, bold_style)))
        .title_alignment(Alignment::Center);
    let inner = block.inner(rect);
    block.render(rect, buf);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(app.session.result.clone(), cyan_bold_style)),
        Line::default(),
        Line::from(status),
        Line::from(Span::styled(legend, italic_style)),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
