//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use lunch_core::defaults::SLICE_TEXT_COLOR;
use lunch_core::labels::{display_labels, slice_colors};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, hint_line, truncate_start_with_ellipsis};
use crate::state::{AppState, NoticeKind, TuiState};
use crate::wheel_widget::{self, WheelView, to_color};

const TITLE: &str = "What's for Lunch? Spin the Wheel!";

/// Width of the restaurant sidebar, borders included.
const SIDEBAR_WIDTH: u16 = 32;

/// Height of the result panel under the wheel.
const RESULT_HEIGHT: u16 = 10;

const ACCENT: Color = Color::Rgb(0x1B, 0x43, 0x32);
const PICK_COLOR: Color = Color::Rgb(0xD0, 0x00, 0x00);

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[1]);
    render_sidebar(state, frame, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(RESULT_HEIGHT)])
        .split(columns[1]);
    render_wheel_area(state, frame, main[0]);
    render_result_panel(state, frame, main[1]);

    render_notice(state, frame, rows[2]);
    render_status_line(state, frame, rows[3]);

    app.overlay.render(frame, area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        area,
    );
}

fn render_sidebar(state: &TuiState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Restaurants ({}) ", state.wheel.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.wheel.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Press a to add one",
                Style::default().fg(Color::DarkGray),
            ))),
            inner,
        );
        return;
    }

    let colors = slice_colors(state.wheel.len(), &state.config.palette);
    let visible = inner.height as usize;
    let skip = (state.cursor + 1).saturating_sub(visible);
    let name_width = (inner.width as usize).saturating_sub(8);

    let lines: Vec<Line> = state
        .wheel
        .entries()
        .iter()
        .zip(colors.iter())
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, (entry, color))| {
            let highlighted = i == state.cursor;
            let name_style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled("█ ", Style::default().fg(to_color(color))),
                Span::styled(truncate_end(&entry.name, name_width), name_style),
                Span::styled(
                    format!(" ({})", entry.items.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_wheel_area(state: &TuiState, frame: &mut Frame, area: Rect) {
    if state.wheel.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Add restaurants to see the wheel.",
                Style::default().fg(Color::Cyan),
            )))
            .alignment(Alignment::Center),
            centered_row(area),
        );
        return;
    }

    let names = state.wheel.names();
    let labels = display_labels(&names, state.label_options());
    let colors: Vec<Color> = slice_colors(names.len(), &state.config.palette)
        .iter()
        .map(|hex| to_color(hex))
        .collect();

    wheel_widget::render_wheel(
        frame,
        area,
        &WheelView {
            rotation: state.display_rotation(),
            labels: &labels,
            colors: &colors,
            text_color: to_color(SLICE_TEXT_COLOR),
        },
    );
}

fn render_result_panel(state: &TuiState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(result_lines(state))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Content of the result panel for the current state.
pub fn result_lines(state: &TuiState) -> Vec<Line<'static>> {
    let info = Style::default().fg(Color::Cyan);
    let warning = Style::default().fg(Color::Yellow);
    let count = state.wheel.len();

    if count == 0 {
        return vec![Line::from(Span::styled(
            "No restaurants configured. Press a to add some.",
            Style::default().fg(Color::Red),
        ))];
    }

    if state.is_spinning() {
        return vec![Line::from(Span::styled(
            "Spinning…",
            info.add_modifier(Modifier::ITALIC),
        ))];
    }

    if let Some(entry) = state.wheel.selected_entry() {
        let mut lines = vec![
            Line::from(Span::styled(
                "Today's Delicious Pick!",
                Style::default().fg(PICK_COLOR).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                entry.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Menu Suggestions",
                Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            )),
        ];
        lines.extend(entry.items.iter().map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(item.clone()),
            ])
        }));
        return lines;
    }

    if let Some(pick) = state.wheel.last_pick() {
        return vec![Line::from(Span::styled(
            format!("Details for '{pick}' not found. It may have been removed."),
            warning,
        ))];
    }

    match state.wheel.entries() {
        [only] => vec![
            Line::from(Span::styled(
                "Add at least two restaurants to enable spinning.",
                warning,
            )),
            Line::from(Span::styled(
                format!("Your only option is: {}", only.name),
                info,
            )),
        ],
        _ => vec![Line::from(Span::styled(
            "Spin the wheel to discover your next meal!",
            info,
        ))],
    }
}

fn render_notice(state: &TuiState, frame: &mut Frame, area: Rect) {
    let Some(notice) = &state.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Info => Color::Cyan,
    };
    let text = truncate_start_with_ellipsis(&notice.text, area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let hints = if state.is_spinning() {
        vec![InputHint::new("q", "quit")]
    } else {
        vec![
            InputHint::new("Space", "spin"),
            InputHint::new("a", "add"),
            InputHint::new("e", "edit"),
            InputHint::new("d", "delete"),
            InputHint::new("r", "reset"),
            InputHint::new("c", "clear"),
            InputHint::new("q", "quit"),
        ]
    };
    frame.render_widget(
        Paragraph::new(hint_line(&hints, Color::Yellow)).alignment(Alignment::Center),
        area,
    );
}

fn centered_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height))
}

fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
