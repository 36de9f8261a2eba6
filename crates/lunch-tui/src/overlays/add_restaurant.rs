//! Add / update restaurant form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lunch_core::wheel::{Entry, items_from_lines};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Items,
}

/// State for the add/update restaurant form.
#[derive(Debug, Clone)]
pub struct AddRestaurantState {
    pub name: String,
    /// Menu items, one per line.
    pub items: String,
    pub focus: FormField,
    /// Name of the restaurant being edited, if the form was prefilled.
    pub editing: Option<String>,
    /// Validation error to display.
    pub error: Option<String>,
}

impl AddRestaurantState {
    /// Opens an empty form.
    pub fn open() -> Self {
        Self {
            name: String::new(),
            items: String::new(),
            focus: FormField::Name,
            editing: None,
            error: None,
        }
    }

    /// Opens the form prefilled with an existing restaurant.
    pub fn edit(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            items: entry.items.join("\n"),
            focus: FormField::Items,
            editing: Some(entry.name.clone()),
            error: None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_add_restaurant(frame, self, area);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Char('s') if ctrl => self.submit(tui),
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.focus {
                FormField::Name => {
                    self.focus = FormField::Items;
                    OverlayUpdate::stay()
                }
                FormField::Items => {
                    self.items.push('\n');
                    OverlayUpdate::stay()
                }
            },
            KeyCode::Backspace => {
                self.focused_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Pasted text goes to the focused field; the name keeps its first line.
    pub fn handle_paste(&mut self, text: &str) {
        self.error = None;
        match self.focus {
            FormField::Name => {
                let first_line = text.lines().next().unwrap_or_default();
                self.name.push_str(first_line);
            }
            FormField::Items => self.items.push_str(&text.replace("\r\n", "\n")),
        }
    }

    fn submit(&mut self, tui: &TuiState) -> OverlayUpdate {
        match Entry::new(&self.name, items_from_lines(&self.items)) {
            Ok(entry) => {
                tracing::debug!(
                    name = %entry.name,
                    update = tui.wheel.get(&entry.name).is_some(),
                    "form submitted"
                );
                OverlayUpdate::close().with_mutations(vec![StateMutation::SaveRestaurant {
                    name: entry.name,
                    items: entry.items,
                }])
            }
            Err(err) => {
                self.error = Some(err.message);
                OverlayUpdate::stay()
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Items,
            FormField::Items => FormField::Name,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Items => &mut self.items,
        }
    }
}

fn render_add_restaurant(frame: &mut Frame, state: &AddRestaurantState, area: Rect) {
    use super::render_utils::{
        InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
    };

    let accent = Color::Yellow;
    let hints = [
        InputHint::new("Tab", "switch field"),
        InputHint::new("Ctrl+S", "save"),
        InputHint::new("Esc", "cancel"),
    ];
    let title = if state.editing.is_some() {
        "Update Restaurant"
    } else {
        "Add Restaurant"
    };
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title,
            border_color: accent,
            width: 56,
            height: 16,
            hints: &hints,
        },
    );
    let body = layout.body;
    if body.height < 6 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Restaurant Name",
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(body.x, body.y, body.width, 1),
    );
    render_input_line(
        frame,
        Rect::new(body.x, body.y + 1, body.width, 1),
        &InputLine {
            value: &state.name,
            placeholder: Some("e.g., The Pizza Place"),
            prompt: "> ",
            focused: state.focus == FormField::Name,
            accent,
        },
    );
    render_separator(frame, body, 2);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Menu Items (one per line)",
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(body.x, body.y + 3, body.width, 1),
    );

    let items_height = body.height.saturating_sub(6);
    let items_area = Rect::new(body.x, body.y + 4, body.width, items_height);
    frame.render_widget(
        Paragraph::new(items_lines(state, accent, items_height as usize))
            .wrap(Wrap { trim: false }),
        items_area,
    );

    render_separator(frame, body, body.height.saturating_sub(2));

    let (help_text, help_style) = if let Some(error) = &state.error {
        (error.as_str(), Style::default().fg(Color::Red))
    } else {
        (
            "Saving an existing name updates it in place",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(help_text, help_style))),
        Rect::new(body.x, body.y + body.height.saturating_sub(1), body.width, 1),
    );
}

/// Item lines with a cursor on the last line; only the tail that fits is kept.
fn items_lines(state: &AddRestaurantState, accent: Color, max_lines: usize) -> Vec<Line<'static>> {
    let focused = state.focus == FormField::Items;

    if state.items.is_empty() && !focused {
        return vec![Line::from(Span::styled(
            "e.g., Pepperoni Slice",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let raw: Vec<&str> = state.items.split('\n').collect();
    let skip = raw.len().saturating_sub(max_lines.max(1));
    let last = raw.len() - 1;
    raw.into_iter()
        .enumerate()
        .skip(skip)
        .map(|(i, text)| {
            let mut spans = vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::styled(text.to_string(), Style::default().fg(Color::White)),
            ];
            if focused && i == last {
                spans.push(Span::styled("█", Style::default().fg(accent)));
            }
            Line::from(spans)
        })
        .collect()
}
