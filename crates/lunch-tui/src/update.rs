//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::animation::SpinAnimation;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::StateMutation;
use crate::overlays::{AddRestaurantState, Overlay, OverlayTransition};
use crate::state::{AppState, Notice, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { elapsed } => {
            advance_animation(&mut app.tui, elapsed);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn advance_animation(tui: &mut TuiState, elapsed: Duration) {
    let Some(animation) = tui.animation.as_mut() else {
        return;
    };
    if animation.advance(elapsed) {
        tui.animation = None;
        if let Some(pick) = tui.wheel.last_pick() {
            tracing::debug!(pick, "spin settled");
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.handle_paste(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(&app.tui, key);
        if update.transition == OverlayTransition::Close {
            app.overlay = None;
        }
        apply_mutations(&mut app.tui, update.mutations);
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => quit(&mut app.tui),
        KeyCode::Char('q') | KeyCode::Esc => quit(&mut app.tui),
        KeyCode::Up | KeyCode::Char('k') => {
            app.tui.cursor = app.tui.cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.tui.cursor += 1;
            app.tui.clamp_cursor();
            vec![]
        }
        // The wheel is locked while it spins.
        _ if app.tui.is_spinning() => vec![],
        KeyCode::Char(' ') | KeyCode::Enter => {
            spin(&mut app.tui);
            vec![]
        }
        KeyCode::Char('a') => {
            app.overlay = Some(Overlay::AddRestaurant(AddRestaurantState::open()));
            vec![]
        }
        KeyCode::Char('e') => {
            if let Some(entry) = app.tui.highlighted() {
                app.overlay = Some(Overlay::AddRestaurant(AddRestaurantState::edit(entry)));
            }
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            delete_highlighted(&mut app.tui);
            vec![]
        }
        KeyCode::Char('r') => {
            app.tui.wheel.reset();
            app.tui.clamp_cursor();
            app.tui.notice = Some(Notice::success("Wheel reset to default restaurants!"));
            vec![]
        }
        KeyCode::Char('c') => {
            app.tui.wheel.clear_selection();
            app.tui.notice = None;
            vec![]
        }
        _ => vec![],
    }
}

fn quit(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.should_quit = true;
    vec![UiEffect::Quit]
}

fn spin(tui: &mut TuiState) {
    match tui.wheel.spin(tui.rng.as_mut()) {
        Ok(outcome) => {
            tui.animation = Some(SpinAnimation::new(
                outcome.previous_rotation,
                outcome.rotation,
                tui.config.spin_duration(),
            ));
            tui.notice = None;
        }
        Err(err) => {
            tui.notice = Some(Notice::warning(err.message));
        }
    }
}

fn delete_highlighted(tui: &mut TuiState) {
    let Some(name) = tui.highlighted().map(|entry| entry.name.clone()) else {
        return;
    };
    tui.wheel.remove(&name);
    tui.clamp_cursor();
    tui.notice = Some(Notice::info(format!("'{name}' removed.")));
}

/// Applies mutations requested by overlays.
pub fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::SaveRestaurant { name, items } => {
                let name = name.trim();
                match tui.wheel.add_or_update(name, &items) {
                    Ok(_) => {
                        if let Some(index) = tui.wheel.position(name) {
                            tui.cursor = index;
                        }
                        tui.notice = Some(Notice::success(format!("'{name}' saved successfully!")));
                    }
                    Err(err) => tui.notice = Some(Notice::warning(err.message)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lunch_core::config::Config;
    use lunch_core::wheel::{Entry, ScriptedRandom};

    use super::*;
    use crate::state::NoticeKind;

    fn entry(name: &str) -> Entry {
        Entry::new(name, [format!("{name} plate")]).unwrap()
    }

    fn app_with(entries: Vec<Entry>, rng: ScriptedRandom) -> AppState {
        let config = Config {
            restaurants: entries,
            spin_duration_ms: 1000,
            ..Default::default()
        };
        AppState::with_random(config, Box::new(rng))
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn tick(app: &mut AppState, ms: u64) {
        update(
            app,
            UiEvent::Tick {
                elapsed: Duration::from_millis(ms),
            },
        );
    }

    #[test]
    fn test_space_spins_and_animates() {
        let mut app = app_with(
            vec![entry("A"), entry("B"), entry("C"), entry("D")],
            ScriptedRandom::default().with_spin(2, 5),
        );

        press(&mut app, KeyCode::Char(' '));
        assert!(app.tui.is_spinning());
        assert_eq!(app.tui.wheel.last_pick(), Some("C"));
        assert!((app.tui.wheel.rotation() - 2025.0).abs() < 1e-9);
        assert!((app.tui.display_rotation() - 45.0).abs() < 1e-9);

        tick(&mut app, 500);
        assert!(app.tui.display_rotation() > 45.0);
        assert!(app.tui.display_rotation() < 2025.0);

        tick(&mut app, 600);
        assert!(!app.tui.is_spinning());
        assert!((app.tui.display_rotation() - 2025.0).abs() < 1e-9);
    }

    #[test]
    fn test_spin_is_ignored_while_animating() {
        let mut app = app_with(
            vec![entry("A"), entry("B")],
            ScriptedRandom::new([0, 4, 1, 4]),
        );

        press(&mut app, KeyCode::Enter);
        let rotation = app.tui.wheel.rotation();
        press(&mut app, KeyCode::Enter);
        assert!((app.tui.wheel.rotation() - rotation).abs() < 1e-9);
        assert_eq!(app.tui.wheel.last_pick(), Some("A"));
    }

    #[test]
    fn test_spin_with_one_entry_warns() {
        let mut app = app_with(vec![entry("Solo")], ScriptedRandom::default());

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.tui.is_spinning());
        assert!(app.tui.wheel.last_pick().is_none());
        let notice = app.tui.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(notice.text.contains("at least two"));
    }

    #[test]
    fn test_add_form_saves_restaurant() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());

        press(&mut app, KeyCode::Char('a'));
        assert!(app.overlay.is_some());
        for c in "Taco Stand".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        for c in "Al pastor".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
            ))),
        );

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.wheel.names(), vec!["A", "B", "Taco Stand"]);
        assert_eq!(app.tui.cursor, 2);
        assert_eq!(
            app.tui.notice,
            Some(Notice::success("'Taco Stand' saved successfully!"))
        );
    }

    #[test]
    fn test_save_with_padded_name_moves_cursor() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());

        apply_mutations(
            &mut app.tui,
            vec![StateMutation::SaveRestaurant {
                name: "  Taco Stand ".into(),
                items: vec!["Al pastor".into()],
            }],
        );

        assert_eq!(app.tui.wheel.names(), vec!["A", "B", "Taco Stand"]);
        assert_eq!(app.tui.cursor, 2);
        assert_eq!(
            app.tui.notice,
            Some(Notice::success("'Taco Stand' saved successfully!"))
        );
    }

    #[test]
    fn test_keys_go_to_overlay_while_open() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());

        press(&mut app, KeyCode::Char('a'));
        let effects = press(&mut app, KeyCode::Char('q'));
        assert!(effects.is_empty());
        assert!(!app.tui.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.wheel.len(), 2);
    }

    #[test]
    fn test_edit_prefills_highlighted_row() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        match &app.overlay {
            Some(Overlay::AddRestaurant(form)) => assert_eq!(form.editing.as_deref(), Some("B")),
            None => panic!("expected form"),
        }
    }

    #[test]
    fn test_delete_removes_highlighted_and_clears_pick() {
        let mut app = app_with(
            vec![entry("A"), entry("B"), entry("C")],
            ScriptedRandom::default().with_spin(0, 4),
        );
        press(&mut app, KeyCode::Char(' '));
        tick(&mut app, 2000);
        assert_eq!(app.tui.wheel.last_pick(), Some("A"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.tui.wheel.names(), vec!["A", "B"]);
        assert_eq!(app.tui.cursor, 1);
        assert!(app.tui.wheel.last_pick().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.tui.wheel.is_empty());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.tui.wheel.names(), vec!["A", "B"]);
        assert_eq!(
            app.tui.notice,
            Some(Notice::success("Wheel reset to default restaurants!"))
        );
    }

    #[test]
    fn test_clear_forgets_pick() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default().with_spin(1, 4));
        press(&mut app, KeyCode::Char(' '));
        tick(&mut app, 2000);
        let rotation = app.tui.wheel.rotation();

        press(&mut app, KeyCode::Char('c'));
        assert!(app.tui.wheel.last_pick().is_none());
        assert!((app.tui.wheel.rotation() - rotation).abs() < 1e-9);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_with(vec![entry("A"), entry("B")], ScriptedRandom::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.tui.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.tui.cursor, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(vec![], ScriptedRandom::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);
        assert!(app.tui.should_quit);

        let mut app = app_with(vec![], ScriptedRandom::default());
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
