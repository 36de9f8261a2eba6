use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{WheelError, WheelResult};
use super::random::RandomSource;
use super::spin::{self, initial_rotation};

/// One selectable restaurant with its ordered menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub items: Vec<String>,
}

impl Entry {
    /// Builds a validated entry: the name is trimmed, items are trimmed and
    /// blank items dropped.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the name or the item list ends up empty.
    pub fn new<I, S>(name: &str, items: I) -> WheelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(WheelError::invalid_input("Restaurant name cannot be empty."));
        }

        let items: Vec<String> = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return Err(WheelError::invalid_input(
                "Please add at least one menu item.",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            items,
        })
    }
}

/// Splits multi-line form input into menu items (one per non-blank line).
pub fn items_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Snapshot of the wheel returned by every mutating operation.
///
/// Callers decide when to redraw from it.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    /// Restaurant names in slice order.
    pub names: Vec<String>,
    /// Cumulative rotation in degrees.
    pub rotation: f64,
    /// Selected restaurant, only if it is still on the wheel.
    pub selected: Option<String>,
}

/// Result of a successful spin applied to a `WheelState`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub name: String,
    pub previous_rotation: f64,
    pub rotation: f64,
    pub extra_turns: u32,
}

/// Per-session wheel state: ordered entries, cumulative rotation and the
/// last pick.
///
/// Insertion order defines slice order. The rotation only moves forward
/// across spins; any change to the entry set (or a reset) recomputes the
/// initial rotation and clears the pick.
#[derive(Debug, Clone)]
pub struct WheelState {
    entries: Vec<Entry>,
    defaults: Vec<Entry>,
    rotation: f64,
    selected: Option<String>,
}

impl WheelState {
    /// Creates a session wheel populated with `defaults`, which are also the
    /// set restored by [`WheelState::reset`].
    pub fn new(defaults: Vec<Entry>) -> Self {
        let rotation = initial_rotation(defaults.len());
        Self {
            entries: defaults.clone(),
            defaults,
            rotation,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in slice order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Looks up an entry by name. Surrounding whitespace is ignored, as
    /// stored names are trimmed.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        let name = name.trim();
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.entries.iter().position(|e| e.name == name)
    }

    /// Current cumulative rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn can_spin(&self) -> bool {
        self.entries.len() >= 2
    }

    /// The raw last pick, even if it has since been removed.
    pub fn last_pick(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected entry, or `None` when nothing is selected or the
    /// selection no longer exists.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.as_deref().and_then(|name| self.get(name))
    }

    pub fn view(&self) -> WheelView {
        WheelView {
            names: self.names(),
            rotation: self.rotation,
            selected: self.selected_entry().map(|e| e.name.clone()),
        }
    }

    /// Inserts a new entry at the end, or replaces the items of an existing
    /// entry in place.
    ///
    /// # Errors
    /// Returns `InvalidInput` (state unchanged) for an empty name or item list.
    pub fn add_or_update<I, S>(&mut self, name: &str, items: I) -> WheelResult<WheelView>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = Entry::new(name, items).inspect_err(|err| {
            warn!(error = %err, "rejected add/update");
        })?;

        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            debug!(name = %entry.name, items = entry.items.len(), "updated restaurant");
            existing.items = entry.items;
        } else {
            debug!(name = %entry.name, items = entry.items.len(), "added restaurant");
            self.entries.push(entry);
        }

        self.entry_set_changed();
        Ok(self.view())
    }

    /// Deletes an entry. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> WheelView {
        if let Some(index) = self.position(name) {
            let removed = self.entries.remove(index);
            debug!(name = %removed.name, remaining = self.entries.len(), "removed restaurant");
            self.entry_set_changed();
        }
        self.view()
    }

    /// Restores the default entries, clears the pick and the rotation.
    pub fn reset(&mut self) -> WheelView {
        self.entries = self.defaults.clone();
        debug!(count = self.entries.len(), "reset to defaults");
        self.entry_set_changed();
        self.view()
    }

    pub fn clear_selection(&mut self) -> WheelView {
        self.selected = None;
        self.view()
    }

    /// Spins the wheel, storing the new rotation and pick.
    ///
    /// # Errors
    /// Returns `NotSpinnable` (state unchanged) with fewer than two entries.
    pub fn spin(&mut self, rng: &mut dyn RandomSource) -> WheelResult<SpinOutcome> {
        let previous_rotation = self.rotation;
        let result = spin::spin(previous_rotation, self.entries.len(), rng).inspect_err(|err| {
            warn!(error = %err, "rejected spin");
        })?;

        let name = self.entries[result.index].name.clone();
        self.rotation = result.rotation;
        self.selected = Some(name.clone());
        info!(pick = %name, index = result.index, rotation = result.rotation, "spun wheel");

        Ok(SpinOutcome {
            index: result.index,
            name,
            previous_rotation,
            rotation: result.rotation,
            extra_turns: result.extra_turns,
        })
    }

    fn entry_set_changed(&mut self) {
        self.rotation = initial_rotation(self.entries.len());
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{ScriptedRandom, WheelErrorKind, resting_angle};

    fn entry(name: &str) -> Entry {
        Entry::new(name, [format!("{name} special")]).unwrap()
    }

    fn abcd() -> WheelState {
        WheelState::new(vec![entry("A"), entry("B"), entry("C"), entry("D")])
    }

    #[test]
    fn test_new_starts_with_slice_zero_under_pointer() {
        let wheel = abcd();
        assert_eq!(wheel.names(), vec!["A", "B", "C", "D"]);
        assert!((wheel.rotation() - 45.0).abs() < 1e-9);
        assert!(wheel.last_pick().is_none());
    }

    #[test]
    fn test_entry_new_trims_and_drops_blank_items() {
        let e = Entry::new("  Zatar ", ["", " Bowl ", "   ", "Wrap"]).unwrap();
        assert_eq!(e.name, "Zatar");
        assert_eq!(e.items, vec!["Bowl", "Wrap"]);
    }

    #[test]
    fn test_items_from_lines() {
        let items = items_from_lines("Pepperoni Slice\n\n  Garlic Knots  \n   \n");
        assert_eq!(items, vec!["Pepperoni Slice", "Garlic Knots"]);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut wheel = abcd();
        let view = wheel.add_or_update("E", ["Soup"]).unwrap();
        assert_eq!(view.names, vec!["A", "B", "C", "D", "E"]);
        assert!((view.rotation - resting_angle(0, 5)).abs() < 1e-9);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut wheel = abcd();
        wheel.add_or_update("B", ["New", "Menu"]).unwrap();
        assert_eq!(wheel.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(wheel.get("B").unwrap().items, vec!["New", "Menu"]);
    }

    #[test]
    fn test_add_or_update_is_idempotent() {
        let mut wheel = abcd();
        let first = wheel.add_or_update("E", ["Soup"]).unwrap();
        let entries_after_first = wheel.entries().to_vec();
        let second = wheel.add_or_update("E", ["Soup"]).unwrap();
        assert_eq!(first, second);
        assert_eq!(wheel.entries(), entries_after_first.as_slice());
        assert_eq!(wheel.position("E"), Some(4));
    }

    #[test]
    fn test_add_rejects_empty_name_and_items() {
        let mut wheel = abcd();
        let mut rng = ScriptedRandom::default().with_spin(1, 4);
        wheel.spin(&mut rng).unwrap();
        let before = wheel.view();

        let err = wheel.add_or_update("   ", ["x"]).unwrap_err();
        assert_eq!(err.kind, WheelErrorKind::InvalidInput);
        let err = wheel.add_or_update("E", ["", "  "]).unwrap_err();
        assert_eq!(err.kind, WheelErrorKind::InvalidInput);
        let err = wheel.add_or_update("E", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind, WheelErrorKind::InvalidInput);

        assert_eq!(wheel.view(), before);
    }

    #[test]
    fn test_remove_selected_invalidates_selection() {
        let mut wheel = abcd();
        let mut rng = ScriptedRandom::default().with_spin(1, 4);
        let outcome = wheel.spin(&mut rng).unwrap();
        assert_eq!(outcome.name, "B");
        assert_eq!(wheel.view().selected.as_deref(), Some("B"));

        let view = wheel.remove("B");
        assert_eq!(view.names, vec!["A", "C", "D"]);
        assert!(view.selected.is_none());
        assert!(wheel.selected_entry().is_none());
        assert!((view.rotation - resting_angle(0, 3)).abs() < 1e-9);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wheel = abcd();
        let mut rng = ScriptedRandom::default().with_spin(3, 6);
        wheel.spin(&mut rng).unwrap();
        let before = wheel.view();

        let after = wheel.remove("Nope");
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_trims_name() {
        let mut wheel = abcd();
        let view = wheel.remove(" B ");
        assert_eq!(view.names, vec!["A", "C", "D"]);
        assert_eq!(wheel.position("  C"), Some(1));
        assert_eq!(wheel.get("D ").map(|e| e.name.as_str()), Some("D"));
    }

    #[test]
    fn test_remove_last_entry_rests_at_pointer() {
        let mut wheel = WheelState::new(vec![entry("Solo")]);
        let view = wheel.remove("Solo");
        assert!(view.names.is_empty());
        assert!((view.rotation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut wheel = abcd();
        wheel.remove("A");
        wheel.add_or_update("Z", ["Zed"]).unwrap();
        let mut rng = ScriptedRandom::default().with_spin(0, 5);
        wheel.spin(&mut rng).unwrap();

        let view = wheel.reset();
        assert_eq!(view.names, vec!["A", "B", "C", "D"]);
        assert!(view.selected.is_none());
        assert!((view.rotation - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_spin_scenario_updates_state() {
        let mut wheel = abcd();
        let mut rng = ScriptedRandom::default().with_spin(2, 5);
        let outcome = wheel.spin(&mut rng).unwrap();

        assert_eq!(outcome.index, 2);
        assert_eq!(outcome.name, "C");
        assert!((outcome.previous_rotation - 45.0).abs() < 1e-9);
        assert!((outcome.rotation - 2025.0).abs() < 1e-9);
        assert!((wheel.rotation() - 2025.0).abs() < 1e-9);
        assert_eq!(wheel.selected_entry().unwrap().name, "C");
    }

    #[test]
    fn test_spin_single_entry_not_spinnable() {
        let mut wheel = WheelState::new(vec![entry("Solo")]);
        let before = wheel.view();
        let mut rng = ScriptedRandom::default().with_spin(0, 4);

        let err = wheel.spin(&mut rng).unwrap_err();
        assert_eq!(err.kind, WheelErrorKind::NotSpinnable);
        assert_eq!(wheel.view(), before);
        assert!(!wheel.can_spin());
    }

    #[test]
    fn test_rotation_monotonic_across_spins() {
        let mut wheel = abcd();
        let mut rng = crate::wheel::ThreadRandom::new();
        let mut last = wheel.rotation();
        for _ in 0..100 {
            let outcome = wheel.spin(&mut rng).unwrap();
            assert!(outcome.rotation > last);
            last = outcome.rotation;
        }
    }

    #[test]
    fn test_clear_selection_keeps_rotation() {
        let mut wheel = abcd();
        let mut rng = ScriptedRandom::default().with_spin(3, 4);
        wheel.spin(&mut rng).unwrap();
        let rotation = wheel.rotation();

        let view = wheel.clear_selection();
        assert!(view.selected.is_none());
        assert!((view.rotation - rotation).abs() < 1e-9);
    }
}
