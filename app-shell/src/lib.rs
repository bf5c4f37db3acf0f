use gel_core::{FragmentSet, ParseLengthsError};
use mobility_engine::GelRun;
use serde::{Deserialize, Serialize};

/// Simple theme model, extensible if needed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Raw, unvalidated form input. Validation happens on run, not on keystroke.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GelInput {
    pub samples_text: String,
    pub control_text: String,
}

impl Default for GelInput {
    fn default() -> Self {
        Self {
            samples_text: "100, 250, 500, 750".to_string(),
            control_text: String::new(),
        }
    }
}

impl GelInput {
    pub fn validate(&self) -> Result<FragmentSet, ParseLengthsError> {
        FragmentSet::from_input(&self.samples_text, &self.control_text)
    }
}

/// Global app state. Nothing here is persisted; a page reload starts fresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub theme: Theme,
    pub input: GelInput,
    /// Last successfully computed batch; None until the first valid run.
    pub run: Option<GelRun>,
}

/// Snapshot-based state store with undo/redo.
/// State is small; cloning is cheap and predictable.
pub struct StateStore {
    state: AppState,
    undo_stack: Vec<AppState>,
    redo_stack: Vec<AppState>,
}

impl StateStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn with_default() -> Self {
        Self::new(AppState::default())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Mutate with automatic undo/redo snapshot.
    pub fn mutate<F: FnOnce(&mut AppState)>(&mut self, f: F) {
        self.undo_stack.push(self.state.clone());
        self.redo_stack.clear();
        f(&mut self.state);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo(&mut self) {
        if let Some(prev) = self.undo_stack.pop() {
            let cur = std::mem::replace(&mut self.state, prev);
            self.redo_stack.push(cur);
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            let cur = std::mem::replace(&mut self.state, next);
            self.undo_stack.push(cur);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gel_core::GelGeometry;

    #[test]
    fn undo_redo_restores_runs() {
        let mut store = StateStore::with_default();
        let set = FragmentSet::from_input("100,250", "").unwrap();
        let run = GelRun::compute(&set, GelGeometry::default());
        store.mutate(|s| s.run = Some(run));
        assert!(store.state().run.is_some());
        assert!(store.can_undo());

        store.undo();
        assert!(store.state().run.is_none());
        assert!(store.can_redo());

        store.redo();
        assert_eq!(store.state().run.as_ref().unwrap().lane_count(), 2);
    }

    #[test]
    fn mutate_clears_redo_stack() {
        let mut store = StateStore::with_default();
        store.mutate(|s| s.input.samples_text = "42".into());
        store.undo();
        store.mutate(|s| s.input.samples_text = "7".into());
        assert!(!store.can_redo());
        assert_eq!(store.state().input.samples_text, "7");
    }

    #[test]
    fn default_input_validates() {
        let set = GelInput::default().validate().unwrap();
        assert_eq!(set.samples(), &[100, 250, 500, 750]);
        assert!(!set.has_control());
    }

    #[test]
    fn state_roundtrip() {
        let mut state = AppState {
            theme: Theme::Light,
            ..AppState::default()
        };
        let set = FragmentSet::from_input("100,250", "500").unwrap();
        state.run = Some(GelRun::compute(&set, GelGeometry::default()));

        let json = serde_json::to_string(&state).unwrap();
        let decoded: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.theme, Theme::Light);
        assert_eq!(decoded.run.unwrap().lane_count(), 3);
    }

    #[test]
    fn theme_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
