use kumite_engine::input::Key;

/// Something a key press makes the game do.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    Punch,
    Kick,
    Hadoken,
    Shoryuken,
    /// Start if stopped, pause if playing, resume if paused.
    ToggleMusic,
    HaltMusic,
}

const BINDINGS: &[(Key, Action)] = &[
    (Key::J, Action::Punch),
    (Key::U, Action::Kick),
    (Key::L, Action::Hadoken),
    (Key::O, Action::Shoryuken),
    (Key::Enter, Action::ToggleMusic),
    (Key::Backspace, Action::HaltMusic),
];

/// Declarative key → action table.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(Key, Action)>,
}

impl KeyMap {
    pub fn new(bindings: impl IntoIterator<Item = (Key, Action)>) -> Self {
        Self { bindings: bindings.into_iter().collect() }
    }

    pub fn lookup(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, action)| action)
    }

    pub fn bindings(&self) -> &[(Key, Action)] {
        &self.bindings
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(BINDINGS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.lookup(Key::J), Some(Action::Punch));
        assert_eq!(map.lookup(Key::U), Some(Action::Kick));
        assert_eq!(map.lookup(Key::L), Some(Action::Hadoken));
        assert_eq!(map.lookup(Key::O), Some(Action::Shoryuken));
        assert_eq!(map.lookup(Key::Enter), Some(Action::ToggleMusic));
        assert_eq!(map.lookup(Key::Backspace), Some(Action::HaltMusic));
    }

    #[test]
    fn each_key_bound_once() {
        let map = KeyMap::default();
        let keys: HashSet<Key> = map.bindings().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), map.bindings().len());
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let map = KeyMap::default();
        assert_eq!(map.lookup(Key::K), None);
        assert_eq!(map.lookup(Key::Space), None);
        assert_eq!(map.lookup(Key::Unknown(0)), None);
    }
}
