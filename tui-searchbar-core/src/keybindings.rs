//! Context-aware keybindings with typed commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A context in which a set of bindings is active (e.g. focused vs. unfocused)
pub trait BindingContext: Clone + Copy + Eq + Hash {
    /// Get the context name as a string (for config file lookup)
    fn name(&self) -> &'static str;

    /// Parse a context from its name
    fn from_name(name: &str) -> Option<Self>;
}

/// A command a key can be bound to
pub trait Command: Clone + Copy + Eq + Hash {
    /// Command name as written in config files
    fn name(&self) -> &'static str;

    /// Parse a command from its name
    fn from_name(name: &str) -> Option<Self>;
}

/// Keybindings grouped by context
///
/// Serialized as `{ "<context>": { "<command>": ["key", ...] } }`.
/// Within a context a key belongs to at most one command.
#[derive(Debug, Clone)]
pub struct Keybindings<C: BindingContext, K: Command> {
    contexts: HashMap<C, HashMap<K, Vec<String>>>,
}

impl<C: BindingContext, K: Command> Default for Keybindings<C, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext, K: Command> Serialize for Keybindings<C, K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.contexts.len()))?;
        for (context, bindings) in &self.contexts {
            let named: HashMap<&str, &Vec<String>> = bindings
                .iter()
                .map(|(command, keys)| (command.name(), keys))
                .collect();
            map.serialize_entry(context.name(), &named)?;
        }
        map.end()
    }
}

impl<'de, C: BindingContext, K: Command> Deserialize<'de> for Keybindings<C, K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Sorted so a key claimed by two commands resolves the same way every run
        let raw: BTreeMap<String, BTreeMap<String, Vec<String>>> =
            BTreeMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (context_name, bindings) in raw {
            let Some(context) = C::from_name(&context_name) else {
                tracing::debug!(context = %context_name, "ignoring unknown binding context");
                continue;
            };
            for (command_name, keys) in bindings {
                match K::from_name(&command_name) {
                    Some(command) => keybindings.add(context, command, keys),
                    None => {
                        tracing::debug!(command = %command_name, "ignoring unknown command")
                    }
                }
            }
        }

        Ok(keybindings)
    }
}

impl<C: BindingContext, K: Command> Keybindings<C, K> {
    /// Create an empty keybindings table
    pub fn new() -> Self {
        Self {
            contexts: HashMap::new(),
        }
    }

    /// Bind `keys` to `command` in `context`, replacing earlier keys
    ///
    /// Any of `keys` already bound to another command in `context` moves to `command`.
    pub fn add(&mut self, context: C, command: K, keys: Vec<String>) {
        let bindings = self.contexts.entry(context).or_default();
        for (other, other_keys) in bindings.iter_mut() {
            if *other == command {
                continue;
            }
            other_keys.retain(|bound| {
                let taken = keys.iter().any(|key| same_key(bound, key));
                if taken {
                    tracing::debug!(
                        key = %bound,
                        from = other.name(),
                        to = command.name(),
                        "key rebound"
                    );
                }
                !taken
            });
        }
        bindings.insert(command, keys);
    }

    /// Look up the command bound to `key` in `context`
    pub fn command_for(&self, key: &KeyEvent, context: C) -> Option<K> {
        let bindings = self.contexts.get(&context)?;
        bindings.iter().find_map(|(command, keys)| {
            keys.iter()
                .filter_map(|s| parse_key_string(s))
                .any(|parsed| keys_match(&parsed, key))
                .then_some(*command)
        })
    }

    /// Merge user config onto defaults - user bindings replace defaults per command
    /// and take over any default key they reuse
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (context, bindings) in user.contexts {
            for (command, keys) in bindings {
                defaults.add(context, command, keys);
            }
        }
        defaults
    }
}

/// Compare code and modifiers, ignoring kind/state
///
/// Characters compare case-insensitively and ignore SHIFT; the shifted
/// character is already the code (`/` arrives as shift+7 on some layouts).
fn keys_match(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    match (&bound.code, &pressed.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => {
            a.to_lowercase().eq(b.to_lowercase())
                && bound.modifiers.difference(KeyModifiers::SHIFT)
                    == pressed.modifiers.difference(KeyModifiers::SHIFT)
        }
        (a, b) => a == b && bound.modifiers == pressed.modifiers,
    }
}

/// Whether two key strings name the same key
fn same_key(a: &str, b: &str) -> bool {
    match (parse_key_string(a), parse_key_string(b)) {
        (Some(a), Some(b)) => keys_match(&a, &b),
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

/// Parse a key string like "q", "esc", "ctrl+u", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // "+" on its own, or as the last part of "ctrl++", is the plus key
    let (modifier_part, key_part) = match key_str.strip_suffix("++") {
        Some(rest) => (Some(rest), "+"),
        None if key_str == "+" => (None, "+"),
        None => match key_str.rsplit_once('+') {
            Some((mods, key)) => (Some(mods), key.trim()),
            None => (None, key_str.as_str()),
        },
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_part.into_iter().flat_map(|m| m.split('+')) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}
