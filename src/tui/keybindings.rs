//! Keybinding definitions
//!
//! The keys listed in the help column, grouped the way they are shown.

/// A keybinding definition
#[derive(Debug, Clone, Copy)]
pub struct Keybinding {
    /// Key label as shown to the user
    pub keys: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Help section the key appears under
    pub context: KeyContext,
}

/// Help section of a keybinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Navigation,
    Action,
}

impl KeyContext {
    pub fn title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Action => "Actions",
        }
    }
}

const fn nav(keys: &'static str, description: &'static str) -> Keybinding {
    Keybinding {
        keys,
        description,
        context: KeyContext::Navigation,
    }
}

const fn action(keys: &'static str, description: &'static str) -> Keybinding {
    Keybinding {
        keys,
        description,
        context: KeyContext::Action,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    nav("↓/j", "down"),
    nav("↑/k", "up"),
    nav("t", "top"),
    nav("b", "bottom"),
    nav("n", "next uncleared"),
    nav("N", "prev uncleared"),
    nav("F", "find"),
    nav("f", "find again"),
    action("space", "toggle cleared"),
    action("r", "bank balance"),
    action("a", "add"),
    action("e", "edit"),
    action("d", "delete"),
    action("q", "save & quit"),
    action("^C", "quit, no save"),
];

/// Keybindings in one help section
pub fn in_context(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}
