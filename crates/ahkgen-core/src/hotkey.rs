// Ahkgen Macro Model
// A named binding of a key chord (or text trigger) to an action

use indexmap::IndexSet;
use strum::IntoEnumIterator;

use crate::action::{ActionError, ActionKind};
use crate::key::KeyToken;
use crate::modifier::Modifier;

/// Errors rejected at macro construction time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MacroError {
    #[error("macro needs a non-empty name")]
    EmptyName,

    #[error("macro '{0}' needs at least one key")]
    EmptyKeys(String),

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// A user-defined rule binding a key combination (or text trigger) to an
/// action. Construction enforces the invariants the compiler relies on;
/// a value that exists is compilable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    name: String,
    keys: Vec<KeyToken>,
    action: ActionKind,
}

impl Macro {
    /// Validate and build a macro.
    ///
    /// Keys are deduplicated and reordered into canonical chord form:
    /// modifiers first in Ctrl, Alt, Shift, Win order, then the remaining
    /// keys preserving first-seen order. A text-replacement macro carries
    /// its trigger in the action and may have an empty key list; every
    /// other kind needs at least one key.
    pub fn new(
        name: &str,
        keys: impl IntoIterator<Item = KeyToken>,
        action: ActionKind,
    ) -> Result<Self, MacroError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MacroError::EmptyName);
        }
        let keys: IndexSet<KeyToken> = keys.into_iter().collect();
        if keys.is_empty() && !action.is_text_replacement() {
            return Err(MacroError::EmptyKeys(name.to_string()));
        }
        let mut ordered: Vec<KeyToken> = Vec::with_capacity(keys.len());
        for modifier in Modifier::iter() {
            let token = KeyToken::Modifier(modifier);
            if keys.contains(&token) {
                ordered.push(token);
            }
        }
        ordered.extend(keys.into_iter().filter(|k| !k.is_modifier()));
        Ok(Self {
            name: name.to_string(),
            keys: ordered,
            action,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[KeyToken] {
        &self.keys
    }

    pub fn action(&self) -> &ActionKind {
        &self.action
    }
}
