// Ahkgen Capture Normalization
// Turns raw key-press snapshots into canonical chord token lists

use strum::IntoEnumIterator;

use crate::key::KeyToken;
use crate::modifier::Modifier;

/// A raw key-press snapshot from whatever capture mechanism the host UI
/// uses (keyboard listener, test harness, replay log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The character or key name reported for the press (`"t"`, `"Enter"`,
    /// `"ArrowUp"`, `"Control"`, ...)
    pub key: String,
    /// The physical code of the key (`"KeyT"`, `"Numpad4"`, ...)
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl RawKeyEvent {
    pub fn new(key: &str, code: &str) -> Self {
        Self {
            key: key.to_string(),
            code: code.to_string(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn modifier_flag(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
            Modifier::Win => self.meta,
        }
    }
}

/// Normalize a raw snapshot into a canonical chord.
///
/// Modifiers come first in fixed Ctrl, Alt, Shift, Win order, skipping the
/// modifier whose identity equals the pressed key so a lone Ctrl press
/// never appears twice. Exactly one primary token follows; for a lone
/// modifier press the modifier itself is the primary token.
pub fn normalize(event: &RawKeyEvent) -> Vec<KeyToken> {
    let key_upper = event.key.to_uppercase();
    let mut tokens = Vec::with_capacity(4);
    for modifier in Modifier::iter() {
        if event.modifier_flag(modifier) && key_upper != modifier.capture_identity() {
            tokens.push(KeyToken::Modifier(modifier));
        }
    }
    tokens.push(primary_token(event, &key_upper));
    tokens
}

/// Fold a new capture event into the running chord.
///
/// Live capture is a replace, not an append: each physical event recomputes
/// modifiers-plus-key from current flags and overwrites the previous
/// combination. The terminal value is the chord held when capture stops.
pub fn accumulate(_previous: &[KeyToken], event: &RawKeyEvent) -> Vec<KeyToken> {
    normalize(event)
}

fn primary_token(event: &RawKeyEvent, key_upper: &str) -> KeyToken {
    if let Some(modifier) = Modifier::from_capture_identity(key_upper) {
        return KeyToken::Modifier(modifier);
    }
    // Numpad keys are a distinct symbol family keyed off the physical
    // code; the character alone is ambiguous with the number row.
    if event.code.starts_with("Numpad") {
        return KeyToken::Named(event.code.to_uppercase());
    }
    if key_upper == " " {
        return KeyToken::Named("SPACE".to_string());
    }
    if let Some(stripped) = key_upper.strip_prefix("ARROW") {
        return KeyToken::Named(stripped.to_string());
    }
    let mut chars = event.key.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return KeyToken::Char {
            ch: ch.to_ascii_uppercase(),
            code: event.code.clone(),
        };
    }
    KeyToken::Named(key_upper.to_string())
}
