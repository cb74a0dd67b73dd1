// Ahkgen Key Token Type
// Canonical form of a single captured key

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::modifier::Modifier;

/// A semantic key identifier captured from the host UI.
///
/// Tokens are immutable values; equality and hashing go through the
/// canonical string form, so a token survives a display/parse round trip
/// unchanged.
#[derive(Debug, Clone)]
pub enum KeyToken {
    /// One of the four chord modifiers
    Modifier(Modifier),
    /// A named special key in uppercase canonical form
    /// (`ENTER`, `UP`, `F5`, `NUMPAD4`, `NUMPADADD`, ...)
    Named(String),
    /// A printable character plus its physical code disambiguator,
    /// displayed as `"T (KeyT)"`
    Char { ch: char, code: String },
}

impl KeyToken {
    /// Parse a display-form token string. Total: unrecognized strings
    /// become `Named` tokens rather than errors, so new key names degrade
    /// to literal text downstream.
    pub fn parse(s: &str) -> KeyToken {
        let s = s.trim();
        if let Ok(modifier) = Modifier::from_str(s) {
            return KeyToken::Modifier(modifier);
        }
        // "X (Code)" shape from live capture
        if let Some(idx) = s.find(" (") {
            if s.ends_with(')') {
                let head = &s[..idx];
                let code = &s[idx + 2..s.len() - 1];
                if code.starts_with("Numpad") {
                    return KeyToken::Named(code.to_uppercase());
                }
                let mut chars = head.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    return KeyToken::Char {
                        ch: ch.to_ascii_uppercase(),
                        code: code.to_string(),
                    };
                }
                return KeyToken::Named(head.to_uppercase());
            }
        }
        KeyToken::Named(s.to_uppercase())
    }

    /// Canonical string form, the basis of equality
    pub fn canonical(&self) -> String {
        match self {
            KeyToken::Modifier(m) => m.to_string(),
            KeyToken::Named(name) => name.clone(),
            KeyToken::Char { ch, code } => format!("{} ({})", ch, code),
        }
    }

    /// True for the four chord modifiers
    pub fn is_modifier(&self) -> bool {
        matches!(self, KeyToken::Modifier(_))
    }
}

impl PartialEq for KeyToken {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for KeyToken {}

impl Hash for KeyToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifier() {
        assert_eq!(KeyToken::parse("Ctrl"), KeyToken::Modifier(Modifier::Ctrl));
        assert_eq!(KeyToken::parse("shift"), KeyToken::Modifier(Modifier::Shift));
    }

    #[test]
    fn test_parse_char_with_code() {
        let token = KeyToken::parse("T (KeyT)");
        assert_eq!(
            token,
            KeyToken::Char {
                ch: 'T',
                code: "KeyT".to_string()
            }
        );
        assert_eq!(token.canonical(), "T (KeyT)");
    }

    #[test]
    fn test_parse_numpad_by_code() {
        // numpad digits carry the same character as the number row,
        // only the physical code tells them apart
        assert_eq!(
            KeyToken::parse("4 (Numpad4)"),
            KeyToken::Named("NUMPAD4".to_string())
        );
        assert_eq!(
            KeyToken::parse("+ (NumpadAdd)"),
            KeyToken::Named("NUMPADADD".to_string())
        );
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            KeyToken::parse("ENTER (Enter)"),
            KeyToken::Named("ENTER".to_string())
        );
        assert_eq!(KeyToken::parse("escape"), KeyToken::Named("ESCAPE".to_string()));
        assert_eq!(KeyToken::parse("NUMPAD4"), KeyToken::Named("NUMPAD4".to_string()));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let tokens = [
            KeyToken::Modifier(Modifier::Win),
            KeyToken::Named("F11".to_string()),
            KeyToken::Char {
                ch: 'A',
                code: "KeyA".to_string(),
            },
        ];
        for token in &tokens {
            assert_eq!(&KeyToken::parse(&token.to_string()), token);
        }
    }

    #[test]
    fn test_equality_by_canonical_form() {
        use std::collections::HashSet;
        let a = KeyToken::parse("T (KeyT)");
        let b = KeyToken::Char {
            ch: 'T',
            code: "KeyT".to_string(),
        };
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
