// Ahkgen Target Encoding
// Maps canonical key tokens to AutoHotkey key syntax

use crate::key::KeyToken;

/// Named-key symbol table. Keys not in this table pass through as literal
/// text so an unrecognized key name degrades instead of aborting.
static NAMED_SYMBOLS: &[(&str, &str)] = &[
    ("ENTER", "{Enter}"),
    ("ESCAPE", "{Escape}"),
    ("ESC", "{Escape}"),
    ("TAB", "{Tab}"),
    ("SPACE", "{Space}"),
    ("BACKSPACE", "{Backspace}"),
    ("DELETE", "{Delete}"),
    ("UP", "{Up}"),
    ("DOWN", "{Down}"),
    ("LEFT", "{Left}"),
    ("RIGHT", "{Right}"),
    ("PAGEUP", "{PgUp}"),
    ("PAGEDOWN", "{PgDn}"),
    ("HOME", "{Home}"),
    ("END", "{End}"),
    ("INSERT", "{Insert}"),
    ("NUMPAD0", "Numpad0"),
    ("NUMPAD1", "Numpad1"),
    ("NUMPAD2", "Numpad2"),
    ("NUMPAD3", "Numpad3"),
    ("NUMPAD4", "Numpad4"),
    ("NUMPAD5", "Numpad5"),
    ("NUMPAD6", "Numpad6"),
    ("NUMPAD7", "Numpad7"),
    ("NUMPAD8", "Numpad8"),
    ("NUMPAD9", "Numpad9"),
    ("NUMPADMULTIPLY", "NumpadMult"),
    ("NUMPADADD", "NumpadAdd"),
    ("NUMPADSUBTRACT", "NumpadSub"),
    ("NUMPADDECIMAL", "NumpadDot"),
    ("NUMPADDIVIDE", "NumpadDiv"),
    ("NUMPADENTER", "NumpadEnter"),
    ("NUMLOCK", "NumLock"),
];

/// Translate one canonical token to AutoHotkey key-reference syntax.
///
/// Function keys (`F1`..`F24`) are valid AHK names as-is and fall through
/// the pass-through default together with unknown names.
pub fn encode_for_target(token: &KeyToken) -> String {
    match token {
        KeyToken::Modifier(m) => m.target_sigil().to_string(),
        KeyToken::Char { ch, .. } => ch.to_string(),
        KeyToken::Named(name) => NAMED_SYMBOLS
            .iter()
            .find(|(n, _)| *n == name.as_str())
            .map(|(_, symbol)| symbol.to_string())
            .unwrap_or_else(|| name.clone()),
    }
}

/// Encode a whole chord into the hotkey prefix string, e.g. `^!T`
pub fn encode_chord(tokens: &[KeyToken]) -> String {
    tokens.iter().map(encode_for_target).collect()
}
