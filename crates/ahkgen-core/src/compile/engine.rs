// Ahkgen Compile Engine
// Pure macro-list to script-text transformation

use std::sync::LazyLock;

use regex::Regex;

use crate::action::{ActionKind, LIST_SEPARATOR};
use crate::compile::fragments::{HELPER_LIBRARY, PREAMBLE};
use crate::encode::encode_chord;
use crate::hotkey::Macro;

/// File extension of the generated script language
pub const SCRIPT_EXTENSION: &str = "ahk";

/// Suggested file name when compiling a whole macro collection
pub const COLLECTION_FILE_NAME: &str = "all_macros.ahk";

/// A compiled script plus its metadata. Transient: produced per compile
/// call and handed to the caller for saving/display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledScript {
    /// Complete script text, newline-separated, ready to save
    pub body: String,
    /// Suggested file name ending in the script extension
    pub file_name: String,
    /// Number of macro blocks in the body
    pub macro_count: usize,
}

/// Compile an ordered macro list into one script.
///
/// Pure and deterministic: the same input always yields byte-identical
/// output. An empty list compiles to a valid, inert script holding only
/// the preamble and helper library.
pub fn compile(macros: &[Macro]) -> CompiledScript {
    log::debug!("compiling {} macro(s)", macros.len());
    let blocks: Vec<String> = macros.iter().map(emit_block).collect();
    let body = format!("{}{}{}", PREAMBLE, blocks.join("\n"), HELPER_LIBRARY);
    let file_name = match macros {
        [single] => format!("{}.{}", sanitize_file_name(single.name()), SCRIPT_EXTENSION),
        _ => COLLECTION_FILE_NAME.to_string(),
    };
    CompiledScript {
        body,
        file_name,
        macro_count: macros.len(),
    }
}

/// One generated block per macro, preceded by a comment carrying the
/// macro's display name for traceability.
fn emit_block(m: &Macro) -> String {
    if let ActionKind::ReplaceText {
        trigger,
        replacement,
    } = m.action()
    {
        // hotstring rule: a typed trigger, no key chord involved
        return format!("; {}\n:*:{}::{}\n", m.name(), trigger, replacement);
    }
    format!(
        "; {name}\n{chord}::\n{directive}\nreturn  ; End of {name} hotkey\n",
        name = m.name(),
        chord = encode_chord(m.keys()),
        directive = action_directive(m.action()),
    )
}

fn action_directive(action: &ActionKind) -> String {
    let sep = LIST_SEPARATOR.to_string();
    match action {
        ActionKind::OpenApp { target } | ActionKind::OpenWebsite { target } => {
            format!("Run, {target}")
        }
        ActionKind::VolumeUp => "Send, {Volume_Up}".to_string(),
        ActionKind::VolumeDown => "Send, {Volume_Down}".to_string(),
        ActionKind::Workspace { targets } => {
            format!("OpenWorkspace(\"{}\")", targets.join(&sep))
        }
        ActionKind::OpenMultipleWebsites { targets } => {
            format!("OpenMultipleWebsites(\"{}\")", targets.join(&sep))
        }
        ActionKind::QuickNote => "QuickNote()".to_string(),
        ActionKind::StartTimer => "StartTimer()".to_string(),
        ActionKind::ClipboardHistory => "ClipboardHistory()".to_string(),
        ActionKind::AiMenu => "Menu, AI_Menu, Show  ; Show the AI Assistant menu".to_string(),
        ActionKind::Unknown { kind } => {
            log::warn!("unrecognized action kind '{kind}' compiled as no-op");
            format!("; Unknown action type: {kind}")
        }
        // emitted as a hotstring block, never reaches the chord dispatch
        ActionKind::ReplaceText { .. } => String::new(),
    }
}

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ._-]+").expect("valid pattern"));

/// Reduce a macro display name to a safe file stem
fn sanitize_file_name(name: &str) -> String {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(name, "_");
    let cleaned = cleaned.trim().trim_matches('.');
    if cleaned.is_empty() {
        "macro".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyToken;

    fn volume_macro(name: &str) -> Macro {
        Macro::new(
            name,
            vec![KeyToken::parse("Ctrl"), KeyToken::parse("F10")],
            ActionKind::VolumeUp,
        )
        .unwrap()
    }

    #[test]
    fn test_single_macro_file_name() {
        let script = compile(&[volume_macro("Louder")]);
        assert_eq!(script.file_name, "Louder.ahk");
        assert_eq!(script.macro_count, 1);
    }

    #[test]
    fn test_collection_file_name() {
        let script = compile(&[volume_macro("a"), volume_macro("b")]);
        assert_eq!(script.file_name, COLLECTION_FILE_NAME);
        assert_eq!(compile(&[]).file_name, COLLECTION_FILE_NAME);
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Open Notepad"), "Open Notepad");
        assert_eq!(sanitize_file_name("vol/up: loud!"), "vol_up_ loud_");
        assert_eq!(sanitize_file_name("???"), "macro");
        assert_eq!(sanitize_file_name("..hidden.."), "hidden");
    }

    #[test]
    fn test_volume_block() {
        let script = compile(&[volume_macro("Louder")]);
        assert!(script.body.contains("; Louder\n^F10::\nSend, {Volume_Up}\nreturn"));
    }

    #[test]
    fn test_empty_directive_never_emitted_for_replace_text() {
        let action = ActionKind::replace_text("omw", "on my way").unwrap();
        let m = Macro::new("omw", vec![], action).unwrap();
        let block = emit_block(&m);
        assert_eq!(block, "; omw\n:*:omw::on my way\n");
    }
}
