// Ahkgen Compile Scenarios
//
// End-to-end checks of the full pipeline:
// capture events -> tokens -> macros -> compiled script

use ahkgen_core::capture::{normalize, RawKeyEvent};
use ahkgen_core::compile::{compile, COLLECTION_FILE_NAME};
use ahkgen_core::{ActionKind, KeyToken, Macro};

fn open_notepad() -> Macro {
    let keys = normalize(&RawKeyEvent::new("t", "KeyT").with_ctrl().with_alt());
    Macro::new(
        "Open Notepad",
        keys,
        ActionKind::OpenApp {
            target: "notepad.exe".to_string(),
        },
    )
    .unwrap()
}

fn dev_workspace() -> Macro {
    Macro::new(
        "Dev Workspace",
        vec![KeyToken::parse("Ctrl"), KeyToken::parse("F1")],
        ActionKind::workspace(vec!["C:\\a.exe".to_string(), "C:\\folder".to_string()]).unwrap(),
    )
    .unwrap()
}

fn brb_expander() -> Macro {
    Macro::new(
        "brb expander",
        vec![],
        ActionKind::replace_text("brb", "be right back").unwrap(),
    )
    .unwrap()
}

#[test]
fn compiling_twice_is_byte_identical() {
    let macros = vec![open_notepad(), dev_workspace(), brb_expander()];
    let first = compile(&macros);
    let second = compile(&macros);
    assert_eq!(first.body, second.body);
    assert_eq!(first.file_name, second.file_name);
}

#[test]
fn empty_list_compiles_to_inert_script() {
    let script = compile(&[]);
    assert_eq!(script.macro_count, 0);
    assert_eq!(script.file_name, COLLECTION_FILE_NAME);
    assert!(script.body.starts_with("; AutoHotkey Script Generated"));
    assert!(script.body.contains("; === Utility Functions ==="));
    // no hotkey bindings at all
    assert!(!script.body.contains("::\n"));
}

#[test]
fn one_comment_marker_per_macro_in_input_order() {
    let macros = vec![open_notepad(), dev_workspace(), brb_expander()];
    let script = compile(&macros);
    let markers: Vec<&str> = script
        .body
        .lines()
        .filter(|line| {
            macros
                .iter()
                .any(|m| *line == format!("; {}", m.name()).as_str())
        })
        .collect();
    assert_eq!(
        markers,
        vec!["; Open Notepad", "; Dev Workspace", "; brb expander"]
    );
}

#[test]
fn chord_prefix_and_launch_directive() {
    let script = compile(&[open_notepad()]);
    assert!(script.body.contains("^!T::\nRun, notepad.exe\nreturn"));
    assert_eq!(script.file_name, "Open Notepad.ahk");
}

#[test]
fn workspace_join_and_single_helper_definition() {
    let second = Macro::new(
        "Other Workspace",
        vec![KeyToken::parse("Ctrl"), KeyToken::parse("F2")],
        ActionKind::workspace(vec!["D:\\b.exe".to_string()]).unwrap(),
    )
    .unwrap();
    let script = compile(&[dev_workspace(), second]);
    assert!(script.body.contains("OpenWorkspace(\"C:\\a.exe|C:\\folder\")"));
    assert!(script.body.contains("OpenWorkspace(\"D:\\b.exe\")"));
    // helper routine defined exactly once no matter how many callers
    assert_eq!(script.body.matches("OpenWorkspace(workspaceConfig)").count(), 1);
}

#[test]
fn replace_text_emits_hotstring_without_chord() {
    let script = compile(&[brb_expander()]);
    assert!(script.body.contains(":*:brb::be right back"));
    let block_line = script
        .body
        .lines()
        .find(|line| line.contains("brb::"))
        .unwrap();
    assert!(block_line.starts_with(":*:"), "no chord prefix expected");
}

#[test]
fn unknown_kind_degrades_to_marked_noop() {
    let m = Macro::new(
        "from the future",
        vec![KeyToken::parse("F9")],
        ActionKind::Unknown {
            kind: "teleport".to_string(),
        },
    )
    .unwrap();
    let script = compile(&[m]);
    assert!(script.body.contains("; Unknown action type: teleport"));
    // the block is still well-formed and terminated
    assert!(script
        .body
        .contains("F9::\n; Unknown action type: teleport\nreturn"));
}

#[test]
fn ai_menu_binding_shows_preamble_menu() {
    let m = Macro::new(
        "AI helper",
        vec![KeyToken::parse("Win"), KeyToken::parse("A (KeyA)")],
        ActionKind::AiMenu,
    )
    .unwrap();
    let script = compile(&[m]);
    assert!(script.body.contains("#A::\nMenu, AI_Menu, Show"));
    // the menu the binding shows is initialized by the preamble
    assert!(script.body.contains("Menu, AI_Menu, Add, Open ChatGPT, OpenChatGPT"));
}

#[test]
fn out_of_order_key_list_still_compiles_canonical_chord() {
    let m = Macro::new(
        "backwards chord",
        vec![KeyToken::parse("T (KeyT)"), KeyToken::parse("Ctrl")],
        ActionKind::OpenApp {
            target: "notepad.exe".to_string(),
        },
    )
    .unwrap();
    let script = compile(&[m]);
    assert!(script.body.contains("^T::\nRun, notepad.exe"));
    assert!(!script.body.contains("T^::"));
}

#[test]
fn helper_library_follows_all_macro_blocks() {
    let script = compile(&[open_notepad()]);
    let block_pos = script.body.find("; Open Notepad").unwrap();
    let helpers_pos = script.body.find("; === Utility Functions ===").unwrap();
    assert!(block_pos < helpers_pos);
}
