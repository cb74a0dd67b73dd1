// Ahkgen Script Fragments
// Constant script text shared by every compiled output

/// Interpreter directives, environment setup, and the AI-menu
/// initialization that ends the auto-execute section. Emitted exactly once
/// at the top of every script.
pub const PREAMBLE: &str = r#"; AutoHotkey Script Generated by AHK Generator
#NoEnv
#SingleInstance Force
SetWorkingDir %A_ScriptDir%

; === Macro Configuration ===
; This script contains your custom macros and text replacements

; Initialize custom AI menu
Menu, AI_Menu, Add, Open ChatGPT, OpenChatGPT
Menu, AI_Menu, Add, Ask GPT (Prompt), PromptGPT
return  ; End of auto-execute section
"#;

/// Named helper routines the generated hotkeys call, plus the two jump
/// targets wired into the AI menu by the preamble. Emitted exactly once at
/// the bottom of every script, no matter how many macros reference them.
pub const HELPER_LIBRARY: &str = r#"
; === Utility Functions ===
ClipboardHistory() {
    FormatTime, TimeString,, yyyy-MM-dd HH:mm:ss
    FileAppend, %TimeString%: %Clipboard%`n, %A_ScriptDir%/clipboard_history.txt
    TrayTip, Clipboard History, Entry saved!, 2
    return
}

QuickNote() {
    global NoteContent  ; Make GUI control variable global
    Gui, Note:New
    Gui, Note:Add, Edit, vNoteContent w300 h200
    Gui, Note:Add, Button, gSaveNote, Save Note
    Gui, Note:Show,, Quick Note
    return
SaveNote:
    Gui, Note:Submit
    FormatTime, TimeString,, yyyy-MM-dd HH:mm:ss
    FileAppend, %TimeString%:`n%NoteContent%`n---`n, %A_ScriptDir%/quick_notes.txt
    return
}

StartTimer() {
    InputBox, Minutes, Timer, Enter minutes:
    if !ErrorLevel {
        SetTimer, TimerDone, % Minutes * 60000
        TrayTip, Timer Started, Will notify in %Minutes% minutes, 2
    }
    return
TimerDone:
    SetTimer, TimerDone, Off
    MsgBox Timer Done!
    return
}

OpenWorkspace(workspaceConfig) {
    ; Parse workspace configuration (format: "app1.exe|folder1|app2.exe|folder2")
    Loop, Parse, workspaceConfig, |
    {
        item := A_LoopField
        if (SubStr(item, -3) = ".exe" || SubStr(item, -3) = ".lnk") {
            ; It's an application
            Run, %item%
            Sleep, 1000  ; Wait for app to start
        } else {
            ; It's a folder
            Run, explorer.exe "%item%"
            Sleep, 500   ; Wait for folder to open
        }
    }
    TrayTip, Workspace, Workspace opened successfully!, 2
    return
}

OpenMultipleWebsites(websitesConfig) {
    ; Parse multiple websites configuration (format: "url1|url2|url3")
    Loop, Parse, websitesConfig, |
    {
        url := A_LoopField
        if (url != "") {
            ; Open website in default browser
            Run, %url%
            Sleep, 500  ; Small delay between opening websites
        }
    }
    TrayTip, Multiple Websites, Websites opened successfully!, 2
    return
}

OpenChatGPT:
    Run, https://chat.openai.com
    return

PromptGPT:
    InputBox, userPrompt, Ask ChatGPT, Enter your question:
    if (userPrompt != "") {
        query := StrReplace(userPrompt, " ", "+")
        Run, https://chat.openai.com/?q=%query%
    }
    return
"#;
