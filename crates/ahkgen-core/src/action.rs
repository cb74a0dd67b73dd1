// Ahkgen Action Model
// The closed set of effects a macro can trigger

use std::fmt;

/// Separator used to join list-valued action payloads into a single helper
/// argument. The generated helpers re-split on it at runtime, so it may not
/// appear inside any element. Kept unescaped to match the runtime helpers.
pub const LIST_SEPARATOR: char = '|';

/// Errors rejected at action construction time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("list-valued action needs at least one non-blank entry")]
    EmptyTargetList,

    #[error("target '{0}' contains the reserved '|' separator")]
    ReservedSeparator(String),

    #[error("text replacement needs a non-empty trigger")]
    EmptyTrigger,

    #[error("text replacement needs a non-empty replacement")]
    EmptyReplacement,
}

/// What a macro does when invoked.
///
/// `Unknown` is the explicit forward-compatibility arm: a record whose kind
/// is not in the closed set still compiles, degrading to a commented no-op
/// block instead of failing the whole script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    OpenApp { target: String },
    OpenWebsite { target: String },
    ReplaceText { trigger: String, replacement: String },
    VolumeUp,
    VolumeDown,
    Workspace { targets: Vec<String> },
    OpenMultipleWebsites { targets: Vec<String> },
    QuickNote,
    StartTimer,
    ClipboardHistory,
    AiMenu,
    Unknown { kind: String },
}

impl ActionKind {
    /// Build a text-replacement action, rejecting blank parts
    pub fn replace_text(trigger: &str, replacement: &str) -> Result<Self, ActionError> {
        if trigger.trim().is_empty() {
            return Err(ActionError::EmptyTrigger);
        }
        if replacement.is_empty() {
            return Err(ActionError::EmptyReplacement);
        }
        Ok(ActionKind::ReplaceText {
            trigger: trigger.to_string(),
            replacement: replacement.to_string(),
        })
    }

    /// Build a workspace action from application/folder paths
    pub fn workspace(targets: impl IntoIterator<Item = String>) -> Result<Self, ActionError> {
        Ok(ActionKind::Workspace {
            targets: validate_targets(targets)?,
        })
    }

    /// Build a multi-website action from URLs
    pub fn open_multiple_websites(
        targets: impl IntoIterator<Item = String>,
    ) -> Result<Self, ActionError> {
        Ok(ActionKind::OpenMultipleWebsites {
            targets: validate_targets(targets)?,
        })
    }

    /// The wire name of this action kind
    pub fn kind_name(&self) -> &str {
        match self {
            ActionKind::OpenApp { .. } => "openApp",
            ActionKind::OpenWebsite { .. } => "openWebsite",
            ActionKind::ReplaceText { .. } => "replaceText",
            ActionKind::VolumeUp => "volumeUp",
            ActionKind::VolumeDown => "volumeDown",
            ActionKind::Workspace { .. } => "workspace",
            ActionKind::OpenMultipleWebsites { .. } => "openMultipleWebsites",
            ActionKind::QuickNote => "quickNote",
            ActionKind::StartTimer => "startTimer",
            ActionKind::ClipboardHistory => "clipboardHistory",
            ActionKind::AiMenu => "aiMenu",
            ActionKind::Unknown { kind } => kind,
        }
    }

    /// True for the text-replacement kind, which binds a typed trigger
    /// instead of a key chord
    pub fn is_text_replacement(&self) -> bool {
        matches!(self, ActionKind::ReplaceText { .. })
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// Drop blank entries, require at least one survivor, and reject elements
/// carrying the reserved separator
fn validate_targets(targets: impl IntoIterator<Item = String>) -> Result<Vec<String>, ActionError> {
    let mut cleaned = Vec::new();
    for target in targets {
        let target = target.trim();
        if target.is_empty() {
            continue;
        }
        if target.contains(LIST_SEPARATOR) {
            return Err(ActionError::ReservedSeparator(target.to_string()));
        }
        cleaned.push(target.to_string());
    }
    if cleaned.is_empty() {
        return Err(ActionError::EmptyTargetList);
    }
    Ok(cleaned)
}
