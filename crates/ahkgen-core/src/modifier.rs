// Ahkgen Modifier System
// The four chord modifiers and their AutoHotkey sigils

use strum_macros::{Display, EnumIter, EnumString};

/// A chord modifier key.
///
/// Declaration order is the canonical chord order: every normalized chord
/// lists its modifiers as Ctrl, Alt, Shift, Win regardless of the order the
/// physical keys went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Win,
}

impl Modifier {
    /// The single-character prefix AutoHotkey uses for this modifier
    pub fn target_sigil(self) -> &'static str {
        match self {
            Modifier::Ctrl => "^",
            Modifier::Alt => "!",
            Modifier::Shift => "+",
            Modifier::Win => "#",
        }
    }

    /// The uppercase key identity a lone press of this modifier reports.
    ///
    /// Used to keep a bare Ctrl press from appearing both as a modifier
    /// flag and as the pressed key.
    pub fn capture_identity(self) -> &'static str {
        match self {
            Modifier::Ctrl => "CONTROL",
            Modifier::Alt => "ALT",
            Modifier::Shift => "SHIFT",
            Modifier::Win => "META",
        }
    }

    /// Look up a modifier by its capture identity
    pub fn from_capture_identity(identity: &str) -> Option<Modifier> {
        match identity {
            "CONTROL" => Some(Modifier::Ctrl),
            "ALT" => Some(Modifier::Alt),
            "SHIFT" => Some(Modifier::Shift),
            "META" => Some(Modifier::Win),
            _ => None,
        }
    }
}
