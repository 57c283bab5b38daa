//! Icon glyphs shared by every form

use crate::state::{FieldKind, FormKind};

/// Named glyph used in labels, buttons and confirmations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Lock,
    User,
    Eye,
    EyeOff,
    Arrow,
    Check,
    Message,
    Send,
    Key,
    Back,
    Inbox,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Mail => "✉",
            Self::Lock => "⚿",
            Self::User => "☺",
            Self::Eye => "◉",
            Self::EyeOff => "◌",
            Self::Arrow => "→",
            Self::Check => "✓",
            Self::Message => "✎",
            Self::Send => "➤",
            Self::Key => "⚷",
            Self::Back => "←",
            Self::Inbox => "▤",
        }
    }

    /// Icon shown next to a field label
    pub fn for_field(kind: FieldKind) -> Option<Self> {
        match kind {
            FieldKind::Email => Some(Self::Mail),
            FieldKind::Secret => Some(Self::Lock),
            FieldKind::Multiline => Some(Self::Message),
            FieldKind::Text | FieldKind::Checkbox => None,
        }
    }

    /// Icon in the card title
    pub fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::Login => Self::Lock,
            FormKind::Register => Self::User,
            FormKind::Contact => Self::Message,
            FormKind::PasswordReset => Self::Key,
        }
    }

    /// Icon trailing the submit label
    pub fn for_submit(kind: FormKind) -> Self {
        match kind {
            FormKind::Login | FormKind::Register => Self::Arrow,
            FormKind::Contact | FormKind::PasswordReset => Self::Send,
        }
    }

    /// Icon above a confirmation
    pub fn for_success(kind: FormKind) -> Self {
        match kind {
            FormKind::PasswordReset => Self::Inbox,
            _ => Self::Check,
        }
    }

    pub fn for_reveal(revealed: bool) -> Self {
        if revealed {
            Self::EyeOff
        } else {
            Self::Eye
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 12] = [
        Icon::Mail,
        Icon::Lock,
        Icon::User,
        Icon::Eye,
        Icon::EyeOff,
        Icon::Arrow,
        Icon::Check,
        Icon::Message,
        Icon::Send,
        Icon::Key,
        Icon::Back,
        Icon::Inbox,
    ];

    #[test]
    fn test_glyphs_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph(), "{a:?} and {b:?} share a glyph");
            }
        }
    }

    #[test]
    fn test_reveal_icon_flips() {
        assert_eq!(Icon::for_reveal(false), Icon::Eye);
        assert_eq!(Icon::for_reveal(true), Icon::EyeOff);
    }

    #[test]
    fn test_reset_success_uses_inbox() {
        assert_eq!(Icon::for_success(FormKind::PasswordReset), Icon::Inbox);
        assert_eq!(Icon::for_success(FormKind::Login), Icon::Check);
    }
}
