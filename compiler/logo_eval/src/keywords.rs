//! Keyword tables.
//!
//! Control keywords are looked up by role rather than hard-coded, so the
//! same analyzer runs French (`repete`, `pour`, ...) or English (`repeat`,
//! `to`, ...) programs. Keyword text is stored lower-case; the analyzer
//! compares it against lower-cased tokens, which makes keywords
//! case-insensitive.

use std::fmt;
use std::str::FromStr;

/// What a keyword does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Loop,
    DefProc,
    EndProc,
    If,
    Else,
    MakeVar,
    While,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Loop,
        Role::DefProc,
        Role::EndProc,
        Role::If,
        Role::Else,
        Role::MakeVar,
        Role::While,
    ];
}

/// Keyword text for every role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keywords {
    loop_kw: String,
    def_proc: String,
    end_proc: String,
    if_kw: String,
    else_kw: String,
    make_var: String,
    while_kw: String,
}

impl Keywords {
    pub fn french() -> Self {
        Keywords {
            loop_kw: "repete".into(),
            def_proc: "pour".into(),
            end_proc: "fin".into(),
            if_kw: "si".into(),
            else_kw: "sinon".into(),
            make_var: "donne".into(),
            while_kw: "tantque".into(),
        }
    }

    pub fn english() -> Self {
        Keywords {
            loop_kw: "repeat".into(),
            def_proc: "to".into(),
            end_proc: "end".into(),
            if_kw: "if".into(),
            else_kw: "else".into(),
            make_var: "make".into(),
            while_kw: "while".into(),
        }
    }

    /// Replace the text of one role.
    #[must_use]
    pub fn with(mut self, role: Role, text: &str) -> Self {
        *self.slot_mut(role) = text.to_lowercase();
        self
    }

    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Loop => &self.loop_kw,
            Role::DefProc => &self.def_proc,
            Role::EndProc => &self.end_proc,
            Role::If => &self.if_kw,
            Role::Else => &self.else_kw,
            Role::MakeVar => &self.make_var,
            Role::While => &self.while_kw,
        }
    }

    /// Role of an already lower-cased token, if it is a keyword.
    pub fn role_of(&self, token: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|&role| self.get(role) == token)
    }

    /// Whether `token` (any case) is the keyword for `role`.
    pub fn is(&self, role: Role, token: &str) -> bool {
        self.get(role) == token.to_lowercase()
    }

    fn slot_mut(&mut self, role: Role) -> &mut String {
        match role {
            Role::Loop => &mut self.loop_kw,
            Role::DefProc => &mut self.def_proc,
            Role::EndProc => &mut self.end_proc,
            Role::If => &mut self.if_kw,
            Role::Else => &mut self.else_kw,
            Role::MakeVar => &mut self.make_var,
            Role::While => &mut self.while_kw,
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::french()
    }
}

impl From<KeywordSet> for Keywords {
    fn from(set: KeywordSet) -> Self {
        match set {
            KeywordSet::French => Keywords::french(),
            KeywordSet::English => Keywords::english(),
        }
    }
}

/// Built-in keyword tables, selectable by name (`fr`, `en`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordSet {
    #[default]
    French,
    English,
}

impl FromStr for KeywordSet {
    type Err = UnknownKeywordSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "french" | "francais" => Ok(KeywordSet::French),
            "en" | "english" => Ok(KeywordSet::English),
            _ => Err(UnknownKeywordSet(s.to_string())),
        }
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordSet::French => f.write_str("fr"),
            KeywordSet::English => f.write_str("en"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown keyword set `{0}` (expected `fr` or `en`)")]
pub struct UnknownKeywordSet(pub String);
