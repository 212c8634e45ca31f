//! Condition registry
//!
//! The registry is closed and ordered. A condition's rank (position + 1) is
//! the value multiplied into the condition segment, so adding, removing or
//! reordering variants changes which codes are valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Reportable condition type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    /// `c`
    Cholera,
    /// `d`
    Dengue,
    /// `m`
    Malaria,
    /// `j`
    JapaneseEncephalitis,
    /// `t`
    Typhoid,
    /// `h`
    Hepatitis,
    /// `v`
    Covid19,
}

impl ConditionType {
    /// All conditions in registry order.
    pub const ALL: [ConditionType; 7] = [
        ConditionType::Cholera,
        ConditionType::Dengue,
        ConditionType::Malaria,
        ConditionType::JapaneseEncephalitis,
        ConditionType::Typhoid,
        ConditionType::Hepatitis,
        ConditionType::Covid19,
    ];

    /// One-letter code typed by operators (lowercase).
    pub fn mnemonic(&self) -> char {
        match self {
            ConditionType::Cholera => 'c',
            ConditionType::Dengue => 'd',
            ConditionType::Malaria => 'm',
            ConditionType::JapaneseEncephalitis => 'j',
            ConditionType::Typhoid => 't',
            ConditionType::Hepatitis => 'h',
            ConditionType::Covid19 => 'v',
        }
    }

    /// Registry name, as shown in prompts and replies.
    pub fn name(&self) -> &'static str {
        match self {
            ConditionType::Cholera => "CHOLERA",
            ConditionType::Dengue => "DENGUE",
            ConditionType::Malaria => "MALARIA",
            ConditionType::JapaneseEncephalitis => "JP_ENCEPH",
            ConditionType::Typhoid => "TYPHOID",
            ConditionType::Hepatitis => "HEPATITIS",
            ConditionType::Covid19 => "COVID19",
        }
    }

    /// 0-based declaration order.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// 1-based rank; never zero so the segment never multiplies by zero.
    pub fn rank(&self) -> u32 {
        self.position() as u32 + 1
    }

    /// Condition with the given rank, if any.
    pub fn from_rank(rank: u32) -> Option<Self> {
        let position = (rank as usize).checked_sub(1)?;
        Self::ALL.get(position).copied()
    }

    /// Case-insensitive mnemonic lookup.
    ///
    /// Surrounding whitespace is ignored. Blank input, multi-letter input and
    /// unknown letters all return `None`.
    pub fn from_mnemonic(code: &str) -> Option<Self> {
        let mut chars = code.trim().chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let letter = letter.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.mnemonic() == letter)
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConditionType {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| WheelError::UnknownCondition(s.to_string()))
    }
}
