//! Line classifier for locating `environment.sdk` in a pubspec.
//!
//! The pubspec is scanned line by line without parsing YAML, so formatting
//! and comments outside the rewritten line are left alone.

const SECTION_MARKER: &str = "environment:";
const SDK_KEY: &str = "sdk:";

/// Where the scanner is relative to the `environment:` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    /// Not inside `environment:`.
    #[default]
    Outside,
    /// Inside `environment:`, no `sdk:` seen yet.
    InEnvironment,
    /// `sdk:` was rewritten. Terminal.
    Replaced,
}

/// What to do with the line just classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Keep,
    ReplaceSdk,
}

impl SectionState {
    /// Feeds one line (without terminator) and returns the action for it.
    pub fn advance(&mut self, line: &str) -> LineAction {
        match *self {
            SectionState::Replaced => LineAction::Keep,
            _ if line.starts_with(SECTION_MARKER) => {
                *self = SectionState::InEnvironment;
                LineAction::Keep
            }
            SectionState::InEnvironment if is_top_level_key(line) => {
                log::debug!("Left environment section at: {}", line.trim_end());
                *self = SectionState::Outside;
                LineAction::Keep
            }
            SectionState::InEnvironment if line.trim_start().starts_with(SDK_KEY) => {
                *self = SectionState::Replaced;
                LineAction::ReplaceSdk
            }
            _ => LineAction::Keep,
        }
    }
}

/// Returns true for a non-blank, non-comment line starting at column 0.
fn is_top_level_key(line: &str) -> bool {
    let trimmed = line.trim_end();
    !trimmed.is_empty()
        && !trimmed.starts_with(char::is_whitespace)
        && !trimmed.starts_with('#')
}

/// Returns the value of a `key: value` line: text after the first colon, trimmed.
pub fn old_value(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, value)| value.trim())
}
