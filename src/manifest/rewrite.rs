use super::scan::{LineAction, SectionState, old_value};

/// Result of rewriting a manifest in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkRewrite {
    /// Full manifest content after the rewrite.
    pub content: String,
    /// Previous `sdk:` value, or `None` if no line was replaced.
    pub old_version: Option<String>,
}

/// Replaces the value of `environment.sdk` with `new_version`.
///
/// Only the first `sdk:` line inside the top-level `environment:` section is
/// touched. It becomes `  sdk: <new_version>` with a two-space indent and
/// keeps its `\r\n` terminator if it had one. Every other line is copied
/// unchanged, so the line count never changes. `new_version` is not validated.
pub fn rewrite_sdk_constraint(content: &str, new_version: &str) -> SdkRewrite {
    let mut state = SectionState::default();
    let mut output = String::with_capacity(content.len() + new_version.len());
    let mut old_version = None;

    for raw in content.split_inclusive('\n') {
        let (line, terminator) = split_terminator(raw);

        match state.advance(line) {
            LineAction::Keep => output.push_str(raw),
            LineAction::ReplaceSdk => {
                old_version = Some(old_value(line).to_string());
                output.push_str("  sdk: ");
                output.push_str(new_version);
                output.push_str(if terminator.is_empty() { "\n" } else { terminator });
            }
        }
    }

    SdkRewrite {
        content: output,
        old_version,
    }
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}
