use super::matcher::{capitalize_first, strip_filler_prefix};
use super::rules::{CTA_FILLER_PREFIXES, CTA_MAX_CHARS, DEFAULT_CTA_LABEL};

/// Turns the call-to-action answer into a button label.
///
/// Punctuation is only dropped when it follows a filler prefix, so `¡…!`
/// labels keep both marks.
pub fn clean_call_to_action(call_to_action: &str) -> String {
    let label = capitalize_first(strip_filler_prefix(call_to_action, CTA_FILLER_PREFIXES));
    let len = label.chars().count();
    if len == 0 || len > CTA_MAX_CHARS {
        DEFAULT_CTA_LABEL.to_string()
    } else {
        label
    }
}
