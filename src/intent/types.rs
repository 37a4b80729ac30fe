use regex::Regex;

/// What a matched rule does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentAction {
    /// Hand `path` to the routing collaborator and speak the acknowledgment.
    Navigate {
        path: &'static str,
        acknowledgment: &'static str,
    },
    /// Speak the capability summary. Never navigates.
    Help,
}

/// One row of the ordered intent table.
#[derive(Debug)]
pub struct IntentRule {
    pub name: &'static str,
    pub pattern: Regex,
    /// Substrings whose presence vetoes this rule, so deliberately broad
    /// patterns cannot shadow the more specific rows above them.
    pub excludes: &'static [&'static str],
    pub action: IntentAction,
}

impl IntentRule {
    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text) && !self.excludes.iter().any(|veto| text.contains(veto))
    }
}
