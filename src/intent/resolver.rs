use std::sync::LazyLock;

use regex::Regex;

use super::types::{IntentAction, IntentRule};

/// Spoken when the help intent matches.
pub const CAPABILITY_SUMMARY: &str = "You can ask me to open any page, like home, services, \
     sizing, weaving, products, booking or your orders. You can also just ask a question and \
     I will pass it on to our assistant.";

fn nav(
    name: &'static str,
    pattern: &str,
    path: &'static str,
    acknowledgment: &'static str,
) -> IntentRule {
    IntentRule {
        name,
        pattern: Regex::new(pattern).expect("intent pattern"),
        excludes: &[],
        action: IntentAction::Navigate {
            path,
            acknowledgment,
        },
    }
}

fn nav_excluding(
    name: &'static str,
    pattern: &str,
    excludes: &'static [&'static str],
    path: &'static str,
    acknowledgment: &'static str,
) -> IntentRule {
    IntentRule {
        excludes,
        ..nav(name, pattern, path, acknowledgment)
    }
}

/// The ordered table. Evaluation is top-to-bottom, first match wins: the
/// sizing and weaving rows sit above the generic service/product listings,
/// and those broad rows additionally veto sizing/weaving wording so the
/// ordering invariant holds by construction, not call-site discipline.
static RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        nav(
            "home",
            r"\b(home|homepage|main menu|start page)\b",
            "/",
            "Taking you to the home page.",
        ),
        nav(
            "sizing",
            r"\b(sizing|yarn)\b",
            "/services/sizing",
            "Opening our yarn sizing service.",
        ),
        nav(
            "weaving",
            r"\b(weaving|fabric)\b",
            "/services/weaving",
            "Opening our fabric weaving service.",
        ),
        nav_excluding(
            "services",
            r"\bservices?\b",
            &["sizing", "weaving"],
            "/services",
            "Here is everything we offer.",
        ),
        nav_excluding(
            "products",
            r"\bproducts?\b",
            &["sizing", "weaving"],
            "/products",
            "Showing our products.",
        ),
        nav(
            "savings",
            r"\b(savings?|save money)\b",
            "/why-us/savings",
            "Here is how we save you money.",
        ),
        nav(
            "sustainability",
            r"\bsustainab|\beco.?friendly\b",
            "/why-us/sustainability",
            "Here is our sustainability story.",
        ),
        nav(
            "why-brand",
            r"\bwhy\b",
            "/why-us",
            "Here is why customers choose us.",
        ),
        nav(
            "about",
            r"\babout\b|\bcompany\b",
            "/about",
            "Opening the about page.",
        ),
        nav(
            "careers",
            r"\b(careers?|jobs?|hiring)\b",
            "/careers",
            "Opening our careers page.",
        ),
        nav(
            "contact",
            r"\bcontact\b|\bsupport\b|\breach you\b",
            "/contact",
            "Opening the contact page.",
        ),
        nav(
            "login",
            r"\blog ?in\b|\bsign in\b",
            "/login",
            "Opening the login page.",
        ),
        nav(
            "register",
            r"\bregister\b|\bsign up\b|create an? account",
            "/register",
            "Opening registration.",
        ),
        nav(
            "forgot-password",
            r"forgot.*password|reset.*password",
            "/forgot-password",
            "Opening password recovery.",
        ),
        nav(
            "my-orders",
            r"\bmy orders?\b|\border status\b|track.*order",
            "/my-orders",
            "Opening your orders.",
        ),
        nav(
            "booking",
            r"\bbook(ing)?\b|\bappointment\b|\bschedule a\b",
            "/booking",
            "Opening booking.",
        ),
        IntentRule {
            name: "help",
            pattern: Regex::new(r"\bhelp\b|what can you (do|say)\b").expect("intent pattern"),
            excludes: &[],
            action: IntentAction::Help,
        },
    ]
});

/// Resolve a finalized utterance against the table. Normalization is
/// lowercasing, nothing else. `None` is the expected no-match outcome,
/// not an error.
pub fn resolve(utterance: &str) -> Option<&'static IntentRule> {
    let text = utterance.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&text))
}

/// The full table, in evaluation order.
pub fn rules() -> &'static [IntentRule] {
    &RULES
}
