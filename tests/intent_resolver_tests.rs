use loomvoice::intent::{resolve, rules, IntentAction};

fn target(utterance: &str) -> Option<&'static str> {
    resolve(utterance).and_then(|rule| match rule.action {
        IntentAction::Navigate { path, .. } => Some(path),
        IntentAction::Help => None,
    })
}

#[test]
fn test_go_home_resolves_home() {
    let rule = resolve("go home please").expect("home must match");
    assert!(matches!(
        rule.action,
        IntentAction::Navigate { path: "/", .. }
    ));
}

#[test]
fn test_what_can_you_do_is_help() {
    let rule = resolve("what can you do").expect("help must match");
    assert_eq!(rule.action, IntentAction::Help, "help never navigates");
}

#[test]
fn test_specific_rows_shadow_generic_listings() {
    for utterance in [
        "show me sizing services",
        "tell me about your weaving services",
        "sizing products please",
        "do you do yarn sizing",
        "fabric weaving options",
    ] {
        let rule = resolve(utterance).expect("a specific row must match");
        assert!(
            rule.name == "sizing" || rule.name == "weaving",
            "'{utterance}' resolved to '{}' instead of a specific service",
            rule.name
        );
    }
}

#[test]
fn test_generic_rows_veto_specific_wording() {
    // Even if the ordering regressed, the veto list keeps the broad rows
    // away from sizing/weaving utterances
    let broad: Vec<_> = rules()
        .iter()
        .filter(|rule| rule.name == "services" || rule.name == "products")
        .collect();
    assert_eq!(broad.len(), 2);
    for rule in broad {
        assert!(!rule.matches("sizing services"));
        assert!(!rule.matches("weaving products"));
    }
}

#[test]
fn test_specific_rows_precede_generic_rows() {
    let names: Vec<&str> = rules().iter().map(|rule| rule.name).collect();
    let position = |name: &str| {
        names
            .iter()
            .position(|candidate| *candidate == name)
            .unwrap_or_else(|| panic!("missing rule '{name}'"))
    };
    assert!(position("sizing") < position("services"));
    assert!(position("weaving") < position("services"));
    assert!(position("sizing") < position("products"));
    assert!(position("weaving") < position("products"));
}

#[test]
fn test_generic_listings_resolve() {
    assert_eq!(target("show me your services"), Some("/services"));
    assert_eq!(target("what products do you sell"), Some("/products"));
}

#[test]
fn test_brand_pages_resolve() {
    assert_eq!(target("how do I save money with you"), Some("/why-us/savings"));
    assert_eq!(
        target("tell me about sustainability"),
        Some("/why-us/sustainability")
    );
    assert_eq!(target("why should I choose you"), Some("/why-us"));
    assert_eq!(target("tell me about the company"), Some("/about"));
}

#[test]
fn test_account_and_order_rows_resolve() {
    assert_eq!(target("take me to the login page"), Some("/login"));
    assert_eq!(target("I want to sign up"), Some("/register"));
    assert_eq!(target("I forgot my password"), Some("/forgot-password"));
    assert_eq!(target("open my orders"), Some("/my-orders"));
    assert_eq!(target("book an appointment"), Some("/booking"));
    assert_eq!(target("any jobs going"), Some("/careers"));
    assert_eq!(target("how do I contact you"), Some("/contact"));
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(target("GO HOME"), Some("/"));
    assert_eq!(target("Open My Orders"), Some("/my-orders"));
}

#[test]
fn test_no_match_falls_through() {
    assert!(resolve("how much does a wedding dress cost").is_none());
    assert!(resolve("tell me a joke").is_none());
    assert!(resolve("").is_none());
}
