use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::DomainSuffix;

pub const AUTO_SWITCH_PROFILE: &str = "+auto switch";
pub const PROXY_PROFILE: &str = "proxy";

fn rule_pattern(rule: &Value) -> Option<&str> {
    rule.get("condition")?.get("pattern")?.as_str()
}

fn rule_profile(rule: &Value) -> Option<&str> {
    rule.get("profileName")?.as_str()
}

/// Collects the `*.` wildcard patterns routed to the proxy profile in the
/// auto switch rules. A document without the profile or its rules yields an
/// empty set.
pub fn extract_proxy_domains(config: &Value) -> BTreeSet<DomainSuffix> {
    let mut domains = BTreeSet::new();

    let Some(auto_switch) = config.get(AUTO_SWITCH_PROFILE) else {
        log::warn!("'{AUTO_SWITCH_PROFILE}' profile not found in configuration");
        return domains;
    };

    let Some(rules) = auto_switch.get("rules").and_then(Value::as_array) else {
        log::warn!("No rules found in '{AUTO_SWITCH_PROFILE}' profile");
        return domains;
    };

    for rule in rules {
        if rule_profile(rule) != Some(PROXY_PROFILE) {
            continue;
        }

        let Some(domain) = rule_pattern(rule).and_then(DomainSuffix::from_wildcard) else {
            continue;
        };

        if !domain.reads_back() {
            log::warn!("Skipping domain {domain:?}: line breaks or surrounding whitespace");
            continue;
        }

        if !domains.contains(&domain) {
            log::info!("Found domain: {domain}");
            domains.insert(domain);
        }
    }

    domains
}
