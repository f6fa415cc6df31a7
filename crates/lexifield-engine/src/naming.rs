//! Local naming rule set
//!
//! Every rule is evaluated independently, so one name can collect several
//! violations. Evaluation is pure and total over any input string.

use lexifield_core::{NamingConventions, RuleViolation, ViolationKind};
use regex::Regex;
use std::sync::LazyLock;

/// Lower camel case: a lowercase head followed by capitalised segments
pub const CAMEL_CASE_PATTERN: &str = r"^[a-z]+([A-Z][a-z0-9]*)*$";

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CAMEL_CASE_PATTERN).expect("camelCase pattern is valid"));

/// Naming conventions checked before any model is consulted
#[derive(Debug, Clone, Default)]
pub struct NamingRuleSet {
    conventions: NamingConventions,
}

impl NamingRuleSet {
    pub fn new(conventions: NamingConventions) -> Self {
        Self { conventions }
    }

    pub fn conventions(&self) -> &NamingConventions {
        &self.conventions
    }

    /// Check a candidate name against every rule, in rule order
    pub fn check(&self, name: &str) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        if !CAMEL_CASE.is_match(name) {
            violations.push(RuleViolation::new(
                ViolationKind::CaseConvention,
                "Field name does not follow camelCase convention.",
            ));
        }

        if name.chars().count() > self.conventions.max_length {
            violations.push(RuleViolation::new(
                ViolationKind::MaxLength,
                format!(
                    "Field name exceeds maximum length of {} characters.",
                    self.conventions.max_length
                ),
            ));
        }

        if self.conventions.is_reserved(name) {
            violations.push(RuleViolation::new(
                ViolationKind::ReservedWord,
                format!("Field name '{}' is a reserved word.", name),
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(name: &str) -> Vec<ViolationKind> {
        NamingRuleSet::default().check(name).into_iter().map(|v| v.kind).collect()
    }

    #[test]
    fn conforming_names_have_no_violations() {
        for name in ["userId", "orderDate", "a", "isActive", "productSkuV2", "addressLine2"] {
            assert!(kinds(name).is_empty(), "{} should pass", name);
        }
    }

    #[test]
    fn case_convention() {
        assert_eq!(kinds("newCustomer_email"), vec![ViolationKind::CaseConvention]);
        assert_eq!(kinds("UserId"), vec![ViolationKind::CaseConvention]);
        assert_eq!(kinds("user-id"), vec![ViolationKind::CaseConvention]);
        assert_eq!(kinds("2fa"), vec![ViolationKind::CaseConvention]);
        assert_eq!(kinds("address2"), vec![ViolationKind::CaseConvention]);
        assert_eq!(kinds(""), vec![ViolationKind::CaseConvention]);
    }

    #[test]
    fn max_length_boundary() {
        let thirty = format!("a{}", "b".repeat(29));
        let thirty_one = format!("a{}", "b".repeat(30));

        assert!(kinds(&thirty).is_empty());
        assert_eq!(kinds(&thirty_one), vec![ViolationKind::MaxLength]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = NamingRuleSet::new(NamingConventions {
            max_length: 5,
            ..NamingConventions::default()
        });

        let violations = rules.check("ééééé");
        assert!(violations.iter().all(|v| v.kind != ViolationKind::MaxLength));
    }

    #[test]
    fn reserved_words_are_case_insensitive() {
        assert_eq!(kinds("id"), vec![ViolationKind::ReservedWord]);
        assert_eq!(kinds("type"), vec![ViolationKind::ReservedWord]);
        assert_eq!(
            kinds("ID"),
            vec![ViolationKind::CaseConvention, ViolationKind::ReservedWord]
        );
        assert_eq!(
            kinds("Object"),
            vec![ViolationKind::CaseConvention, ViolationKind::ReservedWord]
        );
    }

    #[test]
    fn rules_do_not_short_circuit() {
        let long_snake = "this_is_a_very_long_snake_case_field_name";
        assert_eq!(
            kinds(long_snake),
            vec![ViolationKind::CaseConvention, ViolationKind::MaxLength]
        );
    }

    #[test]
    fn messages() {
        let violations = NamingRuleSet::default().check("type");
        assert_eq!(violations[0].message, "Field name 'type' is a reserved word.");

        let violations = NamingRuleSet::default().check(&"a".repeat(31));
        assert_eq!(
            violations[0].message,
            "Field name exceeds maximum length of 30 characters."
        );
    }

    #[test]
    fn check_is_deterministic() {
        let rules = NamingRuleSet::default();
        let long = "x".repeat(40);
        for name in ["userId", "newCustomer_email", "id", "", long.as_str()] {
            assert_eq!(rules.check(name), rules.check(name));
        }
    }

    #[test]
    fn custom_conventions() {
        let rules = NamingRuleSet::new(NamingConventions {
            max_length: 8,
            reserved_words: vec!["status".to_string()],
        });

        let found: Vec<_> = rules.check("status").into_iter().map(|v| v.kind).collect();
        assert_eq!(found, vec![ViolationKind::ReservedWord]);

        let found: Vec<_> = rules.check("customerName").into_iter().map(|v| v.kind).collect();
        assert_eq!(found, vec![ViolationKind::MaxLength]);

        assert!(rules.check("id").is_empty());
    }
}
