use std::sync::LazyLock;

use regex::Regex;

use crate::{amount::is_positive_amount, models::Field, models::FormState};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

/// How an input should be presented and what keyboard it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
}

/// Static description of one form input and the rule it must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub validate: fn(&FormState) -> Option<&'static str>,
}

pub static FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        label: "Full Name",
        input_type: InputType::Text,
        placeholder: "Your Name",
        validate: validate_name,
    },
    FieldRule {
        field: Field::Email,
        label: "Email Address",
        input_type: InputType::Email,
        placeholder: "you@example.com",
        validate: validate_email,
    },
    FieldRule {
        field: Field::Phone,
        label: "Mobile Number",
        input_type: InputType::Tel,
        placeholder: "XXXXXXXXXX",
        validate: validate_phone,
    },
    FieldRule {
        field: Field::Amount,
        label: "Donation Amount (INR)",
        input_type: InputType::Number,
        placeholder: "Amount",
        validate: validate_amount,
    },
    FieldRule {
        field: Field::Pan,
        label: "PAN Number",
        input_type: InputType::Text,
        placeholder: "ABCDE1234F",
        validate: validate_pan,
    },
];

/// Rules that apply under the current tax-exemption choice.
///
/// PAN is only collected (and therefore only validated) when the donor
/// asks for an 80G certificate.
pub fn applicable_rules(tax_exemption: bool) -> impl Iterator<Item = &'static FieldRule> {
    FIELD_RULES
        .iter()
        .filter(move |rule| tax_exemption || rule.field != Field::Pan)
}

fn validate_name(form: &FormState) -> Option<&'static str> {
    form.name.trim().is_empty().then_some("Name is required")
}

fn validate_email(form: &FormState) -> Option<&'static str> {
    if form.email.is_empty() {
        return Some("Email is required");
    }
    if !EMAIL_RE.is_match(&form.email) {
        return Some("Email is invalid");
    }
    None
}

fn validate_phone(form: &FormState) -> Option<&'static str> {
    if form.phone.is_empty() {
        return Some("Mobile number is required");
    }
    if !PHONE_RE.is_match(&form.phone) {
        return Some("Mobile number must be 10 digits");
    }
    None
}

fn validate_amount(form: &FormState) -> Option<&'static str> {
    if form.amount.is_empty() {
        return Some("Amount is required");
    }
    match is_positive_amount(&form.amount) {
        Ok(true) => None,
        _ => Some("Amount must be a positive number"),
    }
}

fn validate_pan(form: &FormState) -> Option<&'static str> {
    form.pan
        .is_empty()
        .then_some("PAN Number is required for tax exemption")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(
        field: Field,
        value: &str,
    ) -> Option<&'static str> {
        let mut form = FormState::new();
        form.set(field, value);
        (rule_for(field).validate)(&form)
    }

    fn rule_for(field: Field) -> &'static FieldRule {
        FIELD_RULES.iter().find(|rule| rule.field == field).unwrap()
    }

    #[test]
    fn rules_follow_field_order_with_input_types() {
        let kinds: Vec<(Field, InputType)> =
            FIELD_RULES.iter().map(|r| (r.field, r.input_type)).collect();
        assert_eq!(
            kinds,
            vec![
                (Field::Name, InputType::Text),
                (Field::Email, InputType::Email),
                (Field::Phone, InputType::Tel),
                (Field::Amount, InputType::Number),
                (Field::Pan, InputType::Text),
            ]
        );
    }

    #[test]
    fn applicable_rules_excludes_pan_without_flag() {
        let without: Vec<Field> = applicable_rules(false).map(|r| r.field).collect();
        assert_eq!(
            without,
            vec![Field::Name, Field::Email, Field::Phone, Field::Amount]
        );
        let with: Vec<Field> = applicable_rules(true).map(|r| r.field).collect();
        assert_eq!(with, Field::ALL.to_vec());
    }

    #[test]
    fn name_rejects_whitespace_only() {
        assert_eq!(check(Field::Name, "   "), Some("Name is required"));
        assert_eq!(check(Field::Name, "Ravi"), None);
    }

    #[test]
    fn email_shapes() {
        assert_eq!(check(Field::Email, "a@b.c"), None);
        assert_eq!(check(Field::Email, "abc"), Some("Email is invalid"));
        assert_eq!(check(Field::Email, "a@b"), Some("Email is invalid"));
        assert_eq!(check(Field::Email, ""), Some("Email is required"));
    }

    #[test]
    fn phone_needs_exactly_ten_digits() {
        assert_eq!(check(Field::Phone, "1234567890"), None);
        let bad = Some("Mobile number must be 10 digits");
        assert_eq!(check(Field::Phone, "12345"), bad);
        assert_eq!(check(Field::Phone, "12345678901"), bad);
        assert_eq!(check(Field::Phone, "abcdefghij"), bad);
        assert_eq!(check(Field::Phone, "१२३४५६७८९०"), bad);
        assert_eq!(check(Field::Phone, ""), Some("Mobile number is required"));
    }

    #[test]
    fn amount_must_be_positive_number() {
        assert_eq!(check(Field::Amount, "500"), None);
        assert_eq!(check(Field::Amount, "0.5"), None);
        assert_eq!(check(Field::Amount, ""), Some("Amount is required"));
        let bad = Some("Amount must be a positive number");
        assert_eq!(check(Field::Amount, "0"), bad);
        assert_eq!(check(Field::Amount, "-10"), bad);
        assert_eq!(check(Field::Amount, "ten"), bad);
        assert_eq!(check(Field::Amount, "1e29"), None);
        assert_eq!(check(Field::Amount, "1e-30"), None);
    }

    #[test]
    fn pan_only_checks_presence() {
        assert_eq!(
            check(Field::Pan, ""),
            Some("PAN Number is required for tax exemption")
        );
        assert_eq!(check(Field::Pan, "not-a-pan"), None);
    }
}
