use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    static ref CPF_REGEX: Regex = Regex::new(r"^\d{11}$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^\d{11}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .unwrap();
}

pub const CPF_MESSAGE: &str = "CPF should contain exactly 11 digits.";
pub const PHONE_MESSAGE: &str = "Phone number should contain exactly 11 digits.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

pub fn is_valid_cpf(cpf: &str) -> bool {
    CPF_REGEX.is_match(cpf)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Field-level validation failures, keyed by field name. Serializes to the
/// per-field error map returned as a 400 response body.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    #[serde(flatten)]
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<'s> utoipa::ToSchema<'s> for ValidationErrors {
    fn schema() -> (
        &'s str,
        utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
    ) {
        use utoipa::openapi::{ArrayBuilder, ObjectBuilder, RefOr, Schema, SchemaType};

        (
            "ValidationErrors",
            ObjectBuilder::new()
                .description(Some("Map of field name to a list of error messages"))
                .additional_properties(Some(RefOr::T(Schema::Array(
                    ArrayBuilder::new()
                        .items(ObjectBuilder::new().schema_type(SchemaType::String))
                        .build(),
                ))))
                .into(),
        )
    }
}

/// Pulls a required string out of a create payload, recording the DRF-style
/// missing/blank message when it is absent.
pub fn required_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, REQUIRED_MESSAGE);
            None
        }
        Some(value) if value.is_empty() => {
            errors.add(field, BLANK_MESSAGE);
            None
        }
        Some(value) => Some(value),
    }
}

/// Checks a monetary amount against `NUMERIC(10, 2)` and normalizes it to a
/// scale of two. Trailing zeros do not count against the decimal limit.
pub fn checked_money(errors: &mut ValidationErrors, field: &str, value: Decimal) -> Option<Decimal> {
    let normalized = value.normalize();
    let mut ok = true;

    if normalized.scale() > 2 {
        errors.add(field, "Ensure that there are no more than 2 decimal places.");
        ok = false;
    }
    let digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    if digits.saturating_sub(normalized.scale()) > 8 {
        errors.add(field, "Ensure that there are no more than 10 digits in total.");
        ok = false;
    }

    if !ok {
        return None;
    }
    let mut value = value;
    value.rescale(2);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_is_valid_cpf() {
        let cases: Vec<(&str, bool)> = vec![
            ("00011122233", true),
            ("99988877766", true),
            ("0001112223", false),
            ("000111222334", false),
            ("0001112223a", false),
            ("000.111.222-33", false),
            ("", false),
        ];

        for (cpf, expected) in cases {
            assert_eq!((cpf, is_valid_cpf(cpf)), (cpf, expected));
        }
    }

    #[test]
    fn test_is_valid_phone() {
        let cases: Vec<(&str, bool)> = vec![
            ("11999990000", true),
            ("1199999000", false),
            ("119999900001", false),
            ("(11)99999-00", false),
        ];

        for (phone, expected) in cases {
            assert_eq!((phone, is_valid_phone(phone)), (phone, expected));
        }
    }

    #[test]
    fn test_is_valid_email() {
        let cases: Vec<(&str, bool)> = vec![
            ("test@test.com", true),
            ("test321+test@test.com", true),
            ("test@test.test.test", true),
            ("test.com", false),
            ("test@test", false),
            ("test@@test.com", false),
        ];

        for (email, expected) in cases {
            assert_eq!((email, is_valid_email(email)), (email, expected));
        }
    }

    #[test]
    fn test_required_string() {
        let mut errors = ValidationErrors::default();
        assert_eq!(
            required_string(&mut errors, "name", Some("Buddy".to_string())),
            Some("Buddy".to_string())
        );
        assert!(errors.is_empty());

        assert_eq!(required_string(&mut errors, "name", None), None);
        assert_eq!(errors.messages("name"), [REQUIRED_MESSAGE]);

        let mut errors = ValidationErrors::default();
        assert_eq!(required_string(&mut errors, "name", Some(String::new())), None);
        assert_eq!(errors.messages("name"), [BLANK_MESSAGE]);
    }

    #[test]
    fn test_checked_money_normalizes_scale() {
        let mut errors = ValidationErrors::default();
        let value = checked_money(&mut errors, "price", Decimal::from_str("80").unwrap());
        assert_eq!(value, Some(Decimal::from_str("80.00").unwrap()));
        assert_eq!(value.unwrap().to_string(), "80.00");
        assert!(errors.is_empty());

        // trailing zeros beyond two places are tolerated
        let value = checked_money(&mut errors, "price", Decimal::from_str("80.1000").unwrap());
        assert_eq!(value.map(|v| v.to_string()), Some("80.10".to_string()));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_checked_money_rejects_excess_precision() {
        let mut errors = ValidationErrors::default();
        assert_eq!(
            checked_money(&mut errors, "price", Decimal::from_str("80.123").unwrap()),
            None
        );
        assert_eq!(
            errors.messages("price"),
            ["Ensure that there are no more than 2 decimal places."]
        );

        let mut errors = ValidationErrors::default();
        assert_eq!(
            checked_money(&mut errors, "total", Decimal::from_str("123456789.01").unwrap()),
            None
        );
        assert_eq!(
            errors.messages("total"),
            ["Ensure that there are no more than 10 digits in total."]
        );
    }

    #[test]
    fn test_validation_errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("cpf", CPF_MESSAGE);
        errors.add("cpf", "owner with this cpf already exists.");
        errors.add("email", EMAIL_MESSAGE);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cpf": [CPF_MESSAGE, "owner with this cpf already exists."],
                "email": [EMAIL_MESSAGE],
            })
        );
    }
}
