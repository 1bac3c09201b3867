//! Field validation
//!
//! Each check is independent and reports at most one violation, so a
//! submission attempt collects every broken rule at once instead of
//! stopping at the first.

use jiff::civil::Date;
use smallvec::SmallVec;

/// A checkout form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Contact email address.
    Email,
    /// Delivery first name.
    FirstName,
    /// Delivery last name.
    LastName,
    /// Delivery street address.
    Address,
    /// Delivery city.
    City,
    /// Delivery state.
    State,
    /// Delivery zip code.
    ZipCode,
    /// Delivery contact phone.
    Phone,
    /// Card number (card payment path only).
    CardNumber,
    /// Cardholder name (card payment path only).
    NameOnCard,
    /// Card expiry in MM/YY (card payment path only).
    ExpiryDate,
    /// Card security code (card payment path only).
    Cvv,
}

impl Field {
    /// Wire name of the field, as rendered in error payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zip_code",
            Self::Phone => "phone",
            Self::CardNumber => "card_number",
            Self::NameOnCard => "name_on_card",
            Self::ExpiryDate => "expiry_date",
            Self::Cvv => "cvv",
        }
    }
}

/// Every field violation collected from one submission attempt, in form
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: SmallVec<[(Field, &'static str); 4]>,
}

impl FieldErrors {
    pub(crate) fn record(&mut self, field: Field, violation: Option<&'static str>) {
        if let Some(message) = violation {
            self.errors.push((field, message));
        }
    }

    /// Check if no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(failed, _)| *failed == field)
            .map(|(_, message)| *message)
    }

    /// Iterate over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

pub(crate) fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub(crate) fn check_required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

pub(crate) fn check_email(value: &str) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Some("Email is required");
    }

    if !email_shape_ok(value) {
        return Some("Please enter a valid email address (e.g., user@example.com)");
    }

    None
}

// local@domain.tld with a 2+ letter tld
fn email_shape_ok(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c))
    {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

pub(crate) fn check_zip_code(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Zip code is required");
    }

    if digits_of(value).len() != 5 {
        return Some("Zip code must be exactly 5 digits");
    }

    None
}

pub(crate) fn check_phone(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Phone number is required");
    }

    if digits_of(value).len() != 10 {
        return Some("Phone number must be exactly 10 digits");
    }

    None
}

const CARD_START_DIGITS: [char; 5] = ['4', '2', '5', '3', '6'];

pub(crate) fn check_card_number(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Card number is required");
    }

    let digits = digits_of(value);
    let starts_ok = digits
        .chars()
        .next()
        .is_some_and(|first| CARD_START_DIGITS.contains(&first));

    if digits.len() != 16 || !starts_ok {
        return Some("Credit card number must be 16 digits long, start with 4, 2, 5, 3, or 6");
    }

    None
}

pub(crate) fn check_expiry_date(value: &str, today: Date) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Expiry date is required");
    }

    if !expiry_in_future(value.trim(), today) {
        return Some("Credit card expiry date must be in the future");
    }

    None
}

// MM/YY against the current month; two-digit years compare without a
// century window, matching the storefront the customers already use.
fn expiry_in_future(value: &str, today: Date) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };

    let Ok(month) = month.trim().parse::<i8>() else {
        return false;
    };

    let Ok(year) = year.trim().parse::<i16>() else {
        return false;
    };

    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = today.year() % 100;
    let current_month = today.month();

    year > current_year || (year == current_year && month >= current_month)
}

pub(crate) fn check_cvv(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("CVV is required");
    }

    if digits_of(value).len() != 3 {
        return Some("Security code must be exactly 3 digits");
    }

    None
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn email_accepts_standard_shape() {
        assert_eq!(check_email("user@example.com"), None);
        assert_eq!(check_email("  first.last+tag@sub.example.co  "), None);
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(check_email("").is_some());
        assert!(check_email("no-at-sign.example.com").is_some());
        assert!(check_email("user@nodot").is_some());
        assert!(check_email("user@example.c").is_some());
        assert!(check_email("user@example.c0m").is_some());
    }

    #[test]
    fn zip_code_requires_exactly_five_digits() {
        assert_eq!(
            check_zip_code("1234"),
            Some("Zip code must be exactly 5 digits")
        );
        assert_eq!(check_zip_code("12345"), None);
        assert_eq!(check_zip_code("12345-"), None);
        assert!(check_zip_code("123456").is_some());
    }

    #[test]
    fn phone_requires_exactly_ten_digits_after_stripping() {
        assert_eq!(check_phone("(555) 123-4567"), None);
        assert!(check_phone("555-1234").is_some());
        assert_eq!(check_phone(""), Some("Phone number is required"));
    }

    #[test]
    fn card_number_accepts_sixteen_digits_with_known_start() {
        assert_eq!(check_card_number("4123 5678 9012 3456"), None);
        assert_eq!(check_card_number("2123567890123456"), None);
    }

    #[test]
    fn card_number_rejects_bad_start_digit() {
        assert_eq!(
            check_card_number("1123567890123456"),
            Some("Credit card number must be 16 digits long, start with 4, 2, 5, 3, or 6")
        );
    }

    #[test]
    fn card_number_rejects_wrong_length() {
        assert!(check_card_number("4123 5678 9012").is_some());
        assert!(check_card_number("41235678901234567").is_some());
    }

    #[test]
    fn expiry_rejects_past_months_and_accepts_future() -> TestResult {
        let today = Date::new(2026, 8, 5)?;

        assert_eq!(
            check_expiry_date("01/20", today),
            Some("Credit card expiry date must be in the future")
        );
        assert_eq!(check_expiry_date("09/26", today), None);
        assert_eq!(check_expiry_date("01/27", today), None);

        Ok(())
    }

    #[test]
    fn expiry_accepts_the_current_month() -> TestResult {
        let today = Date::new(2026, 8, 5)?;

        assert_eq!(check_expiry_date("08/26", today), None);
        assert!(check_expiry_date("07/26", today).is_some());

        Ok(())
    }

    #[test]
    fn expiry_rejects_malformed_input() -> TestResult {
        let today = Date::new(2026, 8, 5)?;

        assert!(check_expiry_date("0826", today).is_some());
        assert!(check_expiry_date("13/30", today).is_some());
        assert!(check_expiry_date("00/30", today).is_some());
        assert!(check_expiry_date("aa/bb", today).is_some());
        assert_eq!(
            check_expiry_date("", today),
            Some("Expiry date is required")
        );

        Ok(())
    }

    #[test]
    fn cvv_requires_exactly_three_digits() {
        assert_eq!(check_cvv("123"), None);
        assert!(check_cvv("12").is_some());
        assert!(check_cvv("1234").is_some());
        assert_eq!(check_cvv(""), Some("CVV is required"));
    }

    #[test]
    fn field_errors_preserve_form_order() {
        let mut errors = FieldErrors::default();

        errors.record(Field::Email, Some("Email is required"));
        errors.record(Field::ZipCode, None);
        errors.record(Field::Phone, Some("Phone number is required"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_for(Field::Email), Some("Email is required"));
        assert_eq!(errors.message_for(Field::ZipCode), None);

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();

        assert_eq!(fields, vec![Field::Email, Field::Phone]);
    }
}
