//! Validated contact attributes shared by every person category.

use petcode_core::{DomainError, DomainResult, require_non_blank, text_value_object};

fn validate_name(value: &str) -> DomainResult<()> {
    require_non_blank("name", value)?;
    if !value.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(DomainError::invalid_argument(
            "names should only contain alphanumeric characters and spaces",
        ));
    }
    Ok(())
}

fn validate_phone(value: &str) -> DomainResult<()> {
    if value.len() < 3 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::invalid_argument(
            "phone numbers should only contain digits, and be at least 3 digits long",
        ));
    }
    Ok(())
}

const EMAIL_SPECIAL: &[char] = &['+', '_', '.', '-'];

fn validate_email(value: &str) -> DomainResult<()> {
    let invalid = || {
        DomainError::invalid_argument(format!(
            "emails should be of the format local-part@domain, got {value:?}"
        ))
    };

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_SPECIAL.contains(&c))
        && !local.starts_with(EMAIL_SPECIAL)
        && !local.ends_with(EMAIL_SPECIAL);
    if !local_ok {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    });
    let tld_ok = labels.last().is_some_and(|tld| tld.len() >= 2);
    if !labels_ok || !tld_ok {
        return Err(invalid());
    }
    Ok(())
}

fn validate_address(value: &str) -> DomainResult<()> {
    require_non_blank("address", value)
}

fn validate_location(value: &str) -> DomainResult<()> {
    require_non_blank("location", value)
}

fn validate_tag(value: &str) -> DomainResult<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_alphanumeric()) {
        return Err(DomainError::invalid_argument("tag names should be alphanumeric"));
    }
    Ok(())
}

text_value_object!(
    /// A person's (or pet's) name: alphanumeric words separated by spaces.
    Name,
    validate_name
);

text_value_object!(
    /// Phone number: digits only, at least 3 of them.
    Phone,
    validate_phone
);

text_value_object!(
    /// Email address of the form `local-part@domain`.
    Email,
    validate_email
);

text_value_object!(
    /// Free-form postal address.
    Address,
    validate_address
);

text_value_object!(
    /// Country or city the person operates from.
    Location,
    validate_location
);

text_value_object!(Tag, validate_tag);

impl Name {
    /// Whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}
