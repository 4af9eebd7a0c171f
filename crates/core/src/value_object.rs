//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, construct a new one. Constructors validate their input and
/// report `DomainError::InvalidArgument` for anything malformed, so a value
/// object that exists is always well-formed.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Phone(String);
///
/// impl ValueObject for Phone {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Declares a validated, trimmed string newtype.
///
/// `$validate` is a `fn(&str) -> DomainResult<()>` run on the trimmed input.
/// Deserialization goes through the same validation.
#[macro_export]
macro_rules! text_value_object {
    ($(#[$meta:meta])* $t:ident, $validate:path) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $t(String);

        impl $t {
            pub fn new(raw: impl AsRef<str>) -> $crate::DomainResult<Self> {
                let trimmed = raw.as_ref().trim();
                $validate(trimmed)?;
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::ValueObject for $t {}

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::convert::TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Rejects blank input with `InvalidArgument`.
pub fn require_non_blank(what: &str, value: &str) -> crate::DomainResult<()> {
    if value.trim().is_empty() {
        return Err(crate::DomainError::invalid_argument(format!(
            "{what} cannot be blank"
        )));
    }
    Ok(())
}
