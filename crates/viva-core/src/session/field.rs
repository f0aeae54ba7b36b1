//! Profile field types.

use serde::{Deserialize, Serialize};

/// A candidate profile attribute the service may fail to extract from a
/// resume and request manually.
///
/// The wire protocol names these as plain strings; anything outside this
/// set is treated as a malformed payload at the gateway boundary rather
/// than carried around untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

impl ProfileField {
    /// The wire name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
        }
    }

    /// Parses a wire field name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ProfileField::Name),
            "email" => Some(ProfileField::Email),
            "phone" => Some(ProfileField::Phone),
            _ => None,
        }
    }

    /// Human-readable prompt label for interactive collection.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_wire_names() {
        for field in [ProfileField::Name, ProfileField::Email, ProfileField::Phone] {
            assert_eq!(ProfileField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ProfileField::parse("address"), None);
        assert_eq!(ProfileField::parse("Name"), None);
        assert_eq!(ProfileField::parse(""), None);
    }
}
