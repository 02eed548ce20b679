use std::fmt;

/// A single name/phone entry.
///
/// Contacts are never mutated once created, so the fields are only exposed
/// through accessors.
#[derive(Debug)]
pub struct Contact {
    name: String,
    phone: String,
}

impl Contact {
    /// Creates a contact, trimming surrounding whitespace from both fields.
    pub fn new(name: &str, phone: &str) -> Self {
        Contact {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Key used by the name index.
    pub fn index_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.phone)
    }
}
