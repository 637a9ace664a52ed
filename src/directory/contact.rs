use serde::{Deserialize, Serialize};

/// Defines contact data structure.
///
/// A contact only ever enters the directory as a complete, fully validated
/// triple; partial or invalid data is rejected at submission time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub mobile: String,
    pub email: String,
}

impl Contact {
    /// Return a new contact from the given field values.
    ///
    pub fn new(name: String, mobile: String, email: String) -> Self {
        Contact {
            name,
            mobile,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new(
            "Jane Doe".to_string(),
            "1234567890".to_string(),
            "john.doe3@gmail.com".to_string(),
        );
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.mobile, "1234567890");
        assert_eq!(contact.email, "john.doe3@gmail.com");
    }

    #[test]
    fn test_contact_serde_round_trip() {
        let contact = Contact::new(
            "Jane Doe".to_string(),
            "1234567890".to_string(),
            "john.doe3@gmail.com".to_string(),
        );
        let content = serde_yaml::to_string(&contact).unwrap();
        let parsed: Contact = serde_yaml::from_str(&content).unwrap();
        assert_eq!(parsed, contact);
    }

    #[test]
    fn test_contact_equality() {
        let a = Contact::new(
            "Jane Doe".to_string(),
            "1234567890".to_string(),
            "john.doe3@gmail.com".to_string(),
        );
        let b = a.clone();
        assert_eq!(a, b);
    }
}
