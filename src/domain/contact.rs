/// A single address-book entry. The phone number is the lookup key but is
/// not required to be unique.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Contact {
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

/// Tagged view of a contact, used to pick its display form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ContactKind<'a> {
    PhoneOnly,
    Named { first: &'a str, last: &'a str },
}

impl Contact {
    pub fn new(phone: String, first_name: String, last_name: String) -> Self {
        Contact {
            phone,
            first_name,
            last_name,
        }
    }

    pub fn phone_only(phone: impl Into<String>) -> Self {
        Contact {
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn named(
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Contact::new(phone.into(), first_name.into(), last_name.into())
    }

    pub fn kind(&self) -> ContactKind<'_> {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            ContactKind::PhoneOnly
        } else {
            ContactKind::Named {
                first: &self.first_name,
                last: &self.last_name,
            }
        }
    }

    pub fn has_phone_number(&self, phone: &str) -> bool {
        self.phone == phone
    }

    /// Overwrites every field with the ones from `updated`.
    pub fn overwrite_with(&mut self, updated: Contact) {
        let Contact {
            phone,
            first_name,
            last_name,
        } = updated;

        self.phone = phone;
        self.first_name = first_name;
        self.last_name = last_name;
    }
}

/// Renders a listed contact. `display_index` is the 1-based position in the
/// store and is only shown for named contacts.
pub fn display_contact(display_index: usize, contact: &Contact) -> String {
    match contact.kind() {
        ContactKind::Named { first, last } => format!(
            "Contact {display_index}: {first} {last}\n\
            Phone Number: {}",
            contact.phone
        ),
        ContactKind::PhoneOnly => format!("Phone Number: {}", contact.phone),
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn contact_without_names_is_phone_only() {
        let contact = Contact::phone_only("08123456789");

        assert_eq!(contact.kind(), ContactKind::PhoneOnly);
        assert_eq!(display_contact(3, &contact), "Phone Number: 08123456789");
    }

    #[test]
    fn named_contact_shows_index_and_names() {
        let contact = Contact::named("555", "Ann", "Lee");

        assert_eq!(
            contact.kind(),
            ContactKind::Named {
                first: "Ann",
                last: "Lee"
            }
        );
        assert_eq!(
            display_contact(1, &contact),
            "Contact 1: Ann Lee\nPhone Number: 555"
        );
    }

    #[test]
    fn single_name_still_counts_as_named() {
        let contact = Contact::named("555", "", "Lee");

        assert!(matches!(contact.kind(), ContactKind::Named { .. }));
        assert_eq!(
            display_contact(2, &contact),
            "Contact 2:  Lee\nPhone Number: 555"
        );
    }

    #[test]
    fn overwrite_replaces_all_fields() {
        let mut contact = Contact::named("555", "Ann", "Lee");
        contact.overwrite_with(Contact::phone_only("777"));

        assert_eq!(contact, Contact::phone_only("777"));
        assert!(contact.has_phone_number("777"));
        assert!(!contact.has_phone_number("555"));
    }
}
