use tracing::debug;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Ordered in-memory contact list. Lookups by phone number scan from the
/// front and resolve to the first match.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn add(&mut self, contact: Contact) {
        debug!(phone = %contact.phone, "adding contact");
        self.data.push(contact);
        debug!(len = self.data.len(), "contact added");
    }

    pub fn find_by_phone_number(&self, phone: &str) -> Option<&Contact> {
        self.data.iter().find(|c| c.has_phone_number(phone))
    }

    fn position_by_phone_number(&self, phone: &str) -> Result<usize, AppError> {
        self.data
            .iter()
            .position(|c| c.has_phone_number(phone))
            .ok_or_else(|| AppError::NotFound(format!("Contact with phone number {phone}")))
    }

    /// Replaces the fields of the first contact with `phone`, keeping its
    /// position, and returns the updated record.
    pub fn edit_by_phone_number(
        &mut self,
        phone: &str,
        updated: Contact,
    ) -> Result<&Contact, AppError> {
        let index = self.position_by_phone_number(phone)?;
        let contact = &mut self.data[index];
        contact.overwrite_with(updated);

        debug!(phone, new_phone = %contact.phone, index, "contact edited");
        Ok(&*contact)
    }

    /// Removes the first contact with `phone` and hands it back.
    pub fn delete_by_phone_number(&mut self, phone: &str) -> Result<Contact, AppError> {
        let index = self.position_by_phone_number(phone)?;
        let removed = self.data.remove(index);

        debug!(phone, index, len = self.data.len(), "contact deleted");
        Ok(removed)
    }

    pub fn list_all(&self) -> ContactListIter<'_> {
        ContactListIter {
            inner: &self.data,
            idx: 0,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Yields `(display_index, contact)` pairs; display indices start at 1.
pub struct ContactListIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for ContactListIter<'a> {
    type Item = (usize, &'a Contact);

    fn next(&mut self) -> Option<Self::Item> {
        let contact = self.inner.get(self.idx)?;
        self.idx += 1;
        Some((self.idx, contact))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len().saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ContactListIter<'_> {}
