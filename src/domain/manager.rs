use tracing::{debug, info};

use crate::domain::contact::{Contact, ContactUpdate};
use crate::errors::AppError;
use crate::store::memory::MemStore;

/// The address book. Every lookup is a linear scan over insertion order.
#[derive(Debug, Default)]
pub struct ContactManager {
    pub mem: MemStore,
}

impl ContactManager {
    pub fn new() -> Self {
        Self {
            mem: MemStore::new(),
        }
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<&Contact, AppError> {
        if !contact.validate_number()? {
            debug!(name = %contact.name, phone = %contact.phone, "rejected contact with invalid phone");
            return Err(AppError::InvalidPhone(contact.phone));
        }

        info!(name = %contact.name, "contact added");
        Ok(self.mem.push(contact))
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem.data
    }

    /// All contacts whose name contains `term` ignoring case, or whose phone
    /// contains it verbatim, in store order.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let results: Vec<&Contact> = self.mem.iter().filter(|c| c.matches(term)).collect();
        debug!(term, hits = results.len(), "search");
        results
    }

    /// Applies `update` to the first contact named exactly `name`.
    pub fn update_contact(&mut self, name: &str, update: ContactUpdate) -> Result<&Contact, AppError> {
        if update.is_empty() {
            debug!(name, "update carries no new values");
        }

        let contact = self
            .mem
            .find_by_name_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;
        contact.apply(update)?;

        info!(name, "contact updated");
        Ok(&*contact)
    }

    /// Removes the first contact named exactly `name`.
    pub fn delete_contact(&mut self, name: &str) -> Result<Contact, AppError> {
        let removed = self
            .mem
            .position_by_name(name)
            .and_then(|index| self.mem.remove(index))
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        info!(name, "contact deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }
}
