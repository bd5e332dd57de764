use crate::errors::AppError;
use crate::validation::validate_phone;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    /// Lookup key for update and delete. Not unique.
    pub name: String,
    /// Stored as typed, never validated or joined onto `phone`.
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Replacement values for an existing contact. `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Contact {
    pub fn new(
        name: String,
        country_code: String,
        phone: String,
        email: String,
        address: String,
    ) -> Self {
        Contact {
            name,
            country_code,
            phone,
            email,
            address,
        }
    }

    pub fn validate_number(&self) -> Result<bool, AppError> {
        validate_phone(&self.phone)
    }

    /// Case-insensitive match on the name, or a plain substring match on the phone.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }

    /// Overwrites every field `update` provides. The phone is checked first so a
    /// rejected update leaves the contact untouched.
    pub fn apply(&mut self, update: ContactUpdate) -> Result<(), AppError> {
        if let Some(phone) = &update.phone {
            if !validate_phone(phone)? {
                return Err(AppError::InvalidPhone(phone.clone()));
            }
        }

        if let Some(country_code) = update.country_code {
            self.country_code = country_code;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }
}

impl ContactUpdate {
    /// Builds an update from raw prompt answers, where a blank answer means "keep".
    pub fn from_answers(country_code: &str, phone: &str, email: &str, address: &str) -> Self {
        fn keep_if_blank(answer: &str) -> Option<String> {
            if answer.is_empty() {
                None
            } else {
                Some(answer.to_string())
            }
        }

        ContactUpdate {
            country_code: keep_if_blank(country_code),
            phone: keep_if_blank(phone),
            email: keep_if_blank(email),
            address: keep_if_blank(address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country_code.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }
}
