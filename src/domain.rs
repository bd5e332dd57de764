pub mod contact;
pub mod manager;

pub use contact::{Contact, ContactUpdate};
pub use manager::ContactManager;
