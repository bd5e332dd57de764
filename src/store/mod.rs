pub mod memory;

use crate::domain::contact::Contact;
