pub use crate::cli::{
    command::{Cli, MenuChoice},
    run::{init_tracing, run_app, run_menu},
};
pub use crate::domain::{
    contact::{self, Contact, ContactUpdate},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::store::{self, memory::MemStore};
pub use crate::validation::validate_phone;
