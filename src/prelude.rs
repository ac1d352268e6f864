pub use crate::cli::{menu::SEPARATOR, run::run_app};
pub use crate::domain::{
    contact::{Contact, display_contact},
    store::ContactStore,
};
