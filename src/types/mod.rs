mod contact;
mod issue;

pub use contact::Contact;
pub use issue::{Category, Issue};
