pub mod contact;
pub mod list;
pub mod manager;
pub mod search;

pub use contact::Contact;
pub use list::{ContactList, NodeId};
pub use manager::ContactStore;
pub use search::contains_ignore_case;

/// Menu actions offered by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    SearchKeyword,
    SearchExact,
    ListForward,
    ListBackward,
    Exit,
}
