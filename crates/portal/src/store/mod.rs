mod account;
mod alert;
mod directory;
mod resource;
mod session;

pub use self::account::{AccountStore, SchoolStore};
pub use self::alert::{Alert, AlertStore, Severity};
pub use self::directory::{DirectoryState, NO_CHANGES_MESSAGE, UserDirectoryStore};
pub use self::resource::{Mutation, Resource};
pub use self::session::SessionStore;
