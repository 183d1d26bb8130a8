mod gender;
mod role;
mod transaction;

pub use self::gender::Gender;
pub use self::role::{Role, RoleFilter, RoleUpdate};
pub use self::transaction::{SortOrder, TransactionMethod};
