//! In-memory user database: connect/disconnect lifecycle, system metadata,
//! and user CRUD behind the [`Database`] trait.

pub mod password;
pub mod store;
pub mod system;
pub mod user;

pub use store::Database;
pub use store::DatabaseError;
pub use store::memory::MemoryDatabase;
pub use system::Lang;
pub use system::SystemInfo;
pub use user::Role;
pub use user::User;
pub use user::UserId;
