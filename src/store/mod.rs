use crate::system::Lang;
use crate::system::SystemInfo;
use crate::user::User;
use crate::user::UserId;

pub mod memory;

/// Errors surfaced by user creation. Lookup, update and delete treat a
/// missing record as a silent no-op instead of an error.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Username must be at least 8 characters")]
    UsernameTooShort,
    #[error("Password does not meet the strength requirements")]
    PasswordTooWeak,
    #[error("Username already exists")]
    UsernameAlreadyExists,
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Storage contract for the user database: lifecycle, system metadata,
/// and user CRUD. Consumed by whatever API layer sits above the store.
#[allow(async_fn_in_trait)]
pub trait Database: Send + Sync {
    /// Initialize the system metadata slot to the deployment default.
    /// Safe to call again; it always resets to the same value.
    async fn connect(&self);

    /// Drop the metadata and every user. A hard reset, not a soft one.
    async fn disconnect(&self);

    async fn get_system(&self) -> Option<SystemInfo>;

    /// Language from the system metadata, or [`Lang::En`] when disconnected.
    async fn get_lang(&self) -> Lang;

    /// All users in insertion order.
    async fn get_users(&self) -> Vec<User>;

    async fn get_user(&self, id: UserId) -> Option<User>;

    /// Validate and append a new user, returning the stored record. The
    /// first user ever created becomes the admin; everyone after is a
    /// client. Validation runs before any mutation, so a failed create
    /// leaves the store untouched.
    async fn new_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, DatabaseError>;

    /// Replace the stored record matching `user.id`. Unknown ids are ignored.
    async fn update_user(&self, user: User);

    /// Remove the record with the given id, keeping the rest in order.
    /// Unknown ids are ignored.
    async fn delete_user(&self, id: UserId);
}
