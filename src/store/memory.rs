use super::Database;
use super::DatabaseError;
use crate::password::hash_password;
use crate::password::is_password_strong;
use crate::system::Lang;
use crate::system::SystemInfo;
use crate::user::Role;
use crate::user::User;
use crate::user::UserId;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

struct StoreData {
    system: Option<SystemInfo>,
    users: Vec<User>,
    /// Set once the first user is created, so deleting that user does not
    /// mint a second admin. Cleared by `disconnect`.
    bootstrapped: bool,
}

impl StoreData {
    fn new() -> Self {
        Self {
            system: None,
            users: Vec::new(),
            bootstrapped: false,
        }
    }
}

/// In-memory database holding users in insertion order behind one mutex,
/// so each operation's check-then-act sequence is atomic.
#[derive(Clone)]
pub struct MemoryDatabase {
    data: Arc<Mutex<StoreData>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(StoreData::new())),
        }
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for MemoryDatabase {
    async fn connect(&self) {
        let mut data = self.data.lock().await;
        data.system = Some(SystemInfo::default());
        debug!("connection done");
    }

    async fn disconnect(&self) {
        let mut data = self.data.lock().await;
        *data = StoreData::new();
        debug!("disconnect done");
    }

    async fn get_system(&self) -> Option<SystemInfo> {
        debug!("get system");
        self.data.lock().await.system.clone()
    }

    async fn get_lang(&self) -> Lang {
        let data = self.data.lock().await;
        data.system.as_ref().map(|s| s.lang).unwrap_or(Lang::En)
    }

    async fn get_users(&self) -> Vec<User> {
        self.data.lock().await.users.clone()
    }

    async fn get_user(&self, id: UserId) -> Option<User> {
        debug!(%id, "get user");
        let data = self.data.lock().await;
        data.users.iter().find(|user| user.id == id).cloned()
    }

    async fn new_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, DatabaseError> {
        debug!(username, "new user");

        if username.chars().count() < 8 {
            return Err(DatabaseError::UsernameTooShort);
        }

        if !is_password_strong(password) {
            return Err(DatabaseError::PasswordTooWeak);
        }

        let mut data = self.data.lock().await;

        if data.users.iter().any(|user| user.username == username) {
            return Err(DatabaseError::UsernameAlreadyExists);
        }

        let now = Utc::now();
        let role = if data.bootstrapped {
            Role::Client
        } else {
            Role::Admin
        };

        let user = User {
            id: UserId::new_v4(),
            username: username.to_string(),
            password: hash_password(password)?,
            role,
            enabled: true,
            created_at: now,
            updated_at: now,
        };

        data.bootstrapped = true;
        data.users.push(user.clone());

        Ok(user)
    }

    async fn update_user(&self, user: User) {
        let mut data = self.data.lock().await;
        if let Some(idx) = data.users.iter().position(|u| u.id == user.id) {
            debug!(id = %user.id, "update user");
            data.users[idx] = user;
        }
    }

    async fn delete_user(&self, id: UserId) {
        debug!(%id, "delete user");
        let mut data = self.data.lock().await;
        if let Some(idx) = data.users.iter().position(|user| user.id == id) {
            data.users.remove(idx);
        }
    }
}
