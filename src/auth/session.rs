use crate::error::{HunterError, Result};
use crate::models::User;
use crate::storage::{load_json, save_json, SharedStorage, USER_KEY};
use tracing::{info, warn};

/// The signed-in user for this device, persisted across restarts
pub struct AuthSession {
    storage: SharedStorage,
    user: Option<User>,
}

impl AuthSession {
    /// Pick up whoever was signed in last time.
    /// An unreadable stored user is dropped rather than failing startup.
    pub fn restore(storage: SharedStorage) -> Self {
        let user = match load_json::<User, _>(storage.as_ref(), USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!("Discarding stored session: {:#}", e);
                None
            }
        };

        if let Some(user) = &user {
            info!("🔑 Restored session for {}", user.email);
        }

        Self { storage, user }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) -> Result<()> {
        save_json(self.storage.as_ref(), USER_KEY, &user).map_err(HunterError::storage)?;
        info!("🔑 Signed in as {}", user.email);
        self.user = Some(user);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.storage.remove(USER_KEY).map_err(HunterError::storage)?;
        if let Some(user) = self.user.take() {
            info!("👋 Signed out {}", user.email);
        }
        Ok(())
    }
}
