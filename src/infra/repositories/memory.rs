//! In-memory user repository.
//!
//! Backs tests and local experiments without a database. All state sits
//! behind one write lock, so the email check and the insert in `save` are
//! atomic with respect to each other.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult};

#[derive(Default)]
struct MemoryState {
    users: HashMap<UserId, User>,
    email_index: HashMap<String, UserId>,
    last_id: UserId,
}

/// Thread-safe in-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    async fn save(&self, new_user: NewUser) -> AppResult<User> {
        let mut state = self.state.write().await;

        if state.email_index.contains_key(&new_user.email) {
            return Err(AppError::conflict("email"));
        }

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("User id space exhausted"))?;
        state.last_id = id;

        let user = User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };

        state.email_index.insert(user.email.clone(), id);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
