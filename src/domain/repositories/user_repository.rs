// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::user::User;

#[derive(Error, Debug)]
pub enum UserRepositoryError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id
    async fn fetch_user(&self, id: &str) -> Result<User, UserRepositoryError>;
}
