// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::UserServiceSettings;
use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::{UserRepository, UserRepositoryError};

/// 用户仓库的HTTP实现
///
/// 通过 `GET {base_url}/users/{id}` 获取用户
pub struct HttpUserRepository {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpUserRepository {
    /// 创建新的用户仓库
    ///
    /// # 参数
    ///
    /// * `base_url` - 用户服务基础地址
    /// * `timeout` - 请求超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(HttpUserRepository)` - 创建成功
    /// * `Err(UserRepositoryError)` - 地址无效或客户端构建失败
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UserRepositoryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| UserRepositoryError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UserRepositoryError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    /// 从配置创建用户仓库
    pub fn from_settings(settings: &UserServiceSettings) -> Result<Self, UserRepositoryError> {
        Self::new(&settings.base_url, Duration::from_secs(settings.timeout_secs))
    }

    /// 构建用户资源地址
    ///
    /// `id` 作为单个路径段进行编码
    pub fn user_url(&self, id: &str) -> Result<Url, UserRepositoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UserRepositoryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["users", id]);
        Ok(url)
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn fetch_user(&self, id: &str) -> Result<User, UserRepositoryError> {
        let url = self.user_url(id)?;
        debug!(%url, "fetching user");

        let response = self.client.get(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json::<User>().await?),
            StatusCode::NOT_FOUND => Err(UserRepositoryError::NotFound(id.to_string())),
            status => {
                warn!(status = status.as_u16(), user_id = id, "user service returned error");
                Err(UserRepositoryError::UnexpectedStatus(status.as_u16()))
            }
        }
    }
}
