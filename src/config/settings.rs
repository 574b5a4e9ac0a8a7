// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// f64 能可靠保留的十进制位数
pub const MAX_PRECISION: u32 = 15;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 计算器配置
    pub calculator: CalculatorSettings,
    /// 用户服务配置
    pub users: UserServiceSettings,
}

/// 计算器配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculatorSettings {
    /// 保留的小数位数
    #[validate(range(max = MAX_PRECISION))]
    pub precision: u32,
}

/// 用户服务配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserServiceSettings {
    /// 用户服务基础地址
    #[validate(url)]
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `CALCRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CALCRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 从指定文件加载配置
    ///
    /// 只叠加默认值和该文件，不读取环境变量
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("calculator.precision", 2)?
            .set_default("users.base_url", "http://localhost:4000")?
            .set_default("users.timeout_secs", 10)
    }
}
