// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化遥测系统
///
/// 安装全局 tracing 订阅者，日志级别由 `RUST_LOG` 控制（默认 `info,calcrs=debug`）。
/// 已安装订阅者时重复调用会被忽略。
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,calcrs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
