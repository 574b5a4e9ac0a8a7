// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理计算器精度和用户服务地址等配置项
pub mod config;

/// 领域模块
///
/// 包含加法运算、计算器、用户模型和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供用户服务的HTTP实现
pub mod infrastructure;

/// 工具模块
///
/// 提供遥测初始化和JSON路径查询
pub mod utils;

pub use domain::arithmetic::add;
pub use domain::calculator::{Calculator, CalculatorError, CalculatorOptions};
