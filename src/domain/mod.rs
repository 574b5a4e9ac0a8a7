// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 加法运算（arithmetic）：无状态的两数相加
/// - 计算器（calculator）：按配置精度对和进行舍入
/// - 领域模型（models）：用户和项目等数据结构
/// - 仓库接口（repositories）：用户数据获取的抽象接口
pub mod arithmetic;
pub mod calculator;
pub mod models;
pub mod repositories;
