// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 依赖于领域层的抽象接口，提供基于HTTP的仓库实现
pub mod repositories;
