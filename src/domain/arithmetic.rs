// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 两数相加
///
/// 返回精确的浮点和，不做舍入也不做校验
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}
