// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::config::settings::CalculatorSettings;

/// 计算器错误类型
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// 配置无效
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// 计算器选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorOptions {
    /// 舍入时保留的小数位数
    pub precision: u32,
}

/// 计算器
///
/// 持有构造时确定的精度，`add` 将两数之和舍入到该精度。
/// 构造后不可变，可以在线程间自由复制和共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    options: CalculatorOptions,
}

impl Calculator {
    /// 创建计算器
    ///
    /// 原样保存选项，不做校验
    pub fn new(options: CalculatorOptions) -> Self {
        Self { options }
    }

    /// 从配置创建计算器
    ///
    /// # 参数
    ///
    /// * `settings` - 计算器配置
    ///
    /// # 返回值
    ///
    /// * `Ok(Calculator)` - 精度在允许范围内
    /// * `Err(CalculatorError)` - 精度超出 f64 能表示的十进制位数
    pub fn from_settings(settings: &CalculatorSettings) -> Result<Self, CalculatorError> {
        settings
            .validate()
            .map_err(|e| CalculatorError::InvalidConfiguration(e.to_string()))?;

        Ok(Self::new(CalculatorOptions {
            precision: settings.precision,
        }))
    }

    /// 配置的精度
    pub fn precision(&self) -> u32 {
        self.options.precision
    }

    /// 两数相加并舍入到配置的精度
    ///
    /// 中点值远离零舍入。NaN 和无穷大原样返回。
    ///
    /// # 参数
    ///
    /// * `x` - 第一个加数
    /// * `y` - 第二个加数
    ///
    /// # 返回值
    ///
    /// 舍入后的和
    pub fn add(&self, x: f64, y: f64) -> f64 {
        let sum = x + y;
        let rounded = round_to_precision(sum, self.options.precision);
        debug!(x, y, precision = self.options.precision, rounded, "calculator addition");
        rounded
    }
}

fn round_to_precision(value: f64, precision: u32) -> f64 {
    // Rounds the exact stored value, not a rescaled approximation of it
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    if precision >= exact.scale() {
        return value;
    }

    let rounded = exact.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    // std parsing is correctly rounded, so the result is the f64 nearest the decimal
    rounded.to_string().parse().unwrap_or(value)
}
