//! 数值类型
//!
//! 纯整数保持 i64 精确运算；一旦有前导小数（如 "3.5萬"）参与，
//! 结果按 f64 计算，精度即原生双精度浮点。

use std::fmt;
use std::ops::{Add, Mul};

/// 解析结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumeralValue {
    Integer(i64),
    Decimal(f64),
}

impl NumeralValue {
    pub const ZERO: NumeralValue = NumeralValue::Integer(0);

    /// 乘以整数倍数（整数溢出时饱和）
    pub fn scale(self, multiplier: i64) -> Self {
        match self {
            NumeralValue::Integer(n) => NumeralValue::Integer(n.saturating_mul(multiplier)),
            NumeralValue::Decimal(x) => NumeralValue::Decimal(x * multiplier as f64),
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            NumeralValue::Integer(n) => n as f64,
            NumeralValue::Decimal(x) => x,
        }
    }

    /// 四舍五入为整数（NaN 为 0，超界饱和）
    pub fn round(self) -> Self {
        match self {
            NumeralValue::Integer(n) => NumeralValue::Integer(n),
            NumeralValue::Decimal(x) => NumeralValue::Integer(x.round() as i64),
        }
    }

    /// 向零截断为整数（NaN 为 0，超界饱和）
    pub fn to_i64(self) -> i64 {
        match self {
            NumeralValue::Integer(n) => n,
            NumeralValue::Decimal(x) => x as i64,
        }
    }

    /// 小数部分为零且在 i64 范围内时，返回对应整数
    fn as_whole(self) -> Option<i64> {
        match self {
            NumeralValue::Integer(n) => Some(n),
            NumeralValue::Decimal(x) => {
                let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
                (x.is_finite() && x.fract() == 0.0 && in_range).then(|| x as i64)
            }
        }
    }
}

impl Add for NumeralValue {
    type Output = NumeralValue;

    fn add(self, other: NumeralValue) -> NumeralValue {
        match (self, other) {
            (NumeralValue::Integer(a), NumeralValue::Integer(b)) => {
                NumeralValue::Integer(a.saturating_add(b))
            }
            (a, b) => NumeralValue::Decimal(a.to_f64() + b.to_f64()),
        }
    }
}

impl Mul for NumeralValue {
    type Output = NumeralValue;

    fn mul(self, other: NumeralValue) -> NumeralValue {
        match (self, other) {
            (NumeralValue::Integer(a), NumeralValue::Integer(b)) => {
                NumeralValue::Integer(a.saturating_mul(b))
            }
            (a, b) => NumeralValue::Decimal(a.to_f64() * b.to_f64()),
        }
    }
}

impl Default for NumeralValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for NumeralValue {
    fn from(n: i64) -> Self {
        NumeralValue::Integer(n)
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.as_whole(), self) {
            (Some(n), _) => write!(f, "{}", n),
            (None, NumeralValue::Decimal(x)) => write!(f, "{}", x),
            (None, NumeralValue::Integer(n)) => write!(f, "{}", n),
        }
    }
}
