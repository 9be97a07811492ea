//! 单个数字串解析
//!
//! 把一个已切分好的数字串（只含数字、单位、逗号、空白，可带前导阿拉伯小数）
//! 转换为数值。
//!
//! 解析过程是一次从左到右的扫描：
//! - 数字先作为"底数"挂起，遇到单位后组成 (底数, 倍数) 对
//! - 省略的"一"按 1 处理（"十二" = 1×10 + 2）
//! - 连续的数字按位拼接（"三〇〇三" = 3003）
//! - 萬/億 级单位出现时，左侧已累计的全部数值整体作为底数（"一千萬" = 1000×10000）
//! - 前导阿拉伯小数（"3.5萬"）最后乘入结果，或在进位时乘入，只使用一次
//!
//! 解析是宽松的：无法识别的字符被跳过，空串得到 0。

use lazy_static::lazy_static;
use regex::Regex;

use crate::numeral::symbols::{classify_char, is_separator_char, Symbol};
use crate::numeral::value::NumeralValue;

lazy_static! {
    static ref LEADING_DECIMAL: Regex = Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap();
}

/// (底数, 倍数) 对
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pair {
    base: NumeralValue,
    multiplier: i64,
}

impl Pair {
    fn new(base: NumeralValue, multiplier: i64) -> Self {
        Self { base, multiplier }
    }

    /// 省略"一"的对
    fn implicit(multiplier: i64) -> Self {
        Self::new(NumeralValue::Integer(1), multiplier)
    }

    fn product(&self) -> NumeralValue {
        self.base.scale(self.multiplier)
    }
}

/// 当前未完成的对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingPair {
    /// 尚无底数
    Idle,
    /// 已有底数，等待单位
    Base(i64),
}

/// 数字串解析器
///
/// 每次解析都使用新的实例，不共享状态。
#[derive(Debug)]
pub struct NumeralParser {
    pending: PendingPair,
    pairs: Vec<Pair>,
    leading: Option<NumeralValue>,
}

impl NumeralParser {
    fn new(leading: Option<NumeralValue>) -> Self {
        Self {
            pending: PendingPair::Idle,
            pairs: Vec::new(),
            leading,
        }
    }

    /// 解析数字串
    ///
    /// # 示例
    /// ```
    /// # use zhnum_core::numeral::{NumeralParser, NumeralValue};
    /// assert_eq!(NumeralParser::parse("一千萬"), NumeralValue::Integer(10_000_000));
    /// assert_eq!(NumeralParser::parse("3.5萬").to_string(), "35000");
    /// ```
    pub fn parse(token: &str) -> NumeralValue {
        let cleaned: String = token.chars().filter(|ch| !is_separator_char(*ch)).collect();
        let (leading, rest) = split_leading_decimal(&cleaned);

        let mut parser = Self::new(leading);
        for (index, ch) in rest.chars().enumerate() {
            match classify_char(ch) {
                Symbol::Digit(digit) => parser.push_digit(digit),
                Symbol::Multiplier {
                    magnitude,
                    carries_scale,
                } => parser.push_multiplier(magnitude, carries_scale, index == 0),
                Symbol::NotANumeral => {
                    tracing::trace!("跳过非数字字符 {:?} (in {:?})", ch, token);
                }
            }
        }

        parser.finish()
    }

    fn push_digit(&mut self, digit: u8) {
        let digit = i64::from(digit);
        self.pending = match self.pending {
            PendingPair::Idle => PendingPair::Base(digit),
            // 连续数字按位拼接："〇三" → "03" → 3
            PendingPair::Base(base) => {
                PendingPair::Base(base.saturating_mul(10).saturating_add(digit))
            }
        };
    }

    fn push_multiplier(&mut self, magnitude: i64, carries_scale: bool, is_first: bool) {
        if is_first {
            // 开头的单位以 1 为底数："千萬" 的 千 = 1×1000
            self.pairs.push(Pair::implicit(magnitude));
            return;
        }

        match self.pending {
            PendingPair::Base(base) => {
                self.pairs.push(Pair::new(NumeralValue::Integer(base), magnitude));
                self.pending = PendingPair::Idle;
            }
            PendingPair::Idle if carries_scale => self.carry_over(magnitude),
            PendingPair::Idle => self.pairs.push(Pair::implicit(magnitude)),
        }
    }

    /// 萬/億 进位：左侧累计值整体成为新的底数
    fn carry_over(&mut self, magnitude: i64) {
        let mut base = self.sum();
        if let Some(leading) = self.leading.take() {
            base = base * leading;
        }

        tracing::debug!("进位: {} × {}", base, magnitude);

        self.pairs.clear();
        self.pairs.push(Pair::new(base, magnitude));
        self.pending = PendingPair::Idle;
    }

    fn sum(&self) -> NumeralValue {
        self.pairs
            .iter()
            .fold(NumeralValue::ZERO, |acc, pair| acc + pair.product())
    }

    fn finish(mut self) -> NumeralValue {
        if let PendingPair::Base(base) = self.pending {
            self.pairs.push(Pair::new(NumeralValue::Integer(base), 1));
        }

        let result = self.sum();
        match self.leading {
            // 只有阿拉伯数字（如 "800"）时不能乘以空结果
            Some(leading) if self.pairs.is_empty() => leading,
            Some(leading) => result * leading,
            None => result,
        }
    }
}

/// 拆出开头的阿拉伯整数/小数
fn split_leading_decimal(token: &str) -> (Option<NumeralValue>, &str) {
    let Some(found) = LEADING_DECIMAL.find(token) else {
        return (None, token);
    };

    let text = found.as_str();
    let value = if text.contains('.') {
        text.parse::<f64>().ok().map(NumeralValue::Decimal)
    } else {
        text.parse::<i64>()
            .map(NumeralValue::Integer)
            .or_else(|_| text.parse::<f64>().map(NumeralValue::Decimal))
            .ok()
    };

    (value, &token[found.end()..])
}

/// 解析数字串并返回整数（小数部分向零截断）
///
/// 宽松解析：空串或只含分隔符时返回 0，不会报错。
pub fn parse_numeral(token: &str) -> i64 {
    NumeralParser::parse(token).to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(parse_numeral("一"), 1);
        assert_eq!(parse_numeral("零"), 0);
        assert_eq!(parse_numeral("玖"), 9);
    }

    #[test]
    fn test_implicit_one() {
        assert_eq!(parse_numeral("十"), 10);
        assert_eq!(parse_numeral("十二"), 12);
        assert_eq!(parse_numeral("百"), 100);
        assert_eq!(parse_numeral("一百十"), 110);
    }

    #[test]
    fn test_tens() {
        assert_eq!(parse_numeral("二十"), 20);
        assert_eq!(parse_numeral("二十二"), 22);
        assert_eq!(parse_numeral("九十九"), 99);
        assert_eq!(parse_numeral("廿三"), 23);
        assert_eq!(parse_numeral("卅"), 30);
        assert_eq!(parse_numeral("卌五"), 45);
    }

    #[test]
    fn test_hundreds_and_thousands() {
        assert_eq!(parse_numeral("一千二百三十四"), 1234);
        assert_eq!(parse_numeral("九千九百九十九"), 9999);
        assert_eq!(parse_numeral("皕"), 200);
        assert_eq!(parse_numeral("壹仟貳佰參拾肆"), 1234);
    }

    #[test]
    fn test_digit_concatenation() {
        assert_eq!(parse_numeral("三〇〇三"), 3003);
        assert_eq!(parse_numeral("〇三"), 3);
        assert_eq!(parse_numeral("二零二六"), 2026);
        assert_eq!(parse_numeral("幺洞拐"), 107);
    }

    #[test]
    fn test_carry_over() {
        assert_eq!(parse_numeral("一千萬"), 10_000_000);
        assert_eq!(parse_numeral("十萬"), 100_000);
        assert_eq!(parse_numeral("一百二十萬"), 1_200_000);
        assert_eq!(parse_numeral("三十億"), 3_000_000_000);
    }

    #[test]
    fn test_scale_with_digit_base() {
        assert_eq!(parse_numeral("一萬"), 10_000);
        assert_eq!(parse_numeral("三万五千"), 35_000);
        assert_eq!(parse_numeral("一萬二千三百"), 12_300);
    }

    #[test]
    fn test_leading_multiplier_chain() {
        assert_eq!(parse_numeral("千萬"), 10_000_000);
        assert_eq!(parse_numeral("萬"), 10_000);
    }

    #[test]
    fn test_leading_decimal() {
        assert_eq!(NumeralParser::parse("2千萬"), NumeralValue::Integer(20_000_000));
        assert_eq!(NumeralParser::parse("3.5萬"), NumeralValue::Decimal(35_000.0));
        assert_eq!(NumeralParser::parse("1.5千萬").to_string(), "15000000");
        assert_eq!(parse_numeral("3萬"), 30_000);
    }

    #[test]
    fn test_leading_decimal_used_once() {
        // 进位时已乘入，结尾不再重复
        assert_eq!(parse_numeral("2千萬"), 20_000_000);
        assert_eq!(parse_numeral("2十萬"), 200_000);
    }

    #[test]
    fn test_arabic_only() {
        assert_eq!(NumeralParser::parse("800"), NumeralValue::Integer(800));
        assert_eq!(NumeralParser::parse("800 "), NumeralValue::Integer(800));
        assert_eq!(NumeralParser::parse("3.5"), NumeralValue::Decimal(3.5));
        assert_eq!(parse_numeral("3.5"), 3);
    }

    #[test]
    fn test_separators_stripped() {
        assert_eq!(parse_numeral("6,000"), 6000);
        assert_eq!(parse_numeral("6 000"), 6000);
        assert_eq!(parse_numeral("一千, 二百"), 1200);
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(parse_numeral("１２３"), 123);
        assert_eq!(parse_numeral("５萬"), 50_000);
    }

    #[test]
    fn test_lenient_malformed() {
        assert_eq!(parse_numeral(""), 0);
        assert_eq!(parse_numeral(" , "), 0);
        assert_eq!(parse_numeral("abc"), 0);
    }

    #[test]
    fn test_split_leading_decimal() {
        assert_eq!(
            split_leading_decimal("3.5萬"),
            (Some(NumeralValue::Decimal(3.5)), "萬")
        );
        assert_eq!(
            split_leading_decimal("1000萬"),
            (Some(NumeralValue::Integer(1000)), "萬")
        );
        assert_eq!(split_leading_decimal("萬"), (None, "萬"));
        assert_eq!(split_leading_decimal(".5"), (None, ".5"));
    }
}
