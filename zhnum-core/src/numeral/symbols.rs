//! 数字符号表
//!
//! 把单个字符映射为数字 (0-9) 或倍数单位（十、百、千、萬、億……）。
//!
//! 覆盖：小写、大写（财务）、口语/军用读法（洞、幺、两、拐、勾）、全角数字，
//! 以及廿、卅、卌、皕 等合体数字。

use crate::error::{NumeralError, NumeralResult};

/// 单个字符的语义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// 数字 0-9
    Digit(u8),
    /// 倍数单位
    Multiplier {
        /// 倍数（10、20、100、10000 ……）
        magnitude: i64,
        /// 是否为进位单位（萬、億 级别）
        carries_scale: bool,
    },
    /// 非数字字符
    NotANumeral,
}

impl Symbol {
    const fn unit(magnitude: i64) -> Self {
        Symbol::Multiplier {
            magnitude,
            carries_scale: false,
        }
    }

    const fn scale(magnitude: i64) -> Self {
        Symbol::Multiplier {
            magnitude,
            carries_scale: true,
        }
    }

    /// 是否为数字或单位
    pub fn is_numeral(&self) -> bool {
        !matches!(self, Symbol::NotANumeral)
    }
}

/// 完整符号表（ASCII 数字除外）
pub const SYMBOLS: &[(char, Symbol)] = &[
    ('零', Symbol::Digit(0)), ('〇', Symbol::Digit(0)), ('０', Symbol::Digit(0)), ('洞', Symbol::Digit(0)),
    ('一', Symbol::Digit(1)), ('壹', Symbol::Digit(1)), ('幺', Symbol::Digit(1)), ('弌', Symbol::Digit(1)),
    ('１', Symbol::Digit(1)),
    ('二', Symbol::Digit(2)), ('貳', Symbol::Digit(2)), ('贰', Symbol::Digit(2)), ('貮', Symbol::Digit(2)),
    ('弍', Symbol::Digit(2)), ('两', Symbol::Digit(2)), ('兩', Symbol::Digit(2)), ('２', Symbol::Digit(2)),
    ('三', Symbol::Digit(3)), ('叁', Symbol::Digit(3)), ('參', Symbol::Digit(3)), ('叄', Symbol::Digit(3)),
    ('弎', Symbol::Digit(3)), ('３', Symbol::Digit(3)),
    ('四', Symbol::Digit(4)), ('肆', Symbol::Digit(4)), ('４', Symbol::Digit(4)),
    ('五', Symbol::Digit(5)), ('伍', Symbol::Digit(5)), ('５', Symbol::Digit(5)),
    ('六', Symbol::Digit(6)), ('陸', Symbol::Digit(6)), ('陆', Symbol::Digit(6)), ('６', Symbol::Digit(6)),
    ('七', Symbol::Digit(7)), ('柒', Symbol::Digit(7)), ('拐', Symbol::Digit(7)), ('７', Symbol::Digit(7)),
    ('八', Symbol::Digit(8)), ('捌', Symbol::Digit(8)), ('８', Symbol::Digit(8)),
    ('九', Symbol::Digit(9)), ('玖', Symbol::Digit(9)), ('勾', Symbol::Digit(9)), ('９', Symbol::Digit(9)),
    ('十', Symbol::unit(10)), ('拾', Symbol::unit(10)),
    ('廿', Symbol::unit(20)),
    ('卅', Symbol::unit(30)),
    ('卌', Symbol::unit(40)),
    ('百', Symbol::unit(100)), ('佰', Symbol::unit(100)),
    ('皕', Symbol::unit(200)),
    ('千', Symbol::unit(1000)), ('仟', Symbol::unit(1000)),
    ('萬', Symbol::scale(10_000)), ('万', Symbol::scale(10_000)),
    ('億', Symbol::scale(100_000_000)), ('亿', Symbol::scale(100_000_000)),
];

/// 对单个字符分类
pub fn classify_char(ch: char) -> Symbol {
    if ch.is_ascii_digit() {
        return Symbol::Digit(ch as u8 - b'0');
    }

    SYMBOLS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(Symbol::NotANumeral)
}

/// 数字、单位、逗号或空白
pub fn is_numeral_or_separator_char(ch: char) -> bool {
    is_separator_char(ch) || classify_char(ch).is_numeral()
}

/// 中文数字（含全角数字），不含 ASCII 数字与分隔符
pub fn is_chinese_numeral_char(ch: char) -> bool {
    !ch.is_ascii() && classify_char(ch).is_numeral()
}

/// ASCII 数字或全角数字
pub fn is_arabic_digit_char(ch: char) -> bool {
    ch.is_ascii_digit() || ('０'..='９').contains(&ch)
}

/// 分隔符：逗号或空白
pub fn is_separator_char(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// 对单字符字符串分类
///
/// # 示例
/// ```
/// # use zhnum_core::numeral::symbols::{classify, Symbol};
/// assert_eq!(classify("萬").unwrap(), Symbol::Multiplier { magnitude: 10000, carries_scale: true });
/// assert!(classify("一二").is_err());
/// ```
pub fn classify(input: &str) -> NumeralResult<Symbol> {
    single_char(input).map(classify_char)
}

/// 单字符版 `is_numeral_or_separator_char`，长度不为 1 时返回 InvalidInput
pub fn is_numeral_or_separator(input: &str) -> NumeralResult<bool> {
    single_char(input).map(is_numeral_or_separator_char)
}

/// 单字符版 `is_chinese_numeral_char`，长度不为 1 时返回 InvalidInput
pub fn is_chinese_numeral(input: &str) -> NumeralResult<bool> {
    single_char(input).map(is_chinese_numeral_char)
}

/// 单字符版 `is_arabic_digit_char`，长度不为 1 时返回 InvalidInput
pub fn is_arabic_digit(input: &str) -> NumeralResult<bool> {
    single_char(input).map(is_arabic_digit_char)
}

/// 取出唯一的字符，空串或多字符返回 InvalidInput
fn single_char(input: &str) -> NumeralResult<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(NumeralError::invalid_input(input)),
    }
}
