//! TextScanner - 文本扫描器
//!
//! 把任意文本切分为数字串和普通文本，数字串交给 NumeralParser 转换后
//! 拼回原文。
//!
//! 规则：
//! - 中文数字后紧跟阿拉伯数字时切断（"1000萬800" → "10000000 800"）
//! - 数字串首尾的逗号/空白原样保留
//! - 千分位分隔（"6,000"、"6 000"）在数字串内部去除
//! - 阿拉伯数字之间的小数点属于数字串（"3.5萬" → "35000"）

use std::ops::Range;

use crate::numeral::config::{ScanMode, ScannerConfig};
use crate::numeral::parser::NumeralParser;
use crate::numeral::symbols::{
    is_chinese_numeral_char, is_numeral_or_separator_char, is_separator_char,
};

/// 变更记录（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralChange {
    /// 原文中的字节范围
    pub original_span: Range<usize>,
    /// 输出文本中的字节范围
    pub normalized_span: Range<usize>,
    /// 原始文本
    pub original_text: String,
    /// 转换后的文本
    pub normalized_text: String,
}

/// 扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// 转换后的文本
    pub text: String,
    /// 变更记录，按出现顺序排列
    pub changes: Vec<NumeralChange>,
}

impl ScanResult {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            changes: Vec::new(),
        }
    }

    /// 是否有改动
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// 回滚为原始文本
    pub fn rollback(&self) -> String {
        let mut restored = String::with_capacity(self.text.len());
        let mut last_end = 0;

        for change in &self.changes {
            restored.push_str(&self.text[last_end..change.normalized_span.start]);
            restored.push_str(&change.original_text);
            last_end = change.normalized_span.end;
        }
        restored.push_str(&self.text[last_end..]);

        restored
    }
}

/// 数字串内部的切片
#[derive(Debug, Clone, PartialEq, Eq)]
enum RunPiece {
    Numeral(Range<usize>),
    Separator(Range<usize>),
}

/// 输出缓冲
struct ScanOutput<'a> {
    input: &'a str,
    text: String,
    changes: Vec<NumeralChange>,
}

impl<'a> ScanOutput<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            text: String::with_capacity(input.len()),
            changes: Vec::new(),
        }
    }

    fn push_literal(&mut self, literal: &str) {
        self.text.push_str(literal);
    }

    fn push_replacement(&mut self, original_span: Range<usize>, normalized: String) {
        let original_text = &self.input[original_span.clone()];
        if original_text == normalized {
            self.text.push_str(&normalized);
            return;
        }

        let start = self.text.len();
        self.text.push_str(&normalized);
        self.changes.push(NumeralChange {
            original_span,
            normalized_span: start..self.text.len(),
            original_text: original_text.to_string(),
            normalized_text: normalized,
        });
    }

    fn finish(self) -> ScanResult {
        ScanResult {
            text: self.text,
            changes: self.changes,
        }
    }
}

/// 文本扫描器
#[derive(Debug, Clone, Default)]
pub struct TextScanner {
    config: ScannerConfig,
}

impl TextScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// 扫描文本，替换其中所有数字串
    ///
    /// # 示例
    /// ```
    /// # use zhnum_core::numeral::TextScanner;
    /// let result = TextScanner::default().scan("1000萬800呎");
    /// assert_eq!(result.text, "10000000 800呎");
    /// assert_eq!(result.rollback(), "1000萬800呎");
    /// ```
    pub fn scan(&self, text: &str) -> ScanResult {
        if self.config.mode == ScanMode::Raw || text.is_empty() {
            return ScanResult::unchanged(text);
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut out = ScanOutput::new(text);
        let mut run_start: Option<usize> = None;
        let mut prev_chinese = false;
        let mut run_has_chinese = false;
        let mut run_has_dot = false;

        for (i, &(offset, ch)) in chars.iter().enumerate() {
            let decimal_point = Self::is_decimal_point(&chars, i, run_has_chinese, run_has_dot);
            if is_numeral_or_separator_char(ch) || decimal_point {
                let chinese = is_chinese_numeral_char(ch);

                // 中文数字 → 阿拉伯数字/分隔符：切断为两个数字串
                if prev_chinese && !chinese {
                    if let Some(start) = run_start.take() {
                        self.flush_run(&mut out, start..offset);
                    }
                    if self.config.boundary_space && !is_separator_char(ch) {
                        out.push_replacement(offset..offset, " ".to_string());
                    }
                    run_has_chinese = false;
                }

                run_start.get_or_insert(offset);
                run_has_chinese |= chinese;
                run_has_dot |= decimal_point;
                prev_chinese = chinese;
            } else {
                if let Some(start) = run_start.take() {
                    self.flush_run(&mut out, start..offset);
                }
                out.push_literal(&text[offset..offset + ch.len_utf8()]);
                prev_chinese = false;
                run_has_chinese = false;
                run_has_dot = false;
            }
        }

        if let Some(start) = run_start {
            self.flush_run(&mut out, start..text.len());
        }

        out.finish()
    }

    /// 设置模式
    pub fn set_mode(&mut self, mode: ScanMode) {
        self.config.mode = mode;
    }

    /// 获取当前模式
    pub fn mode(&self) -> ScanMode {
        self.config.mode
    }

    /// 小数点：夹在两个 ASCII 数字之间，所在数字串还没有中文数字和小数点，
    /// 且不属于 "1.2.3"、"192.168.1.1" 这类点分数字
    fn is_decimal_point(
        chars: &[(usize, char)],
        index: usize,
        run_has_chinese: bool,
        run_has_dot: bool,
    ) -> bool {
        let is_digit = |i: usize| chars.get(i).map_or(false, |(_, ch)| ch.is_ascii_digit());

        if chars[index].1 != '.' || run_has_chinese || run_has_dot {
            return false;
        }
        if index == 0 || !is_digit(index - 1) || !is_digit(index + 1) {
            return false;
        }

        // 小数点两侧数字段的范围 [digits_start, digits_end)
        let digits_start = (0..index)
            .rev()
            .take_while(|&i| is_digit(i))
            .last()
            .unwrap_or(index);
        let digits_end = (index + 1..chars.len())
            .take_while(|&i| is_digit(i))
            .last()
            .map_or(index + 1, |i| i + 1);

        let dotted_before =
            digits_start >= 2 && chars[digits_start - 1].1 == '.' && is_digit(digits_start - 2);
        let dotted_after = chars.get(digits_end).map_or(false, |(_, ch)| *ch == '.')
            && is_digit(digits_end + 1);

        !dotted_before && !dotted_after
    }

    /// 输出一个数字串
    fn flush_run(&self, out: &mut ScanOutput<'_>, run: Range<usize>) {
        let input = out.input;
        let run_text = &input[run.clone()];

        let core_start = run_text.len() - run_text.trim_start_matches(is_separator_char).len();
        let core_end = run_text.trim_end_matches(is_separator_char).len();

        // 只有分隔符：原样输出
        if core_end <= core_start {
            out.push_literal(run_text);
            return;
        }

        out.push_literal(&run_text[..core_start]);

        let base = run.start + core_start;
        for piece in split_digit_groups(&run_text[core_start..core_end]) {
            match piece {
                RunPiece::Separator(range) => {
                    out.push_literal(&input[base + range.start..base + range.end]);
                }
                RunPiece::Numeral(range) => {
                    let span = base + range.start..base + range.end;
                    let numeral_text = &input[span.clone()];
                    let value = NumeralParser::parse(numeral_text);
                    // 含中文数字的串输出整数；纯阿拉伯小数（"3.5"）保持原样
                    let value = if numeral_text.chars().any(is_chinese_numeral_char) {
                        value.round()
                    } else {
                        value
                    };
                    tracing::debug!("数字串 {:?} → {}", &input[span.clone()], value);
                    out.push_replacement(span, value.to_string());
                }
            }
        }

        out.push_literal(&run_text[core_end..]);
    }
}

/// 按千分位规则切分数字串内部
///
/// 两个阿拉伯数字块之间的分隔符，只有在前一块是合法分组（首块 1-3 位，
/// 之后每块 3 位）且后一块整数部分恰为 3 位时才视为千分位；否则在此处断开，
/// 分隔符原样保留。涉及中文数字的分隔符一律去除。
fn split_digit_groups(core: &str) -> Vec<RunPiece> {
    let mut chunks: Vec<Range<usize>> = Vec::new();
    let mut chunk_start: Option<usize> = None;
    for (i, ch) in core.char_indices() {
        if is_separator_char(ch) {
            if let Some(start) = chunk_start.take() {
                chunks.push(start..i);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(start) = chunk_start {
        chunks.push(start..core.len());
    }

    let Some(first) = chunks.first() else {
        return Vec::new();
    };

    let mut pieces = Vec::new();
    let mut numeral_start = first.start;
    let mut prev_is_group = is_digit_group(&core[first.clone()], true);

    for window in chunks.windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        let prev_text = &core[prev.clone()];
        let next_text = &core[next.clone()];

        let arabic_pair = is_ascii_number(prev_text) && is_ascii_number(next_text);
        if !arabic_pair || (prev_is_group && has_group_integer(next_text)) {
            prev_is_group = is_digit_group(next_text, false);
            continue;
        }

        pieces.push(RunPiece::Numeral(numeral_start..prev.end));
        pieces.push(RunPiece::Separator(prev.end..next.start));
        numeral_start = next.start;
        prev_is_group = is_digit_group(next_text, true);
    }

    pieces.push(RunPiece::Numeral(numeral_start..core.len()));
    pieces
}

fn is_ascii_number(chunk: &str) -> bool {
    !chunk.is_empty() && chunk.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn is_digit_group(chunk: &str, first: bool) -> bool {
    let valid_len = if first {
        (1..=3).contains(&chunk.len())
    } else {
        chunk.len() == 3
    };
    valid_len && chunk.chars().all(|ch| ch.is_ascii_digit())
}

/// 整数部分恰为 3 位（允许带小数部分，如 "000.5"）
fn has_group_integer(chunk: &str) -> bool {
    let integer = chunk.split('.').next().unwrap_or_default();
    integer.len() == 3 && integer.chars().all(|ch| ch.is_ascii_digit())
}

/// 把文本中的数字串全部转换为阿拉伯数字
///
/// 对任意输入都返回结果，空串返回空串。
pub fn to_arabic_string(text: &str) -> String {
    TextScanner::default().scan(text).text
}
