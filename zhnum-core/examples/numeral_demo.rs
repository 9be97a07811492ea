//! 中文数字转换演示程序
//!
//! 运行：cargo run --example numeral_demo [--features debug-logs]
//!
//! 也可以通过管道传入文本：echo "售價三百八十萬" | cargo run --example numeral_demo -- -

use std::io::Read;

use zhnum_core::{TextScanner, ZhnumConfig};

fn main() {
    zhnum_core::init_logging();

    let config = ZhnumConfig::load().unwrap_or_else(|e| {
        eprintln!("配置加载失败，使用默认配置: {}", e);
        ZhnumConfig::default()
    });
    let scanner = TextScanner::new(config.scanner);

    if std::env::args().nth(1).as_deref() == Some("-") {
        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut input) {
            eprintln!("读取输入失败: {}", e);
            std::process::exit(1);
        }
        print!("{}", scanner.scan(&input).text);
        return;
    }

    println!("=== zhnum 中文数字转换演示 ===\n");

    let test_cases = [
        ("一千二百三十四", "1234"),
        ("一千萬", "10000000"),
        ("2千萬", "20000000"),
        ("3.5萬", "35000"),
        ("三〇〇三", "3003"),
        ("壹萬貳仟圓整", "12000圓整"),
        ("1000萬800呎", "10000000 800呎"),
        ("6,000", "6000"),
        ("實用面積七百五十呎", "實用面積750呎"),
    ];

    for (i, (input, expected)) in test_cases.iter().enumerate() {
        let result = scanner.scan(input);
        let status = if &result.text == expected { "✓" } else { "✗" };

        println!("#{} {} 原始: \"{}\"", i + 1, status, input);
        println!("     输出: \"{}\"", result.text);
        println!("     期望: \"{}\"", expected);
        for change in &result.changes {
            println!(
                "       - \"{}\" → \"{}\"",
                change.original_text, change.normalized_text
            );
        }
        println!();
    }
}
