//! Scans a few snippets and prints their token streams

use tinylex::lexer::{format_tokens, tokenize};

fn main() {
    let snippets = vec![
        ("Let binding", "let five = 5;"),
        ("Function literal", "let add = fn(x, y) { x + y; };"),
        (
            "Conditional",
            r#"if (5 < 10) {
    return true;
} else {
    return false;
}"#,
        ),
        ("Comparisons", "10 == 10; 10 != 9; !true"),
        ("Illegal input", "let x = 5 @ 3;"),
    ];

    for (name, source) in snippets {
        println!("=== {} ===", name);
        println!("{}", source);
        println!("---");
        println!("{}\n", format_tokens(&tokenize(source)));
    }
}
