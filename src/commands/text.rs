//! `hello`, `echo` and `reverse`.

/// `Hello, <name>!`, defaulting to `World`.
pub fn greeting(name: &[String]) -> String {
    let name = name.join(" ");
    let name = if name.trim().is_empty() {
        "World"
    } else {
        name.as_str()
    };
    format!("Hello, {name}!")
}

pub fn echo(text: &[String]) -> String {
    text.join(" ")
}

/// Reverse by Unicode scalar value.
pub fn reverse(text: &[String]) -> String {
    echo(text).chars().rev().collect()
}
