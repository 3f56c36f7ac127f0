//! Common utilities

use std::path::Path;

/// Uppercase the first character, leaving the rest untouched.
///
/// This is the only normalization applied to search queries: `apple`
/// becomes `Apple`, but `aPPLE` becomes `APPLE` and `apple pie` stays
/// `Apple pie`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First whitespace-separated token of a line, if any
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Integer at the start of a token, the way a stream extraction reads it:
/// an optional sign followed by digits, ignoring whatever comes after.
/// `None` if there are no leading digits or the value overflows.
pub fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let sign_len = usize::from(token.starts_with(|c| c == '+' || c == '-'));
    let digits = token[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

/// File name component of a path, for prompts
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("apple"), "Apple");
        assert_eq!(capitalize_first("Apple"), "Apple");
        assert_eq!(capitalize_first("aPPLE"), "APPLE");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("1apple"), "1apple");
    }

    #[test]
    fn test_capitalize_first_leaves_rest_unchanged() {
        assert_eq!(capitalize_first("green beans"), "Green beans");
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("  2  \n"), Some("2"));
        assert_eq!(first_token("Cranberries extra"), Some("Cranberries"));
        assert_eq!(first_token("   \n"), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer("+2"), Some(2));
        assert_eq!(leading_integer("-1"), Some(-1));
        assert_eq!(leading_integer("4abc"), Some(4));
        assert_eq!(leading_integer("3.5"), Some(3));
        assert_eq!(leading_integer("x"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(Path::new("items/CS210_Project_Three_Input_File.txt")),
            "CS210_Project_Three_Input_File.txt"
        );
        assert_eq!(display_name(Path::new("input.txt")), "input.txt");
    }
}
