//! Shared command-line helpers for the geolab binaries.

/// Value following `flag`, if present.
pub fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_flag_values() {
        let a = args(&["lab1", "input", "--student", "alice", "--json"]);
        assert_eq!(arg_value(&a, "--student"), Some("alice"));
        assert_eq!(arg_value(&a, "--config"), None);
        assert!(has_flag(&a, "--json"));
    }

    #[test]
    fn trailing_flag_has_no_value() {
        let a = args(&["get-variant", "--student"]);
        assert_eq!(arg_value(&a, "--student"), None);
    }
}
