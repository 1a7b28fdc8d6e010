use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash, e.g. `-zms`.
const LONG_FLAGS: &[&str] = &["domain", "key", "cert", "zms", "ca-cert", "verbose", "help"];

/// Flags that consume the following argument when no `=value` is attached.
const VALUE_FLAGS: &[&str] = &["d", "k", "c", "domain", "key", "cert", "zms", "ca-cert"];

fn short_to_long(name: &str) -> Option<&'static str> {
    match name {
        "d" => Some("domain"),
        "k" => Some("key"),
        "c" => Some("cert"),
        "v" => Some("verbose"),
        _ => None,
    }
}

/// Rewrites Go `flag`-style arguments (`-zms URL`, `-zms=URL`, `-d=name`)
/// into the double-dash form clap understands. The program name, values,
/// and everything after a bare `--` pass through untouched.
pub fn normalize_go_style_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut iter = args.into_iter().map(Into::into);

    if let Some(program) = iter.next() {
        normalized.push(program);
    }

    let mut expecting_value = false;
    let mut passthrough = false;

    for arg in iter {
        if passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let (rewritten, takes_value) = rewrite_flag(text);
        expecting_value = takes_value;
        normalized.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    normalized
}

/// Returns the rewritten argument (if any) and whether the next argument is
/// this flag's value.
fn rewrite_flag(arg: &str) -> (Option<String>, bool) {
    let Some(body) = arg.strip_prefix('-') else {
        return (None, false);
    };

    let double_dash = body.starts_with('-');
    let body = body.trim_start_matches('-');
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let takes_value = value.is_none() && VALUE_FLAGS.contains(&name);

    if double_dash {
        return (None, takes_value);
    }

    if LONG_FLAGS.contains(&name) {
        return (Some(format!("--{}", body)), takes_value);
    }

    match (short_to_long(name), value) {
        (Some(long), Some(value)) => (Some(format!("--{}={}", long, value)), false),
        _ => (None, takes_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_go_style_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_long_flag() {
        assert_eq!(
            normalize(&["prog", "-zms", "https://zms:4443/zms/v1"]),
            vec!["prog", "--zms", "https://zms:4443/zms/v1"]
        );
        assert_eq!(
            normalize(&["prog", "-zms=https://zms/zms/v1"]),
            vec!["prog", "--zms=https://zms/zms/v1"]
        );
    }

    #[test]
    fn test_short_flags_with_equals() {
        assert_eq!(
            normalize(&["prog", "-d=sports.nba", "-k", "key.pem"]),
            vec!["prog", "--domain=sports.nba", "-k", "key.pem"]
        );
    }

    #[test]
    fn test_values_are_not_rewritten() {
        assert_eq!(
            normalize(&["prog", "-d", "-zms", "-c", "-key"]),
            vec!["prog", "-d", "-zms", "-c", "-key"]
        );
    }

    #[test]
    fn test_double_dash_and_unknown_flags_pass_through() {
        assert_eq!(
            normalize(&["prog", "--zms", "u", "-x", "--", "-zms"]),
            vec!["prog", "--zms", "u", "-x", "--", "-zms"]
        );
    }
}
