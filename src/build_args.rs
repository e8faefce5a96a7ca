use std::sync::LazyLock;

use forgepush_utils::string_vec;
use regex::Regex;

static BUILD_ARG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+=\S+").expect("Regex is valid"));

/// Expands a raw whitespace-delimited string of `KEY=VALUE` pairs
/// into `--build-arg KEY=VALUE` command tokens.
///
/// This is a lenient, best-effort tokenizer, not a strict grammar:
/// anything not shaped like `KEY=VALUE` is ignored, and no quoting
/// or escaping is understood. An empty input yields no tokens.
#[must_use]
pub fn expand(raw: &str) -> Vec<String> {
    BUILD_ARG_TOKEN
        .find_iter(raw)
        .flat_map(|token| string_vec!["--build-arg", token.as_str()])
        .collect()
}

#[cfg(test)]
mod test {
    use forgepush_utils::string_vec;
    use rstest::rstest;

    use super::expand;

    #[rstest]
    #[case::two_pairs(
        "FOO=bar BAZ=qux",
        string_vec!["--build-arg", "FOO=bar", "--build-arg", "BAZ=qux"],
    )]
    #[case::single_pair("FOO=bar", string_vec!["--build-arg", "FOO=bar"])]
    #[case::empty("", Vec::<String>::new())]
    #[case::whitespace_only("   \t", Vec::<String>::new())]
    #[case::malformed_tokens_ignored(
        "not-a-pair FOO=bar = broken",
        string_vec!["--build-arg", "FOO=bar"],
    )]
    #[case::spaced_assignment_ignored("key = value", Vec::<String>::new())]
    #[case::value_may_contain_equals("A=B=C", string_vec!["--build-arg", "A=B=C"])]
    #[case::extra_whitespace(
        "  FOO=bar\t\tBAZ=qux  ",
        string_vec!["--build-arg", "FOO=bar", "--build-arg", "BAZ=qux"],
    )]
    fn expand_cases(#[case] raw: &str, #[case] expected: Vec<String>) {
        assert_eq!(expand(raw), expected);
    }
}
