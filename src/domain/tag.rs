use crate::domain::version::parse_lenient;

/// Returns the prefix of a tag: everything before the first position from
/// which the rest of the input parses as a version.
///
/// Only positions starting with a digit are considered. When no position
/// qualifies the prefix is empty and the whole input is left as the version
/// part, so a malformed tag surfaces later as a parse error.
///
/// # Example
/// ```
/// use next_tag::domain::tag::extract_prefix;
///
/// assert_eq!(extract_prefix("v1.2.3"), "v");
/// assert_eq!(extract_prefix("release-2024.1"), "release-");
/// assert_eq!(extract_prefix("prefix123withnumbers-v1.2"), "prefix123withnumbers-v");
/// assert_eq!(extract_prefix("no-version"), "");
/// ```
pub fn extract_prefix(input: &str) -> &str {
    for (index, ch) in input.char_indices() {
        if !ch.is_ascii_digit() {
            continue;
        }

        if parse_lenient(&input[index..]).is_ok() {
            return &input[..index];
        }
    }

    ""
}

/// Removes the prefix found by [`extract_prefix`].
pub fn strip_prefix(input: &str) -> &str {
    &input[extract_prefix(input).len()..]
}

/// A tag split into its prefix and version part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub prefix: String,
    pub version: String,
}

impl Tag {
    /// Split a raw tag (e.g., "v1.2.3" -> prefix "v", version "1.2.3")
    pub fn split(raw: &str) -> Self {
        let prefix = extract_prefix(raw);
        Tag {
            prefix: prefix.to_string(),
            version: raw[prefix.len()..].to_string(),
        }
    }

    /// Attach a prefix to a rendered version
    pub fn compose(prefix: &str, rendered: &str) -> String {
        format!("{}{}", prefix, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefix_common_shapes() {
        let cases = [
            ("v1.2.3", "v"),
            ("v1.2", "v"),
            ("v1", "v"),
            ("1.2.3", ""),
            ("1.2", ""),
            ("", ""),
            ("v1.2.3-rc1", "v"),
            ("prefix-v1.2.3", "prefix-v"),
            ("prefix123withnumbers-v1.2.3", "prefix123withnumbers-v"),
            ("prefix123withnumbers-v1.2-beta1", "prefix123withnumbers-v"),
            ("invalidversionwith-v1xyu", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(extract_prefix(input), expected, "prefix of {:?}", input);
        }
    }

    #[test]
    fn test_extract_prefix_is_shortest() {
        // "2-v1.2" parses as 2.0.0-v1.2, which starts before "1.2"
        assert_eq!(extract_prefix("build2-v1.2"), "build");
    }

    #[test]
    fn test_extract_prefix_non_ascii() {
        assert_eq!(extract_prefix("версия-1.2.3"), "версия-");
        assert_eq!(strip_prefix("版本1.0"), "1.0");
    }

    #[test]
    fn test_strip_prefix_is_idempotent() {
        for input in ["v1.2.3", "release-1.2", "nothing", "", "x9y", "1.2.3"] {
            let once = strip_prefix(input);
            assert_eq!(strip_prefix(once), once);
            assert_eq!(format!("{}{}", extract_prefix(input), once), input);
        }
    }

    #[test]
    fn test_tag_split_and_compose() {
        let tag = Tag::split("release-1.4");
        assert_eq!(tag.prefix, "release-");
        assert_eq!(tag.version, "1.4");
        assert_eq!(Tag::compose(&tag.prefix, "1.5"), "release-1.5");
    }
}
