use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]"#).unwrap());
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Normalize `input` into slug form, joining words with `separator`.
///
/// Accented characters are folded to their base Latin letters, quote
/// characters are dropped so contractions collapse into one word, and any
/// run of remaining non-alphanumeric characters becomes a single
/// separator.
///
/// ```
/// assert_eq!(sluggable::slugify("A Tale of Two Cities", "-"), "a-tale-of-two-cities");
/// assert_eq!(sluggable::slugify("Charlotte's Web", "-"), "charlottes-web");
/// assert_eq!(sluggable::slugify("The Alchemist", "_"), "the_alchemist");
/// ```
pub fn slugify(input: &str, separator: &str) -> String {
    let folded: String = input
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    let unquoted = QUOTES.replace_all(&folded, "");
    let lowered = unquoted.to_lowercase();
    let hyphenated: String = lowered
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect();
    SEPARATOR_RUNS
        .replace_all(hyphenated.trim_matches('-'), separator)
        .into_owned()
}
