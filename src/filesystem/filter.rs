// src/filesystem/filter.rs
use regex::Regex;

use crate::error::FilterError;

/// Decides which file names make it into a listing.
#[derive(Debug, Clone)]
pub struct FilterMatcher {
    regex: Option<Regex>,
}

impl FilterMatcher {
    pub fn any() -> Self {
        FilterMatcher { regex: None }
    }

    /// Builds a matcher for `filter`; `None` and `""` accept every name.
    pub fn new(filter: Option<&str>, regexp: bool) -> Result<Self, FilterError> {
        match filter {
            None | Some("") => Ok(Self::any()),
            Some(f) if regexp => Self::regexp(f),
            Some(f) => Self::glob(f),
        }
    }

    /// `*` matches any run of characters, `?` exactly one, everything else literally.
    pub fn glob(pattern: &str) -> Result<Self, FilterError> {
        let escaped = regex::escape(pattern)
            .replace(r"\*", ".*")
            .replace(r"\?", ".");
        let regex = Regex::new(&format!("(?s)^{}$", escaped))?;
        Ok(FilterMatcher { regex: Some(regex) })
    }

    /// A delimited expression such as `/^foo/i` or `#\.pdf$#`.
    pub fn regexp(expression: &str) -> Result<Self, FilterError> {
        let (pattern, modifiers) = split_delimited(expression)?;
        let mut flags = String::new();
        let mut anchored = false;
        for m in modifiers.chars() {
            match m {
                'i' | 'm' | 's' | 'x' | 'U' => flags.push(m),
                // unicode is always on and `$` never matches before a final newline
                'u' | 'D' => {}
                'A' => anchored = true,
                c if c.is_whitespace() => {}
                c => return Err(FilterError::UnknownModifier(c)),
            }
        }

        let mut full = String::new();
        if !flags.is_empty() {
            full.push_str(&format!("(?{})", flags));
        }
        if anchored {
            // Under `x` a trailing `#` comment would swallow the closing paren.
            let end = if flags.contains('x') { "\n)" } else { ")" };
            full.push_str(&format!("\\A(?:{}{}", pattern, end));
        } else {
            full.push_str(&pattern);
        }
        let regex = Regex::new(&full)?;
        Ok(FilterMatcher { regex: Some(regex) })
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(name),
            None => true,
        }
    }
}

fn closing_delimiter(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        c => c,
    }
}

/// Splits `<d>pattern<d>modifiers` into pattern and modifiers.
fn split_delimited(expression: &str) -> Result<(String, &str), FilterError> {
    let expression = expression.trim_start();
    let mut chars = expression.char_indices();
    let open = match chars.next() {
        Some((_, c)) if !c.is_alphanumeric() && c != '\\' && !c.is_whitespace() => c,
        _ => return Err(FilterError::MissingDelimiter),
    };
    let close = closing_delimiter(open);
    // A delimiter that is no regex metacharacter must lose its escaping backslash.
    let literal_delimiter = regex::escape(&close.to_string()).len() == close.len_utf8();

    let mut pattern = String::new();
    let mut depth = 0usize;
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, next)) if next == close && literal_delimiter => pattern.push(next),
                Some((_, next)) => {
                    pattern.push('\\');
                    pattern.push(next);
                }
                None => pattern.push('\\'),
            }
            continue;
        }
        if c == close && depth == 0 {
            let rest = &expression[idx + c.len_utf8()..];
            return Ok((pattern, rest));
        }
        if open != close {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
            }
        }
        pattern.push(c);
    }
    Err(FilterError::UnterminatedPattern { delimiter: close })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        for filter in [None, Some("")] {
            for regexp in [false, true] {
                let matcher = FilterMatcher::new(filter, regexp).unwrap();
                assert!(matcher.matches("anything.txt"));
                assert!(matcher.matches(""));
            }
        }
    }

    #[test]
    fn test_glob_star() {
        let matcher = FilterMatcher::glob("*.txt").unwrap();
        assert!(matcher.matches("foo.txt"));
        assert!(matcher.matches(".txt"));
        assert!(!matcher.matches("foo.txtx"));
        assert!(!matcher.matches("foo.tx"));
        assert!(!matcher.matches("foo.TXT"));
    }

    #[test]
    fn test_glob_question_mark() {
        let matcher = FilterMatcher::glob("a?c").unwrap();
        assert!(matcher.matches("abc"));
        assert!(matcher.matches("aäc"));
        assert!(!matcher.matches("ac"));
        assert!(!matcher.matches("abbc"));
    }

    #[test]
    fn test_glob_metacharacters_are_literal() {
        let matcher = FilterMatcher::glob("report (1)+[draft].pdf").unwrap();
        assert!(matcher.matches("report (1)+[draft].pdf"));
        assert!(!matcher.matches("report 1+d.pdf"));
        assert!(!FilterMatcher::glob("a.c").unwrap().matches("abc"));
    }

    #[test]
    fn test_regexp() {
        let matcher = FilterMatcher::regexp("/^foo/").unwrap();
        assert!(matcher.matches("foo.txt"));
        assert!(matcher.matches("foo.bar"));
        assert!(!matcher.matches("bar.txt"));
    }

    #[test]
    fn test_regexp_modifiers() {
        let matcher = FilterMatcher::regexp(r"/\.PDF$/i").unwrap();
        assert!(matcher.matches("manual.pdf"));
        let anchored = FilterMatcher::regexp("/oo/A").unwrap();
        assert!(!anchored.matches("foo"));
        assert!(anchored.matches("oops"));
    }

    #[test]
    fn test_regexp_anchored_extended_with_comment() {
        let matcher = FilterMatcher::regexp("/foo # leading foo/xA").unwrap();
        assert!(matcher.matches("foobar"));
        assert!(!matcher.matches("barfoo"));
        let plain = FilterMatcher::regexp("/foo/A").unwrap();
        assert!(plain.matches("foobar"));
        assert!(!plain.matches("barfoo"));
    }

    #[test]
    fn test_regexp_other_delimiters() {
        assert!(FilterMatcher::regexp(r"#\.txt$#").unwrap().matches("a.txt"));
        assert!(FilterMatcher::regexp("{^a{2}}").unwrap().matches("aab"));
        assert!(FilterMatcher::regexp(r"/a\/b/").unwrap().matches("a/b"));
    }

    #[test]
    fn test_regexp_malformed() {
        assert!(matches!(
            FilterMatcher::regexp("^foo"),
            Err(FilterError::MissingDelimiter)
        ));
        assert!(matches!(
            FilterMatcher::regexp("/^foo"),
            Err(FilterError::UnterminatedPattern { delimiter: '/' })
        ));
        assert!(matches!(
            FilterMatcher::regexp("/foo/q"),
            Err(FilterError::UnknownModifier('q'))
        ));
        assert!(matches!(
            FilterMatcher::regexp("/fo(o/"),
            Err(FilterError::InvalidPattern(_))
        ));
    }
}
