//! Shell-style pattern matching for repository file paths.
//!
//! Follows `fnmatch` rules: `*` matches any run of characters (including
//! `/`), `?` matches exactly one character, and `[...]` / `[!...]` match a
//! character class with optional ranges. An unterminated `[` is literal.

/// Returns true when `path` matches at least one of `patterns`.
pub fn matches_any<S: AsRef<str>>(patterns: &[S], path: &str) -> bool {
    patterns.iter().any(|p| matches(p.as_ref(), path))
}

pub fn matches(pattern: &str, path: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = path.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() {
            match pattern[p] {
                '*' => {
                    backtrack = Some((p, t));
                    p += 1;
                    continue;
                }
                '?' => {
                    p += 1;
                    t += 1;
                    continue;
                }
                '[' => {
                    if let Some((hit, next)) = match_class(&pattern, p, text[t]) {
                        if hit {
                            p = next;
                            t += 1;
                            continue;
                        }
                    } else if text[t] == '[' {
                        p += 1;
                        t += 1;
                        continue;
                    }
                }
                c if c == text[t] => {
                    p += 1;
                    t += 1;
                    continue;
                }
                _ => {}
            }
        }

        match backtrack {
            Some((star, tried)) => {
                p = star + 1;
                t = tried + 1;
                backtrack = Some((star, tried + 1));
            }
            None => return false,
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Matches `c` against the class opening at `pattern[start]`.
///
/// Returns whether it matched and the index just past the closing `]`, or
/// `None` if the class is never closed.
fn match_class(pattern: &[char], start: usize, c: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negated = matches!(pattern.get(i), Some('!'));
    if negated {
        i += 1;
    }

    let mut hit = false;
    let mut first = true;
    loop {
        let current = *pattern.get(i)?;
        if current == ']' && !first {
            return Some((hit != negated, i + 1));
        }
        first = false;

        if pattern.get(i + 1) == Some(&'-') && pattern.get(i + 2).is_some_and(|&e| e != ']') {
            let end = pattern[i + 2];
            if current <= c && c <= end {
                hit = true;
            }
            i += 3;
        } else {
            if current == c {
                hit = true;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert!(matches("LICENSE", "LICENSE"));
        assert!(!matches("LICENSE", "LICENSE.md"));
        assert!(!matches("LICENSE", "docs/LICENSE"));
    }

    #[test]
    fn test_star_crosses_directories() {
        assert!(matches("*.json", "config.json"));
        assert!(matches("*.json", "original/compiled/merges.json"));
        assert!(!matches("*.json", "config.json.bak"));
    }

    #[test]
    fn test_variant_pattern() {
        let pattern = "*original/compiled/*";
        assert!(matches(pattern, "original/compiled/Unet.mlmodelc/weights/weight.bin"));
        assert!(matches(pattern, "original/compiled/vocab.json"));
        assert!(!matches(pattern, "original/packages/Unet.mlpackage/Manifest.json"));
        assert!(!matches(pattern, "split_einsum/compiled/Unet.mlmodelc/model.mil"));
        assert!(!matches(pattern, "original/compiled"));
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("model-?.txt", "model-1.txt"));
        assert!(!matches("model-?.txt", "model-12.txt"));
    }

    #[test]
    fn test_character_class() {
        assert!(matches("v[0-9].txt", "v1.txt"));
        assert!(!matches("v[0-9].txt", "va.txt"));
        assert!(matches("v[!0-9].txt", "va.txt"));
        assert!(matches("[]]x", "]x"));
        assert!(matches("a[b", "a[b"));
    }

    #[test]
    fn test_empty() {
        assert!(matches("*", ""));
        assert!(matches("", ""));
        assert!(!matches("", "a"));
    }

    #[test]
    fn test_matches_any() {
        let patterns = ["*original/compiled/*", "*.json", "*.txt", "LICENSE"];
        assert!(matches_any(&patterns, "README.txt"));
        assert!(matches_any(&patterns, "LICENSE"));
        assert!(!matches_any(&patterns, "README.md"));
        assert!(!matches_any(&patterns, ".gitattributes"));
    }
}
