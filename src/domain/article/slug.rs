// src/domain/article/slug.rs
use unicode_normalization::UnicodeNormalization;

/// Derives a URL slug from an article title.
///
/// The transformation is pinned for compatibility with slugs already stored:
/// lowercase, canonical (NFD) decomposition with combining diacritical marks
/// stripped, every character outside `[a-z0-9_]`/whitespace/hyphen removed,
/// whitespace runs replaced by a single hyphen, hyphen runs collapsed.
/// Whitespace trimming conceptually happens last, after hyphen substitution,
/// so titles with leading or trailing whitespace keep their edge hyphens.
/// May return an empty string for all-symbol titles; the store rejects those
/// at save time via the slug uniqueness/non-empty checks.
pub fn slugify(title: &str) -> String {
    let decomposed: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !matches!(*c, '\u{0300}'..='\u{036F}'))
        .collect();

    let mut hyphenated = String::with_capacity(decomposed.len());
    let mut pending_ws = false;
    for c in decomposed.chars() {
        if c.is_whitespace() {
            pending_ws = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if pending_ws {
                hyphenated.push('-');
                pending_ws = false;
            }
            hyphenated.push(c);
        }
        // every other character is dropped without breaking a whitespace run
    }
    if pending_ws {
        hyphenated.push('-');
    }

    let mut slug = String::with_capacity(hyphenated.len());
    let mut prev_hyphen = false;
    for c in hyphenated.chars() {
        if c == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }
    slug
}
