//! GitHub-slugger compatible anchor generation.

use std::collections::HashMap;

/// Generates unique heading slugs for a single document.
///
/// Repeated headings get `-1`, `-2`, ... suffixes, matching github-slugger.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Creates an empty slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug for `text`.
    ///
    /// Lowercases, keeps alphanumerics (ASCII and Unicode) and combining
    /// marks, keeps hyphens and underscores, turns spaces into hyphens, and
    /// drops everything else.
    pub fn slug(&mut self, text: &str) -> String {
        let mut slug = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                slug.push(ch.to_ascii_lowercase());
            } else if ch == ' ' {
                slug.push('-');
            } else if !ch.is_ascii() && (ch.is_alphanumeric() || is_combining_mark(ch)) {
                slug.extend(ch.to_lowercase());
            }
        }

        if slug.is_empty() {
            slug.push_str("section");
        }

        let count = self.seen.entry(slug.clone()).or_insert(0);
        if *count > 0 {
            slug = format!("{slug}-{count}");
        }
        *count += 1;
        slug
    }
}

/// Unicode combining marks (Mn, Mc, Me), which attach to a preceding base
/// character. Virama, nukta, niqqud, Thai tone marks and the like must stay
/// in a slug or non-Latin anchors become unreadable.
fn is_combining_mark(ch: char) -> bool {
    use std::ops::RangeInclusive;

    const RANGES: &[RangeInclusive<u32>] = &[
        // Combining Diacritical Marks
        0x0300..=0x036F,
        // Hebrew points
        0x0591..=0x05BD,
        0x05BF..=0x05BF,
        0x05C1..=0x05C2,
        0x05C4..=0x05C5,
        0x05C7..=0x05C7,
        // Arabic marks
        0x0610..=0x061A,
        0x064B..=0x065F,
        0x0670..=0x0670,
        // Devanagari signs, vowel signs, virama, nukta
        0x0900..=0x0903,
        0x093A..=0x094F,
        0x0951..=0x0957,
        0x0962..=0x0963,
        // Bengali
        0x0980..=0x0983,
        0x09BC..=0x09CD,
        // Gurmukhi
        0x0A01..=0x0A03,
        0x0A3C..=0x0A4D,
        // Gujarati
        0x0A81..=0x0A83,
        0x0ABC..=0x0ACD,
        // Oriya
        0x0B01..=0x0B03,
        // Tamil
        0x0BBE..=0x0BCD,
        // Thai vowel and tone marks
        0x0E31..=0x0E3A,
        0x0E47..=0x0E4E,
        // CJK ideographic marks and kana voicing marks
        0x302A..=0x302F,
        0x3099..=0x309A,
        // Combining Diacritical Marks Extended / Supplement
        0x1AB0..=0x1AFF,
        0x1DC0..=0x1DFF,
        // Combining Half Marks
        0xFE20..=0xFE2F,
    ];

    let cp = ch as u32;
    RANGES.iter().any(|range| range.contains(&cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ascii() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_dropped() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Why MDX?"), "why-mdx");
        assert_eq!(slugger.slug("build.format"), "buildformat");
    }

    #[test]
    fn repeats_get_numeric_suffixes() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Title"), "title");
        assert_eq!(slugger.slug("Title"), "title-1");
        assert_eq!(slugger.slug("Title"), "title-2");
    }

    #[test]
    fn unicode_letters_preserved() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("多言語 ガイド"), "多言語-ガイド");
        assert_eq!(slugger.slug("Héllo Wörld"), "héllo-wörld");
    }

    #[test]
    fn combining_marks_are_kept() {
        let mut slugger = Slugger::new();
        // Devanagari vowel signs and virama survive.
        assert_eq!(slugger.slug("हिन्दी"), "हिन्दी");
        // Hebrew niqqud survive.
        assert_eq!(slugger.slug("שָׁלוֹם"), "שָׁלוֹם");
    }

    #[test]
    fn empty_text_falls_back() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("!!!"), "section");
        assert_eq!(slugger.slug("..."), "section-1");
    }
}
