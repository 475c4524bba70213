//! Phoneme tables and combination rules for two-bulsik composition.
//!
//! Every jamo is stored as its compatibility code point (U+3131..U+3163),
//! which is also what the host displays for a lone initial consonant.
//! Indices follow the Unicode syllable order used by
//! [`crate::unicode::compose_syllable`].

pub mod layout;

use crate::unicode::{is_compat_consonant, is_compat_vowel};

/// Initial consonants, indices 0..=18.
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels, indices 0..=20.
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants, indices 1..=27. Index 0 ("no final") has no glyph.
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// (choseong, same choseong) → tense choseong.
const DOUBLE_CHOSEONG: [(usize, usize); 5] = [
    (0, 1),   // ㄱ → ㄲ
    (3, 4),   // ㄷ → ㄸ
    (7, 8),   // ㅂ → ㅃ
    (9, 10),  // ㅅ → ㅆ
    (12, 13), // ㅈ → ㅉ
];

/// (base jungseong, added jungseong, compound jungseong).
const COMPOUND_VOWELS: [(usize, usize, usize); 7] = [
    (8, 0, 9),    // ㅗ + ㅏ = ㅘ
    (8, 1, 10),   // ㅗ + ㅐ = ㅙ
    (8, 20, 11),  // ㅗ + ㅣ = ㅚ
    (13, 4, 14),  // ㅜ + ㅓ = ㅝ
    (13, 5, 15),  // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

/// Compound jungseong index → (base, added). Inverse of `COMPOUND_VOWELS`,
/// indexed directly so backspace does not scan.
const VOWEL_SPLITS: [Option<(usize, usize)>; 21] = {
    let mut table = [None; 21];
    let mut i = 0;
    while i < COMPOUND_VOWELS.len() {
        let (base, added, compound) = COMPOUND_VOWELS[i];
        table[compound] = Some((base, added));
        i += 1;
    }
    table
};

/// Compound jongseong index → (remaining jongseong index, split-off consonant).
const JONGSEONG_SPLITS: [(usize, usize, char); 11] = [
    (3, 1, 'ㅅ'),   // ㄳ
    (5, 4, 'ㅈ'),   // ㄵ
    (6, 4, 'ㅎ'),   // ㄶ
    (9, 8, 'ㄱ'),   // ㄺ
    (10, 8, 'ㅁ'),  // ㄻ
    (11, 8, 'ㅂ'),  // ㄼ
    (12, 8, 'ㅅ'),  // ㄽ
    (13, 8, 'ㅌ'),  // ㄾ
    (14, 8, 'ㅍ'),  // ㄿ
    (15, 8, 'ㅎ'),  // ㅀ
    (18, 17, 'ㅅ'), // ㅄ
];

/// Simple jongseong index → choseong index for the same consonant.
const JONGSEONG_TO_CHOSEONG: [(usize, usize); 16] = [
    (1, 0),   // ㄱ
    (2, 1),   // ㄲ
    (4, 2),   // ㄴ
    (7, 3),   // ㄷ
    (8, 5),   // ㄹ
    (16, 6),  // ㅁ
    (17, 7),  // ㅂ
    (19, 9),  // ㅅ
    (20, 10), // ㅆ
    (21, 11), // ㅇ
    (22, 12), // ㅈ
    (23, 14), // ㅊ
    (24, 15), // ㅋ
    (25, 16), // ㅌ
    (26, 17), // ㅍ
    (27, 18), // ㅎ
];

pub fn is_consonant(jamo: char) -> bool {
    is_compat_consonant(jamo)
}

pub fn is_vowel(jamo: char) -> bool {
    is_compat_vowel(jamo)
}

pub fn choseong_index(jamo: char) -> Option<usize> {
    CHOSEONG.iter().position(|&c| c == jamo)
}

pub fn jungseong_index(jamo: char) -> Option<usize> {
    JUNGSEONG.iter().position(|&c| c == jamo)
}

/// Index of `jamo` as a final consonant. Never returns 0.
pub fn jongseong_index(jamo: char) -> Option<usize> {
    JONGSEONG.iter().position(|&c| c == Some(jamo))
}

pub fn choseong_jamo(index: usize) -> Option<char> {
    CHOSEONG.get(index).copied()
}

pub fn jungseong_jamo(index: usize) -> Option<char> {
    JUNGSEONG.get(index).copied()
}

pub fn jongseong_jamo(index: usize) -> Option<char> {
    JONGSEONG.get(index).copied().flatten()
}

/// Tense consonant formed by repeating `current` with `adding`, if any.
pub fn double_choseong(current: usize, adding: char) -> Option<usize> {
    let adding = choseong_index(adding)?;
    if adding != current {
        return None;
    }
    DOUBLE_CHOSEONG
        .iter()
        .find(|&&(base, _)| base == current)
        .map(|&(_, tense)| tense)
}

pub fn compound_vowel(base: usize, added: usize) -> Option<usize> {
    COMPOUND_VOWELS
        .iter()
        .find(|&&(b, a, _)| b == base && a == added)
        .map(|&(_, _, compound)| compound)
}

/// Base and added vowel of a compound jungseong; `None` for simple vowels.
pub fn split_compound_vowel(compound: usize) -> Option<(usize, usize)> {
    VOWEL_SPLITS.get(compound).copied().flatten()
}

/// Compound final formed by appending consonant `adding` to final `current`.
pub fn compound_jongseong(current: usize, adding: char) -> Option<usize> {
    JONGSEONG_SPLITS
        .iter()
        .find(|&&(_, remaining, split)| remaining == current && split == adding)
        .map(|&(compound, _, _)| compound)
}

/// Split a compound final into the final that stays and the consonant that
/// leaves; `None` for simple finals.
pub fn split_jongseong(compound: usize) -> Option<(usize, char)> {
    JONGSEONG_SPLITS
        .iter()
        .find(|&&(c, _, _)| c == compound)
        .map(|&(_, remaining, split)| (remaining, split))
}

pub fn is_compound_jongseong(index: usize) -> bool {
    split_jongseong(index).is_some()
}

/// Choseong carrying the same sound as a simple final.
pub fn jongseong_to_choseong(index: usize) -> Option<usize> {
    JONGSEONG_TO_CHOSEONG
        .iter()
        .find(|&&(jong, _)| jong == index)
        .map(|&(_, cho)| cho)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(CHOSEONG.len(), 19);
        assert_eq!(JUNGSEONG.len(), 21);
        assert_eq!(JONGSEONG.len(), 28);
        assert_eq!(JONGSEONG[0], None);
    }

    #[test]
    fn index_lookups() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(choseong_index('ㄳ'), None);
        assert_eq!(jungseong_index('ㅏ'), Some(0));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(jongseong_index('ㅃ'), None);
        assert_eq!(jongseong_index('ㅉ'), None);
    }

    #[test]
    fn jamo_glyphs() {
        assert_eq!(choseong_jamo(11), Some('ㅇ'));
        assert_eq!(jungseong_jamo(9), Some('ㅘ'));
        assert_eq!(jongseong_jamo(0), None);
        assert_eq!(jongseong_jamo(18), Some('ㅄ'));
        assert_eq!(choseong_jamo(19), None);
    }

    #[test]
    fn exactly_five_double_consonants() {
        let doubled: Vec<usize> = CHOSEONG
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| double_choseong(i, c))
            .collect();
        assert_eq!(doubled, vec![1, 4, 8, 10, 13]);
    }

    #[test]
    fn mixed_consonants_do_not_double() {
        assert_eq!(double_choseong(0, 'ㄴ'), None);
        // Tense consonants do not triple.
        assert_eq!(double_choseong(1, 'ㄲ'), None);
        assert_eq!(double_choseong(2, 'ㄴ'), None);
    }

    #[test]
    fn compound_vowel_pairs() {
        assert_eq!(compound_vowel(8, 0), Some(9));
        assert_eq!(compound_vowel(13, 4), Some(14));
        assert_eq!(compound_vowel(18, 20), Some(19));
        assert_eq!(compound_vowel(0, 8), None);
    }

    #[test]
    fn vowel_splits_invert_compounds() {
        for &(base, added, compound) in &COMPOUND_VOWELS {
            assert_eq!(split_compound_vowel(compound), Some((base, added)));
        }
        assert_eq!(split_compound_vowel(0), None);
        assert_eq!(split_compound_vowel(21), None);
    }

    #[test]
    fn compound_jongseong_pairs() {
        assert_eq!(compound_jongseong(1, 'ㅅ'), Some(3)); // ㄳ
        assert_eq!(compound_jongseong(8, 'ㄱ'), Some(9)); // ㄺ
        assert_eq!(compound_jongseong(17, 'ㅅ'), Some(18)); // ㅄ
        assert_eq!(compound_jongseong(1, 'ㄱ'), None);
        assert_eq!(compound_jongseong(4, 'ㄱ'), None);
    }

    #[test]
    fn jongseong_split_roundtrip() {
        for &(compound, remaining, split) in &JONGSEONG_SPLITS {
            assert_eq!(split_jongseong(compound), Some((remaining, split)));
            assert_eq!(compound_jongseong(remaining, split), Some(compound));
            assert!(is_compound_jongseong(compound));
            // The split-off consonant can always start the next syllable.
            assert!(choseong_index(split).is_some());
        }
        assert_eq!(split_jongseong(1), None);
    }

    #[test]
    fn every_simple_final_links() {
        for jong in 1..JONGSEONG.len() {
            if is_compound_jongseong(jong) {
                assert_eq!(jongseong_to_choseong(jong), None);
                continue;
            }
            let cho = jongseong_to_choseong(jong).expect("simple final must link");
            assert_eq!(choseong_jamo(cho), jongseong_jamo(jong));
        }
        assert_eq!(jongseong_to_choseong(0), None);
    }

    #[test]
    fn consonant_vowel_classes() {
        assert!(is_consonant('ㄱ'));
        assert!(is_consonant('ㅄ'));
        assert!(!is_consonant('ㅏ'));
        assert!(is_vowel('ㅢ'));
        assert!(!is_vowel('q'));
    }
}
