//! Hangul code point arithmetic.

/// First precomposed syllable '가' (U+AC00).
pub const SYLLABLE_BASE: u32 = 0xAC00;

pub const CHOSEONG_COUNT: u32 = 19;
pub const JUNGSEONG_COUNT: u32 = 21;
pub const JONGSEONG_COUNT: u32 = 28;
/// Syllables sharing one choseong (21 * 28).
pub const JUNGSEONG_BLOCK: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;
pub const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_BLOCK;

/// Compatibility jamo consonants ㄱ..ㅎ (U+3131..U+314E).
pub const COMPAT_CONSONANT_START: u32 = 0x3131;
pub const COMPAT_CONSONANT_END: u32 = 0x314E;
/// Compatibility jamo vowels ㅏ..ㅣ (U+314F..U+3163).
pub const COMPAT_VOWEL_START: u32 = 0x314F;
pub const COMPAT_VOWEL_END: u32 = 0x3163;

/// Build a precomposed syllable from its three indices.
///
/// `jong` 0 means no final consonant. Returns `None` when any index is
/// outside its table.
pub fn compose_syllable(cho: usize, jung: usize, jong: usize) -> Option<char> {
    let (cho, jung, jong) = (
        u32::try_from(cho).ok()?,
        u32::try_from(jung).ok()?,
        u32::try_from(jong).ok()?,
    );
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + cho * JUNGSEONG_BLOCK + jung * JONGSEONG_COUNT + jong)
}

/// Split a precomposed syllable into (choseong, jungseong, jongseong).
pub fn decompose_syllable(c: char) -> Option<(usize, usize, usize)> {
    let code = c as u32;
    if !(SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    Some((
        (offset / JUNGSEONG_BLOCK) as usize,
        ((offset % JUNGSEONG_BLOCK) / JONGSEONG_COUNT) as usize,
        (offset % JONGSEONG_COUNT) as usize,
    ))
}

pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(c as u32))
}

pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_CONSONANT_START..=COMPAT_VOWEL_END).contains(&(c as u32))
}

pub fn is_compat_consonant(c: char) -> bool {
    (COMPAT_CONSONANT_START..=COMPAT_CONSONANT_END).contains(&(c as u32))
}

pub fn is_compat_vowel(c: char) -> bool {
    (COMPAT_VOWEL_START..=COMPAT_VOWEL_END).contains(&(c as u32))
}
