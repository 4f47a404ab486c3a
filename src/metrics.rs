use std::time::Duration;

/// Characters that count as one word when converting target length to words.
pub const CHARS_PER_WORD: usize = 5;

/// Words per minute for a target of `target_len` characters typed in `elapsed`.
///
/// The word count is the whole number of five-character groups in the target,
/// so a 22 character phrase counts as four words. Returns 0 for a zero duration.
pub fn words_per_minute(target_len: usize, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes == 0.0 {
        return 0;
    }

    let words = (target_len / CHARS_PER_WORD) as f64;
    (words / minutes) as u32
}

/// Percentage of target positions matched exactly by `typed`.
///
/// Only the overlapping prefix is compared, but the denominator is always the
/// target length, so missing characters count against the result.
pub fn accuracy(typed: &[char], target: &[char]) -> f64 {
    if target.is_empty() {
        return if typed.is_empty() { 100.0 } else { 0.0 };
    }

    let correct = typed
        .iter()
        .zip(target.iter())
        .filter(|(typed, expected)| typed == expected)
        .count();

    (correct as f64 / target.len() as f64) * 100.0
}
