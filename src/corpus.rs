use rand::{seq::SliceRandom, Rng};

/// Phrases a session can ask the user to type.
pub const PHRASES: [&str; 5] = [
    "hello world",
    "rust keeps you honest",
    "ratatui makes terminal apps easy",
    "practice makes perfect",
    "fast fingers win races",
];

/// Pick a phrase uniformly at random. Repeats are allowed.
pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PHRASES.choose(rng).copied().unwrap_or(PHRASES[0])
}

pub fn contains(phrase: &str) -> bool {
    PHRASES.contains(&phrase)
}
