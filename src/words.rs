use rand::seq::SliceRandom;

pub const WORDS: &[&str] = &[
    "Breathe", "Begin", "Flow", "Focus", "Create", "Listen", "Present", "Start", "Simplify",
    "Center", "Finish", "Notice", "Steady", "Courage", "Soft", "Patience", "Trust", "Light",
    "Calm", "Explore", "Learn", "Move", "Pause", "Grateful", "Gentle", "Shape", "Quiet", "Grow",
    "Return", "Align",
];

pub const FALLBACK_WORD: &str = "Focus";

pub fn pick_word(excluding: Option<&str>) -> String {
    pick_from(WORDS, excluding)
}

pub fn pick_from(vocab: &[&str], excluding: Option<&str>) -> String {
    if vocab.is_empty() {
        return FALLBACK_WORD.to_string();
    }
    let pool: Vec<&str> = match excluding {
        Some(word) => vocab.iter().copied().filter(|c| *c != word).collect(),
        None => vocab.to_vec(),
    };
    let mut rng = rand::thread_rng();
    match pool.choose(&mut rng) {
        Some(word) => (*word).to_string(),
        // exclusion emptied the pool, so the excluded word is all there is
        None => excluding.unwrap_or(FALLBACK_WORD).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_word_returns_a_vocabulary_member() {
        for _ in 0..50 {
            let word = pick_word(None);
            assert!(WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn excluded_word_is_never_picked_from_a_larger_pool() {
        for _ in 0..200 {
            assert_eq!(pick_from(&["Calm", "Flow"], Some("Calm")), "Flow");
        }
        for _ in 0..200 {
            let word = pick_word(Some("Focus"));
            assert_ne!(word, "Focus");
            assert!(WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn single_word_vocabulary_falls_back_to_the_excluded_word() {
        assert_eq!(pick_from(&["Focus"], Some("Focus")), "Focus");
    }

    #[test]
    fn empty_vocabulary_falls_back() {
        assert_eq!(pick_from(&[], None), FALLBACK_WORD);
        assert_eq!(pick_from(&[], Some("Calm")), FALLBACK_WORD);
    }
}
