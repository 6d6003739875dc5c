//! Built-in study passages used as typing material.
//!
//! The host normally supplies text fetched from the user's notes; these
//! passages back the demo and any session started without one.

use rand::Rng;

/// Bundled study passages.
pub const STUDY_TEXTS: [&str; 5] = [
    "Proteins are polypeptides folded into 3D shapes that perform biological functions. \
     The twenty amino acids combine through peptide bonds to create unique structures. \
     Enzymatic proteins accelerate chemical reactions while structural proteins provide \
     support. Understanding protein function requires analyzing their conformation and \
     molecular recognition abilities.",
    "Photosynthesis converts light energy into chemical energy through electron transport \
     chains. Chlorophyll absorbs photons exciting electrons to higher energy states. The \
     light dependent reactions produce ATP and NADPH in thylakoid membranes. Carbon \
     fixation in the stroma uses these molecules to synthesize glucose molecules.",
    "Data structures organize information efficiently for algorithms to process. Arrays \
     provide fast random access but fixed size constraints. Linked lists offer dynamic \
     allocation with slower sequential access patterns. Hash tables balance insertion \
     deletion and lookup operations with optimal performance.",
    "React components manage state through hooks enabling functional programming \
     paradigms. useState tracks component variables triggering re-renders on changes. \
     useEffect handles side effects after component mounts and updates. Context API \
     provides global state management across component hierarchies.",
    "Machine learning models learn patterns from training data to make predictions. \
     Neural networks stack layers of interconnected neurons processing information. \
     Backpropagation adjusts weights minimizing loss through gradient descent \
     optimization. Overfitting occurs when models memorize training data failing on \
     new examples.",
];

/// Passage by index, wrapping around the bundled set.
pub fn by_index(index: usize) -> &'static str {
    STUDY_TEXTS[index % STUDY_TEXTS.len()]
}

/// Uniformly random passage.
pub fn random(rng: &mut impl Rng) -> &'static str {
    STUDY_TEXTS[rng.gen_range(0..STUDY_TEXTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn by_index_wraps_around() {
        assert_eq!(by_index(0), STUDY_TEXTS[0]);
        assert_eq!(by_index(STUDY_TEXTS.len()), STUDY_TEXTS[0]);
        assert_eq!(by_index(STUDY_TEXTS.len() + 2), STUDY_TEXTS[2]);
    }

    #[test]
    fn random_picks_a_bundled_passage() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let text = random(&mut rng);
            assert!(STUDY_TEXTS.contains(&text));
        }
    }

    #[test]
    fn passages_are_typeable_ascii() {
        for text in STUDY_TEXTS {
            assert!(text.is_ascii());
            assert!(!text.is_empty());
        }
    }
}
