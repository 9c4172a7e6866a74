//! Core domain types for Hit and Blow
//!
//! This module contains the fundamental domain types. Everything here is pure:
//! randomness is injected, and nothing performs I/O.

mod code;
mod difficulty;
mod score;

pub use code::{Code, CodeError, SEPARATOR, SYMBOL_COUNT};
pub use difficulty::{Difficulty, DifficultyError};
pub use score::Score;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
        prop_oneof![Just(Difficulty::Normal), Just(Difficulty::Hard)]
    }

    proptest! {
        /// Property: generated secrets have the difficulty's length and distinct digits
        #[test]
        fn prop_secret_shape(difficulty in difficulty_strategy(), seed in any::<u64>()) {
            let secret = Code::random(difficulty, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(secret.len(), difficulty.code_length());
            prop_assert!(secret.digits().iter().all(|&d| usize::from(d) < SYMBOL_COUNT));
            let mut sorted = secret.digits().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), secret.len());
        }

        /// Property: hits + blows always equals the code length
        #[test]
        fn prop_hits_plus_blows_is_length(
            difficulty in difficulty_strategy(),
            secret_seed in any::<u64>(),
            guess_seed in any::<u64>(),
        ) {
            let secret = Code::random(difficulty, &mut StdRng::seed_from_u64(secret_seed));
            let guess = Code::random(difficulty, &mut StdRng::seed_from_u64(guess_seed));
            let score = Score::calculate(&guess, &secret);

            prop_assert_eq!(score.hits + score.blows, difficulty.code_length());
            prop_assert_eq!(score.is_perfect(), guess == secret);
        }

        /// Property: parsing the displayed form of a code yields the same code
        #[test]
        fn prop_display_parses_back(difficulty in difficulty_strategy(), seed in any::<u64>()) {
            let code = Code::random(difficulty, &mut StdRng::seed_from_u64(seed));
            let parsed = Code::parse(&code.to_string(), difficulty.code_length());
            prop_assert_eq!(parsed, Ok(code));
        }
    }
}
