//! Uniform winner selection.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::options::Choice;
use crate::ports::RandomSource;

/// Valid options required before a selection may run.
pub const MIN_SELECTABLE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("At least {required} options with text are required, got {actual}")]
    InvalidInput { required: usize, actual: usize },
}

impl SelectionError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidInput
    }
}

/// Outcome of one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Position of the winner within the eligible options.
    pub index: usize,
    pub winner: Choice,
}

/// Draws one option uniformly from the eligible (non-blank) entries of `options`.
///
/// Weights are carried on each option but deliberately not consulted.
/// Callers normally pass [`OptionSet::valid_choices`], in which case
/// `index` is a position in `options` itself.
///
/// [`OptionSet::valid_choices`]: crate::domain::options::OptionSet::valid_choices
pub fn select(options: &[Choice], rng: &dyn RandomSource) -> Result<Selection, SelectionError> {
    let eligible: Vec<&Choice> = options.iter().filter(|c| c.is_valid()).collect();
    if eligible.len() < MIN_SELECTABLE {
        return Err(SelectionError::InvalidInput {
            required: MIN_SELECTABLE,
            actual: eligible.len(),
        });
    }

    let index = rng.next_index(eligible.len());
    Ok(Selection {
        index,
        winner: eligible[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRandomSource, SeededRandomSource};
    use proptest::prelude::*;

    fn choices(labels: &[&str]) -> Vec<Choice> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| Choice::new(format!("{}", i + 1), *l, "#FF006E"))
            .collect()
    }

    #[test]
    fn fewer_than_two_valid_options_is_invalid_input() {
        let rng = SeededRandomSource::new(7);
        let err = select(&choices(&["Only", "", "  "]), &rng).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidInput {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn empty_input_is_invalid() {
        let rng = SeededRandomSource::new(7);
        assert!(select(&[], &rng).is_err());
    }

    #[test]
    fn index_comes_from_the_random_source() {
        let rng = FixedRandomSource::new(vec![2]);
        let selection = select(&choices(&["Pizza", "Tacos", "Sushi"]), &rng).unwrap();
        assert_eq!(selection.index, 2);
        assert_eq!(selection.winner.text, "Sushi");
    }

    #[test]
    fn blank_entries_are_never_chosen() {
        let rng = SeededRandomSource::new(11);
        let options = choices(&["Pizza", "", "Tacos"]);
        for _ in 0..200 {
            let selection = select(&options, &rng).unwrap();
            assert!(selection.winner.is_valid());
        }
    }

    #[test]
    fn weight_does_not_bias_selection() {
        let rng = SeededRandomSource::new(99);
        let mut options = choices(&["Heavy", "Light"]);
        options[0].weight = 1000.0;
        let heavy = (0..2000)
            .filter(|_| select(&options, &rng).unwrap().index == 0)
            .count();
        assert!((800..1200).contains(&heavy), "heavy picked {} times", heavy);
    }

    #[test]
    fn distribution_is_approximately_uniform() {
        // Chi-square with 3 degrees of freedom; 16.27 is the p = 0.001 critical value.
        let rng = SeededRandomSource::new(2024);
        let options = choices(&["A", "B", "C", "D"]);
        let trials = 10_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[select(&options, &rng).unwrap().index] += 1;
        }
        let expected = trials as f64 / 4.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi_square < 16.27, "chi-square {} for {:?}", chi_square, counts);
    }

    proptest! {
        #[test]
        fn winner_is_always_a_member(count in 2usize..20, seed in any::<u64>()) {
            let labels: Vec<String> = (0..count).map(|i| format!("option {}", i)).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let options = choices(&refs);
            let rng = SeededRandomSource::new(seed);

            let selection = select(&options, &rng).unwrap();
            prop_assert!(selection.index < count);
            prop_assert_eq!(&options[selection.index], &selection.winner);
        }
    }
}
