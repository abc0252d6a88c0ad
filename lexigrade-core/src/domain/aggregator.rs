//! Consensus grade and median over the formula outputs

use super::formulas::{grade_suffix, FormulaEngine, FormulaScores};
use super::rounding::legacy_round;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result of the consensus vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeConsensus {
    /// Winning grade as a number
    Numeric(f64),
    /// Winning grade as a range label, e.g. "5th and 6th grade"
    Label(String),
}

impl GradeConsensus {
    /// Build a consensus value from a winning grade
    pub fn from_grade(grade: f64, float_output: bool) -> Self {
        if float_output {
            GradeConsensus::Numeric(grade)
        } else {
            GradeConsensus::Label(grade_label(grade))
        }
    }
}

impl fmt::Display for GradeConsensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeConsensus::Numeric(grade) => write!(f, "{grade}"),
            GradeConsensus::Label(label) => f.write_str(label),
        }
    }
}

/// Format a grade as `"{g-1}{suffix} and {g}{suffix} grade"`
pub fn grade_label(grade: f64) -> String {
    let upper = grade.floor();
    let lower = upper - 1.0;
    format!(
        "{}{} and {}{} grade",
        lower as i64,
        grade_suffix(lower),
        upper as i64,
        grade_suffix(upper)
    )
}

fn floor_vote(score: f64) -> f64 {
    legacy_round(score, 0).floor()
}

fn ceil_vote(score: f64) -> f64 {
    score.ceil().floor()
}

/// The fifteen grade votes in fixed order
///
/// Flesch-Kincaid (floor, ceil), Flesch Reading Ease grade, then floor and
/// ceil of SMOG, Coleman-Liau, ARI, Dale-Chall grade, Linsear Write and
/// Gunning Fog.
pub fn consensus_votes(scores: &FormulaScores) -> Vec<f64> {
    let mut votes = Vec::with_capacity(15);
    votes.push(floor_vote(scores.flesch_kincaid_grade));
    votes.push(ceil_vote(scores.flesch_kincaid_grade));
    votes.push(scores.flesch_reading_ease_grade);

    for score in [
        scores.smog_index,
        scores.coleman_liau_index,
        scores.automated_readability_index,
        scores.dale_chall_grade,
        scores.linsear_write,
        scores.gunning_fog,
    ] {
        votes.push(floor_vote(score));
        votes.push(ceil_vote(score));
    }

    votes
}

/// The eight raw scores the median is taken over
pub fn median_inputs(scores: &FormulaScores) -> Vec<f64> {
    vec![
        scores.flesch_kincaid_grade,
        scores.flesch_reading_ease_grade,
        scores.smog_index,
        scores.coleman_liau_index,
        scores.automated_readability_index,
        scores.dale_chall_grade,
        scores.linsear_write,
        scores.gunning_fog,
    ]
}

// -0.0 and 0.0 vote together
fn vote_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Most frequent value, later values winning ties
///
/// Distinct values are visited in first-appearance order and replace the
/// running winner whenever their count is at least the best so far.
pub fn mode_grade(votes: &[f64]) -> Option<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut distinct = Vec::new();

    for &vote in votes {
        let count = counts.entry(vote_key(vote)).or_insert(0);
        if *count == 0 {
            distinct.push(vote);
        }
        *count += 1;
    }

    distinct
        .into_iter()
        .map(|vote| (vote, counts[&vote_key(vote)]))
        .fold(None, |best: Option<(f64, usize)>, (vote, count)| match best {
            Some((_, best_count)) if count < best_count => best,
            _ => Some((vote, count)),
        })
        .map(|(vote, _)| vote)
}

/// Median with the historical branch
///
/// With `half = len / 2`, an odd `half` averages elements `half - 1` and
/// `half`; an even `half` takes element `half`. Empty input gives `0.0`.
pub fn median_grade(mut scores: Vec<f64>) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.sort_by(f64::total_cmp);

    let half = scores.len() / 2;
    if half % 2 == 1 {
        (scores[half - 1] + scores[half]) / 2.0
    } else {
        scores[half]
    }
}

/// Combines formula outputs into a single grade
#[derive(Clone, Copy)]
pub struct Aggregator<'a> {
    engine: FormulaEngine<'a>,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over a formula engine
    pub fn new(engine: FormulaEngine<'a>) -> Self {
        Self { engine }
    }

    /// Consensus grade of the text
    pub fn text_standard(&self, text: &str, float_output: bool) -> GradeConsensus {
        let scores = self.engine.score_all(text);
        consensus_from_scores(&scores, float_output)
    }

    /// Median of the eight grade-like scores
    pub fn text_median(&self, text: &str) -> f64 {
        median_grade(median_inputs(&self.engine.score_all(text)))
    }
}

/// Winning grade of the vote over precomputed scores
pub fn consensus_grade(scores: &FormulaScores) -> f64 {
    let votes = consensus_votes(scores);
    let grade = mode_grade(&votes).unwrap_or(0.0);
    log::trace!("Consensus votes {votes:?} picked {grade}");
    grade
}

/// Consensus from precomputed scores
pub fn consensus_from_scores(scores: &FormulaScores, float_output: bool) -> GradeConsensus {
    GradeConsensus::from_grade(consensus_grade(scores), float_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_later_value_wins_ties() {
        assert_eq!(mode_grade(&[5.0, 6.0, 5.0, 6.0]), Some(6.0));
        assert_eq!(mode_grade(&[6.0, 5.0, 6.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_mode_highest_count_wins() {
        assert_eq!(mode_grade(&[7.0, 7.0, 7.0, 4.0, 4.0, 9.0]), Some(7.0));
    }

    #[test]
    fn test_mode_single_and_empty() {
        assert_eq!(mode_grade(&[3.0]), Some(3.0));
        assert_eq!(mode_grade(&[]), None);
    }

    #[test]
    fn test_mode_merges_signed_zero() {
        assert_eq!(mode_grade(&[-0.0, 1.0, 0.0]), Some(-0.0));
    }

    #[test]
    fn test_median_even_half_takes_middle() {
        // len 8, half 4 (even): element [4]
        let scores = vec![8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0];
        assert_eq!(median_grade(scores), 5.0);
    }

    #[test]
    fn test_median_odd_half_averages() {
        // len 6, half 3 (odd): mean of [2] and [3]
        let scores = vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        assert_eq!(median_grade(scores), 3.5);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median_grade(Vec::new()), 0.0);
    }

    #[test]
    fn test_grade_label_uses_suffix_table() {
        assert_eq!(grade_label(6.0), "5th and 6th grade");
        assert_eq!(grade_label(2.7), "1st and 2nd grade");
        assert_eq!(grade_label(3.0), "2nd and 3rd grade");
        assert_eq!(grade_label(22.0), "21th and 22th grade");
        assert_eq!(grade_label(0.0), "-1th and 0th grade");
    }

    #[test]
    fn test_votes_order_and_size() {
        let scores = FormulaScores {
            flesch_reading_ease: 116.15,
            flesch_reading_ease_grade: 16.0,
            flesch_kincaid_grade: 4.4,
            smog_index: 3.1,
            coleman_liau_index: 5.5,
            automated_readability_index: 6.0,
            linsear_write: 2.0,
            dale_chall_score: 0.3,
            dale_chall_grade: 4.0,
            gunning_fog: 2.4,
            lix: 6.0,
            rix: 0.0,
        };

        let votes = consensus_votes(&scores);
        assert_eq!(votes.len(), 15);
        assert_eq!(
            votes,
            vec![4.0, 5.0, 16.0, 3.0, 4.0, 6.0, 6.0, 6.0, 6.0, 4.0, 4.0, 2.0, 2.0, 2.0, 3.0]
        );
        // 4.0 and 6.0 both have four votes; 6.0 is seen later
        assert_eq!(mode_grade(&votes), Some(6.0));
        assert_eq!(
            consensus_from_scores(&scores, false),
            GradeConsensus::Label("5th and 6th grade".to_string())
        );
        assert_eq!(
            consensus_from_scores(&scores, true),
            GradeConsensus::Numeric(6.0)
        );
    }

    #[test]
    fn test_median_inputs_from_scores() {
        let scores = FormulaScores {
            flesch_kincaid_grade: 1.0,
            flesch_reading_ease_grade: 2.0,
            smog_index: 3.0,
            coleman_liau_index: 4.0,
            automated_readability_index: 5.0,
            dale_chall_grade: 6.0,
            linsear_write: 7.0,
            gunning_fog: 8.0,
            ..FormulaScores::default()
        };
        assert_eq!(median_grade(median_inputs(&scores)), 5.0);
    }

    #[test]
    fn test_consensus_serializes_untagged() {
        let numeric = serde_json::to_string(&GradeConsensus::Numeric(6.0)).unwrap();
        assert_eq!(numeric, "6.0");
        let label = serde_json::to_string(&GradeConsensus::Label("5th and 6th grade".into()))
            .unwrap();
        assert_eq!(label, "\"5th and 6th grade\"");
    }
}
