//! Readability formulas
//!
//! Each formula is a pure function of the text. Intermediate ratios come from
//! [`MetricPrimitives`] already rounded, and every score is rounded again with
//! [`legacy_round`]. Texts without words score `0.0` on every formula.

use super::classifier::{DifficultWordClassifier, DALE_CHALL_THRESHOLD, GUNNING_FOG_THRESHOLD};
use super::metrics::MetricPrimitives;
use super::rounding::{finite_or_zero, legacy_round, ratio};
use super::tokenizer::{
    char_count, long_word_count, sentence_count, split_words, word_count,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading words Linsear Write samples
const LINSEAR_SAMPLE_WORDS: usize = 100;

/// The readability formulas this crate computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Flesch Reading Ease (higher is easier)
    FleschReadingEase,
    /// Flesch-Kincaid Grade Level
    FleschKincaidGrade,
    /// SMOG index
    SmogIndex,
    /// Coleman-Liau index
    ColemanLiauIndex,
    /// Automated Readability Index
    AutomatedReadabilityIndex,
    /// Linsear Write
    LinsearWrite,
    /// Dale-Chall readability score
    DaleChall,
    /// Gunning Fog index
    GunningFog,
    /// Läsbarhetsindex
    Lix,
    /// Rate index
    Rix,
}

impl Formula {
    /// Every formula, in report order
    pub const ALL: [Formula; 10] = [
        Formula::FleschReadingEase,
        Formula::FleschKincaidGrade,
        Formula::SmogIndex,
        Formula::ColemanLiauIndex,
        Formula::AutomatedReadabilityIndex,
        Formula::LinsearWrite,
        Formula::DaleChall,
        Formula::GunningFog,
        Formula::Lix,
        Formula::Rix,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Formula::FleschReadingEase => "flesch_reading_ease",
            Formula::FleschKincaidGrade => "flesch_kincaid_grade",
            Formula::SmogIndex => "smog_index",
            Formula::ColemanLiauIndex => "coleman_liau_index",
            Formula::AutomatedReadabilityIndex => "automated_readability_index",
            Formula::LinsearWrite => "linsear_write",
            Formula::DaleChall => "dale_chall",
            Formula::GunningFog => "gunning_fog",
            Formula::Lix => "lix",
            Formula::Rix => "rix",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Formula::FleschReadingEase => "Flesch Reading Ease",
            Formula::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Formula::SmogIndex => "SMOG Index",
            Formula::ColemanLiauIndex => "Coleman-Liau Index",
            Formula::AutomatedReadabilityIndex => "Automated Readability Index",
            Formula::LinsearWrite => "Linsear Write",
            Formula::DaleChall => "Dale-Chall Score",
            Formula::GunningFog => "Gunning Fog",
            Formula::Lix => "LIX",
            Formula::Rix => "RIX",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All formula outputs for one text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FormulaScores {
    pub flesch_reading_ease: f64,
    pub flesch_reading_ease_grade: f64,
    pub flesch_kincaid_grade: f64,
    pub smog_index: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
    pub linsear_write: f64,
    pub dale_chall_score: f64,
    pub dale_chall_grade: f64,
    pub gunning_fog: f64,
    pub lix: f64,
    pub rix: f64,
}

impl FormulaScores {
    /// Raw score of one formula
    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::FleschReadingEase => self.flesch_reading_ease,
            Formula::FleschKincaidGrade => self.flesch_kincaid_grade,
            Formula::SmogIndex => self.smog_index,
            Formula::ColemanLiauIndex => self.coleman_liau_index,
            Formula::AutomatedReadabilityIndex => self.automated_readability_index,
            Formula::LinsearWrite => self.linsear_write,
            Formula::DaleChall => self.dale_chall_score,
            Formula::GunningFog => self.gunning_fog,
            Formula::Lix => self.lix,
            Formula::Rix => self.rix,
        }
    }
}

/// Map a Flesch Reading Ease score to a school grade
///
/// Scores of 100 and above fall through to the last bucket, like scores
/// below 30.
pub fn flesch_ease_to_grade(score: f64) -> f64 {
    let buckets = [
        (90.0, 100.0, 5.0),
        (80.0, 90.0, 6.0),
        (70.0, 80.0, 7.0),
        (60.0, 70.0, 8.5),
        (50.0, 60.0, 11.0),
        (40.0, 50.0, 13.0),
        (30.0, 40.0, 15.0),
    ];

    buckets
        .iter()
        .find(|(low, high, _)| score >= *low && score < *high)
        .map_or(16.0, |(_, _, grade)| *grade)
}

/// Map a Dale-Chall score to a school grade
pub fn dale_chall_to_grade(score: f64) -> f64 {
    if score <= 4.9 {
        4.0
    } else if score < 5.9 {
        5.0
    } else if score < 6.9 {
        7.0
    } else if score < 7.9 {
        9.0
    } else if score < 8.9 {
        11.0
    } else if score < 9.9 {
        13.0
    } else {
        16.0
    }
}

/// Ordinal suffix for a grade
///
/// Only 1, 2 and 3 get "st", "nd" and "rd"; every other grade, 21 included,
/// gets "th". Reports rely on this exact table.
pub fn grade_suffix(grade: f64) -> &'static str {
    match grade.floor() as i64 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Computes readability formulas over borrowed components
#[derive(Clone, Copy)]
pub struct FormulaEngine<'a> {
    metrics: MetricPrimitives<'a>,
    classifier: DifficultWordClassifier<'a>,
}

impl<'a> FormulaEngine<'a> {
    /// Create an engine
    pub fn new(metrics: MetricPrimitives<'a>, classifier: DifficultWordClassifier<'a>) -> Self {
        Self {
            metrics,
            classifier,
        }
    }

    /// The ratio primitives this engine uses
    pub fn metrics(&self) -> &MetricPrimitives<'a> {
        &self.metrics
    }

    /// The difficult-word classifier this engine uses
    pub fn classifier(&self) -> &DifficultWordClassifier<'a> {
        &self.classifier
    }

    fn guarded(text: &str, score: impl FnOnce() -> f64) -> f64 {
        if word_count(text, true) == 0 {
            return 0.0;
        }
        finite_or_zero(score())
    }

    /// `206.835 - 1.015 * ASL - 84.6 * ASW`
    pub fn flesch_reading_ease(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let asl = self.metrics.average_sentence_length(text);
            let asw = self.metrics.average_syllable_per_word(text);
            legacy_round(206.835 - 1.015 * asl - 84.6 * asw, 2)
        })
    }

    /// Flesch Reading Ease mapped to a grade
    pub fn flesch_reading_ease_grade(&self, text: &str) -> f64 {
        flesch_ease_to_grade(self.flesch_reading_ease(text))
    }

    /// `0.39 * ASL + 11.8 * ASW - 15.59`
    pub fn flesch_kincaid_grade(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let asl = self.metrics.average_sentence_length(text);
            let asw = self.metrics.average_syllable_per_word(text);
            legacy_round(0.39 * asl + 11.8 * asw - 15.59, 1)
        })
    }

    /// Words with three or more syllables
    pub fn polysyllable_count(&self, text: &str) -> usize {
        self.metrics.polysyllable_count(text)
    }

    /// SMOG grade; needs at least three sentences, `0.0` otherwise
    pub fn smog_index(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let sentences = sentence_count(text);
            if sentences < 3 {
                return 0.0;
            }
            let polysyllables = self.polysyllable_count(text) as f64;
            let smog = 1.043 * (polysyllables * (30.0 / sentences as f64)).sqrt() + 3.1291;
            legacy_round(smog, 1)
        })
    }

    /// `0.058 * L - 0.296 * S - 15.8` with L letters and S sentences per 100 words
    pub fn coleman_liau_index(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let letters = legacy_round(self.metrics.average_letter_per_word(text) * 100.0, 2);
            let sentences = legacy_round(self.metrics.average_sentence_per_word(text) * 100.0, 2);
            legacy_round(0.058 * letters - 0.296 * sentences - 15.8, 2)
        })
    }

    /// `4.71 * chars/words + 0.5 * words/sentences - 21.43`
    pub fn automated_readability_index(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let chars = char_count(text, true);
            let words = word_count(text, true);
            let sentences = sentence_count(text);
            let per_word = legacy_round(ratio(chars, words), 2);
            let per_sentence = legacy_round(ratio(words, sentences), 2);
            legacy_round(4.71 * per_word + 0.5 * per_sentence - 21.43, 1)
        })
    }

    /// Linsear Write over the first hundred words
    pub fn linsear_write_formula(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let sample: Vec<&str> = split_words(text)
                .into_iter()
                .take(LINSEAR_SAMPLE_WORDS)
                .collect();

            let (easy, hard) = sample.iter().fold((0usize, 0usize), |(easy, hard), word| {
                if self.metrics.syllable_count(word) < 3 {
                    (easy + 1, hard)
                } else {
                    (easy, hard + 1)
                }
            });

            let sample_text = sample.join(" ");
            let number = (easy + hard * 3) as f64 / sentence_count(&sample_text) as f64;
            let score = if number <= 20.0 {
                (number - 2.0) / 2.0
            } else {
                number / 2.0
            };
            legacy_round(score, 1)
        })
    }

    /// Distinct difficult words for a syllable threshold
    pub fn difficult_word_count(&self, text: &str, threshold: usize) -> usize {
        self.classifier.difficult_word_count(text, threshold)
    }

    /// Dale-Chall readability score
    pub fn dale_chall_readability_score(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let words = word_count(text, true) as f64;
            let difficult = self.difficult_word_count(text, DALE_CHALL_THRESHOLD) as f64;
            let familiar_percent = (words - difficult) / words * 100.0;
            let difficult_percent = 100.0 - familiar_percent;

            let mut score = 0.1579 * difficult_percent
                + 0.0496 * self.metrics.average_sentence_length(text);
            if difficult_percent > 5.0 {
                score += 3.6365;
            }
            legacy_round(score, 2)
        })
    }

    /// Dale-Chall score mapped to a grade
    pub fn dale_chall_grade(&self, text: &str) -> f64 {
        dale_chall_to_grade(self.dale_chall_readability_score(text))
    }

    /// `0.4 * (ASL + percentage of difficult words)`
    pub fn gunning_fog(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let difficult = self.difficult_word_count(text, GUNNING_FOG_THRESHOLD);
            let difficult_percent = ratio(difficult, word_count(text, true)) * 100.0;
            let grade = 0.4 * (self.metrics.average_sentence_length(text) + difficult_percent);
            legacy_round(grade, 2)
        })
    }

    /// `ASL + percentage of words longer than six characters`
    pub fn lix(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            let long_percent = ratio(long_word_count(text), word_count(text, false)) * 100.0;
            legacy_round(self.metrics.average_sentence_length(text) + long_percent, 2)
        })
    }

    /// Long words per sentence
    pub fn rix(&self, text: &str) -> f64 {
        Self::guarded(text, || {
            legacy_round(ratio(long_word_count(text), sentence_count(text)), 2)
        })
    }

    /// Raw score of one formula
    pub fn score(&self, formula: Formula, text: &str) -> f64 {
        match formula {
            Formula::FleschReadingEase => self.flesch_reading_ease(text),
            Formula::FleschKincaidGrade => self.flesch_kincaid_grade(text),
            Formula::SmogIndex => self.smog_index(text),
            Formula::ColemanLiauIndex => self.coleman_liau_index(text),
            Formula::AutomatedReadabilityIndex => self.automated_readability_index(text),
            Formula::LinsearWrite => self.linsear_write_formula(text),
            Formula::DaleChall => self.dale_chall_readability_score(text),
            Formula::GunningFog => self.gunning_fog(text),
            Formula::Lix => self.lix(text),
            Formula::Rix => self.rix(text),
        }
    }

    /// Every formula at once
    pub fn score_all(&self, text: &str) -> FormulaScores {
        let flesch_reading_ease = self.flesch_reading_ease(text);
        let dale_chall_score = self.dale_chall_readability_score(text);

        FormulaScores {
            flesch_reading_ease,
            flesch_reading_ease_grade: flesch_ease_to_grade(flesch_reading_ease),
            flesch_kincaid_grade: self.flesch_kincaid_grade(text),
            smog_index: self.smog_index(text),
            coleman_liau_index: self.coleman_liau_index(text),
            automated_readability_index: self.automated_readability_index(text),
            linsear_write: self.linsear_write_formula(text),
            dale_chall_score,
            dale_chall_grade: dale_chall_to_grade(dale_chall_score),
            gunning_fog: self.gunning_fog(text),
            lix: self.lix(text),
            rix: self.rix(text),
        }
    }
}
