//! Readability analyzer facade

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{
    AnalysisMetadata, Config, ConsensusGrade, DictionarySource, Error, Input, Language,
    ReadabilityReport, TextStatistics,
};
use crate::domain::{
    consensus_grade, grade_label, median_grade, median_inputs, tokenizer, Aggregator,
    Dictionary, DifficultWordClassifier, EnglishInflector, EnglishSyllableEstimator,
    FormulaEngine, FormulaScores, GradeConsensus, LexicalNormalizer, MetricPrimitives,
    Singularizer, SyllableEstimator, DALE_CHALL_THRESHOLD,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores texts with every readability formula
///
/// Holds the shared dictionary and the syllable and singularization
/// capabilities. The analyzer is `Send + Sync` and can be shared across
/// threads.
pub struct ReadabilityAnalyzer {
    dictionary: Arc<Dictionary>,
    syllables: Arc<dyn SyllableEstimator>,
    singularizer: Arc<dyn Singularizer>,
    config: Config,
}

impl ReadabilityAnalyzer {
    /// Create an analyzer with the embedded dictionary and English rules
    pub fn new() -> Self {
        Self::with_components(
            Dictionary::embedded(),
            Arc::new(EnglishSyllableEstimator::new()),
            Arc::new(EnglishInflector::new()),
        )
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let dictionary = Self::load_dictionary(&config)?;
        let syllables = Self::create_syllable_estimator(&config.language);
        log::debug!(
            "Created analyzer for {} with {} easy words",
            config.language.code(),
            dictionary.len()
        );

        Ok(Self {
            dictionary,
            syllables,
            singularizer: Arc::new(EnglishInflector::new()),
            config,
        })
    }

    /// Create an analyzer for a specific language
    pub fn with_language(lang_code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().language(lang_code).build()?;
        Self::with_config(config)
    }

    /// Create an analyzer from explicit collaborators
    pub fn with_components(
        dictionary: Arc<Dictionary>,
        syllables: Arc<dyn SyllableEstimator>,
        singularizer: Arc<dyn Singularizer>,
    ) -> Self {
        Self {
            dictionary,
            syllables,
            singularizer,
            config: Config::default(),
        }
    }

    fn load_dictionary(config: &Config) -> Result<Arc<Dictionary>, Error> {
        let base = match &config.dictionary {
            DictionarySource::Embedded => Dictionary::embedded(),
            DictionarySource::File(path) => Arc::new(Dictionary::from_file(path)?),
        };

        if config.extra_words.is_empty() {
            return Ok(base);
        }

        let mut dictionary = Dictionary::clone(&base);
        dictionary.extend(&config.extra_words);
        Ok(Arc::new(dictionary))
    }

    fn create_syllable_estimator(language: &Language) -> Arc<dyn SyllableEstimator> {
        match language {
            Language::EnglishUs => Arc::new(EnglishSyllableEstimator::new()),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The easy-word dictionary in use
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn normalizer(&self) -> LexicalNormalizer<'_> {
        LexicalNormalizer::new(&self.dictionary, &*self.singularizer)
    }

    fn metrics(&self) -> MetricPrimitives<'_> {
        MetricPrimitives::new(&*self.syllables)
    }

    fn classifier(&self) -> DifficultWordClassifier<'_> {
        DifficultWordClassifier::new(self.normalizer(), &*self.syllables)
    }

    /// Formula engine borrowing this analyzer's components
    pub fn engine(&self) -> FormulaEngine<'_> {
        FormulaEngine::new(self.metrics(), self.classifier())
    }

    // Tokenizer

    /// Words after optional punctuation removal
    pub fn word_count(&self, text: &str, strip_punctuation: bool) -> usize {
        tokenizer::word_count(text, strip_punctuation)
    }

    /// Sentences with more than two words, at least one
    pub fn sentence_count(&self, text: &str) -> usize {
        tokenizer::sentence_count(text)
    }

    /// Characters, optionally without spaces
    pub fn char_count(&self, text: &str, ignore_spaces: bool) -> usize {
        tokenizer::char_count(text, ignore_spaces)
    }

    /// Characters that are not punctuation, optionally without spaces
    pub fn letter_count(&self, text: &str, ignore_spaces: bool) -> usize {
        tokenizer::letter_count(text, ignore_spaces)
    }

    /// Text with the punctuation class removed
    pub fn remove_punctuation(&self, text: &str) -> String {
        tokenizer::remove_punctuation(text)
    }

    /// Words longer than six characters
    pub fn long_word_count(&self, text: &str) -> usize {
        tokenizer::long_word_count(text)
    }

    // Words

    /// Estimated syllables in the text
    pub fn syllable_count(&self, text: &str) -> usize {
        self.metrics().syllable_count(text)
    }

    /// Words with three or more syllables
    pub fn polysyllable_count(&self, text: &str) -> usize {
        self.metrics().polysyllable_count(text)
    }

    /// Dictionary form of a word
    pub fn normalize(&self, word: &str) -> String {
        self.normalizer().normalize(word)
    }

    /// Present-tense form of a lowercase word
    pub fn present_tense(&self, word: &str) -> String {
        self.normalizer().present_tense(word)
    }

    /// Distinct difficult words at a syllable threshold
    pub fn difficult_word_count(&self, text: &str, threshold: usize) -> usize {
        self.classifier().difficult_word_count(text, threshold)
    }

    /// The distinct difficult words themselves
    pub fn difficult_words(&self, text: &str, threshold: usize) -> Vec<String> {
        self.classifier().difficult_words(text, threshold)
    }

    // Ratios

    /// Words per sentence
    pub fn average_sentence_length(&self, text: &str) -> f64 {
        self.metrics().average_sentence_length(text)
    }

    /// Syllables per word
    pub fn average_syllable_per_word(&self, text: &str) -> f64 {
        self.metrics().average_syllable_per_word(text)
    }

    /// Characters per word, spaces excluded
    pub fn average_character_per_word(&self, text: &str) -> f64 {
        self.metrics().average_character_per_word(text)
    }

    /// Letters per word
    pub fn average_letter_per_word(&self, text: &str) -> f64 {
        self.metrics().average_letter_per_word(text)
    }

    /// Sentences per word
    pub fn average_sentence_per_word(&self, text: &str) -> f64 {
        self.metrics().average_sentence_per_word(text)
    }

    // Formulas

    /// Flesch Reading Ease, higher is easier
    pub fn flesch_reading_ease(&self, text: &str) -> f64 {
        self.engine().flesch_reading_ease(text)
    }

    /// Flesch Reading Ease mapped to a school grade
    pub fn flesch_reading_ease_grade(&self, text: &str) -> f64 {
        self.engine().flesch_reading_ease_grade(text)
    }

    /// Flesch-Kincaid grade level
    pub fn flesch_kincaid_grade(&self, text: &str) -> f64 {
        self.engine().flesch_kincaid_grade(text)
    }

    /// SMOG grade, `0.0` below three sentences
    pub fn smog_index(&self, text: &str) -> f64 {
        self.engine().smog_index(text)
    }

    /// Coleman-Liau index
    pub fn coleman_liau_index(&self, text: &str) -> f64 {
        self.engine().coleman_liau_index(text)
    }

    /// Automated Readability Index
    pub fn automated_readability_index(&self, text: &str) -> f64 {
        self.engine().automated_readability_index(text)
    }

    /// Linsear Write over the first hundred words
    pub fn linsear_write_formula(&self, text: &str) -> f64 {
        self.engine().linsear_write_formula(text)
    }

    /// Dale-Chall readability score
    pub fn dale_chall_readability_score(&self, text: &str) -> f64 {
        self.engine().dale_chall_readability_score(text)
    }

    /// Dale-Chall score mapped to a school grade
    pub fn dale_chall_grade(&self, text: &str) -> f64 {
        self.engine().dale_chall_grade(text)
    }

    /// Gunning Fog index
    pub fn gunning_fog(&self, text: &str) -> f64 {
        self.engine().gunning_fog(text)
    }

    /// LIX: sentence length plus percentage of long words
    pub fn lix(&self, text: &str) -> f64 {
        self.engine().lix(text)
    }

    /// RIX: long words per sentence
    pub fn rix(&self, text: &str) -> f64 {
        self.engine().rix(text)
    }

    /// Every formula at once
    pub fn scores(&self, text: &str) -> FormulaScores {
        self.engine().score_all(text)
    }

    // Aggregation

    /// Consensus grade as a number or a range label
    pub fn text_standard(&self, text: &str, float_output: bool) -> GradeConsensus {
        Aggregator::new(self.engine()).text_standard(text, float_output)
    }

    /// Median of the grade-like scores
    pub fn text_median(&self, text: &str) -> f64 {
        Aggregator::new(self.engine()).text_median(text)
    }

    /// Analyze text held in memory
    pub fn analyze_text(&self, text: &str) -> ReadabilityReport {
        let start = Instant::now();
        let engine = self.engine();
        let metrics = engine.metrics();

        let scores = engine.score_all(text);
        let grade = consensus_grade(&scores);
        let difficult_words = self.difficult_words(text, DALE_CHALL_THRESHOLD);

        let statistics = TextStatistics {
            characters: tokenizer::char_count(text, true),
            letters: tokenizer::letter_count(text, true),
            words: tokenizer::word_count(text, true),
            sentences: tokenizer::sentence_count(text),
            syllables: metrics.syllable_count(text),
            polysyllables: metrics.polysyllable_count(text),
            long_words: tokenizer::long_word_count(text),
            difficult_words: difficult_words.len(),
            average_sentence_length: metrics.average_sentence_length(text),
            average_syllables_per_word: metrics.average_syllable_per_word(text),
        };

        let report = ReadabilityReport {
            statistics,
            scores,
            consensus: ConsensusGrade {
                grade,
                label: grade_label(grade),
            },
            median_grade: median_grade(median_inputs(&scores)),
            difficult_words,
            metadata: AnalysisMetadata {
                language: self.config.language.code().to_string(),
                dictionary_words: self.dictionary.len(),
                bytes_processed: text.len(),
                duration: start.elapsed(),
            },
        };

        log::debug!(
            "Analyzed {} words in {:?}, consensus {}",
            report.statistics.words,
            report.metadata.duration,
            report.consensus.label
        );
        report
    }

    /// Analyze any input
    pub fn analyze(&self, input: Input) -> Result<ReadabilityReport, Error> {
        let text = input.into_text()?;
        Ok(self.analyze_text(&text))
    }

    /// Analyze text from a reader
    pub fn analyze_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<ReadabilityReport, Error> {
        self.analyze(Input::from_reader(reader))
    }

    /// Analyze several inputs, in parallel when the `parallel` feature is on
    ///
    /// Results keep the order of `inputs`. The outer error is only returned
    /// when the thread pool cannot be built.
    pub fn analyze_batch(
        &self,
        inputs: Vec<Input>,
    ) -> Result<Vec<Result<ReadabilityReport, Error>>, Error> {
        self.analyze_batch_with(inputs, |_, _| {})
    }

    /// Like [`analyze_batch`](Self::analyze_batch), calling `on_complete` with
    /// the input index as soon as each input is scored
    ///
    /// Completion order follows the workers, not the input order.
    pub fn analyze_batch_with<F>(
        &self,
        inputs: Vec<Input>,
        on_complete: F,
    ) -> Result<Vec<Result<ReadabilityReport, Error>>, Error>
    where
        F: Fn(usize, &Result<ReadabilityReport, Error>) + Send + Sync,
    {
        log::debug!("Analyzing batch of {} inputs", inputs.len());

        let score = |(index, input): (usize, Input)| {
            let result = self.analyze(input);
            on_complete(index, &result);
            result
        };

        #[cfg(feature = "parallel")]
        {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(threads) = self.config.threads {
                builder = builder.num_threads(threads);
            }
            let pool = builder
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to build thread pool: {e}")))?;

            Ok(pool.install(|| inputs.into_par_iter().enumerate().map(score).collect()))
        }

        #[cfg(not(feature = "parallel"))]
        {
            Ok(inputs.into_iter().enumerate().map(score).collect())
        }
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
