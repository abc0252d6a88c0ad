//! Best-effort English singularization

/// Reduces a noun or verb form to its singular form
pub trait Singularizer: Send + Sync + 'static {
    /// Return the singular form of a lowercase word
    fn singularize(&self, word: &str) -> String;
}

/// Words that are the same in singular and plural, or only look plural
const INVARIANT: &[&str] = &[
    "always", "news", "series", "species", "sheep", "deer", "fish", "moose", "swine", "bison",
    "aircraft", "means", "this", "his", "hers", "its", "ours", "yours", "theirs", "is", "was",
    "has", "does", "yes", "thus", "plus", "us", "perhaps", "besides", "sometimes", "towards",
    "afterwards", "whereas", "various", "famous", "nervous", "serious", "physics",
    "mathematics", "economics", "politics", "athletics", "measles", "chaos", "lens", "gas",
    "bus", "less", "unless", "across", "christmas",
];

/// Irregular plural to singular pairs
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("calves", "calf"),
    ("thieves", "thief"),
    ("elves", "elf"),
    ("selves", "self"),
    ("themselves", "themselves"),
    ("ourselves", "ourselves"),
    ("yourselves", "yourselves"),
    ("shoes", "shoe"),
    ("toes", "toe"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("pies", "pie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("dies", "die"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("axes", "axis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("data", "datum"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
];

/// Suffix rewrites, checked in order; first match wins
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("oes", "o"),
    ("ies", "y"),
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("s", ""),
];

/// Rule-based English singularizer
#[derive(Debug, Clone, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    /// Create a new inflector
    pub fn new() -> Self {
        Self
    }
}

impl Singularizer for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        if word.len() < 3 || INVARIANT.contains(&word) {
            return word.to_string();
        }

        if let Some(&(_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
            return singular.to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                // Keep at least two characters of stem ("yes" is invariant, "gas" too)
                if stem.chars().count() < 2 {
                    return word.to_string();
                }
                return format!("{stem}{replacement}");
            }
        }

        word.to_string()
    }
}
