//! Print formula scores and the consensus grade for a few texts

use lexigrade_core::{Config, Formula, Input, ReadabilityAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let samples = [
        (
            "children's story",
            "The cat sat on the mat. The dog ran to the cat. The cat ran up a tree.",
        ),
        (
            "news",
            "The city council approved the new budget on Tuesday. Officials said the \
             plan would fund road repairs and extend library hours. Critics argued \
             that the spending was too high.",
        ),
        (
            "academic",
            "Contemporary epistemological investigations frequently necessitate \
             comprehensive methodological reconsideration. Consequently, \
             interdisciplinary collaboration facilitates substantially improved \
             theoretical understanding.",
        ),
    ];

    println!("=== Default analyzer ===");
    let analyzer = ReadabilityAnalyzer::new();
    for (name, text) in samples {
        let report = analyzer.analyze(Input::from_text(text))?;
        println!("\n{name}: {}", report.consensus.label);
        for formula in Formula::ALL {
            println!("  {:<28} {:>8.2}", formula.name(), report.scores.get(formula));
        }
        println!("  {:<28} {:>8.2}", "Median grade", report.median_grade);
    }

    println!("\n=== Extra easy words ===");
    let config = Config::builder()
        .extra_words(["epistemological", "methodological"])
        .build()?;
    let custom = ReadabilityAnalyzer::with_config(config)?;
    let (_, text) = samples[2];
    println!(
        "Dale-Chall: {} (default {})",
        custom.dale_chall_readability_score(text),
        analyzer.dale_chall_readability_score(text)
    );
    println!("Difficult words: {:?}", custom.difficult_words(text, 2));

    Ok(())
}
