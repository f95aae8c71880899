use rsmorph::{Analyzer, Lemmatizer, RuleStemmer};

fn main() -> anyhow::Result<()> {
    println!("=== rsmorph Basic Usage Example ===\n");

    // Example 1: The naive rule-based stemmer
    println!("--- Example 1: Rule-based suffix stripping ---");
    let stemmer = RuleStemmer::new();
    for word in ["running", "cats", "fastest", "slowly", "hopeless"] {
        println!("  {:<10} -> {}", word, stemmer.stem(word));
    }
    println!("\nNote the naive trims: 'running' keeps its doubled 'n', and");
    println!("'hopeless' loses two suffixes in one pass ('s', then 'es').");

    // Example 2: Irregular-form lookup
    println!("\n--- Example 2: Lemma lookup ---");
    let lemmatizer = Lemmatizer::new();
    for word in ["ran", "went", "better", "geese", "dog"] {
        println!("  {:<10} -> {}", word, lemmatizer.lemmatize(word));
    }

    // Example 3: Side-by-side comparison against Snowball
    println!("\n--- Example 3: Comparing all normalizers ---");
    let analyzer = Analyzer::new();
    let analyses = analyzer.analyze_text("The children were running faster than the geese");

    println!(
        "  {:<10} {:<10} {:<10} {:<10}",
        "word", "rule", "lemma", "snowball"
    );
    for a in &analyses {
        println!(
            "  {:<10} {:<10} {:<10} {:<10}",
            a.word, a.rule_stem, a.lemma, a.snowball_stem
        );
    }

    let summary = analyzer.summarize(&analyses);
    println!(
        "\n{} words, rule/snowball agree on {}, {} irregular forms",
        summary.words, summary.rule_snowball_agreement, summary.irregular_hits
    );

    // Example 4: Custom suffix list
    println!("\n--- Example 4: Custom suffix list ---");
    let custom = RuleStemmer::with_suffixes(vec!["ness".to_string(), "ment".to_string()]);
    for word in ["kindness", "development", "running"] {
        println!("  {:<12} -> {}", word, custom.stem(word));
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
