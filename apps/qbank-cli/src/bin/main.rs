use qbank_cli::{bootstrap, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let (settings, corpora) = bootstrap()?;

    println!("📚 qbank: interview question retrieval");
    println!("======================================");
    println!("Default subject: {}", settings.default_subject);
    println!("Top-k sample window: {}", settings.top_k);
    println!("\nLoaded corpora:");
    for subject in corpora.subjects() {
        let corpus = corpora.corpus(subject)?;
        println!("  {subject}: {} questions (dim {})", corpus.len(), corpus.dim());
    }
    println!("\nBinaries:");
    println!("  qbank-search <subject> [query] [--company C] [--difficulty D] [--topic T] [--all]");
    println!("  qbank-filters <subject>");
    println!("  qbank-question <subject> <id>");
    Ok(())
}
