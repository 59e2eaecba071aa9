use std::env;

use qbank_cli::{bootstrap, init_tracing, resolve_subject};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <subject>", args[0]);
        eprintln!("Example: {} dbms", args[0]);
        std::process::exit(1);
    }

    let (settings, corpora) = bootstrap()?;
    let subject = resolve_subject(&settings, &corpora, &args[1]);
    let corpus = corpora.corpus(subject)?;
    let options = corpus.filter_options();

    println!("🔍 qbank-filters ({subject}, {} questions)", corpus.len());
    println!("\nDifficulties:");
    for d in &options.difficulties {
        println!("  {d}");
    }
    println!("\nTopics:");
    for t in &options.topics {
        println!("  {t}");
    }
    if options.companies.is_empty() {
        println!("\nCompanies: (none in this corpus)");
    } else {
        println!("\nCompanies:");
        for c in &options.companies {
            println!("  {c}");
        }
    }
    Ok(())
}
