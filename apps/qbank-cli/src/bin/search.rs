use std::env;
use std::time::Duration;

use qbank_cli::{bootstrap, init_tracing, resolve_subject};
use qbank_core::Error;
use qbank_embed::default_embedder;
use qbank_retrieval::{Filters, RetrievalEngine, SearchRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <subject> [query] [--company C] [--difficulty D] [--topic T] [--all]", args[0]);
        eprintln!("Example: {} dsa 'sliding window' --difficulty Medium --topic Arrays", args[0]);
        std::process::exit(1);
    }
    let requested_subject = args[1].clone();
    let mut query: Option<String> = None;
    let mut filters = Filters::default();
    let mut list_all = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--company" => {
                if i + 1 < args.len() { filters.company = args[i + 1].clone(); i += 1; }
                else { eprintln!("Error: --company requires a value"); std::process::exit(1); }
            }
            "--difficulty" => {
                if i + 1 < args.len() { filters.difficulty = args[i + 1].clone(); i += 1; }
                else { eprintln!("Error: --difficulty requires a value"); std::process::exit(1); }
            }
            "--topic" => {
                if i + 1 < args.len() { filters.topic = args[i + 1].clone(); i += 1; }
                else { eprintln!("Error: --topic requires a value"); std::process::exit(1); }
            }
            "--all" => list_all = true,
            _ if !args[i].starts_with('-') && query.is_none() => query = Some(args[i].clone()),
            _ => {}
        }
        i += 1;
    }

    let (settings, corpora) = bootstrap()?;
    let subject = resolve_subject(&settings, &corpora, &requested_subject).to_string();
    let embedder = default_embedder(&settings.embedding)?;
    let engine = RetrievalEngine::new(corpora, embedder)
        .with_top_k(settings.top_k)
        .with_embed_timeout(Duration::from_secs(settings.embedding.timeout_secs));

    let request = SearchRequest { query, filters };
    println!("🔍 qbank-search\n===============");
    println!("Subject: {subject}");
    if let Some(q) = &request.query {
        println!("Query: {q}");
    }

    if list_all {
        match engine.search_all(&subject, &request).await {
            Ok(results) => {
                println!("\n🔍 Found {} matching questions", results.len());
                for (i, r) in results.iter().enumerate() {
                    println!(
                        "\n  {}. similarity={:.4}  id={}  difficulty={}",
                        i + 1,
                        r.similarity,
                        r.id,
                        r.difficulty.as_deref().unwrap_or("-")
                    );
                    println!("     📝 {}  [topics: {}]", r.title, r.topics.join(", "));
                }
            }
            Err(e) => fail(&e),
        }
    } else {
        match engine.search_one(&subject, &request).await {
            Ok(selected) => {
                println!("\n✅ Selected question:");
                println!("{}", serde_json::to_string_pretty(&selected)?);
            }
            Err(e) => fail(&e),
        }
    }
    Ok(())
}

fn fail(e: &Error) -> ! {
    match e {
        Error::NoMatch => eprintln!("No matches found. Try different filters."),
        other => eprintln!("Error: {other}"),
    }
    std::process::exit(1);
}
