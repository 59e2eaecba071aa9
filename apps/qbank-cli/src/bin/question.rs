use std::env;

use qbank_cli::{bootstrap, init_tracing, resolve_subject};
use qbank_core::Error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <subject> <question-id>", args[0]);
        eprintln!("Example: {} dsa two-sum", args[0]);
        std::process::exit(1);
    }

    let (settings, corpora) = bootstrap()?;
    let subject = resolve_subject(&settings, &corpora, &args[1]);
    match corpora.question_detail(subject, &args[2]) {
        Ok(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
        Err(Error::NotFound(what)) => {
            eprintln!("Not found: {what}");
            std::process::exit(1);
        }
        Err(e) => return Err(Box::new(e)),
    }
    Ok(())
}
