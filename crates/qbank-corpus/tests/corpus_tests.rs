use std::fs;
use tempfile::TempDir;

use qbank_core::Error;
use qbank_corpus::{Corpus, CorpusSet};

const CODING_CORPUS: &str = r###"[
  {
    "id": "two-sum",
    "title": "Two Sum",
    "embedding": [0.1, 0.2, 0.3],
    "metadata": {
      "difficulty": "Easy",
      "topics": ["Arrays", "Hashing"],
      "companies": ["Google", "Amazon"]
    },
    "judge_context": {"hints": ["hash map"]},
    "display_markdown": "## Two Sum",
    "_metadata": {"embedding_model": "text-embedding-004"}
  },
  {
    "id": "lru-cache",
    "title": "LRU Cache",
    "embedding": [0.3, 0.1, 0.9],
    "metadata": {
      "difficulty": "Medium",
      "topics": ["Design", "Hashing"],
      "companies": ["Amazon"]
    }
  }
]"###;

const THEORY_CORPUS: &str = r#"[
  {
    "id": "acid",
    "question": "What are ACID properties?",
    "difficulty": "Easy",
    "topic": "Transactions",
    "embedding": [0.5, 0.5],
    "expected_points": ["atomicity", "consistency"],
    "keywords": ["ACID"],
    "reference_answer": "Atomicity, Consistency, Isolation, Durability."
  },
  {
    "id": "joins",
    "question": "Explain SQL joins.",
    "difficulty": "Medium",
    "topic": "SQL",
    "embedding": [0.9, 0.1]
  }
]"#;

fn write_corpus(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write corpus fixture");
    path
}

#[test]
fn nested_metadata_shape_normalizes() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "dsa.json", CODING_CORPUS);
    let corpus = Corpus::from_file("dsa", &path).expect("load");

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.dim(), 3);
    let q = corpus.get("two-sum").expect("record present");
    assert_eq!(q.metadata.difficulty.as_deref(), Some("Easy"));
    assert_eq!(q.metadata.topics, vec!["Arrays", "Hashing"]);
    assert_eq!(q.metadata.companies, vec!["Google", "Amazon"]);
    assert!(q.extra.contains_key("judge_context"), "opaque fields survive");
    assert!(q.extra.contains_key("_metadata"), "seed metadata survives");
}

#[test]
fn flat_theory_shape_normalizes() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "dbms.json", THEORY_CORPUS);
    let corpus = Corpus::from_file("dbms", &path).expect("load");

    let q = corpus.get("acid").expect("record present");
    assert_eq!(q.title, "What are ACID properties?", "title falls back to prompt");
    assert_eq!(q.metadata.difficulty.as_deref(), Some("Easy"));
    assert_eq!(q.metadata.topics, vec!["Transactions"], "singular topic becomes a set");
    assert!(q.metadata.companies.is_empty());
    assert!(q.extra.contains_key("reference_answer"));
}

#[test]
fn duplicate_ids_fail_fast() {
    let tmp = TempDir::new().expect("tempdir");
    let body = r#"[
      {"id": "a", "title": "A", "embedding": [1.0], "metadata": {"difficulty": "Easy"}},
      {"id": "a", "title": "A again", "embedding": [2.0], "metadata": {"difficulty": "Easy"}}
    ]"#;
    let path = write_corpus(&tmp, "bad.json", body);
    let err = Corpus::from_file("bad", &path).expect_err("duplicate id must fail");
    assert!(matches!(err, Error::MalformedCorpus(_)), "got {err:?}");
}

#[test]
fn inconsistent_dimensionality_fails_fast() {
    let tmp = TempDir::new().expect("tempdir");
    let body = r#"[
      {"id": "a", "title": "A", "embedding": [1.0, 2.0], "metadata": {}},
      {"id": "b", "title": "B", "embedding": [1.0], "metadata": {}}
    ]"#;
    let path = write_corpus(&tmp, "bad.json", body);
    let err = Corpus::from_file("bad", &path).expect_err("dim mismatch must fail");
    assert!(matches!(err, Error::MalformedCorpus(_)));
}

#[test]
fn missing_embedding_fails_fast() {
    let tmp = TempDir::new().expect("tempdir");
    let body = r#"[{"id": "a", "title": "A", "metadata": {"difficulty": "Easy"}}]"#;
    let path = write_corpus(&tmp, "bad.json", body);
    let err = Corpus::from_file("bad", &path).expect_err("empty embedding must fail");
    assert!(matches!(err, Error::MalformedCorpus(_)));
}

#[test]
fn unparseable_file_fails_fast() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "bad.json", "{ not json ]");
    let err = Corpus::from_file("bad", &path).expect_err("syntax error must fail");
    assert!(matches!(err, Error::MalformedCorpus(_)));
}

#[test]
fn filter_options_are_sorted_and_deduplicated() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "dsa.json", CODING_CORPUS);
    let corpus = Corpus::from_file("dsa", &path).expect("load");

    let options = corpus.filter_options();
    assert_eq!(options.companies, vec!["Amazon", "Google"]);
    assert_eq!(options.difficulties, vec!["Easy", "Medium"]);
    assert_eq!(options.topics, vec!["Arrays", "Design", "Hashing"]);
}

#[test]
fn lookup_by_id_strips_embedding() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "dbms.json", THEORY_CORPUS);
    let corpus = Corpus::from_file("dbms", &path).expect("load");

    let detail = corpus.question_detail("acid").expect("found");
    let json = serde_json::to_value(&detail).expect("serialize");
    assert!(json.get("embedding").is_none(), "embedding must never leak");
    assert_eq!(json["id"], "acid");
    assert_eq!(json["reference_answer"], "Atomicity, Consistency, Isolation, Durability.");
    assert!(json.get("similarity").is_none(), "lookup carries no similarity");
}

#[test]
fn lookup_of_absent_id_is_not_found() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_corpus(&tmp, "dbms.json", THEORY_CORPUS);
    let corpus = Corpus::from_file("dbms", &path).expect("load");

    let err = corpus.question_detail("nope").expect_err("absent id");
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn corpus_set_resolves_subjects() {
    let tmp = TempDir::new().expect("tempdir");
    let dsa = write_corpus(&tmp, "dsa.json", CODING_CORPUS);
    let dbms = write_corpus(&tmp, "dbms.json", THEORY_CORPUS);

    let mut set = CorpusSet::default();
    set.insert(Corpus::from_file("dsa", &dsa).expect("dsa"));
    set.insert(Corpus::from_file("dbms", &dbms).expect("dbms"));

    assert!(set.contains("dsa"));
    let subjects: Vec<&str> = set.subjects().collect();
    assert_eq!(subjects, vec!["dbms", "dsa"]);

    let err = set.corpus("linux").expect_err("unknown subject");
    assert!(matches!(err, Error::NotFound(_)));

    let detail = set.question_detail("dsa", "two-sum").expect("cross-set lookup");
    assert_eq!(detail.id, "two-sum");
}
