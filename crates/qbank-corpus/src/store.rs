//! Read-only corpus store, built once at startup and shared by all
//! request handlers. No globals: the set is constructed explicitly and
//! handed to whoever needs it (typically behind an `Arc`).

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use qbank_core::config::Settings;
use qbank_core::types::{FilterOptions, QuestionDetail, QuestionRecord};
use qbank_core::{Error, Result};

use crate::load;

/// One subject's immutable question collection.
#[derive(Debug)]
pub struct Corpus {
    subject: String,
    dim: usize,
    questions: Vec<QuestionRecord>,
}

impl Corpus {
    /// Build a corpus from already-normalized records, enforcing the
    /// same invariants as a file load. Used by fixtures and tests.
    pub fn new(subject: impl Into<String>, questions: Vec<QuestionRecord>) -> Result<Self> {
        let subject = subject.into();
        let dim = load::validate(&subject, &questions)?;
        Ok(Self {
            subject,
            dim,
            questions,
        })
    }

    pub fn from_file(subject: impl Into<String>, path: &Path) -> Result<Self> {
        let subject = subject.into();
        let (questions, dim) = load::load_corpus_file(&subject, path)?;
        Ok(Self {
            subject,
            dim,
            questions,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Embedding dimensionality shared by every record in this corpus.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Full-field lookup with the embedding stripped.
    pub fn question_detail(&self, id: &str) -> Result<QuestionDetail> {
        self.get(id)
            .map(QuestionRecord::detail)
            .ok_or_else(|| Error::NotFound(format!("question '{id}' in corpus '{}'", self.subject)))
    }

    /// Deduplicated, lexicographically sorted values for each filter
    /// dimension present in this corpus.
    pub fn filter_options(&self) -> FilterOptions {
        let mut companies = BTreeSet::new();
        let mut difficulties = BTreeSet::new();
        let mut topics = BTreeSet::new();
        for q in &self.questions {
            if let Some(d) = &q.metadata.difficulty {
                difficulties.insert(d.clone());
            }
            for t in &q.metadata.topics {
                topics.insert(t.clone());
            }
            for c in &q.metadata.companies {
                companies.insert(c.clone());
            }
        }
        FilterOptions {
            companies: companies.into_iter().collect(),
            difficulties: difficulties.into_iter().collect(),
            topics: topics.into_iter().collect(),
        }
    }
}

/// All loaded corpora, keyed by subject.
#[derive(Debug, Default)]
pub struct CorpusSet {
    corpora: BTreeMap<String, Corpus>,
}

impl CorpusSet {
    /// Load every corpus named in the settings. Fails fast on the
    /// first malformed file.
    pub fn load(settings: &Settings) -> Result<Self> {
        let mut set = Self::default();
        for (subject, path) in &settings.corpora {
            let corpus = Corpus::from_file(subject.clone(), Path::new(path))?;
            set.insert(corpus);
        }
        Ok(set)
    }

    pub fn insert(&mut self, corpus: Corpus) {
        self.corpora.insert(corpus.subject().to_string(), corpus);
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.corpora.contains_key(subject)
    }

    pub fn corpus(&self, subject: &str) -> Result<&Corpus> {
        self.corpora
            .get(subject)
            .ok_or_else(|| Error::NotFound(format!("corpus '{subject}'")))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.corpora.keys().map(String::as_str)
    }

    /// Lookup-by-id across the selected subject.
    pub fn question_detail(&self, subject: &str, id: &str) -> Result<QuestionDetail> {
        self.corpus(subject)?.question_detail(id)
    }
}
