mod error;


pub use error::LoadError;

use crate::document::{Corpus, Document};
use crate::preprocess::normalize_all;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extension of the raw tweet dumps picked up when walking a directory
pub const INPUT_EXTENSION: &str = "txt";

/// Counts gathered while loading a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub files: usize,
    pub lines: usize,
    pub empty_documents: usize,
}

/// Read a UTF-8 line-delimited file
pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents.lines().map(str::to_string).collect())
}

/// Resolve the input path to a list of files
///
/// A file yields itself. A directory is walked recursively for `.txt` files,
/// sorted by path so the corpus order is stable.
pub fn collect_input_files(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_input = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION));

        if is_input {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(LoadError::NoInput(path.to_path_buf()));
    }

    Ok(files)
}

/// Read and normalize every input file into one corpus
pub fn load_corpus(path: &Path) -> Result<(Corpus, LoadStats), LoadError> {
    let files = collect_input_files(path)?;
    let mut stats = LoadStats {
        files: files.len(),
        ..LoadStats::default()
    };

    let mut documents = Vec::new();
    for file in &files {
        let lines = read_lines(file)?;
        debug!(path = %file.display(), lines = lines.len(), "read input file");
        stats.lines += lines.len();
        documents.extend(normalize_all(lines).into_iter().map(Document::from));
    }

    let corpus: Corpus = documents.into_iter().collect();
    stats.empty_documents = corpus.iter().filter(|d| d.is_empty()).count();

    Ok((corpus, stats))
}

/// Write one normalized document per line
pub fn write_cleaned(path: &Path, corpus: &Corpus) -> Result<(), LoadError> {
    let write_err = |source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for doc in corpus.iter() {
        writeln!(out, "{}", doc.text()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    Ok(())
}
