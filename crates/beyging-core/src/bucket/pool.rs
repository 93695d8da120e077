use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{bucket_path, BucketError};

/// Read-side bucket store.
///
/// Bucket files are loaded on first use and memoized. A bucket missing
/// from `loaded` has not been read yet; a present but empty list means the
/// file was absent or blank.
#[derive(Debug)]
pub struct BucketPool {
    name: String,
    dir: PathBuf,
    loaded: HashMap<usize, Vec<String>>,
}

impl BucketPool {
    pub fn new(name: &str, dir: &Path) -> Self {
        Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            loaded: HashMap::new(),
        }
    }

    pub fn is_loaded(&self, bucket: usize) -> bool {
        self.loaded.contains_key(&bucket)
    }

    /// Lemmas of `bucket`, reading its file on first access. A missing file
    /// yields an empty bucket.
    pub fn load(&mut self, bucket: usize) -> Result<&[String], BucketError> {
        if !self.loaded.contains_key(&bucket) {
            let lemmas = self.read_file(bucket)?;
            debug!(store = %self.name, bucket, lemmas = lemmas.len(), "loaded bucket");
            self.loaded.insert(bucket, lemmas);
        }
        Ok(self.loaded.get(&bucket).map(Vec::as_slice).unwrap_or_default())
    }

    /// Draw one lemma uniformly at random from `bucket`.
    pub fn choose<R: Rng + ?Sized>(
        &mut self,
        bucket: usize,
        rng: &mut R,
    ) -> Result<&str, BucketError> {
        if !self.loaded.contains_key(&bucket) {
            self.load(bucket)?;
        }
        match self.loaded.get(&bucket).and_then(|lemmas| lemmas.choose(rng)) {
            Some(lemma) => Ok(lemma.as_str()),
            None => Err(BucketError::Empty {
                name: self.name.clone(),
                bucket,
            }),
        }
    }

    fn read_file(&self, bucket: usize) -> Result<Vec<String>, BucketError> {
        let path = bucket_path(&self.dir, &self.name, bucket);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut lemmas = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let lemma = line.trim();
            if !lemma.is_empty() {
                lemmas.push(lemma.to_string());
            }
        }
        Ok(lemmas)
    }
}
