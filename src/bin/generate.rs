//! Acrostic generation demo.
//!
//! Builds a small character-bigram model from a text corpus and generates
//! one word per initial letter. The bigram model stands in for the trained
//! network the library normally drives; it implements the same
//! [`LanguageModel`] seam.

use acrostic_re::{generate_text, CharVocab, LanguageModel, Result, TextEncoder};
use clap::Parser;
use ndarray::{s, Array2, Array3};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;

/// Fallback corpus used when no file is supplied.
const DEFAULT_CORPUS: &str = "the quick brown fox jumps over the lazy dog \
and the small red hen ran down the long winding road while a young boy \
sang an old song about the sea and the wind and the rain that fell on \
the green hills near the quiet town where the river meets the shore ";

#[derive(Parser)]
struct Args {
    /// Initial letters, one per word to generate (e.g. "hwr")
    letters: String,

    /// Sampling temperature; lower is closer to argmax
    #[arg(long, default_value_t = 0.6)]
    temperature: f32,

    /// Seed for reproducible output; uses system entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Corpus file to build the bigram statistics from
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Model input window length
    #[arg(long, default_value_t = 8)]
    sample_len: usize,
}

/// Next-character bigram statistics over a fixed character set.
struct BigramModel {
    sample_len: usize,
    /// Row `i` holds unnormalized counts of the characters following `i`.
    counts: Array2<f32>,
}

impl BigramModel {
    /// Count adjacent character pairs in the corpus. The word-boundary
    /// column gets one smoothing count per row so every word can terminate.
    fn from_corpus(corpus: &str, vocab: &CharVocab, sample_len: usize) -> Result<Self> {
        let size = vocab.size();
        let mut counts = Array2::<f32>::zeros((size, size));

        let mut prev: Option<usize> = None;
        for ch in corpus.chars() {
            let index = vocab.index_of(ch)?;
            if let Some(prev) = prev {
                counts[[prev, index]] += 1.0;
            }
            prev = Some(index);
        }

        let space = vocab.index_of(' ')?;
        for mut row in counts.rows_mut() {
            row[space] += 1.0;
        }

        Ok(Self { sample_len, counts })
    }
}

impl LanguageModel for BigramModel {
    fn sample_len(&self) -> usize {
        self.sample_len
    }

    fn char_set_size(&self) -> usize {
        self.counts.nrows()
    }

    fn predict(&self, window: &Array3<f32>) -> Result<Array2<f32>> {
        // Only the newest window position matters for a bigram model.
        let last = window.slice(s![0, window.shape()[1] - 1, ..]);
        let prev = last
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);

        let row = self.counts.row(prev).to_owned();
        Ok(row.insert_axis(ndarray::Axis(0)))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let corpus = match &args.corpus {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("failed to read {:?}: {}; using built-in corpus", path, e);
            DEFAULT_CORPUS.to_string()
        }),
        None => DEFAULT_CORPUS.to_string(),
    };

    let vocab = CharVocab::from_text(&corpus);
    let model = BigramModel::from_corpus(&corpus, &vocab, args.sample_len)?;

    // Seed the window with word boundaries.
    let seed_indices = vec![vocab.index_of(' ')?; args.sample_len];
    let letters: Vec<char> = args.letters.chars().collect();

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let out = generate_text(
        &model,
        &vocab,
        &seed_indices,
        &letters,
        args.temperature,
        &mut *rng,
        None,
    )?;
    println!("{}", out);

    Ok(())
}
