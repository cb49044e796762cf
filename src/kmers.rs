use std::sync::Arc;

use proptest::strategy::{BoxedStrategy, Just, Strategy};

use crate::{BioError, Result, alphabet::Alphabet, sequence::symbol_string};

/// A strategy for free-standing k-mers: strings of exactly `k` symbols of
/// `alphabet`.
///
/// Lengths are unsigned, so a negative `k` is ruled out by the signature. A
/// `k` of zero yields the empty string. [`DEFAULT_KSIZE`](crate::DEFAULT_KSIZE)
/// is the conventional length when a test has no preference.
pub fn kmer(alphabet: Alphabet, k: usize) -> impl Strategy<Value = String> {
    symbol_string(alphabet, k)
}

/// A strategy for k-mers sampled from `seq`.
///
/// The start offset is drawn uniformly from `0..=n - k`, `n` being the
/// number of characters in `seq`. When `rc` is
/// set, a second, independent draw decides whether the literal window or its
/// reverse complement under `alphabet` is returned. Keeping the two draws
/// separate lets the runner shrink them independently, and every value is a
/// window of `seq` or the reverse complement of one.
///
/// # Panics
///
/// Sampling from a sequence shorter than `k` is a caller bug and panics, as
/// does asking for reverse complements of a protein or of a sequence holding
/// symbols outside `alphabet`. Use [`try_kmers`] to get these as errors.
pub fn kmers(seq: &str, alphabet: Alphabet, k: usize, rc: bool) -> BoxedStrategy<String> {
    match try_kmers(seq, alphabet, k, rc) {
        Ok(strategy) => strategy,
        Err(e) => panic!("kmers: {e}"),
    }
}

/// Checked form of [`kmers`].
///
/// Lengths and offsets count characters, so without `rc` any `&str` can be
/// sampled.
///
/// # Returns
///
/// * `Ok(strategy)` – Parameters are consistent.
/// * `Err(BioError::InvalidLength)` – If `seq` has fewer than `k` characters.
/// * `Err(BioError::UnsupportedOperation)` – If `rc` is set for `Alphabet::Protein`.
/// * `Err(BioError::InvalidSymbol)` – If `rc` is set and `seq` holds a symbol
///   outside `alphabet`.
pub fn try_kmers(seq: &str, alphabet: Alphabet, k: usize, rc: bool) -> Result<BoxedStrategy<String>> {
    // Byte offset of every character, plus the end of the string.
    let bounds: Arc<[usize]> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let len = bounds.len() - 1;
    if len < k {
        return Err(BioError::InvalidLength { k, len });
    }

    // Resolve the complement map up front so sampling cannot fail.
    let complement = if rc {
        let map = alphabet.complement()?;
        map.check(seq)?;
        Some(map)
    } else {
        None
    };

    tracing::debug!(%alphabet, len, k, rc, "kmer sampling strategy");

    let seq: Arc<str> = Arc::from(seq);
    let flip = match complement {
        Some(_) => proptest::bool::ANY.boxed(),
        None => Just(false).boxed(),
    };

    Ok((0..=len - k, flip)
        .prop_map(move |(offset, flip)| {
            let window = &seq[bounds[offset]..bounds[offset + k]];
            match complement {
                // Checked above: every symbol is ASCII.
                Some(map) if flip => map.apply_reversed(window.as_bytes()),
                _ => window.to_owned(),
            }
        })
        .boxed())
}
