use proptest::collection::{SizeRange, vec};
use proptest::sample::select;
use proptest::strategy::Strategy;

use crate::{Result, alphabet::Alphabet, util::ascii_string};

/// Strategy for strings over `alphabet` whose length falls in `size`.
///
/// Each position is drawn independently from the alphabet's symbols.
pub(crate) fn symbol_string(
    alphabet: Alphabet,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = String> {
    vec(select(alphabet.symbols()), size).prop_map(ascii_string)
}

/// A strategy for building sequences over an alphabet.
///
/// # Arguments
///
/// * `alphabet` – Symbols used to generate each position.
/// * `max_size` – Inclusive upper bound on the sequence length.
/// * `min_size` – Inclusive lower bound on the sequence length.
///
/// # Returns
///
/// * `Ok(strategy)` – Produces strings with length in `min_size..=max_size`.
/// * `Err(BioError::InvalidBound)` – If `min_size > max_size`.
///
/// A `max_size` of zero yields only the empty string.
pub fn sequence(
    alphabet: Alphabet,
    max_size: usize,
    min_size: usize,
) -> Result<impl Strategy<Value = String>> {
    ensure_bounds!(min_size, max_size);
    tracing::debug!(%alphabet, min_size, max_size, "sequence strategy");
    Ok(symbol_string(alphabet, min_size..=max_size))
}
