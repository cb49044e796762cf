use proptest::sample::select;
use proptest::strategy::Strategy;

use crate::{
    BioError, Result,
    constants::{ALL_CODONS, CANONICAL_STOP_CODONS, CODON_TABLE},
};

/// Looks up the amino acid a codon encodes, `*` for a stop.
///
/// Returns `None` if `codon` is not one of the 64 DNA triplets.
pub fn amino_acid(codon: &str) -> Option<char> {
    table_entry(codon).map(|(_, aa)| aa)
}

#[inline]
fn table_entry(codon: &str) -> Option<(&'static str, char)> {
    CODON_TABLE
        .binary_search_by(|(key, _)| (*key).cmp(codon))
        .ok()
        .map(|i| CODON_TABLE[i])
}

/// A non-empty set of codons treated as stop signals.
///
/// Members are always keys of the codon table. The set does not have to agree
/// with the `*` entries of the standard table, so alternative genetic codes
/// can be modelled by passing their own stop codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCodons {
    codons: Vec<&'static str>,
}

impl StopCodons {
    /// The stop codons of the standard genetic code: `TAA`, `TGA`, `TAG`.
    pub fn canonical() -> Self {
        Self {
            codons: CANONICAL_STOP_CODONS.to_vec(),
        }
    }

    /// Builds a stop set from caller-supplied codons, dropping duplicates.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` – Every codon is a codon-table key.
    /// * `Err(BioError::UnknownCodon)` – A codon is not a DNA triplet.
    /// * `Err(BioError::EmptyStopCodons)` – No codons were given.
    pub fn new<I, S>(codons: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<&'static str> = Vec::new();
        for codon in codons {
            let codon = codon.as_ref();
            let (key, _) =
                table_entry(codon).ok_or_else(|| BioError::UnknownCodon(codon.to_owned()))?;
            if !out.contains(&key) {
                out.push(key);
            }
        }
        if out.is_empty() {
            return Err(BioError::EmptyStopCodons);
        }
        Ok(Self { codons: out })
    }

    pub fn contains(&self, codon: &str) -> bool {
        self.codons.iter().any(|&c| c == codon)
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// Never true for a set built through `canonical` or `new`.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.codons
    }
}

impl Default for StopCodons {
    fn default() -> Self {
        Self::canonical()
    }
}

/// A strategy for one codon, uniform over the 64 codon-table keys.
pub fn codon() -> impl Strategy<Value = &'static str> {
    select(&ALL_CODONS[..])
}

/// A strategy for one stop codon, uniform over `stop_codons`.
pub fn stop_codon(stop_codons: StopCodons) -> impl Strategy<Value = &'static str> {
    select(stop_codons.codons)
}

/// A strategy for one codon that is not in `stop_codons`.
///
/// Values are drawn from [`codon`] and rejected while they fall in the stop
/// set, so any caller-supplied set is honoured. A set covering the whole codon
/// table can never produce a value; the runner gives up once its rejection
/// limit is reached.
pub fn non_stop_codon(stop_codons: StopCodons) -> impl Strategy<Value = &'static str> {
    if stop_codons.len() == ALL_CODONS.len() {
        tracing::warn!("stop codon set covers every codon; non-stop codons cannot be generated");
    }
    codon().prop_filter("stop codons are excluded", move |c| !stop_codons.contains(c))
}
