use std::fmt;
use std::str::FromStr;

use proptest::arbitrary::Arbitrary;
use proptest::sample::{Select, select};
use proptest::strategy::Strategy;

use crate::{
    BioError, Result,
    constants::{ALPHABET_TABLE, ASCII_SIZE, NO_COMPLEMENT},
    util::ascii_string,
};

/// The symbol sets sequences can be generated over.
///
/// Each variant is a row of a static registry holding its symbols and, for
/// nucleic acids, a complement map. Nothing about an alphabet is decided by
/// matching on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `ACGT`
    Dna,
    /// `ACGTN`
    DnaN,
    /// IUPAC nucleotide codes over `T`
    DnaIupac,
    /// `ACGU`
    Rna,
    /// `ACGUN`
    RnaN,
    /// IUPAC nucleotide codes over `U`
    RnaIupac,
    /// The 20 standard amino acids
    Protein,
}

impl Alphabet {
    /// Every alphabet, in registry order.
    pub const ALL: &'static [Alphabet] = &[
        Alphabet::Dna,
        Alphabet::DnaN,
        Alphabet::DnaIupac,
        Alphabet::Rna,
        Alphabet::RnaN,
        Alphabet::RnaIupac,
        Alphabet::Protein,
    ];

    /// Alphabets that carry a complement map.
    pub const NUCLEIC: &'static [Alphabet] = &[
        Alphabet::Dna,
        Alphabet::DnaN,
        Alphabet::DnaIupac,
        Alphabet::Rna,
        Alphabet::RnaN,
        Alphabet::RnaIupac,
    ];

    #[inline]
    fn row(self) -> &'static crate::constants::AlphabetRow {
        &ALPHABET_TABLE[self as usize]
    }

    /// Canonical upper-case name, e.g. `"DNA_IUPAC"`.
    pub fn name(self) -> &'static str {
        self.row().name
    }

    /// The ordered, duplicate-free symbols of the alphabet as ASCII bytes.
    pub fn symbols(self) -> &'static [u8] {
        self.row().symbols
    }

    /// Returns the complement map of a nucleic alphabet.
    ///
    /// # Errors
    ///
    /// * `BioError::UnsupportedOperation` – for `Alphabet::Protein`.
    pub fn complement(self) -> Result<ComplementMap> {
        match &self.row().complement {
            Some(table) => Ok(ComplementMap {
                alphabet: self,
                table,
            }),
            None => Err(BioError::UnsupportedOperation {
                operation: "complement",
                alphabet: self,
            }),
        }
    }

    pub fn is_nucleic(self) -> bool {
        self.row().complement.is_some()
    }

    /// Returns `true` if every character of `seq` is a symbol of this alphabet.
    pub fn is_valid(self, seq: &str) -> bool {
        self.first_invalid(seq).is_none()
    }

    pub(crate) fn first_invalid(self, seq: &str) -> Option<char> {
        let symbols = self.symbols();
        seq.chars()
            .find(|&c| !c.is_ascii() || !symbols.contains(&(c as u8)))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = BioError;

    /// Parses a canonical alphabet name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        Alphabet::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BioError::UnknownAlphabet(s.to_owned()))
    }
}

impl Arbitrary for Alphabet {
    type Parameters = ();
    type Strategy = Select<Alphabet>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        select(Alphabet::ALL)
    }
}

/// A strategy over the alphabets that support reverse complements.
pub fn nucleic_alphabet() -> impl Strategy<Value = Alphabet> {
    select(Alphabet::NUCLEIC)
}

/// Complement lookup for one nucleic alphabet.
///
/// The map is total over the alphabet's symbols and is an involution:
/// complementing twice gives back the original symbol.
#[derive(Debug, Clone, Copy)]
pub struct ComplementMap {
    alphabet: Alphabet,
    table: &'static [u8; ASCII_SIZE],
}

impl ComplementMap {
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Complement of `symbol`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<u8> {
        match self.table[symbol as usize] {
            NO_COMPLEMENT => None,
            c => Some(c),
        }
    }

    /// `(symbol, complement)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.alphabet
            .symbols()
            .iter()
            .map(move |&s| (s, self.table[s as usize]))
    }

    /// Reverse complement of a byte string already checked against the alphabet.
    pub(crate) fn apply_reversed(&self, seq: &[u8]) -> String {
        ascii_string(seq.iter().rev().map(|&b| self.table[b as usize]))
    }

    /// Checks that `seq` can be complemented under this map.
    pub(crate) fn check(&self, seq: &str) -> Result<()> {
        match self.alphabet.first_invalid(seq) {
            Some(symbol) => Err(BioError::InvalidSymbol {
                symbol,
                alphabet: self.alphabet,
            }),
            None => Ok(()),
        }
    }
}

/// Reverses `seq` and replaces every symbol with its complement.
///
/// # Errors
///
/// * `BioError::UnsupportedOperation` – for `Alphabet::Protein`.
/// * `BioError::InvalidSymbol` – if `seq` holds a character outside the alphabet.
///
/// # Example
///
/// ```
/// use bioprop_rs::{Alphabet, reverse_complement};
/// assert_eq!(reverse_complement("ATGC", Alphabet::Dna).unwrap(), "GCAT");
/// ```
pub fn reverse_complement(seq: &str, alphabet: Alphabet) -> Result<String> {
    let map = alphabet.complement()?;
    map.check(seq)?;
    Ok(map.apply_reversed(seq.as_bytes()))
}
