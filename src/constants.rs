#![allow(clippy::unreadable_literal)]

// Global constants and static tables used throughout the generators.

// `ASCII_SIZE` – Number of possible byte values (0..255).
pub const ASCII_SIZE: usize = 256;

/// Default k-mer length used when callers have no preference.
pub const DEFAULT_KSIZE: usize = 21;

/// Conventional upper bound on generated sequence length.
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Body length added to the lower bound when a coding sequence has no upper bound.
pub const DEFAULT_MAX_CODONS: usize = 100;

/// The fixed start codon prepended to coding sequences.
pub const START_CODON: &str = "ATG";

/// Stop codons of the standard genetic code.
pub const CANONICAL_STOP_CODONS: [&str; 3] = ["TAA", "TGA", "TAG"];

/// Marker for the "no complement" entries of a complement table.
pub(crate) const NO_COMPLEMENT: u8 = 0;

/// Builds a byte lookup table mapping `from[i]` to `to[i]`. Every other byte maps
/// to `NO_COMPLEMENT`.
const fn complement_table(from: &[u8], to: &[u8]) -> [u8; ASCII_SIZE] {
    assert!(from.len() == to.len(), "complement rows must pair every symbol");
    let mut tbl = [NO_COMPLEMENT; ASCII_SIZE];
    let mut i = 0;
    while i < from.len() {
        tbl[from[i] as usize] = to[i];
        i += 1;
    }
    tbl
}

/// One row of the alphabet registry.
pub(crate) struct AlphabetRow {
    pub name: &'static str,
    pub symbols: &'static [u8],
    pub complement: Option<[u8; ASCII_SIZE]>,
}

/// Alphabet registry, indexed by `Alphabet as usize`.
///
/// Adding an alphabet means adding a row here and a variant to `Alphabet`.
pub(crate) static ALPHABET_TABLE: [AlphabetRow; 7] = [
    AlphabetRow {
        name: "DNA",
        symbols: b"ACGT",
        complement: Some(complement_table(b"ACGT", b"TGCA")),
    },
    AlphabetRow {
        name: "DNA_N",
        symbols: b"ACGTN",
        complement: Some(complement_table(b"ACGTN", b"TGCAN")),
    },
    AlphabetRow {
        name: "DNA_IUPAC",
        symbols: b"AGCTYRWSKMDVHBNZ",
        complement: Some(complement_table(b"AGCTYRWSKMDVHBNZ", b"TCGARYWSMKHBDVNZ")),
    },
    AlphabetRow {
        name: "RNA",
        symbols: b"ACGU",
        complement: Some(complement_table(b"ACGU", b"UGCA")),
    },
    AlphabetRow {
        name: "RNA_N",
        symbols: b"ACGUN",
        complement: Some(complement_table(b"ACGUN", b"UGCAN")),
    },
    AlphabetRow {
        name: "RNA_IUPAC",
        symbols: b"AGCUYRWSKMDVHBNZ",
        complement: Some(complement_table(b"AGCUYRWSKMDVHBNZ", b"UCGARYWSMKHBDVNZ")),
    },
    AlphabetRow {
        name: "PROTEIN",
        symbols: b"ARNDCEQGHILKMFPSTWYV",
        complement: None,
    },
];

/// The standard genetic code: every DNA triplet and the amino acid it encodes,
/// `*` marking a stop. Sorted by codon so lookups can binary search.
pub const CODON_TABLE: [(&str, char); 64] = [
    ("AAA", 'K'), ("AAC", 'N'), ("AAG", 'K'), ("AAT", 'N'),
    ("ACA", 'T'), ("ACC", 'T'), ("ACG", 'T'), ("ACT", 'T'),
    ("AGA", 'R'), ("AGC", 'S'), ("AGG", 'R'), ("AGT", 'S'),
    ("ATA", 'I'), ("ATC", 'I'), ("ATG", 'M'), ("ATT", 'I'),
    ("CAA", 'Q'), ("CAC", 'H'), ("CAG", 'Q'), ("CAT", 'H'),
    ("CCA", 'P'), ("CCC", 'P'), ("CCG", 'P'), ("CCT", 'P'),
    ("CGA", 'R'), ("CGC", 'R'), ("CGG", 'R'), ("CGT", 'R'),
    ("CTA", 'L'), ("CTC", 'L'), ("CTG", 'L'), ("CTT", 'L'),
    ("GAA", 'E'), ("GAC", 'D'), ("GAG", 'E'), ("GAT", 'D'),
    ("GCA", 'A'), ("GCC", 'A'), ("GCG", 'A'), ("GCT", 'A'),
    ("GGA", 'G'), ("GGC", 'G'), ("GGG", 'G'), ("GGT", 'G'),
    ("GTA", 'V'), ("GTC", 'V'), ("GTG", 'V'), ("GTT", 'V'),
    ("TAA", '*'), ("TAC", 'Y'), ("TAG", '*'), ("TAT", 'Y'),
    ("TCA", 'S'), ("TCC", 'S'), ("TCG", 'S'), ("TCT", 'S'),
    ("TGA", '*'), ("TGC", 'C'), ("TGG", 'W'), ("TGT", 'C'),
    ("TTA", 'L'), ("TTC", 'F'), ("TTG", 'L'), ("TTT", 'F'),
];

/// The 64 codon-table keys, in table order.
pub static ALL_CODONS: [&str; 64] = {
    let mut out = [""; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = CODON_TABLE[i].0;
        i += 1;
    }
    out
};
