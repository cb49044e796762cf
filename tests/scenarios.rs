//! Concrete scenarios with fixed inputs, sampled through a deterministic runner
//! so failures reproduce exactly.

use std::collections::HashSet;

use bioprop_rs::{
    Alphabet, BioError, CANONICAL_STOP_CODONS, CodingSequence, Result, SizeAccounting,
    StopCodons, coding_sequence, kmers, non_stop_codon, reverse_complement, sequence,
};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

/// Number of values drawn per scenario.
const DRAWS: usize = 200;

/// Draws `n` values from `strategy` with a fixed seed.
fn sample<S: Strategy>(strategy: &S, n: usize) -> Vec<S::Value> {
    let mut runner = TestRunner::deterministic();
    (0..n)
        .map(|_| strategy.new_tree(&mut runner).unwrap().current())
        .collect()
}

#[test]
fn reverse_complement_of_atgc() -> Result<()> {
    assert_eq!(reverse_complement("ATGC", Alphabet::Dna)?, "GCAT");
    assert_eq!(reverse_complement("", Alphabet::Dna)?, "");
    Ok(())
}

#[test]
fn reverse_complement_of_protein_fails() {
    assert_eq!(
        reverse_complement("MKV", Alphabet::Protein),
        Err(BioError::UnsupportedOperation {
            operation: "complement",
            alphabet: Alphabet::Protein,
        })
    );
}

#[test]
fn kmers_of_acgtacgt() {
    let allowed: HashSet<&str> = ["ACGT", "CGTA", "GTAC", "TACG"].into_iter().collect();
    let strategy = kmers("ACGTACGT", Alphabet::Dna, 4, false);

    let seen: HashSet<String> = sample(&strategy, DRAWS).into_iter().collect();
    for kmer in &seen {
        assert!(allowed.contains(kmer.as_str()), "unexpected k-mer {kmer}");
    }
    // Uniform offsets should reach more than one window.
    assert!(seen.len() > 1);
}

#[test]
fn kmers_with_rc_hit_both_orientations() {
    // No window of this sequence is its own reverse complement.
    let strategy = kmers("AAAAAAAA", Alphabet::Dna, 3, true);
    let seen: HashSet<String> = sample(&strategy, DRAWS).into_iter().collect();
    let expected: HashSet<String> = ["AAA".to_string(), "TTT".to_string()].into_iter().collect();
    assert_eq!(seen, expected);
}

#[test]
fn coding_sequence_with_two_body_codons() -> Result<()> {
    let strategy = coding_sequence(Some(2), Some(2), true, true, false)?;
    for cds in sample(&strategy, DRAWS) {
        assert_eq!(cds.len(), 3 + 2 * 3 + 3, "{cds}");
        assert!(cds.starts_with("ATG"));
        assert!(CANONICAL_STOP_CODONS.contains(&&cds[9..12]));
        assert!(!CANONICAL_STOP_CODONS.contains(&&cds[3..6]));
        assert!(!CANONICAL_STOP_CODONS.contains(&&cds[6..9]));
    }
    Ok(())
}

#[test]
fn coding_sequence_without_start_or_stop() -> Result<()> {
    let strategy = coding_sequence(Some(1), Some(4), false, false, false)?;
    for cds in sample(&strategy, DRAWS) {
        assert!((3..=12).contains(&cds.len()));
        for i in (0..cds.len()).step_by(3) {
            assert!(!CANONICAL_STOP_CODONS.contains(&&cds[i..i + 3]));
        }
    }
    Ok(())
}

#[test]
fn coding_sequence_empty_body_is_just_start_and_stop() -> Result<()> {
    let strategy = coding_sequence(Some(0), Some(0), true, true, false)?;
    for cds in sample(&strategy, 32) {
        assert_eq!(cds.len(), 6);
        assert!(cds.starts_with("ATG"));
    }
    Ok(())
}

#[test]
fn coding_sequence_rejects_inverted_bounds() {
    assert_eq!(
        coding_sequence(Some(5), Some(1), true, true, false).err(),
        Some(BioError::InvalidBound { min: 5, max: 1 })
    );
}

#[test]
fn include_start_accounting_shrinks_the_body() -> Result<()> {
    let mut cds = CodingSequence::new();
    cds.set_size_accounting(SizeAccounting::IncludeStart);
    cds.set_size(Some(3), Some(3))?;
    for s in sample(&cds.strategy()?, 64) {
        // ATG + 2 body codons + stop.
        assert_eq!(s.len(), 12);
    }

    cds.set_size(Some(0), Some(0))?;
    assert!(matches!(cds.strategy().err(), Some(BioError::InvalidBound { .. })));
    Ok(())
}

#[test]
fn custom_stop_set_drives_start_body_and_stop() -> Result<()> {
    // Vertebrate mitochondrial stops.
    let stops = StopCodons::new(["TAA", "TAG", "AGA", "AGG"])?;
    let mut cds = CodingSequence::new();
    cds.set_size(Some(5), Some(5))?;
    cds.set_stop_codons(stops.clone());

    for s in sample(&cds.strategy()?, DRAWS) {
        assert_eq!(s.len(), 21);
        assert!(stops.contains(&s[18..]));
        for i in (3..18).step_by(3) {
            assert!(!stops.contains(&s[i..i + 3]), "internal stop in {s}");
        }
    }
    Ok(())
}

#[test]
fn non_stop_codon_covers_the_rest_of_the_table() {
    let seen: HashSet<&str> = sample(&non_stop_codon(StopCodons::canonical()), 4000)
        .into_iter()
        .collect();
    assert_eq!(seen.len(), 61);
}

#[test]
fn sequence_bounds() {
    assert!(sequence(Alphabet::Dna, 10, 10).is_ok());
    assert_eq!(
        sequence(Alphabet::Dna, 1, 2).err(),
        Some(BioError::InvalidBound { min: 2, max: 1 })
    );
    for s in sample(&sequence(Alphabet::Dna, 0, 0).unwrap(), 16) {
        assert!(s.is_empty());
    }
}

/// Body codons of a coding sequence built without start or stop codons.
fn codons(cds: &str) -> impl Iterator<Item = &str> {
    (0..cds.len()).step_by(3).map(move |i| &cds[i..i + 3])
}

#[test]
fn internal_stops_appear_when_allowed() -> Result<()> {
    let strategy = coding_sequence(Some(20), Some(20), false, false, true)?;
    let with_stop = sample(&strategy, 50)
        .iter()
        .filter(|cds| codons(cds).any(|c| CANONICAL_STOP_CODONS.contains(&c)))
        .count();
    // Each 20-codon body misses every stop with probability (61/64)^20, about 0.38.
    assert!(with_stop > 0, "no internal stop in 50 bodies");
    Ok(())
}

#[test]
fn internal_stops_never_appear_when_disallowed() -> Result<()> {
    let strategy = coding_sequence(Some(20), Some(20), false, false, false)?;
    for cds in sample(&strategy, 50) {
        assert_eq!(cds.len(), 60);
        assert!(
            codons(&cds).all(|c| !CANONICAL_STOP_CODONS.contains(&c)),
            "internal stop in {cds}"
        );
    }
    Ok(())
}
