use bioprop_rs::{CodingSequence, Result, SizeAccounting, StopCodons, amino_acid};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

fn main() -> Result<()> {
    // Coding sequences of 3 to 6 body codons, ended by a vertebrate
    // mitochondrial stop codon.
    let mut cds = CodingSequence::new();
    cds.set_size(Some(3), Some(6))?;
    cds.set_stop_codons(StopCodons::new(["TAA", "TAG", "AGA", "AGG"])?);
    let strategy = cds.strategy()?;

    let mut runner = TestRunner::deterministic();
    for _ in 0..5 {
        let Ok(tree) = strategy.new_tree(&mut runner) else {
            continue;
        };
        let seq = tree.current();
        // Translate with the standard table for display only.
        let protein: String = seq
            .as_bytes()
            .chunks(3)
            .filter_map(|c| std::str::from_utf8(c).ok().and_then(amino_acid))
            .collect();
        println!("{seq:<30} {protein}");
    }

    // The same bounds when the start codon counts towards them.
    cds.set_size_accounting(SizeAccounting::IncludeStart);
    let body = cds.body_size()?;
    println!("body codons with start counted: {}..={}", body.start(), body.end());

    Ok(())
}
