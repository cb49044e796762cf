use bioprop_rs::{Alphabet, DEFAULT_KSIZE, Result, kmers, reverse_complement, sequence};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

fn main() -> Result<()> {
    // ---------------------------------------------------- //
    // 1. Generator parameters
    // ---------------------------------------------------- //
    let alphabet = Alphabet::Dna;
    let k = DEFAULT_KSIZE;
    // Sequences of 30 to 60 bases, so every one fits a k-mer.
    let seqs = sequence(alphabet, 60, 30)?;

    // Sample a k-mer from each generated sequence, allowing reverse complements.
    let pairs = seqs.prop_flat_map(move |seq| {
        let sampled = kmers(&seq, alphabet, k, true);
        (proptest::strategy::Just(seq), sampled)
    });

    // ---------------------------------------------------- //
    // 2. Draw a few values and show where each k-mer came from
    // ---------------------------------------------------- //
    let mut runner = TestRunner::deterministic();

    println!("{:<60} | {:<21} | orientation", "sequence", "k-mer");
    println!("{}+{}+-------------", "-".repeat(61), "-".repeat(23));

    for _ in 0..8 {
        let Ok(tree) = pairs.new_tree(&mut runner) else {
            continue;
        };
        let (seq, kmer) = tree.current();
        let orientation = if seq.contains(kmer.as_str()) {
            "forward"
        } else if seq.contains(reverse_complement(&kmer, alphabet)?.as_str()) {
            "reverse"
        } else {
            unreachable!("k-mer is neither a window nor a reverse-complemented window")
        };
        println!("{:<60} | {} | {}", seq, kmer, orientation);
    }

    Ok(())
}
