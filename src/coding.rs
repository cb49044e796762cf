use std::ops::RangeInclusive;

use proptest::collection::vec;
use proptest::strategy::{BoxedStrategy, Just, Strategy};

use crate::{
    BioError, Result,
    codons::{StopCodons, codon, non_stop_codon, stop_codon},
    constants::{DEFAULT_MAX_CODONS, START_CODON},
};

/// How `min_size`/`max_size` of a [`CodingSequence`] are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeAccounting {
    /// Bounds count body codons only; start and stop codons come on top.
    #[default]
    BodyOnly,
    /// An included start codon consumes one unit of the bounds. `max_size`
    /// must leave room for it, and `min_size` saturates at zero.
    IncludeStart,
}

/// Builder for coding-sequence strategies.
///
/// A coding sequence is an optional `ATG`, a body of codons, and an optional
/// terminal stop codon. With the defaults the result always starts with
/// `ATG`, ends with a canonical stop codon, and carries no stop codon in
/// between.
#[derive(Debug, Clone)]
pub struct CodingSequence {
    min_size: Option<usize>,
    max_size: Option<usize>,
    include_stop_codon: bool,
    include_start_codon: bool,
    allow_internal_stops: bool,
    stop_codons: StopCodons,
    accounting: SizeAccounting,
}

impl Default for CodingSequence {
    fn default() -> Self {
        Self {
            min_size: None,
            max_size: None,
            include_stop_codon: true,
            include_start_codon: true,
            allow_internal_stops: false,
            stop_codons: StopCodons::canonical(),
            accounting: SizeAccounting::BodyOnly,
        }
    }
}

impl CodingSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive bounds on the number of body codons.
    ///
    /// An unset `min_size` means zero. An unset `max_size` means
    /// `min_size + DEFAULT_MAX_CODONS`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` – Bounds are stored.
    /// * `Err(BioError::InvalidBound)` – If both are set and `min_size > max_size`.
    pub fn set_size(&mut self, min_size: Option<usize>, max_size: Option<usize>) -> Result<()> {
        if let (Some(min), Some(max)) = (min_size, max_size) {
            ensure_bounds!(min, max);
        }
        self.min_size = min_size;
        self.max_size = max_size;
        Ok(())
    }

    /// Appends a terminal stop codon when `true`.
    pub fn set_include_stop_codon(&mut self, include: bool) {
        self.include_stop_codon = include;
    }

    /// Prepends `ATG` when `true`.
    pub fn set_include_start_codon(&mut self, include: bool) {
        self.include_start_codon = include;
    }

    /// Lets body codons be stop codons when `true`.
    ///
    /// This is independent of the terminal stop codon.
    pub fn set_allow_internal_stops(&mut self, allow: bool) {
        self.allow_internal_stops = allow;
    }

    /// Replaces the stop set used for the terminal codon and for excluding
    /// stops from the body.
    pub fn set_stop_codons(&mut self, stop_codons: StopCodons) {
        self.stop_codons = stop_codons;
    }

    pub fn set_size_accounting(&mut self, accounting: SizeAccounting) {
        self.accounting = accounting;
    }

    /// Resolves the inclusive range of body codon counts.
    pub fn body_size(&self) -> Result<RangeInclusive<usize>> {
        let min = self.min_size.unwrap_or(0);
        let max = self
            .max_size
            .unwrap_or_else(|| min.saturating_add(DEFAULT_MAX_CODONS));
        ensure_bounds!(min, max);

        match self.accounting {
            SizeAccounting::IncludeStart if self.include_start_codon => {
                if max == 0 {
                    return Err(BioError::InvalidBound { min, max });
                }
                Ok(min.saturating_sub(1)..=max - 1)
            }
            _ => Ok(min..=max),
        }
    }

    /// Builds the strategy.
    ///
    /// # Returns
    ///
    /// * `Ok(strategy)` – Produces coding sequences as configured.
    /// * `Err(BioError::InvalidBound)` – If the bounds cannot be satisfied.
    pub fn strategy(&self) -> Result<BoxedStrategy<String>> {
        let body_size = self.body_size()?;
        tracing::debug!(
            min_codons = *body_size.start(),
            max_codons = *body_size.end(),
            start = self.include_start_codon,
            stop = self.include_stop_codon,
            internal_stops = self.allow_internal_stops,
            "coding sequence strategy"
        );

        let element = if self.allow_internal_stops {
            codon().boxed()
        } else {
            non_stop_codon(self.stop_codons.clone()).boxed()
        };
        let body = vec(element, body_size).prop_map(|codons: Vec<&'static str>| codons.concat());

        let stop = if self.include_stop_codon {
            stop_codon(self.stop_codons.clone()).boxed()
        } else {
            Just("").boxed()
        };

        let start = if self.include_start_codon { START_CODON } else { "" };

        Ok((body, stop)
            .prop_map(move |(body, stop)| {
                let mut out = String::with_capacity(start.len() + body.len() + stop.len());
                out.push_str(start);
                out.push_str(&body);
                out.push_str(stop);
                out
            })
            .boxed())
    }
}

/// A strategy for coding sequences.
///
/// # Arguments
///
/// * `min_size` – Minimum number of body codons (unset means zero).
/// * `max_size` – Maximum number of body codons (unset means
///   `min_size + DEFAULT_MAX_CODONS`).
/// * `include_stop_codon` – Append a canonical stop codon.
/// * `include_start_codon` – Prepend `ATG`.
/// * `allow_internal_stops` – Allow stop codons inside the body.
///
/// Start and stop codons are not counted by the bounds; use
/// [`CodingSequence`] with [`SizeAccounting::IncludeStart`] for the other
/// convention, or to supply a different stop set.
///
/// # Example
///
/// ```
/// use bioprop_rs::coding_sequence;
/// // ATG + two codons + a stop codon: always 12 bases.
/// let strategy = coding_sequence(Some(2), Some(2), true, true, false).unwrap();
/// # let _ = strategy;
/// ```
pub fn coding_sequence(
    min_size: Option<usize>,
    max_size: Option<usize>,
    include_stop_codon: bool,
    include_start_codon: bool,
    allow_internal_stops: bool,
) -> Result<BoxedStrategy<String>> {
    let mut cds = CodingSequence::new();
    cds.set_size(min_size, max_size)?;
    cds.set_include_stop_codon(include_stop_codon);
    cds.set_include_start_codon(include_start_codon);
    cds.set_allow_internal_stops(allow_internal_stops);
    cds.strategy()
}
