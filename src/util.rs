/// Checks a pair of inclusive size bounds and returns early on error.
///
/// Intended for the start of generator constructors that accept a
/// `min`/`max` pair. Bounds are never clamped: an inverted pair returns
/// `BioError::InvalidBound`.
///
/// # Example
///
/// ```ignore
/// ensure_bounds!(min_size, max_size);
/// ```
macro_rules! ensure_bounds {
    ($min:expr, $max:expr) => {{
        let (min, max): (usize, usize) = ($min, $max);
        if min > max {
            return Err($crate::BioError::InvalidBound { min, max });
        }
    }};
}

/// Collects ASCII symbol bytes into a `String`.
#[inline]
pub(crate) fn ascii_string(bytes: impl IntoIterator<Item = u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}
