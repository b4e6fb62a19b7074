//! Byte-wise mask arithmetic.

/// Wildcard (inverse) mask: every byte of `mask` complemented.
pub fn wildcard(mask: &[u8]) -> Vec<u8> {
    mask.iter().map(|octet| !octet).collect()
}

/// Highest address of a subnet: `base[i] | wildcard[i]` for every byte.
///
/// # Panics
/// * If `base` and `wildcard` differ in length. Both are derived from the same
///   parsed network, so a mismatch is a bug in the caller.
pub fn highest_address(base: &[u8], wildcard: &[u8]) -> Vec<u8> {
    assert_eq!(
        base.len(),
        wildcard.len(),
        "address and wildcard mask length mismatch"
    );
    base.iter()
        .zip(wildcard.iter())
        .map(|(octet, mask)| octet | mask)
        .collect()
}
