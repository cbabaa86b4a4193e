//! Mutation token codec.
//!
//! Tokens are externally produced strings of the form `\D\d+\D`, e.g.
//! "A123G": ancestral nucleotide, 1-based alignment position, derived
//! nucleotide. Anything that does not fit degrades to "no position" /
//! "no type" rather than failing the run.

/// The 12 directed substitution types over {A,C,G,T}, identity pairs
/// excluded, in lexicographic order. Spectrum buckets and report columns
/// share this ordering.
pub const SUBST_TYPES: [&str; 12] = [
    "AC", "AG", "AT", "CA", "CG", "CT", "GA", "GC", "GT", "TA", "TC", "TG",
];

/// Extracts the alignment position from a mutation token as the first run
/// of ASCII digits. Returns `None` for tokens without digits; callers drop
/// such tokens from position-indexed counts but keep them in raw totals.
pub fn token_position(token: &str) -> Option<u32> {
    let bytes = token.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    token[start..start + len].parse().ok()
}

/// Maps a token to its bucket in [SUBST_TYPES]: first byte is the ancestral
/// nucleotide, last byte the derived one. `None` for tokens shorter than
/// three bytes, non-nucleotide endpoints, or identity pairs.
pub fn token_type(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.len() < 3 {
        return None;
    }
    let anc = nuc_index(bytes[0].to_ascii_uppercase())?;
    let der = nuc_index(bytes[bytes.len() - 1].to_ascii_uppercase())?;
    if anc == der {
        return None;
    }
    // Three derived choices per ancestral nucleotide, lexicographic.
    Some(anc * 3 + if der < anc { der } else { der - 1 })
}

fn nuc_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}
