//! Shared helpers for building terminated sequences in tests.

#![allow(dead_code)]

/// Copy `content` and append a terminator.
pub fn terminated(content: &[u8]) -> Vec<u8> {
    let mut bytes = content.to_vec();
    bytes.push(0);
    bytes
}

/// Position of the first terminator in `bytes`, or `None` when unterminated.
pub fn first_terminator(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == 0)
}
