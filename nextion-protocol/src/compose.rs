//! Instruction composition
//!
//! An instruction is four fragments written back to back:
//! - OBJECT: widget name, or `page` for navigation
//! - SPECIFIER: which attribute is set (`.txt="`, `.val=`, or a space)
//! - VALUE: the caller's text
//! - SUFFIX: the terminator, optionally preceded by a closing quote
//!
//! No separators are inserted and no NUL byte is stored. The display finds
//! the end of an instruction by its terminator, not by a string end marker.

use heapless::Vec;

/// End-of-instruction marker
pub const TERMINATOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Capacity of a [`Command`] in bytes
pub const MAX_COMMAND_LEN: usize = 256;

/// A composed instruction, ready to transmit
pub type Command = Vec<u8, MAX_COMMAND_LEN>;

/// Errors that can occur while composing an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The fragments do not fit in the command buffer
    AllocationFailure {
        /// Sum of the fragment lengths
        required: usize,
    },
}

/// Compose an instruction into a [`Command`]
pub fn compose(
    object: &[u8],
    specifier: &[u8],
    value: &[u8],
    suffix: &[u8],
) -> Result<Command, CommandError> {
    compose_into(object, specifier, value, suffix)
}

/// Compose an instruction into a buffer of capacity `N`
///
/// The result is exactly `object ++ specifier ++ value ++ suffix`. Its
/// length is the sum of the fragment lengths; empty fragments add nothing.
/// If that sum exceeds `N`, nothing is written and
/// [`CommandError::AllocationFailure`] is returned.
pub fn compose_into<const N: usize>(
    object: &[u8],
    specifier: &[u8],
    value: &[u8],
    suffix: &[u8],
) -> Result<Vec<u8, N>, CommandError> {
    let fragments = [object, specifier, value, suffix];
    let required: usize = fragments.iter().map(|fragment| fragment.len()).sum();

    if required > N {
        return Err(CommandError::AllocationFailure { required });
    }

    let mut command = Vec::new();
    for fragment in fragments {
        command
            .extend_from_slice(fragment)
            .map_err(|_| CommandError::AllocationFailure { required })?;
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec::Vec as StdVec;
    use proptest::prelude::*;

    #[test]
    fn test_compose_text_instruction() {
        let command = compose(b"t0", b".txt=\"", b"Hello", b"\"\xFF\xFF\xFF").unwrap();
        assert_eq!(command.as_slice(), b"t0.txt=\"Hello\"\xFF\xFF\xFF");
    }

    #[test]
    fn test_compose_all_empty() {
        let command = compose(b"", b"", b"", b"").unwrap();
        assert!(command.is_empty());
    }

    #[test]
    fn test_compose_empty_value() {
        let command = compose(b"t0", b".txt=\"", b"", b"\"\xFF\xFF\xFF").unwrap();
        assert_eq!(command.as_slice(), b"t0.txt=\"\"\xFF\xFF\xFF");
    }

    #[test]
    fn test_compose_length_is_exact_sum() {
        // No room reserved for a NUL byte
        let command = compose(b"page", b" ", b"1", &TERMINATOR).unwrap();
        assert_eq!(command.len(), 4 + 1 + 1 + 3);
        assert_eq!(command.last(), Some(&0xFF));
    }

    #[test]
    fn test_compose_exactly_fills_capacity() {
        let command = compose_into::<8>(b"ab", b"cd", b"ef", b"gh").unwrap();
        assert_eq!(command.as_slice(), b"abcdefgh");
    }

    #[test]
    fn test_compose_too_long() {
        let result = compose_into::<7>(b"ab", b"cd", b"ef", b"gh");
        assert_eq!(result, Err(CommandError::AllocationFailure { required: 8 }));
    }

    #[test]
    fn test_compose_default_capacity_overflow() {
        let value = [b'x'; MAX_COMMAND_LEN];
        let result = compose(b"t0", b".txt=\"", &value, b"\"\xFF\xFF\xFF");
        assert_eq!(
            result,
            Err(CommandError::AllocationFailure {
                required: 2 + 6 + MAX_COMMAND_LEN + 4
            })
        );
    }

    proptest! {
        #[test]
        fn prop_compose_is_plain_concatenation(
            object in proptest::collection::vec(any::<u8>(), 0..32),
            specifier in proptest::collection::vec(any::<u8>(), 0..8),
            value in proptest::collection::vec(any::<u8>(), 0..128),
            suffix in proptest::collection::vec(any::<u8>(), 0..8)
        ) {
            let command = compose(&object, &specifier, &value, &suffix).unwrap();

            let mut expected = StdVec::new();
            expected.extend_from_slice(&object);
            expected.extend_from_slice(&specifier);
            expected.extend_from_slice(&value);
            expected.extend_from_slice(&suffix);

            prop_assert_eq!(command.len(), object.len() + specifier.len() + value.len() + suffix.len());
            prop_assert_eq!(command.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_compose_rejects_oversize(extra in 1usize..64) {
            let value = StdVec::from_iter(core::iter::repeat(b'v').take(16 + extra));
            let result = compose_into::<16>(b"", b"", &value, b"");
            prop_assert_eq!(result, Err(CommandError::AllocationFailure { required: 16 + extra }));
        }
    }
}
