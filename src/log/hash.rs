//! Integrity fingerprint over a move log.
//!
//! A cheap 32-bit fold, not a cryptographic hash: it exists purely as a
//! fast visual signal that one copy of a log differs from another.

use crate::log::MoveLogEntry;

/// Compute the 8-hex-digit fingerprint of a move log.
///
/// Entries are serialized in tick order as `tick:move1:move2` with `-` for
/// idle slots, joined by `|`. Each character code is folded into a 32-bit
/// signed accumulator as `hash * 31 + code` with wrapping, and the absolute
/// value is rendered as zero-padded lowercase hex.
#[must_use]
pub fn fingerprint(entries: &[MoveLogEntry]) -> String {
    let serialized: String = entries
        .iter()
        .map(|entry| {
            format!(
                "{}:{}:{}",
                entry.tick,
                entry.move1.map_or('-', crate::game::Direction::letter),
                entry.move2.map_or('-', crate::game::Direction::letter),
            )
        })
        .collect::<Vec<_>>()
        .join("|");

    let mut hash: i32 = 0;
    for ch in serialized.chars() {
        // hash * 31 + code, wrapping to 32 bits
        #[allow(clippy::cast_possible_wrap)]
        let code = ch as i32;
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(code);
    }

    format!("{:08x}", hash.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn entry(tick: u32, move1: Option<Direction>, move2: Option<Direction>) -> MoveLogEntry {
        MoveLogEntry { tick, move1, move2 }
    }

    #[test]
    fn test_empty_log() {
        // Empty serialization folds to zero.
        assert_eq!(fingerprint(&[]), "00000000");
    }

    #[test]
    fn test_known_vectors() {
        // Precomputed values; any change to the serialization or the
        // fold breaks these.
        assert_eq!(
            fingerprint(&[entry(0, Some(Direction::Right), None)]),
            "02c000bb"
        );
        assert_eq!(fingerprint(&[entry(0, None, None)]), "02bf75d6");
        assert_eq!(
            fingerprint(&[
                entry(0, Some(Direction::Right), None),
                entry(1, Some(Direction::Right), Some(Direction::Up)),
            ]),
            "6d544de3"
        );
        assert_eq!(
            fingerprint(&[
                entry(0, Some(Direction::Right), None),
                entry(1, Some(Direction::Right), Some(Direction::Up)),
                entry(2, Some(Direction::Down), Some(Direction::Left)),
            ]),
            "1cc1fff5"
        );
    }

    #[test]
    fn test_single_slot_mutation_changes_hash() {
        let log = [
            entry(0, Some(Direction::Right), None),
            entry(1, Some(Direction::Right), Some(Direction::Up)),
        ];
        let mut edited = log;
        edited[0].move1 = Some(Direction::Left);

        assert_eq!(fingerprint(&edited), "0c464c23");
        assert_ne!(fingerprint(&log), fingerprint(&edited));
    }

    #[test]
    fn test_deterministic() {
        let log = [
            entry(0, Some(Direction::Up), Some(Direction::Down)),
            entry(1, None, Some(Direction::Left)),
        ];
        assert_eq!(fingerprint(&log), fingerprint(&log));
    }
}
