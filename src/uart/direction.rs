use crate::types::decoded_byte::Direction;
use crate::types::level::Level;

/// Classifies the transfer direction of one byte from a single bit sample.
///
/// The observed protocol guarantees the first data bit after a start edge is
/// logically `0`, and at that instant only the sending side drives its line
/// into a distinctive state: if the companion channel reads [`Level::Mid`]
/// the byte flows B→A, otherwise A→B. The classification is a one-shot
/// decision taken at bit index 0 and held for the whole byte, so any other
/// `bit_index` returns `None`.
///
/// Two protocol-invariant violations are flagged (not errors, the byte is
/// still classified):
/// - `primary` reading [`Level::High`] means bit 0 was not `0`;
/// - `companion` reading [`Level::High`] is outside the disambiguation rule's
///   assumptions, and the A→B default may be wrong.
pub(crate) fn infer_direction(
    bit_index: u8,
    primary: Level,
    companion: Level,
    start_time: f64,
) -> Option<Direction> {
    if bit_index != 0 {
        return None;
    }
    if primary == Level::High {
        log::warn!(
            "byte at t={start_time}: first data bit reads high, protocol expects 0"
        );
    }
    if companion == Level::High {
        log::warn!(
            "byte at t={start_time}: companion channel reads high at the direction \
             sampling instant; direction defaulted to A->B"
        );
    }
    if companion == Level::Mid {
        Some(Direction::BToA)
    } else {
        Some(Direction::AToB)
    }
}
