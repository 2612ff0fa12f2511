/// Maximum electron count for each successive shell in the simplified model.
pub const SHELL_CAPACITIES: [u32; 5] = [2, 8, 18, 32, 50];

/// Electron counts per shell for a neutral atom, filled greedily from the
/// innermost shell outward.
///
/// Electrons beyond the combined capacity of [`SHELL_CAPACITIES`] are placed
/// together in one final shell. The counts always sum to `atomic_number`, and
/// the result is non-empty for any `atomic_number >= 1`.
pub fn electron_shell_configuration(atomic_number: u32) -> Vec<u32> {
    let mut shells = Vec::with_capacity(SHELL_CAPACITIES.len() + 1);
    let mut remaining = atomic_number;

    for capacity in SHELL_CAPACITIES {
        if remaining == 0 {
            break;
        }
        let filled = remaining.min(capacity);
        shells.push(filled);
        remaining -= filled;
    }

    if remaining > 0 {
        shells.push(remaining);
    }

    shells
}
