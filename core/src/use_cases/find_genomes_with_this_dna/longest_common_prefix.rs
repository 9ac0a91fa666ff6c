/// Mismatch budget of a common prefix scan. Transitions only move forward:
/// `NoMismatchYet` to `OneMismatchUsed`, and any mismatch in
/// `OneMismatchUsed` or `ExactMode` ends the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PrefixScan {
    NoMismatchYet,
    OneMismatchUsed,
    ExactMode,
}

impl PrefixScan {
    fn start(exact_match_only: bool) -> Self {
        match exact_match_only {
            true => PrefixScan::ExactMode,
            false => PrefixScan::NoMismatchYet,
        }
    }

    /// The state after a mismatch, or `None` when the scan must stop.
    fn on_mismatch(self) -> Option<Self> {
        match self {
            PrefixScan::NoMismatchYet => Some(PrefixScan::OneMismatchUsed),
            PrefixScan::OneMismatchUsed | PrefixScan::ExactMode => None,
        }
    }
}

/// Length of the common prefix of `fragment` and `extracted`.
///
/// Outside exact mode a single substituted base is absorbed into the prefix.
/// Returns `None` when the very first base differs, which invalidates the
/// candidate. The scan is bounded by the shorter of both inputs.
pub(super) fn longest_common_prefix(
    fragment: &str,
    extracted: &str,
    exact_match_only: bool,
) -> Option<usize> {
    let mut state = PrefixScan::start(exact_match_only);
    let mut length = 0;

    for (position, (expected, found)) in
        fragment.bytes().zip(extracted.bytes()).enumerate()
    {
        if expected != found {
            if position == 0 {
                return None;
            }

            state = match state.on_mismatch() {
                Some(next) => next,
                None => break,
            };
        }

        length += 1;
    }

    Some(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs() {
        assert_eq!(longest_common_prefix("ACGT", "ACGT", true), Some(4));
        assert_eq!(longest_common_prefix("ACGT", "ACGT", false), Some(4));
    }

    #[test]
    fn test_exact_mode_stops_at_first_mismatch() {
        assert_eq!(longest_common_prefix("ACGTAC", "ACCTAC", true), Some(2));
    }

    #[test]
    fn test_single_mismatch_is_absorbed() {
        assert_eq!(longest_common_prefix("ACGTAC", "ACCTAC", false), Some(6));
        assert_eq!(longest_common_prefix("ACGTAC", "ACCTTC", false), Some(4));
        assert_eq!(longest_common_prefix("ACGTAC", "ACGTAA", false), Some(6));
    }

    #[test]
    fn test_first_base_mismatch_is_invalid() {
        assert_eq!(longest_common_prefix("ACGT", "TCGT", true), None);
        assert_eq!(longest_common_prefix("ACGT", "TCGT", false), None);
    }

    #[test]
    fn test_bounded_by_shorter_input() {
        assert_eq!(longest_common_prefix("ACGTAC", "ACG", false), Some(3));
        assert_eq!(longest_common_prefix("ACG", "ACGTAC", true), Some(3));
        assert_eq!(longest_common_prefix("", "", true), Some(0));
    }
}
