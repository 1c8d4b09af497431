/// Knobs for `GameSession`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Refold the whole log on every refresh instead of applying only the
    /// new entries to the cached board.
    pub always_full_replay: bool,
}
