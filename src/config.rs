/// Rule switches for the known gaps in the classic ruleset of this core.
///
/// The default reproduces the reference behaviour: only the king is kept out
/// of check, checkmate means "the king has no square to go to", and a king
/// move never reports check. [`RulesConfig::strict`] turns every fix on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesConfig {
    /// Drop non-king destinations that would expose the mover's own king.
    pub filter_pinned_moves: bool,
    /// Count blocks and captures of the checking piece as escapes from check.
    pub full_mate_search: bool,
    /// Classify the opponent's king after king moves too (discovered checks).
    pub classify_king_moves: bool,
}

impl RulesConfig {
    pub fn strict() -> Self {
        RulesConfig {
            filter_pinned_moves: true,
            full_mate_search: true,
            classify_king_moves: true,
        }
    }

    pub fn with_filter_pinned_moves(mut self, enabled: bool) -> Self {
        self.filter_pinned_moves = enabled;
        self
    }

    pub fn with_full_mate_search(mut self, enabled: bool) -> Self {
        self.full_mate_search = enabled;
        self
    }

    pub fn with_classify_king_moves(mut self, enabled: bool) -> Self {
        self.classify_king_moves = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_reference_rules() {
        let config = RulesConfig::default();
        assert!(!config.filter_pinned_moves);
        assert!(!config.full_mate_search);
        assert!(!config.classify_king_moves);
    }

    #[test]
    fn test_builders() {
        let config = RulesConfig::default()
            .with_filter_pinned_moves(true)
            .with_full_mate_search(true)
            .with_classify_king_moves(true);
        assert_eq!(config, RulesConfig::strict());

        let config = RulesConfig::strict().with_full_mate_search(false);
        assert!(config.filter_pinned_moves);
        assert!(!config.full_mate_search);
    }
}
