//! Match configuration.
//!
//! A `GameConfig` is fixed when a `Game` is created and read-only
//! afterwards. Builder methods follow the `with_*` convention.

use serde::{Deserialize, Serialize};

/// Default match length in rounds.
pub const DEFAULT_MAX_TURNS: u8 = 20;

/// Rule toggles for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The match ends after this many rounds.
    pub max_turns: u8,

    /// Each character turn starts by picking between the normal dice block
    /// and the event dice block.
    pub dice_assist: bool,

    /// Every landing first asks whether a hidden block was hit.
    pub hidden_blocks: bool,

    /// Boo spaces are inert.
    pub no_boo: bool,

    /// Award the three bonus stars when the match ends.
    pub bonus_stars: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            dice_assist: false,
            hidden_blocks: false,
            no_boo: false,
            bonus_stars: false,
        }
    }
}

impl GameConfig {
    /// Set the match length.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u8) -> Self {
        assert!(max_turns > 0, "A match needs at least one turn");
        self.max_turns = max_turns;
        self
    }

    /// Enable the dice-block pick at the start of every character turn.
    #[must_use]
    pub fn with_dice_assist(mut self) -> Self {
        self.dice_assist = true;
        self
    }

    /// Enable hidden-block checks on landing.
    #[must_use]
    pub fn with_hidden_blocks(mut self) -> Self {
        self.hidden_blocks = true;
        self
    }

    /// Disable Boo spaces.
    #[must_use]
    pub fn without_boo(mut self) -> Self {
        self.no_boo = true;
        self
    }

    /// Enable end-of-match bonus stars.
    #[must_use]
    pub fn with_bonus_stars(mut self) -> Self {
        self.bonus_stars = true;
        self
    }
}
