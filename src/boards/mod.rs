//! Boards with their own rules.
//!
//! Each board module builds its graph, owns its `Extension` payload, and
//! implements `BoardRules` for the hooks it places on the graph. Board
//! decisions are grouped into one event type per board.

pub mod eternal_star;
pub mod peach_cake;

pub use eternal_star::{EternalStarEvent, EternalStarResponse, EternalStarRules, EternalStarState};
pub use peach_cake::{PeachCakeEvent, PeachCakeResponse, PeachCakeRules, PeachCakeState};
