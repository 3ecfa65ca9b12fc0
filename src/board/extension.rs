//! Per-board mutable state carried inside `Board`.
//!
//! The core only moves the payload around. Each board module reads and
//! writes its own variant through `BoardExtension`; the payload types keep
//! their fields private to that module.

use serde::{Deserialize, Serialize};

use crate::boards::eternal_star::EternalStarState;
use crate::boards::peach_cake::PeachCakeState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extension {
    None,
    EternalStar(EternalStarState),
    PeachCake(PeachCakeState),
}

/// Typed access to one `Extension` variant.
pub(crate) trait BoardExtension: Sized {
    fn view(extension: &Extension) -> Option<&Self>;
    fn view_mut(extension: &mut Extension) -> Option<&mut Self>;
}

impl BoardExtension for EternalStarState {
    fn view(extension: &Extension) -> Option<&Self> {
        match extension {
            Extension::EternalStar(state) => Some(state),
            _ => None,
        }
    }

    fn view_mut(extension: &mut Extension) -> Option<&mut Self> {
        match extension {
            Extension::EternalStar(state) => Some(state),
            _ => None,
        }
    }
}

impl BoardExtension for PeachCakeState {
    fn view(extension: &Extension) -> Option<&Self> {
        match extension {
            Extension::PeachCake(state) => Some(state),
            _ => None,
        }
    }

    fn view_mut(extension: &mut Extension) -> Option<&mut Self> {
        match extension {
            Extension::PeachCake(state) => Some(state),
            _ => None,
        }
    }
}
