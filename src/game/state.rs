//! Stages, actions and the per-stage legality table.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParseActionError, ParseStageError};

/// Game stage, owned and advanced by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    /// Waiting for a deal.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_READY"))]
    Ready,
    /// Player acts on the first hand.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_PLAYER_TURN_RIGHT"))]
    PlayerTurnRight,
    /// Player acts on the hand created by a split.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_PLAYER_TURN_LEFT"))]
    PlayerTurnLeft,
    /// Hands are settled.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_SHOWDOWN", alias = "SHOWDOWN"))]
    Showdown,
    /// Dealer draws.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_DEALER_TURN"))]
    DealerTurn,
    /// Round finished.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_DONE"))]
    Done,
    /// State could not be resolved.
    #[cfg_attr(feature = "serde", serde(rename = "STAGE_INVALID"))]
    Invalid,
}

/// A player or dealer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Action {
    /// Resynchronize state.
    Restore,
    /// Deal the initial cards.
    Deal,
    /// Keep the current hand.
    Stand,
    /// Draw a card.
    Hit,
    /// Double down.
    Double,
    /// Split a pair.
    Split,
    /// Insure against a dealer ace.
    Insurance,
    /// Give up half the wager.
    Surrender,
    /// Dealer draws a card.
    DealerHit,
    /// Settle the hands.
    Showdown,
}

impl Action {
    /// Every action.
    pub const ALL: [Self; 10] = [
        Self::Restore,
        Self::Deal,
        Self::Stand,
        Self::Hit,
        Self::Double,
        Self::Split,
        Self::Insurance,
        Self::Surrender,
        Self::DealerHit,
        Self::Showdown,
    ];

    /// Returns the identifier shared with the orchestrator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restore => "RESTORE",
            Self::Deal => "DEAL",
            Self::Stand => "STAND",
            Self::Hit => "HIT",
            Self::Double => "DOUBLE",
            Self::Split => "SPLIT",
            Self::Insurance => "INSURANCE",
            Self::Surrender => "SURRENDER",
            Self::DealerHit => "DEALER_HIT",
            Self::Showdown => "SHOWDOWN",
        }
    }
}

impl Stage {
    /// Every stage.
    pub const ALL: [Self; 7] = [
        Self::Ready,
        Self::PlayerTurnRight,
        Self::PlayerTurnLeft,
        Self::Showdown,
        Self::DealerTurn,
        Self::Done,
        Self::Invalid,
    ];

    /// Returns the identifier shared with the orchestrator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "STAGE_READY",
            Self::PlayerTurnRight => "STAGE_PLAYER_TURN_RIGHT",
            Self::PlayerTurnLeft => "STAGE_PLAYER_TURN_LEFT",
            Self::Showdown => "STAGE_SHOWDOWN",
            Self::DealerTurn => "STAGE_DEALER_TURN",
            Self::Done => "STAGE_DONE",
            Self::Invalid => "STAGE_INVALID",
        }
    }

    /// Returns the actions this stage allows, not counting the always-legal
    /// [`Action::Restore`].
    #[must_use]
    pub const fn allowed_actions(&self) -> &'static [Action] {
        match self {
            Self::Ready => &[Action::Restore, Action::Deal],
            Self::PlayerTurnRight => &[
                Action::Stand,
                Action::Insurance,
                Action::Surrender,
                Action::Split,
                Action::Hit,
                Action::Double,
            ],
            // The split-created hand cannot insure, surrender or re-split.
            Self::PlayerTurnLeft => &[Action::Stand, Action::Hit, Action::Double],
            Self::Showdown => &[Action::Showdown, Action::Stand],
            Self::DealerTurn => &[Action::DealerHit],
            Self::Done | Self::Invalid => &[],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or(ParseActionError)
    }
}

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Orchestrators compare the showdown stage against the bare action name.
        // Both that and the canonical `STAGE_SHOWDOWN` are accepted, so the
        // string form is wider than a match on the bare name alone.
        if s == Action::Showdown.as_str() {
            return Ok(Self::Showdown);
        }
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or(ParseStageError)
    }
}

/// Returns whether `action` is legal during `stage`.
///
/// [`Action::Restore`] is legal in every stage.
///
/// # Example
///
/// ```
/// use bjcore::{Action, Stage, is_action_allowed};
///
/// assert!(is_action_allowed(Action::Hit, Stage::PlayerTurnLeft));
/// assert!(!is_action_allowed(Action::Split, Stage::PlayerTurnLeft));
/// assert!(is_action_allowed(Action::Restore, Stage::Done));
/// ```
#[must_use]
pub fn is_action_allowed(action: Action, stage: Stage) -> bool {
    if action == Action::Restore {
        return true;
    }
    let allowed = stage.allowed_actions().contains(&action);
    if !allowed {
        log::debug!("action {action} denied during {stage}");
    }
    allowed
}

/// String form of [`is_action_allowed`].
///
/// `"RESTORE"` is legal for any stage string, including unknown ones. Any
/// other unknown action or stage is denied.
#[must_use]
pub fn is_action_allowed_by_name(action: &str, stage: &str) -> bool {
    match action.parse::<Action>() {
        Ok(Action::Restore) => true,
        Ok(action) => stage
            .parse::<Stage>()
            .is_ok_and(|stage| is_action_allowed(action, stage)),
        Err(_) => false,
    }
}
