use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::actions::ActionAllowance;
use crate::domain::resources::Resources;

/// Identifier of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

/// Identifier of a player, unique within its game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

string_id!(GameId);
string_id!(PlayerId);

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Lobby; players are still joining.
    Setup,
    /// Players pick their corporation.
    CorporationSelection,
    /// Players keep or discard their opening hand.
    StartingCardSelection,
    /// Players take turns spending actions.
    Action,
    /// Production is paid out and cards are drawn.
    Production,
    /// Game over.
    Complete,
}

impl GamePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::CorporationSelection => "corporation_selection",
            GamePhase::StartingCardSelection => "starting_card_selection",
            GamePhase::Action => "action",
            GamePhase::Production => "production",
            GamePhase::Complete => "complete",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game-level record as held by the game store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub phase: GamePhase,
    /// Player whose turn it is, if anyone may act.
    pub current_turn: Option<PlayerId>,
    /// Seating order.
    pub player_ids: Vec<PlayerId>,
}

impl GameRecord {
    pub fn new(id: GameId, phase: GamePhase) -> Self {
        Self {
            id,
            phase,
            current_turn: None,
            player_ids: Vec::new(),
        }
    }

    pub fn is_turn_of(&self, player_id: &PlayerId) -> bool {
        self.current_turn.as_ref() == Some(player_id)
    }
}

/// Player-level record as held by the player store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub resources: Resources,
    pub available_actions: ActionAllowance,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            resources: Resources::ZERO,
            available_actions: ActionAllowance::default(),
        }
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_actions(mut self, actions: ActionAllowance) -> Self {
        self.available_actions = actions;
        self
    }
}
