//! Standard projects and their fixed costs.

use serde::{Deserialize, Serialize};

use crate::domain::resources::{ResourceKind, Resources};

/// Credits charged per card bought outside the starting selection.
pub const CARD_PURCHASE_COST: u32 = 3;

/// Project every player may fund as a turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardProject {
    PowerPlant,
    Asteroid,
    Aquifer,
    Greenery,
    City,
    ConvertPlantsToGreenery,
    ConvertHeatToTemperature,
}

impl StandardProject {
    pub const ALL: [StandardProject; 7] = [
        StandardProject::PowerPlant,
        StandardProject::Asteroid,
        StandardProject::Aquifer,
        StandardProject::Greenery,
        StandardProject::City,
        StandardProject::ConvertPlantsToGreenery,
        StandardProject::ConvertHeatToTemperature,
    ];

    pub fn cost(&self) -> Resources {
        match self {
            StandardProject::PowerPlant => Resources::credits(11),
            StandardProject::Asteroid => Resources::credits(14),
            StandardProject::Aquifer => Resources::credits(18),
            StandardProject::Greenery => Resources::credits(23),
            StandardProject::City => Resources::credits(25),
            StandardProject::ConvertPlantsToGreenery => {
                Resources::ZERO.with(ResourceKind::Plants, 8)
            }
            StandardProject::ConvertHeatToTemperature => {
                Resources::ZERO.with(ResourceKind::Heat, 8)
            }
        }
    }
}

/// Cost of buying `count` cards.
pub fn card_purchase_cost(count: u32) -> Option<Resources> {
    count.checked_mul(CARD_PURCHASE_COST).map(Resources::credits)
}
