//! Resource bundles and affordability arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six spendable commodities a player holds.
///
/// Declaration order is the fixed order in which affordability is checked,
/// so the first under-funded kind reported is always deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Credits,
    Steel,
    Titanium,
    Plants,
    Energy,
    Heat,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Credits,
        ResourceKind::Steel,
        ResourceKind::Titanium,
        ResourceKind::Plants,
        ResourceKind::Energy,
        ResourceKind::Heat,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::Steel => "steel",
            Self::Titanium => "titanium",
            Self::Plants => "plants",
            Self::Energy => "energy",
            Self::Heat => "heat",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-shape bundle of non-negative resource counters.
///
/// Used both for a player's holdings and for a cost. Unsigned fields make a
/// negative cost or balance unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub credits: u32,
    pub steel: u32,
    pub titanium: u32,
    pub plants: u32,
    pub energy: u32,
    pub heat: u32,
}

/// The first resource a bundle could not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub kind: ResourceKind,
    pub need: u32,
    pub have: u32,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insufficient {}: need {}, have {}",
            self.kind, self.need, self.have
        )
    }
}

impl Resources {
    pub const ZERO: Resources = Resources {
        credits: 0,
        steel: 0,
        titanium: 0,
        plants: 0,
        energy: 0,
        heat: 0,
    };

    pub fn credits(amount: u32) -> Self {
        Self {
            credits: amount,
            ..Self::ZERO
        }
    }

    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Credits => self.credits,
            ResourceKind::Steel => self.steel,
            ResourceKind::Titanium => self.titanium,
            ResourceKind::Plants => self.plants,
            ResourceKind::Energy => self.energy,
            ResourceKind::Heat => self.heat,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Credits => &mut self.credits,
            ResourceKind::Steel => &mut self.steel,
            ResourceKind::Titanium => &mut self.titanium,
            ResourceKind::Plants => &mut self.plants,
            ResourceKind::Energy => &mut self.energy,
            ResourceKind::Heat => &mut self.heat,
        }
    }

    /// Builder-style setter, handy for spelling out costs.
    pub fn with(mut self, kind: ResourceKind, amount: u32) -> Self {
        *self.slot_mut(kind) = amount;
        self
    }

    pub fn is_zero(&self) -> bool {
        ResourceKind::ALL.iter().all(|k| self.get(*k) == 0)
    }

    /// First kind (in `ResourceKind::ALL` order) where `self` cannot cover `cost`.
    pub fn shortfall(&self, cost: &Resources) -> Option<Shortfall> {
        ResourceKind::ALL.iter().find_map(|&kind| {
            let have = self.get(kind);
            let need = cost.get(kind);
            (have < need).then_some(Shortfall { kind, need, have })
        })
    }

    /// Subtract `cost` from every field, or report the first shortfall and
    /// leave `self` untouched.
    pub fn try_deduct(&self, cost: &Resources) -> Result<Resources, Shortfall> {
        if let Some(short) = self.shortfall(cost) {
            return Err(short);
        }
        let mut out = *self;
        for kind in ResourceKind::ALL {
            *out.slot_mut(kind) -= cost.get(kind);
        }
        Ok(out)
    }

    /// Add `amount` to every field. Returns the overflowing kind on overflow.
    pub fn checked_add(&self, amount: &Resources) -> Result<Resources, ResourceKind> {
        let mut out = *self;
        for kind in ResourceKind::ALL {
            let slot = out.slot_mut(kind);
            *slot = slot.checked_add(amount.get(kind)).ok_or(kind)?;
        }
        Ok(out)
    }
}
