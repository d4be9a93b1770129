//! Proptest strategies for resource bundles.

use mars_backend::domain::Resources;
use proptest::prelude::*;

/// Bundle with every field in `0..=max`.
pub fn bundle(max: u32) -> impl Strategy<Value = Resources> {
    (0..=max, 0..=max, 0..=max, 0..=max, 0..=max, 0..=max).prop_map(
        |(credits, steel, titanium, plants, energy, heat)| Resources {
            credits,
            steel,
            titanium,
            plants,
            energy,
            heat,
        },
    )
}

pub fn costs(max: u32, len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Resources>> {
    prop::collection::vec(bundle(max), len)
}
