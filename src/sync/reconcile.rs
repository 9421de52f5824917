//! Diffs the current marker set against a new result list by stable
//! identity.

use crate::{
    core::item::Item,
    marker::Marker,
    prelude::{HashMap, HashSet},
};

/// Outcome of one reconciliation pass.
///
/// `retained ++ additions` is the next marker collection; every marker in
/// `removed` must be detached from the surface before being discarded.
#[derive(Debug, Default)]
pub struct MarkerDiff {
    pub retained: Vec<Marker>,
    pub removed: Vec<Marker>,
    pub additions: Vec<Item>,
}

/// Partitions `previous` into markers whose identity survives in `items`
/// and markers to remove, then collects the items that need a new marker.
///
/// Additive-only: a retained marker is never reconstructed or repositioned,
/// even when the item's geolocation changed. Duplicate identities within
/// `items` collapse to a single addition, last occurrence wins.
pub fn reconcile(previous: Vec<Marker>, items: &[Item]) -> MarkerDiff {
    let next_identities: HashSet<&str> = items.iter().map(|item| item.identity.as_str()).collect();

    let (retained, removed): (Vec<Marker>, Vec<Marker>) = previous
        .into_iter()
        .partition(|marker| next_identities.contains(marker.identity()));

    let retained_identities: HashSet<&str> =
        retained.iter().map(|marker| marker.identity()).collect();

    let mut additions: Vec<Item> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::default();
    for item in items {
        if retained_identities.contains(item.identity.as_str()) {
            continue;
        }
        match slots.get(item.identity.as_str()) {
            Some(&slot) => additions[slot] = item.clone(),
            None => {
                slots.insert(item.identity.as_str(), additions.len());
                additions.push(item.clone());
            }
        }
    }

    MarkerDiff {
        retained,
        removed,
        additions,
    }
}
