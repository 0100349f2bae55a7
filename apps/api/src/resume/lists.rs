//! Identity-keyed operations shared by the experience, education and project lists.

use crate::models::{EntryId, Identified};
use crate::resume::ids::IdGenerator;

/// Appends `item` under a freshly issued id and returns that id.
pub fn insert<T: Identified>(items: &mut Vec<T>, mut item: T, ids: &mut IdGenerator) -> EntryId {
    let id = ids.next_id(items.iter().map(Identified::id));
    item.set_id(id);
    items.push(item);
    id
}

/// Replaces the entry sharing `item`'s id in place. Returns false if absent.
pub fn replace<T: Identified>(items: &mut [T], item: T) -> bool {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

pub fn remove<T: Identified>(items: &mut Vec<T>, id: EntryId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Drag-and-drop move: takes the entry at `from` and re-inserts it at `to`.
/// Callers check both indices against `items.len()` first.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// True when `ids` names every current entry exactly once.
pub fn is_permutation<T: Identified>(items: &[T], ids: &[EntryId]) -> bool {
    if ids.len() != items.len() {
        return false;
    }
    let mut current: Vec<EntryId> = items.iter().map(Identified::id).collect();
    let mut wanted = ids.to_vec();
    current.sort_unstable();
    wanted.sort_unstable();
    current == wanted
}

/// Reorders `items` to follow `ids`. Callers verify `is_permutation` first.
pub fn reorder<T: Identified>(items: &mut Vec<T>, ids: &[EntryId]) {
    items.sort_by_key(|item| ids.iter().position(|id| *id == item.id()));
}
