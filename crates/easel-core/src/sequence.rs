//! Ordered sequences of positioned elements.
//!
//! Both editable models are a list of elements sorted by a normalized
//! position in `[0, 1]`, with the first element pinned at 0 and the last at
//! 1. [`OrderedSequence`] owns that list and enforces the ordering and
//! endpoint rules; the models only add their value payload on top.
//!
//! Every element carries a stable id. After a re-sort the element being
//! edited is found again by id, never by its predicted index.

/// Minimum number of elements an interactive edit may leave behind.
pub const MIN_LEN: usize = 2;

/// Range interior elements are clamped to, keeping them strictly inside the
/// endpoints.
pub const INTERIOR_MIN: f32 = 0.01;
pub const INTERIOR_MAX: f32 = 0.99;

/// An element with a normalized position along the sequence axis.
pub trait Positioned: Clone {
    fn position(&self) -> f32;
    fn set_position(&mut self, position: f32);
}

/// Where an index sits in a sequence of length `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Last,
    Interior,
}

impl Slot {
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 == len {
            Self::Last
        } else {
            Self::Interior
        }
    }

    /// Clamp a requested position for an element in this slot.
    pub fn clamp(self, position: f32) -> f32 {
        match self {
            Self::First => 0.0,
            Self::Last => 1.0,
            Self::Interior => position.clamp(INTERIOR_MIN, INTERIOR_MAX),
        }
    }
}

/// Stable identity of an element, unchanged by re-sorting.
///
/// Ids are not reused within a sequence; a wholesale replace issues fresh
/// ones, so ids taken before a replace no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: ElementId,
    value: T,
}

/// A sorted list of positioned elements with endpoint locking.
#[derive(Debug, Clone)]
pub struct OrderedSequence<T> {
    entries: Vec<Entry<T>>,
    next_id: u32,
}

impl<T: Positioned> OrderedSequence<T> {
    /// Build a sequence from arbitrary input, sorting it by position.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut seq = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        seq.replace(items);
        seq
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).map(|e| &mut e.value)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|e| &e.value)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Id of the element currently at `index`.
    pub fn id_at(&self, index: usize) -> Option<ElementId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current index of the element with `id`, if it is still present.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Whether `index` may be removed: interior only, and never below
    /// [`MIN_LEN`].
    pub fn can_remove(&self, index: usize) -> bool {
        index < self.len()
            && Slot::of(index, self.len()) == Slot::Interior
            && self.len() > MIN_LEN
    }

    /// Replace the whole sequence. Input order does not matter.
    pub fn replace(&mut self, items: impl IntoIterator<Item = T>) {
        self.entries.clear();
        for value in items {
            let id = self.alloc_id();
            self.entries.push(Entry { id, value });
        }
        self.sort();
    }

    /// Append `value`, re-sort, and return the index it landed at.
    pub fn insert(&mut self, value: T) -> usize {
        let id = self.alloc_id();
        self.entries.push(Entry { id, value });
        self.sort();
        self.resolve(id)
    }

    /// Update the element at `index` with `edit`, pin its position according
    /// to its slot, re-sort, and return its new index.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut T)) -> Option<usize> {
        let slot = Slot::of(index, self.len());
        let entry = self.entries.get_mut(index)?;
        edit(&mut entry.value);
        let pinned = slot.clamp(entry.value.position());
        entry.value.set_position(pinned);

        let id = entry.id;
        self.sort();
        Some(self.resolve(id))
    }

    /// Remove the element at `index` if [`can_remove`](Self::can_remove)
    /// allows it.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if !self.can_remove(index) {
            return None;
        }
        Some(self.entries.remove(index).value)
    }

    /// Find the pair of neighbours bracketing `t`.
    ///
    /// Returns the indices `(lo, hi)` with `pos[lo] <= t <= pos[hi]`, or
    /// `None` when `t` lies outside the first/last positions or fewer than
    /// two elements exist.
    pub fn bracket(&self, t: f32) -> Option<(usize, usize)> {
        let n = self.len();
        if n < MIN_LEN {
            return None;
        }
        if t <= self.entries[0].value.position() || t >= self.entries[n - 1].value.position() {
            return None;
        }

        // Binary search for the segment containing t
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.entries[mid].value.position() <= t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some((lo, hi))
    }

    fn alloc_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| a.value.position().total_cmp(&b.value.position()));
    }

    fn resolve(&self, id: ElementId) -> usize {
        self.index_of(id).unwrap_or(self.entries.len().saturating_sub(1))
    }
}

impl<T: Positioned> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Sequences compare by value; ids are an editing detail.
impl<T: Positioned + PartialEq> PartialEq for OrderedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(f32);

    impl Positioned for Marker {
        fn position(&self) -> f32 {
            self.0
        }
        fn set_position(&mut self, position: f32) {
            self.0 = position;
        }
    }

    fn positions(seq: &OrderedSequence<Marker>) -> Vec<f32> {
        seq.iter().map(|m| m.0).collect()
    }

    fn four() -> OrderedSequence<Marker> {
        OrderedSequence::new([Marker(0.0), Marker(0.3), Marker(0.6), Marker(1.0)])
    }

    #[test]
    fn test_new_sorts_input() {
        let seq = OrderedSequence::new([Marker(1.0), Marker(0.0), Marker(0.5)]);
        assert_eq!(positions(&seq), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_insert_resolves_index_after_sort() {
        let mut seq = four();
        let idx = seq.insert(Marker(0.45));
        assert_eq!(idx, 2);
        assert_eq!(positions(&seq), vec![0.0, 0.3, 0.45, 0.6, 1.0]);
    }

    #[test]
    fn test_update_follows_element_across_neighbours() {
        let mut seq = four();
        let idx = seq.update(1, |m| m.0 = 0.8).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(positions(&seq), vec![0.0, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_update_pins_endpoints() {
        let mut seq = four();
        assert_eq!(seq.update(0, |m| m.0 = 0.4), Some(0));
        assert_eq!(seq.update(3, |m| m.0 = 0.2), Some(3));
        assert_eq!(positions(&seq), vec![0.0, 0.3, 0.6, 1.0]);
    }

    #[test]
    fn test_update_clamps_interior() {
        let mut seq = four();
        let idx = seq.update(1, |m| m.0 = -3.0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(seq.get(1).unwrap().0, INTERIOR_MIN);

        let idx = seq.update(2, |m| m.0 = 7.0).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(seq.get(2).unwrap().0, INTERIOR_MAX);
    }

    #[test]
    fn test_update_out_of_range_is_none() {
        let mut seq = four();
        assert_eq!(seq.update(9, |m| m.0 = 0.5), None);
    }

    #[test]
    fn test_remove_rejects_endpoints_and_minimum() {
        let mut seq = four();
        assert!(seq.remove(0).is_none());
        assert!(seq.remove(3).is_none());
        assert!(seq.remove(1).is_some());
        assert!(seq.remove(1).is_some());
        assert_eq!(seq.len(), 2);
        assert!(seq.remove(1).is_none());
        assert!(seq.remove(7).is_none());
    }

    #[test]
    fn test_bracket() {
        let seq = four();
        assert_eq!(seq.bracket(0.0), None);
        assert_eq!(seq.bracket(1.0), None);
        assert_eq!(seq.bracket(0.1), Some((0, 1)));
        assert_eq!(seq.bracket(0.3), Some((1, 2)));
        assert_eq!(seq.bracket(0.99), Some((2, 3)));
        assert_eq!(OrderedSequence::new([Marker(0.5)]).bracket(0.5), None);
    }

    #[test]
    fn test_ids_survive_resort_and_die_on_replace() {
        let mut seq = four();
        let id = seq.id_at(1).unwrap();
        seq.insert(Marker(0.1));
        assert_eq!(seq.index_of(id), Some(2));
        seq.update(2, |m| m.0 = 0.9);
        assert_eq!(seq.index_of(id), Some(3));

        seq.replace([Marker(0.0), Marker(1.0)]);
        assert_eq!(seq.index_of(id), None);
        assert_eq!(seq.id_at(5), None);
    }

    #[test]
    fn test_equality_ignores_ids() {
        let mut a = four();
        let b = four();
        a.insert(Marker(0.5));
        let idx = a.iter().position(|m| m.0 == 0.5).unwrap();
        a.remove(idx);
        assert_eq!(a, b);
    }
}
