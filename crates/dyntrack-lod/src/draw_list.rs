//! Per-frame list of track units to draw, each with its camera-relative transform.

use glam::Mat4;

/// One renderable unit of one subsection, placed relative to the camera tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    /// Index of the subsection mesh in the caller's mesh list.
    pub subsection: usize,
    /// Index of the unit within that subsection (shared numbering across subsections).
    pub unit: usize,
    /// Subsection-local to camera-tile-relative transform.
    pub transform: Mat4,
}

/// Draw items collected during frame preparation.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    sorted: bool,
}

impl DrawList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new list with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            sorted: false,
        }
    }

    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
        self.sorted = false;
    }

    /// Sort so items sharing a unit index, and so a material, are adjacent.
    ///
    /// Order within a unit follows subsection index.
    pub fn sort(&mut self) {
        self.items
            .sort_by(|a, b| a.unit.cmp(&b.unit).then(a.subsection.cmp(&b.subsection)));
        self.sorted = true;
    }

    /// Clear the list for reuse next frame, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted = false;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list has been sorted since the last modification.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawItem> {
        self.items.iter()
    }
}
