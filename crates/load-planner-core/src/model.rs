use serde::{Deserialize, Serialize};
use std::fmt;

/// Extent of a container or item along the three fixed axes.
///
/// `width` runs along x, `height` along y and `depth` along z.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(height: f64, width: f64, depth: f64) -> Self {
        Self {
            height,
            width,
            depth,
        }
    }
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.depth
    }
}

/// A named box to be loaded. The name is its identity within one planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub name: String,
    pub dims: Dimensions,
    pub weight: f64,
}

impl Item {
    /// Builds an item from `(height, width, depth, weight)`.
    pub fn new(name: impl Into<String>, height: f64, width: f64, depth: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            dims: Dimensions::new(height, width, depth),
            weight,
        }
    }
    pub fn volume(&self) -> f64 {
        self.dims.volume()
    }
}

/// Lower corner of a placed box. `x` is the width-axis offset, `y` the height-axis
/// offset, `z` the depth-axis offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An item together with the position it was assigned inside the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub item: Item,
    pub position: Position,
}

impl Placement {
    /// Opposite (upper) corner of the placed box.
    pub fn max_corner(&self) -> Position {
        let d = &self.item.dims;
        Position::new(
            self.position.x + d.width,
            self.position.y + d.height,
            self.position.z + d.depth,
        )
    }

    /// Returns true if the interiors of both boxes intersect. Boxes that only
    /// share a face, edge or corner do not overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let (a0, a1) = (self.position, self.max_corner());
        let (b0, b1) = (other.position, other.max_corner());
        a0.x < b1.x && b0.x < a1.x && a0.y < b1.y && b0.y < a1.y && a0.z < b1.z && b0.z < a1.z
    }

    /// Returns true if the placed box lies fully inside `container` (inclusive bounds).
    pub fn is_within(&self, container: &Dimensions) -> bool {
        let lo = self.position;
        let hi = self.max_corner();
        lo.x >= 0.0
            && lo.y >= 0.0
            && lo.z >= 0.0
            && hi.x <= container.width
            && hi.y <= container.height
            && hi.z <= container.depth
    }
}

/// Why an item was left out of the plan. Skips are normal outcomes, not errors.
///
/// `TooTall` is the usual case. `TooWide` and `TooDeep` are reported up front for
/// items that exceed the container's own width or depth, since no cursor position
/// could ever hold them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Not enough height left above the current layer.
    TooTall,
    /// Wider than the container itself.
    TooWide,
    /// Deeper than the container itself.
    TooDeep,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::TooTall => "too tall for remaining container height",
            SkipReason::TooWide => "too wide for container width",
            SkipReason::TooDeep => "too deep for container depth",
        };
        f.write_str(s)
    }
}

/// Outcome of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    /// Interior dimensions the plan was computed for.
    pub container: Dimensions,
    /// Placements in processing order.
    pub placements: Vec<Placement>,
    /// Names of items that could not be placed, in processing order.
    pub skipped: Vec<String>,
    /// `reasons[i]` explains `skipped[i]`.
    pub reasons: Vec<SkipReason>,
    /// Number of layers the shelf cursor opened (0 when nothing was placed).
    #[serde(default)]
    pub layers: usize,
    /// Total weight of the skipped items.
    #[serde(default)]
    pub skipped_weight: f64,
}

impl PlanResult {
    /// True when every input item was placed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn placed_names(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.item.name.as_str())
    }

    pub fn skipped_with_reasons(&self) -> impl Iterator<Item = (&str, SkipReason)> {
        self.skipped
            .iter()
            .map(String::as_str)
            .zip(self.reasons.iter().copied())
    }

    /// Looks up the placement for the item called `name`.
    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item.name == name)
    }
}

/// Statistics about how well a plan fills its container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanStats {
    /// Number of placed items.
    pub num_placed: usize,
    /// Number of skipped items.
    pub num_skipped: usize,
    /// Number of layers opened by the shelf cursor.
    pub num_layers: usize,
    /// Interior volume of the container.
    pub container_volume: f64,
    /// Sum of the volumes of all placed items.
    pub used_volume: f64,
    /// Utilization ratio: used_volume / container_volume (0.0 to 1.0).
    pub utilization: f64,
    /// Total weight of placed items.
    pub placed_weight: f64,
    /// Total weight of skipped items.
    pub skipped_weight: f64,
    /// Height of the highest placed box top.
    pub max_load_height: f64,
}

impl PlanResult {
    /// Computes load statistics for this plan.
    pub fn stats(&self) -> PlanStats {
        let container_volume = self.container.volume();
        let mut used_volume = 0.0;
        let mut placed_weight = 0.0;
        let mut max_load_height = 0.0f64;
        for p in &self.placements {
            used_volume += p.item.volume();
            placed_weight += p.item.weight;
            max_load_height = max_load_height.max(p.max_corner().y);
        }
        let utilization = if container_volume > 0.0 {
            used_volume / container_volume
        } else {
            0.0
        };
        PlanStats {
            num_placed: self.placements.len(),
            num_skipped: self.skipped.len(),
            num_layers: self.layers,
            container_volume,
            used_volume,
            utilization,
            placed_weight,
            skipped_weight: self.skipped_weight,
            max_load_height,
        }
    }
}

impl PlanStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}, Skipped: {}, Layers: {}, Utilization: {:.2}%, Used Volume: {:.2}, Container Volume: {:.2}, Placed Weight: {:.2}",
            self.num_placed,
            self.num_skipped,
            self.num_layers,
            self.utilization * 100.0,
            self.used_volume,
            self.container_volume,
            self.placed_weight,
        )
    }

    /// Returns the container volume left empty.
    pub fn wasted_volume(&self) -> f64 {
        (self.container_volume - self.used_volume).max(0.0)
    }

    /// Returns wasted volume as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.container_volume > 0.0 {
            (self.wasted_volume() / self.container_volume) * 100.0
        } else {
            0.0
        }
    }
}
