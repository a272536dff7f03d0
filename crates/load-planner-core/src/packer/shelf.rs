use super::Packer;
use crate::model::{Dimensions, Item, Placement, Position, SkipReason};
use tracing::{debug, trace};

/// Cursor over the container: rows run along x, rows stack along z into a layer,
/// layers stack along y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Cursor {
    x: f64,
    y: f64,
    z: f64,
    /// Deepest item in the active row.
    row_depth: f64,
    /// Tallest item in the active layer.
    layer_height: f64,
}

/// Greedy shelf / row / layer packer with fixed item orientation.
pub struct ShelfPacker {
    container: Dimensions,
    cursor: Cursor,
    layers: usize,
}

impl ShelfPacker {
    pub fn new(container: Dimensions) -> Self {
        Self {
            container,
            cursor: Cursor::default(),
            layers: 0,
        }
    }

    /// Returns the cursor the item would be placed at plus whether a new layer was opened,
    /// without committing anything.
    fn advance(&self, d: &Dimensions) -> Result<(Cursor, bool), SkipReason> {
        let c = &self.container;
        if d.width > c.width {
            return Err(SkipReason::TooWide);
        }
        if d.depth > c.depth {
            return Err(SkipReason::TooDeep);
        }
        let mut cur = self.cursor;
        let mut new_layer = false;
        if cur.x + d.width > c.width {
            debug!(z = cur.z + cur.row_depth, "row wrap");
            cur.x = 0.0;
            cur.z += cur.row_depth;
            cur.row_depth = 0.0;
        }
        if cur.z + d.depth > c.depth {
            debug!(y = cur.y + cur.layer_height, "layer wrap");
            cur.z = 0.0;
            cur.y += cur.layer_height;
            cur.layer_height = 0.0;
            new_layer = true;
        }
        if cur.y + d.height > c.height {
            return Err(SkipReason::TooTall);
        }
        Ok((cur, new_layer))
    }
}

impl Packer for ShelfPacker {
    fn try_place(&mut self, item: &Item) -> Result<Placement, SkipReason> {
        let d = &item.dims;
        let (mut cur, new_layer) = self.advance(d)?;
        let position = Position::new(cur.x, cur.y, cur.z);
        cur.x += d.width;
        cur.row_depth = cur.row_depth.max(d.depth);
        cur.layer_height = cur.layer_height.max(d.height);
        self.cursor = cur;
        if self.layers == 0 || new_layer {
            self.layers += 1;
        }
        trace!(name = %item.name, x = position.x, y = position.y, z = position.z, "placed");
        Ok(Placement {
            item: item.clone(),
            position,
        })
    }

    fn layers_opened(&self) -> usize {
        self.layers
    }
}
