use crate::model::{Item, Placement, SkipReason};

pub mod shelf;

/// A packer assigns positions to items inside one container, one item at a time.
///
/// Implementations must ensure placed boxes never overlap and stay inside the container.
/// `try_place` returns the reason when the item cannot be placed; a rejected item must
/// leave the packer's state unchanged.
pub trait Packer {
    fn try_place(&mut self, item: &Item) -> Result<Placement, SkipReason>;
    /// Number of layers opened so far.
    fn layers_opened(&self) -> usize;
}
