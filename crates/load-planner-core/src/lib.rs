//! Core library for planning how boxes are loaded into a container.
//!
//! - Algorithm: greedy shelf placement. Items fill a row along the width, rows stack
//!   along the depth into a layer, layers stack along the height. No rotation, no backtracking.
//! - Pipeline: `plan` validates input, sorts items (volume desc, weight desc) and returns a `PlanResult`
//! - Data model is serde-serializable; a JSON exporter is provided in `export`.
//!
//! Quick example:
//! ```
//! use load_planner_core::{Dimensions, Item, plan};
//! # fn main() -> load_planner_core::Result<()> {
//! let container = Dimensions::new(100.0, 100.0, 240.0);
//! let items = vec![
//!     Item::new("crateA", 50.0, 40.0, 60.0, 80.0),
//!     Item::new("crateB", 30.0, 30.0, 30.0, 40.0),
//! ];
//! let result = plan(container, &items)?;
//! assert!(result.is_complete());
//! println!("{}", result.stats().summary());
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod validate;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `load_planner_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PlannerConfig, PlannerConfigBuilder, SortOrder};
    pub use crate::model::{
        Dimensions, Item, PlanResult, PlanStats, Placement, Position, SkipReason,
    };
    pub use crate::packer::{Packer, shelf::ShelfPacker};
    pub use crate::validate::Violation;
    pub use crate::{PlanRequest, PlannerError, plan, plan_batch, plan_with_config, sort_items};
}
