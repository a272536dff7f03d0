use crate::config::{PlannerConfig, SortOrder};
use crate::error::{PlannerError, Result};
use crate::model::{Dimensions, Item, PlanResult};
use crate::packer::{Packer, shelf::ShelfPacker};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One independent planning job for [`plan_batch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub container: Dimensions,
    pub items: Vec<Item>,
}

/// Plans `items` into `container` with the default configuration
/// (volume descending, weight descending).
pub fn plan(container: Dimensions, items: &[Item]) -> Result<PlanResult> {
    plan_with_config(container, items, &PlannerConfig::default())
}

#[instrument(skip_all, fields(items = items.len()))]
/// Plans `items` into `container` using `cfg`.
///
/// Notes:
/// - Input is validated first; any violation aborts with `InvalidInput` and no partial plan.
/// - Items are processed in `cfg.sort_order`; sorting is stable and ties end on the name.
/// - Items that do not fit are reported in `skipped`/`reasons`, never as errors.
pub fn plan_with_config(
    container: Dimensions,
    items: &[Item],
    cfg: &PlannerConfig,
) -> Result<PlanResult> {
    let violations = validate::violations(&container, items);
    if !violations.is_empty() {
        return Err(PlannerError::InvalidInput(violations));
    }

    let mut order: Vec<&Item> = items.iter().collect();
    sort_items(&mut order, &cfg.sort_order);

    let mut packer = ShelfPacker::new(container);
    let mut placements = Vec::with_capacity(order.len());
    let mut skipped = Vec::new();
    let mut reasons = Vec::new();
    let mut skipped_weight = 0.0;
    for item in order {
        match packer.try_place(item) {
            Ok(p) => placements.push(p),
            Err(reason) => {
                debug!(name = %item.name, %reason, "skipped");
                skipped.push(item.name.clone());
                reasons.push(reason);
                skipped_weight += item.weight;
            }
        }
    }
    debug!(
        placed = placements.len(),
        skipped = skipped.len(),
        layers = packer.layers_opened(),
        "plan complete"
    );
    Ok(PlanResult {
        container,
        placements,
        skipped,
        reasons,
        layers: packer.layers_opened(),
        skipped_weight,
    })
}

/// Orders items for processing. Used by the planner; public so callers can preview the order.
pub fn sort_items(items: &mut [&Item], order: &SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::VolumeWeightDesc => items.sort_by(|a, b| {
            desc(a.volume(), b.volume())
                .then_with(|| desc(a.weight, b.weight))
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortOrder::WeightDesc => items
            .sort_by(|a, b| desc(a.weight, b.weight).then_with(|| a.name.cmp(&b.name))),
        SortOrder::HeightDesc => items.sort_by(|a, b| {
            desc(a.dims.height, b.dims.height).then_with(|| a.name.cmp(&b.name))
        }),
    }
}

fn desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[instrument(skip_all, fields(requests = requests.len()))]
/// Plans several independent requests. Results keep request order.
///
/// With the `parallel` feature and `cfg.parallel` set, requests are planned on the rayon pool.
pub fn plan_batch(requests: Vec<PlanRequest>, cfg: &PlannerConfig) -> Vec<Result<PlanResult>> {
    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            return requests
                .par_iter()
                .map(|r| plan_with_config(r.container, &r.items, cfg))
                .collect();
        }
    }

    requests
        .iter()
        .map(|r| plan_with_config(r.container, &r.items, cfg))
        .collect()
}
