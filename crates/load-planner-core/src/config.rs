use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Processing orders for deterministic planning.
/// Every order except `None` breaks remaining ties by name so the plan does not
/// depend on the order items were supplied in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Volume descending, then weight descending.
    VolumeWeightDesc,
    WeightDesc,
    HeightDesc,
    NameAsc,
    /// Keep the caller's order.
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "volume_weight_desc" | "volume_desc" => Ok(Self::VolumeWeightDesc),
            "weight_desc" => Ok(Self::WeightDesc),
            "height_desc" => Ok(Self::HeightDesc),
            "name_asc" => Ok(Self::NameAsc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
    /// Plan batch requests in parallel when feature "parallel" is on.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            sort_order: default_sort_order(),
            parallel: default_parallel(),
        }
    }
}

fn default_sort_order() -> SortOrder {
    SortOrder::VolumeWeightDesc
}
fn default_parallel() -> bool {
    false
}

/// Builder for `PlannerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PlannerConfigBuilder {
    cfg: PlannerConfig,
}

impl PlannerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PlannerConfig::default(),
        }
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PlannerConfig {
        self.cfg
    }
}

impl PlannerConfig {
    /// Create a fluent builder for `PlannerConfig`.
    pub fn builder() -> PlannerConfigBuilder {
        PlannerConfigBuilder::new()
    }
}
