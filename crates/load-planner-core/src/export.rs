use crate::error::{PlannerError, Result};
use crate::model::PlanResult;
use serde_json::{Value, json};

/// Serialize a plan as `{ container, placements, skipped, stats }`.
/// Placements carry `position` (lower corner) and `size`; skipped entries carry a readable `reason`.
pub fn to_json(plan: &PlanResult) -> Value {
    let placements: Vec<Value> = plan
        .placements
        .iter()
        .map(|p| {
            let d = &p.item.dims;
            json!({
                "name": p.item.name,
                "position": {"x": p.position.x, "y": p.position.y, "z": p.position.z},
                "size": {"height": d.height, "width": d.width, "depth": d.depth},
                "weight": p.item.weight,
            })
        })
        .collect();
    let skipped: Vec<Value> = plan
        .skipped_with_reasons()
        .map(|(name, reason)| json!({"name": name, "reason": reason.to_string()}))
        .collect();
    json!({
        "container": &plan.container,
        "placements": placements,
        "skipped": skipped,
        "stats": plan.stats(),
    })
}

/// Pretty-printed [`to_json`].
pub fn to_json_string(plan: &PlanResult) -> Result<String> {
    serde_json::to_string_pretty(&to_json(plan)).map_err(|e| PlannerError::Encode(e.to_string()))
}
