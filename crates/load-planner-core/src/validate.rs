//! Input validation as a table of named rules.
//!
//! Every rule is evaluated; failures are collected into a list of [`Violation`]s
//! instead of stopping at the first one.

use crate::model::{Dimensions, Item};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A named predicate over a candidate value. `check` returns true when the value passes.
pub struct Rule<T: ?Sized> {
    pub id: &'static str,
    pub check: fn(&T) -> bool,
}

/// One failed rule for one subject (`"container"` or an item name).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    pub subject: String,
    pub rule: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.rule)
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

pub const CONTAINER_RULES: &[Rule<Dimensions>] = &[
    Rule {
        id: "height_positive",
        check: |d| positive(d.height),
    },
    Rule {
        id: "width_positive",
        check: |d| positive(d.width),
    },
    Rule {
        id: "depth_positive",
        check: |d| positive(d.depth),
    },
];

pub const ITEM_RULES: &[Rule<Item>] = &[
    Rule {
        id: "name_not_empty",
        check: |it| !it.name.trim().is_empty(),
    },
    Rule {
        id: "height_non_negative",
        check: |it| non_negative(it.dims.height),
    },
    Rule {
        id: "width_non_negative",
        check: |it| non_negative(it.dims.width),
    },
    Rule {
        id: "depth_non_negative",
        check: |it| non_negative(it.dims.depth),
    },
    Rule {
        id: "weight_non_negative",
        check: |it| non_negative(it.weight),
    },
];

/// Runs `rules` against `value` and returns the ids of the failing ones.
pub fn failing<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|r| !(r.check)(value))
        .map(|r| r.id)
        .collect()
}

/// Checks the container and every item, returning all violations found.
pub fn violations(container: &Dimensions, items: &[Item]) -> Vec<Violation> {
    let mut out: Vec<Violation> = failing(CONTAINER_RULES, container)
        .into_iter()
        .map(|rule| Violation {
            subject: "container".into(),
            rule,
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for (i, it) in items.iter().enumerate() {
        let subject = if it.name.trim().is_empty() {
            format!("items[{}]", i)
        } else {
            it.name.clone()
        };
        for rule in failing(ITEM_RULES, it) {
            out.push(Violation {
                subject: subject.clone(),
                rule,
            });
        }
        if !it.name.trim().is_empty() && !seen.insert(it.name.as_str()) {
            out.push(Violation {
                subject,
                rule: "name_unique",
            });
        }
    }
    out
}
