use load_planner_core::prelude::*;

fn container() -> Dimensions {
    Dimensions::new(100.0, 100.0, 240.0)
}

fn crates() -> Vec<Item> {
    vec![
        Item::new("crateA", 50.0, 40.0, 60.0, 80.0),
        Item::new("crateB", 30.0, 30.0, 30.0, 40.0),
        Item::new("crateC", 20.0, 60.0, 40.0, 50.0),
        Item::new("crateD", 80.0, 40.0, 50.0, 90.0),
        Item::new("crateE", 10.0, 90.0, 30.0, 20.0),
        Item::new("crateF", 40.0, 40.0, 40.0, 60.0),
    ]
}

#[test]
fn all_six_crates_are_placed() {
    let result = plan(container(), &crates()).expect("plan");
    assert!(result.is_complete());
    assert_eq!(result.placements.len(), 6);
    assert!(result.reasons.is_empty());
}

#[test]
fn processing_order_breaks_volume_tie_by_weight() {
    let result = plan(container(), &crates()).expect("plan");
    let order: Vec<&str> = result.placed_names().collect();
    // crateB and crateE both have volume 27000; crateB is heavier.
    assert_eq!(
        order,
        vec!["crateD", "crateA", "crateF", "crateC", "crateB", "crateE"]
    );
}

#[test]
fn positions_follow_row_wraps() {
    let result = plan(container(), &crates()).expect("plan");
    let expect = [
        ("crateD", (0.0, 0.0, 0.0)),
        ("crateA", (40.0, 0.0, 0.0)),
        ("crateF", (0.0, 0.0, 60.0)),
        ("crateC", (40.0, 0.0, 60.0)),
        ("crateB", (0.0, 0.0, 100.0)),
        ("crateE", (0.0, 0.0, 130.0)),
    ];
    for (name, (x, y, z)) in expect {
        let p = result.placement(name).expect("placed");
        assert_eq!(p.position, Position::new(x, y, z), "position of {}", name);
    }
    // Everything fits on the floor: one layer.
    assert_eq!(result.layers, 1);
}

#[test]
fn sample_plan_is_disjoint_and_contained() {
    let result = plan(container(), &crates()).expect("plan");
    for p in &result.placements {
        assert!(p.is_within(&result.container), "{} escapes", p.item.name);
    }
    for i in 0..result.placements.len() {
        for j in (i + 1)..result.placements.len() {
            assert!(!result.placements[i].overlaps(&result.placements[j]));
        }
    }
}

#[test]
fn placements_keep_input_items_unchanged() {
    let items = crates();
    let result = plan(container(), &items).expect("plan");
    for p in &result.placements {
        let original = items.iter().find(|i| i.name == p.item.name).expect("known");
        assert_eq!(&p.item, original);
    }
}
