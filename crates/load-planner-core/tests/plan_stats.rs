use load_planner_core::prelude::*;

#[test]
fn test_plan_stats_basic() {
    let container = Dimensions::new(10.0, 10.0, 10.0);
    // Four 5x5x5 cubes cover the floor of the container.
    let items: Vec<Item> = (0..4)
        .map(|i| Item::new(format!("cube_{}", i), 5.0, 5.0, 5.0, 2.5))
        .collect();
    let result = plan(container, &items).expect("plan should succeed");
    let stats = result.stats();

    assert_eq!(stats.num_placed, 4);
    assert_eq!(stats.num_skipped, 0);
    assert_eq!(stats.num_layers, 1);
    assert_eq!(stats.container_volume, 1000.0);
    assert_eq!(stats.used_volume, 500.0);
    assert!((stats.utilization - 0.5).abs() < 1e-12);
    assert_eq!(stats.placed_weight, 10.0);
    assert_eq!(stats.max_load_height, 5.0);
    assert_eq!(stats.wasted_volume(), 500.0);
    assert!((stats.waste_percentage() - 50.0).abs() < 1e-9);
}

#[test]
fn test_plan_stats_counts_skipped_weight() {
    let container = Dimensions::new(10.0, 10.0, 10.0);
    let items = vec![
        Item::new("fits", 5.0, 5.0, 5.0, 4.0),
        Item::new("too_tall", 12.0, 1.0, 1.0, 7.5),
    ];
    let result = plan(container, &items).expect("plan");
    let stats = result.stats();
    assert_eq!(stats.num_placed, 1);
    assert_eq!(stats.num_skipped, 1);
    assert_eq!(stats.placed_weight, 4.0);
    assert_eq!(stats.skipped_weight, 7.5);
    assert_eq!(result.skipped_weight, 7.5);
}

#[test]
fn test_plan_stats_summary() {
    let result = plan(
        Dimensions::new(2.0, 2.0, 2.0),
        &[Item::new("half", 1.0, 2.0, 2.0, 1.0)],
    )
    .expect("plan");
    let summary = result.stats().summary();
    assert!(summary.contains("Placed: 1"));
    assert!(summary.contains("Skipped: 0"));
    assert!(summary.contains("Utilization: 50.00%"));
}

#[test]
fn test_plan_stats_empty_plan() {
    let result = plan(Dimensions::new(1.0, 1.0, 1.0), &[]).expect("plan");
    let stats = result.stats();
    assert_eq!(stats.used_volume, 0.0);
    assert_eq!(stats.utilization, 0.0);
    assert_eq!(stats.num_layers, 0);
    assert_eq!(stats.waste_percentage(), 100.0);
}
