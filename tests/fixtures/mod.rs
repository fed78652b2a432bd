//! Test fixtures for integration testing

use canteen_wait::types::MenuItem;

/// A lunch-rush menu export as the ordering front end produces it, including
/// the loosely-typed values the feed is known to send
pub const LUNCH_MENU_JSON: &str = r#"{
    "capturedAt": "2024-09-02T12:15:00Z",
    "items": [
        { "id": "a-1", "name": "Chicken Rice", "prepTime": 8, "pendingOrders": 6, "canteen": "A" },
        { "id": "a-2", "name": "Fish Soup", "prepTime": "12", "pendingOrders": 1, "canteen": "A" },
        { "id": "b-1", "name": "Veggie Wrap", "prepTime": 4, "pendingOrders": "3", "canteen": "B" },
        { "id": "b-2", "name": "Laksa", "prepTime": 10, "pendingOrders": 2, "canteen": "B" },
        { "id": "c-1", "name": "Iced Coffee", "prepTime": 2, "pendingOrders": 9, "canteen": "C" },
        { "id": "x-1", "name": "Daily Special", "prepTime": null, "pendingOrders": "n/a" }
    ]
}"#;

/// Bare-array export with no canteen identifiers at all
pub const SINGLE_COUNTER_JSON: &str = r#"[
    { "name": "Toast", "prepTime": 3 },
    { "name": "Porridge", "prepTime": 6, "pendingOrders": 1 },
    { "name": "Omelette", "prepTime": 5, "pendingOrders": 0 }
]"#;

/// Items with identical scores in different canteens
pub fn tied_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(6.0, 0).with_canteen("North").with_name("north-1"),
        MenuItem::new(4.0, 1).with_canteen("South").with_name("south-1"),
        MenuItem::new(5.0, 0).with_canteen("North").with_name("north-2"),
        MenuItem::new(5.0, 0).with_canteen("East").with_name("east-1"),
    ]
}

/// Deterministic menu of `count` items spread over `canteens` canteens
pub fn generated_menu(count: usize, canteens: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|i| {
            MenuItem::new(((i * 7) % 23) as f64 + 1.0, ((i * 3) % 11) as u32)
                .with_canteen(format!("canteen-{}", i % canteens.max(1)))
                .with_id(format!("item-{}", i))
        })
        .collect()
}
