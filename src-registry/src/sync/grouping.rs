//! Category Grouping
//!
//! Groups keep server order inside a category. Groups themselves follow the
//! sheet's explicit `order` column when it has one, otherwise category name.

use std::collections::HashMap;

use crate::domain::GiftItem;

/// Items of one category, borrowed from the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a GiftItem>,
}

pub fn group_by_category(items: &[GiftItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let category = item.category.as_str();
        match index.get(category).copied() {
            Some(i) => groups[i].items.push(item),
            None => {
                index.insert(category, groups.len());
                groups.push(CategoryGroup {
                    category,
                    items: vec![item],
                });
            }
        }
    }

    let explicit = items.iter().any(|i| i.order.is_some());
    if explicit {
        // Groups with no ordered item go last
        groups.sort_by(|a, b| {
            min_order(a)
                .cmp(&min_order(b))
                .then_with(|| a.category.cmp(b.category))
        });
    } else {
        groups.sort_by(|a, b| a.category.cmp(b.category));
    }
    groups
}

fn min_order(group: &CategoryGroup<'_>) -> (bool, i64) {
    match group.items.iter().filter_map(|i| i.order).min() {
        Some(order) => (false, order),
        None => (true, 0),
    }
}
