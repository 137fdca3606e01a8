//! Partitioning of the unseated pool into criterion groups.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::types::{CriterionCount, GroupMode, GuestGroup};
use crate::model::Guest;

/// Builds the ordered group list for one run.
///
/// `pool` is the unseated guest pool in its original order. Guests that
/// match none of `selected` appear in no group.
///
/// - **Category**: one group per selected category, first-appearance order.
/// - **Tag**: selected tags are processed in selection order; each claims
///   every not-yet-claimed guest carrying it. Tags that claim nobody are
///   dropped.
///
/// Groups are then stable-sorted by size, largest first, so big clusters
/// get first pick of table space.
///
/// # Examples
///
/// ```
/// use u_seating::grouping::{build_groups, GroupMode};
/// use u_seating::model::Guest;
///
/// let pool = vec![
///     Guest::new("g1", "A", "Friend"),
///     Guest::new("g2", "B", "Family"),
///     Guest::new("g3", "C", "Family"),
/// ];
/// let selected = vec!["Friend".to_string(), "Family".to_string()];
/// let groups = build_groups(&pool, GroupMode::Category, &selected);
/// assert_eq!(groups[0].key, "Family");
/// assert_eq!(groups[0].len(), 2);
/// assert_eq!(groups[1].key, "Friend");
/// ```
pub fn build_groups<'a, I>(pool: I, mode: GroupMode, selected: &[String]) -> Vec<GuestGroup<'a>>
where
    I: IntoIterator<Item = &'a Guest>,
{
    let pool: Vec<&'a Guest> = pool.into_iter().collect();
    let mut groups = match mode {
        GroupMode::Category => group_by_category(&pool, selected),
        GroupMode::Tag => group_by_tag(&pool, selected),
    };
    // Vec::sort_by is stable: equal sizes keep their formation order.
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

fn group_by_category<'a>(pool: &[&'a Guest], selected: &[String]) -> Vec<GuestGroup<'a>> {
    let mut by_category: IndexMap<&'a str, Vec<&'a Guest>> = IndexMap::new();
    for &guest in pool {
        if selected.iter().any(|c| *c == guest.category) {
            by_category
                .entry(guest.category.as_str())
                .or_default()
                .push(guest);
        }
    }
    by_category
        .into_iter()
        .map(|(key, guests)| GuestGroup {
            key: key.to_string(),
            guests,
        })
        .collect()
}

fn group_by_tag<'a>(pool: &[&'a Guest], selected: &[String]) -> Vec<GuestGroup<'a>> {
    let mut claimed: HashSet<&'a str> = HashSet::new();
    let mut groups = Vec::new();

    for tag in selected {
        let guests: Vec<&'a Guest> = pool
            .iter()
            .copied()
            .filter(|g| !claimed.contains(g.id.as_str()) && g.has_tag(tag))
            .collect();
        if guests.is_empty() {
            continue;
        }
        claimed.extend(guests.iter().map(|g| g.id.as_str()));
        groups.push(GuestGroup {
            key: tag.clone(),
            guests,
        });
    }
    groups
}

/// Lists the criterion values carried by unseated guests.
///
/// Values appear in first-appearance order over `guests`; seated guests are
/// ignored. A guest carrying a tag twice is counted once.
///
/// ```
/// use u_seating::grouping::{available_criteria, GroupMode};
/// use u_seating::model::Guest;
///
/// let guests = vec![
///     Guest::new("g1", "A", "Family").with_tags(["VIP"]),
///     Guest::new("g2", "B", "Friend").with_tags(["VIP", "Kid"]),
/// ];
/// let tags = available_criteria(&guests, GroupMode::Tag);
/// assert_eq!(tags[0].value, "VIP");
/// assert_eq!(tags[0].guests, 2);
/// assert_eq!(tags[1].value, "Kid");
/// ```
pub fn available_criteria(guests: &[Guest], mode: GroupMode) -> Vec<CriterionCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for guest in guests.iter().filter(|g| !g.is_seated()) {
        match mode {
            GroupMode::Category => *counts.entry(guest.category.as_str()).or_default() += 1,
            GroupMode::Tag => {
                let mut seen: HashSet<&str> = HashSet::new();
                for tag in &guest.tags {
                    if seen.insert(tag.as_str()) {
                        *counts.entry(tag.as_str()).or_default() += 1;
                    }
                }
            }
        }
    }
    counts
        .into_iter()
        .map(|(value, guests)| CriterionCount {
            value: value.to_string(),
            guests,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeatRef;

    fn keys(groups: &[GuestGroup<'_>]) -> Vec<String> {
        groups.iter().map(|g| g.key.clone()).collect()
    }

    fn ids(group: &GuestGroup<'_>) -> Vec<String> {
        group.guests.iter().map(|g| g.id.clone()).collect()
    }

    fn sel(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_category_groups_sorted_by_size() {
        let pool = vec![
            Guest::new("g1", "A", "Colleague"),
            Guest::new("g2", "B", "Family"),
            Guest::new("g3", "C", "Family"),
            Guest::new("g4", "D", "Friend"),
            Guest::new("g5", "E", "Family"),
            Guest::new("g6", "F", "Friend"),
        ];
        let groups = build_groups(
            &pool,
            GroupMode::Category,
            &sel(&["Colleague", "Family", "Friend"]),
        );
        assert_eq!(keys(&groups), vec!["Family", "Friend", "Colleague"]);
        assert_eq!(ids(&groups[0]), vec!["g2", "g3", "g5"]);
    }

    #[test]
    fn test_category_ties_keep_first_appearance() {
        let pool = vec![
            Guest::new("g1", "A", "Friend"),
            Guest::new("g2", "B", "Family"),
        ];
        // Selection order does not matter in category mode.
        let groups = build_groups(&pool, GroupMode::Category, &sel(&["Family", "Friend"]));
        assert_eq!(keys(&groups), vec!["Friend", "Family"]);
    }

    #[test]
    fn test_category_filter_excludes_unselected() {
        let pool = vec![
            Guest::new("g1", "A", "Family"),
            Guest::new("g2", "B", "Friend"),
        ];
        let groups = build_groups(&pool, GroupMode::Category, &sel(&["Family"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["g1"]);
    }

    #[test]
    fn test_tag_first_matching_tag_wins() {
        let pool = vec![
            Guest::new("g1", "A", "Family").with_tags(["VIP", "素食"]),
            Guest::new("g2", "B", "Family").with_tags(["素食"]),
        ];
        let groups = build_groups(&pool, GroupMode::Tag, &sel(&["VIP", "素食"]));
        assert_eq!(groups.len(), 2);
        let vip = groups.iter().find(|g| g.key == "VIP").unwrap();
        let veg = groups.iter().find(|g| g.key == "素食").unwrap();
        assert_eq!(ids(vip), vec!["g1"]);
        assert_eq!(ids(veg), vec!["g2"]);
    }

    #[test]
    fn test_tag_selection_order_decides_claims() {
        let pool = vec![
            Guest::new("g1", "A", "Family").with_tags(["VIP", "Kid"]),
            Guest::new("g2", "B", "Family").with_tags(["VIP"]),
        ];
        let groups = build_groups(&pool, GroupMode::Tag, &sel(&["Kid", "VIP"]));
        // Kid claims g1 first, VIP is left with g2; sizes tie so order stays.
        assert_eq!(keys(&groups), vec!["Kid", "VIP"]);
        assert_eq!(ids(&groups[1]), vec!["g2"]);
    }

    #[test]
    fn test_tag_empty_groups_dropped() {
        let pool = vec![Guest::new("g1", "A", "Family").with_tags(["VIP"])];
        let groups = build_groups(&pool, GroupMode::Tag, &sel(&["Kid", "VIP", "VIP"]));
        assert_eq!(keys(&groups), vec!["VIP"]);
    }

    #[test]
    fn test_untagged_guest_absent() {
        let pool = vec![
            Guest::new("g1", "A", "Family"),
            Guest::new("g2", "B", "Family").with_tags(["VIP"]),
        ];
        let groups = build_groups(&pool, GroupMode::Tag, &sel(&["VIP"]));
        let total: usize = groups.iter().map(GuestGroup::len).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_available_categories_skip_seated() {
        let guests = vec![
            Guest::new("g1", "A", "Family"),
            Guest::new("g2", "B", "Friend").with_assigned_seat(SeatRef::new("t1", 0)),
            Guest::new("g3", "C", "Colleague"),
            Guest::new("g4", "D", "Family"),
        ];
        let cats = available_criteria(&guests, GroupMode::Category);
        assert_eq!(
            cats,
            vec![
                CriterionCount {
                    value: "Family".into(),
                    guests: 2
                },
                CriterionCount {
                    value: "Colleague".into(),
                    guests: 1
                },
            ]
        );
    }

    #[test]
    fn test_available_tags_count_once_per_guest() {
        let mut guest = Guest::new("g1", "A", "Family");
        guest.tags = vec!["VIP".into(), "VIP".into()];
        let tags = available_criteria(&[guest], GroupMode::Tag);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].guests, 1);
    }
}
