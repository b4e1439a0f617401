//! Result-set ordering.
//!
//! Two-level comparator. Exclusivity is the pinned primary key:
//! exclusive records precede non-exclusive ones under every sort
//! selection, and `SortOrder` never reverses that placement. The chosen
//! sort key only orders records within each tier.

use std::cmp::Ordering;

use crate::types::property::Property;
use crate::types::sort::{SortKey, SortOrder, SortState};

/// Total order over qualifying records.
pub fn compare(a: &Property, b: &Property, sort: SortState) -> Ordering {
    match b.is_exclusive.cmp(&a.is_exclusive) {
        Ordering::Equal => compare_in_tier(a, b, sort),
        tier => tier,
    }
}

/// Order within an exclusivity tier by the active sort key.
///
/// Records missing the active field sort after records that have it,
/// in both directions, so a record with no price never tops a price sort.
fn compare_in_tier(a: &Property, b: &Property, sort: SortState) -> Ordering {
    match sort.key {
        SortKey::Price => compare_optional(a.price, b.price, sort.order),
        SortKey::Views => directed(a.views.cmp(&b.views), sort.order),
        SortKey::CreatedAt => compare_optional(a.created_at, b.created_at, sort.order),
    }
}

fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => directed(x.cmp(&y), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sort::{SortKey, SortOrder};
    use chrono::{TimeZone, Utc};
    use estate_client::RawProperty;
    use rust_decimal::Decimal;

    fn property(id: i64) -> Property {
        Property::from_raw(RawProperty {
            id,
            title: None,
            property_type: None,
            listing_type: None,
            region: None,
            is_exclusive: None,
            is_hidden: None,
            url_3d: None,
            price: None,
            currency: None,
            area: None,
            rooms: None,
            views: None,
            created_at: None,
        })
    }

    fn priced(id: i64, price: i64) -> Property {
        let mut p = property(id);
        p.price = Some(Decimal::from(price));
        p
    }

    #[test]
    fn test_exclusive_precedes_regardless_of_sort() {
        let mut cheap_exclusive = priced(1, 10);
        cheap_exclusive.is_exclusive = true;
        let expensive = priced(2, 1_000_000);

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sort = SortState::new(SortKey::Price, order);
            assert_eq!(compare(&cheap_exclusive, &expensive, sort), Ordering::Less);
            assert_eq!(compare(&expensive, &cheap_exclusive, sort), Ordering::Greater);
        }
    }

    #[test]
    fn test_price_orders_within_tier() {
        let a = priced(1, 100);
        let b = priced(2, 200);
        let asc = SortState::new(SortKey::Price, SortOrder::Asc);
        let desc = SortState::new(SortKey::Price, SortOrder::Desc);
        assert_eq!(compare(&a, &b, asc), Ordering::Less);
        assert_eq!(compare(&a, &b, desc), Ordering::Greater);
    }

    #[test]
    fn test_missing_price_sinks_in_both_directions() {
        let priced = priced(1, 100);
        let unpriced = property(2);
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sort = SortState::new(SortKey::Price, order);
            assert_eq!(compare(&priced, &unpriced, sort), Ordering::Less);
        }
    }

    #[test]
    fn test_created_at_ordering() {
        let mut older = property(1);
        older.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = property(2);
        newer.created_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());

        let newest_first = SortState::new(SortKey::CreatedAt, SortOrder::Desc);
        assert_eq!(compare(&newer, &older, newest_first), Ordering::Less);
    }

    #[test]
    fn test_views_ordering() {
        let mut quiet = property(1);
        quiet.views = 3;
        let mut popular = property(2);
        popular.views = 900;

        let most_viewed = SortState::new(SortKey::Views, SortOrder::Desc);
        assert_eq!(compare(&popular, &quiet, most_viewed), Ordering::Less);
    }
}
