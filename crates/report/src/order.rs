// crates/report/src/order.rs

use lading_types::BranchGroup;

/// Sorts groups by destination name, case-insensitive ascending.
///
/// The sort is stable: groups whose names fold to the same string keep
/// their first-seen relative order.
pub fn order_groups(groups: &mut [BranchGroup]) {
    groups.sort_by_cached_key(|group| group.branch_name.to_lowercase());
}

/// Sorts a group's records by waybill number ascending.
///
/// `LrNumber` carries a total order (numeric first, unparseable last),
/// so the result is deterministic even for malformed waybill numbers.
pub fn order_records(group: &mut BranchGroup) {
    group.records.sort_by(|a, b| a.lr_number.cmp(&b.lr_number));
}

/// Orders a whole report: groups by name, records within each group by
/// waybill number.
pub fn order_report(groups: &mut [BranchGroup]) {
    order_groups(groups);
    for group in groups.iter_mut() {
        order_records(group);
    }
}
