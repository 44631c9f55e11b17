// crates/report/src/group.rs

use lading_types::{BranchGroup, BranchId, ShipmentRecord};
use std::collections::HashMap;

/// Partitions records into destination-branch groups.
///
/// Group order is first-seen order of `to_branch_id`; explicit sorting
/// is a separate step (`order_groups`). Records without a destination id
/// collect into a single group of their own rather than being dropped.
/// The union of all group record-sets is exactly the input.
pub fn group_by_destination(records: Vec<ShipmentRecord>) -> Vec<BranchGroup> {
    let mut groups: Vec<BranchGroup> = Vec::new();
    let mut slots: HashMap<Option<BranchId>, usize> = HashMap::new();

    for record in records {
        match slots.get(&record.to_branch_id) {
            Some(&slot) => groups[slot].records.push(record),
            None => {
                slots.insert(record.to_branch_id, groups.len());
                groups.push(BranchGroup {
                    branch_id: record.to_branch_id,
                    branch_name: record.to_branch.clone(),
                    records: vec![record],
                });
            }
        }
    }

    log::debug!("grouped records into {} destinations", groups.len());
    groups
}
