use itertools::Itertools;
use log::error;

use crate::geometry::primitives::PxRect;
use crate::mask::OccupancyTracker;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every available cell has to be free in the reference mask
pub fn available_within_original(tracker: &OccupancyTracker) -> bool {
    let original = tracker.original().cells();
    let available = tracker.available().cells();
    match available
        .iter()
        .zip(original.iter())
        .position(|(&avail, &orig)| avail && !orig)
    {
        Some(idx) => {
            error!("cell {idx} is available but occupied in the reference mask");
            false
        }
        None => true,
    }
}

/// The gap-expanded regions of all placements have to be pairwise disjoint
pub fn claimed_regions_disjoint(tracker: &OccupancyTracker, placements: &[PxRect]) -> bool {
    let regions = placements
        .iter()
        .map(|p| tracker.claimed_region(p).to_rect())
        .collect_vec();
    match regions
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, a), (_, b))| a.overlaps(b))
    {
        Some(((i, _), (j, _))) => {
            error!("claimed regions of placements {i} and {j} overlap");
            false
        }
        None => true,
    }
}
