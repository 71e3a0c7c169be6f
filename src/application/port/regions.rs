// SPDX-License-Identifier: MPL-2.0
//! Waveform region host port definition.
//!
//! The host renders regions and reports drag/resize/click gestures back by
//! calling the orchestrator's `on_region_*` methods. The host never edits
//! segments itself.

use crate::domain::region::Region;

/// Port for the visual timeline that displays segment regions.
pub trait RegionHost {
    /// Removes every region.
    fn clear_regions(&mut self);

    /// Adds a region.
    fn add_region(&mut self, region: &Region);

    /// Updates bounds, color and label of the region with `region.index`.
    fn update_region(&mut self, region: &Region);

    /// Highlights the region at `index` (or none) as current.
    fn set_active_region(&mut self, index: Option<usize>);
}

/// Host that ignores every call, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRegionHost;

impl RegionHost for NullRegionHost {
    fn clear_regions(&mut self) {}

    fn add_region(&mut self, _region: &Region) {}

    fn update_region(&mut self, _region: &Region) {}

    fn set_active_region(&mut self, _index: Option<usize>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RegionHost) {}

    #[test]
    fn null_host_accepts_calls() {
        let mut host = NullRegionHost;
        host.clear_regions();
        host.set_active_region(Some(1));
    }
}
