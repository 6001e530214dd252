//! In-memory stand-ins for the host's laid-out regions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use foldhead_ui::{Region, RegionHost, CONTENT_REGION, HEADER_REGION};

/// A region that records every layout height written to it.
#[derive(Debug, Default)]
pub struct FakeRegion {
    measured_height: Cell<i32>,
    layout_heights: RefCell<Vec<i32>>,
}

impl FakeRegion {
    pub fn new(measured_height: i32) -> Rc<Self> {
        Rc::new(Self {
            measured_height: Cell::new(measured_height),
            layout_heights: RefCell::new(Vec::new()),
        })
    }

    /// Pretend the host measured the region again.
    pub fn set_measured_height(&self, height: i32) {
        self.measured_height.set(height);
    }

    /// Last height written by the layout, if any.
    pub fn layout_height(&self) -> Option<i32> {
        self.layout_heights.borrow().last().copied()
    }

    /// Every height written so far, oldest first.
    pub fn layout_heights(&self) -> Vec<i32> {
        self.layout_heights.borrow().clone()
    }

    pub fn layout_requests(&self) -> usize {
        self.layout_heights.borrow().len()
    }

    pub fn clear_layout_heights(&self) {
        self.layout_heights.borrow_mut().clear();
    }
}

impl Region for FakeRegion {
    fn measured_height(&self) -> i32 {
        self.measured_height.get()
    }

    fn set_layout_height(&self, height: i32) {
        // A real host re-measures after layout.
        self.measured_height.set(height);
        self.layout_heights.borrow_mut().push(height);
    }
}

/// Name-to-region table. Regions can be added and removed at any time.
#[derive(Debug, Default)]
pub struct FakeRegionHost {
    regions: RefCell<HashMap<String, Rc<FakeRegion>>>,
    lookups: Cell<usize>,
}

impl FakeRegionHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Host with a `"header"` of `header_height` and a `"content"` region.
    pub fn with_header(header_height: i32) -> Rc<Self> {
        let host = Self::new();
        host.insert(HEADER_REGION, FakeRegion::new(header_height));
        host.insert(CONTENT_REGION, FakeRegion::new(0));
        host
    }

    pub fn insert(&self, name: &str, region: Rc<FakeRegion>) {
        self.regions.borrow_mut().insert(name.to_owned(), region);
    }

    pub fn remove(&self, name: &str) -> Option<Rc<FakeRegion>> {
        self.regions.borrow_mut().remove(name)
    }

    pub fn region(&self, name: &str) -> Option<Rc<FakeRegion>> {
        self.regions.borrow().get(name).cloned()
    }

    /// How many times the layout asked for a region.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl RegionHost for FakeRegionHost {
    fn find_region(&self, name: &str) -> Option<Rc<dyn Region>> {
        self.lookups.set(self.lookups.get() + 1);
        self.region(name).map(|region| region as Rc<dyn Region>)
    }
}
