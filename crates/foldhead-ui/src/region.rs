use std::rc::Rc;

/// Name the header region is registered under in the host.
pub const HEADER_REGION: &str = "header";
/// Name the content region is registered under in the host.
pub const CONTENT_REGION: &str = "content";

/// A laid-out child of the container.
pub trait Region {
    /// Height measured by the host's last layout pass, in pixels.
    fn measured_height(&self) -> i32;

    /// Fix the region's layout height and ask the host to lay it out again.
    fn set_layout_height(&self, height: i32);
}

/// Resolves child regions by name.
pub trait RegionHost {
    fn find_region(&self, name: &str) -> Option<Rc<dyn Region>>;
}
