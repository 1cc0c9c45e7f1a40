mod display_region;

pub use display_region::DisplayRegion;
