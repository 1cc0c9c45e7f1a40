use crate::core::models::ImageItem;

/// Render target for search results.
pub trait DisplayRegion {
    fn clear(&mut self);
    fn append_image(&mut self, item: ImageItem);
    fn append_error_notice(&mut self, notice: String);
}
