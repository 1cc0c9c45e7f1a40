pub mod app_theme;
pub mod gif_animation;
mod gif_grid_view;

pub use gif_animation::{decode_image_bytes, DecodedImage};
#[cfg(test)]
pub use gif_grid_view::GridCell;
pub use gif_grid_view::{GifGridView, GridMessage};
