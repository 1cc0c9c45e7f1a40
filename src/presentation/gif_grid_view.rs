use std::time::Duration;

use iced::widget::{button, column, container, image, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use crate::core::interfaces::ports::DisplayRegion;
use crate::core::models::ImageItem;
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::gif_animation::DecodedImage;

const GRID_SPACING: f32 = 8.0;
const GRID_PADDING: f32 = 8.0;

#[derive(Debug, Clone)]
pub enum GridCell {
    Image {
        item: ImageItem,
        image: Option<DecodedImage>,
        load_failed: bool,
    },
    ErrorNotice(String),
}

#[derive(Debug, Clone)]
pub enum GridMessage {
    OpenImage(String),
}

/// The display region of the main window.
#[derive(Debug, Default)]
pub struct GifGridView {
    cells: Vec<GridCell>,
    has_rendered: bool,
}

impl GifGridView {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn image_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, GridCell::Image { .. }))
            .count()
    }

    #[allow(dead_code)]
    pub fn error_notice_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, GridCell::ErrorNotice(_)))
            .count()
    }

    pub fn image_urls(&self) -> Vec<(usize, String)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| match cell {
                GridCell::Image { item, .. } => Some((index, item.source_url.clone())),
                GridCell::ErrorNotice(_) => None,
            })
            .collect()
    }

    pub fn apply_decoded_image(&mut self, index: usize, decoded: DecodedImage) {
        if let Some(GridCell::Image { image, .. }) = self.cells.get_mut(index) {
            *image = Some(decoded);
        } else {
            log::warn!("[GRID] No image cell at index {}", index);
        }
    }

    pub fn mark_image_failed(&mut self, index: usize) {
        if let Some(GridCell::Image { load_failed, .. }) = self.cells.get_mut(index) {
            *load_failed = true;
        }
    }

    pub fn has_animations(&self) -> bool {
        self.cells.iter().any(|cell| {
            matches!(cell, GridCell::Image { image: Some(decoded), .. } if decoded.is_animated())
        })
    }

    pub fn advance_animations(&mut self, tick: Duration) {
        for cell in &mut self.cells {
            if let GridCell::Image {
                image: Some(decoded),
                ..
            } = cell
            {
                decoded.advance(tick);
            }
        }
    }

    /// How many tiles fit side by side in `width`, between one and `max_columns`.
    pub fn columns_for_width(width: f32, max_columns: usize) -> usize {
        let usable_width = width - 2.0 * GRID_PADDING + GRID_SPACING;
        let fitting = (usable_width / (global_constants::GRID_CELL_SIZE + GRID_SPACING)).floor();

        (fitting.max(0.0) as usize).clamp(1, max_columns.max(1))
    }

    pub fn render_ui(&self, columns: usize) -> Element<'_, GridMessage> {
        if !self.has_rendered {
            return container(Space::new()).into();
        }

        if self.cells.is_empty() {
            return container(text(global_constants::NO_RESULTS_HINT).size(14))
                .padding(20)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into();
        }

        let columns = columns.max(1);
        let rows: Vec<Element<'_, GridMessage>> = self
            .cells
            .chunks(columns)
            .map(|chunk| {
                Row::with_children(chunk.iter().map(Self::render_cell))
                    .spacing(GRID_SPACING)
                    .align_y(Alignment::Center)
                    .into()
            })
            .collect();

        scrollable(
            Column::with_children(rows)
                .spacing(GRID_SPACING)
                .padding(GRID_PADDING)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    fn render_cell(cell: &GridCell) -> Element<'_, GridMessage> {
        let size = Length::Fixed(global_constants::GRID_CELL_SIZE);

        match cell {
            GridCell::Image {
                item,
                image: decoded,
                load_failed,
            } => {
                let content: Element<'_, GridMessage> = match decoded {
                    Some(decoded) => image(decoded.current_handle().clone())
                        .width(size)
                        .height(size)
                        .into(),
                    None => {
                        let placeholder = if *load_failed {
                            "Image unavailable"
                        } else {
                            "Loading..."
                        };
                        container(column![text(placeholder).size(12), text(item.label()).size(11)])
                            .width(size)
                            .height(size)
                            .center_x(size)
                            .center_y(size)
                            .into()
                    }
                };

                button(content)
                    .padding(0)
                    .style(|theme, status| app_theme::grid_tile_button_style(theme, status))
                    .on_press(GridMessage::OpenImage(item.source_url.clone()))
                    .into()
            }
            GridCell::ErrorNotice(notice) => container(text(notice).size(14))
                .padding(16)
                .width(Length::Fill)
                .style(app_theme::error_notice_style)
                .into(),
        }
    }
}

impl DisplayRegion for GifGridView {
    fn clear(&mut self) {
        self.cells.clear();
        self.has_rendered = true;
    }

    fn append_image(&mut self, item: ImageItem) {
        self.cells.push(GridCell::Image {
            item,
            image: None,
            load_failed: false,
        });
    }

    fn append_error_notice(&mut self, notice: String) {
        self.cells.push(GridCell::ErrorNotice(notice));
    }
}
