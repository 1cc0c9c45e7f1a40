use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::window::{self, Id};
use iced::{Alignment, Background, Color, Element, Length, Size, Subscription, Task};

use crate::core::interfaces::adapters::HttpClient;
use crate::core::models::{RequestGenerationCounter, SearchError, UserSettings};
use crate::core::orchestrators::search_pipeline::{SearchOutcome, SearchPipeline};
use crate::core::services::SearchQueryBuilder;
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{decode_image_bytes, DecodedImage, GifGridView, GridMessage};

const MAIN_WINDOW_SIZE: Size = Size::new(900.0, 700.0);
const MAIN_WINDOW_PADDING: f32 = 24.0;
const ANIMATION_TICK: Duration = Duration::from_millis(20);

pub struct AppOrchestrator {
    query_builder: SearchQueryBuilder,
    pipeline: SearchPipeline,
    settings: UserSettings,
    grid: GifGridView,
    generations: RequestGenerationCounter,
    search_term: String,
    status: String,
    alert: Option<String>,
    main_window_id: Option<Id>,
    main_window_width: f32,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    WindowResized(Id, Size),
    SearchTermChanged(String),
    SearchRequested,
    SearchCompleted(u64, SearchOutcome),
    ImageLoaded(u64, usize, Result<DecodedImage, SearchError>),
    AnimationTick,
    Grid(GridMessage),
    DismissAlert,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
            OrchestratorMessage::WindowResized(id, size) => {
                write!(f, "WindowResized({:?}, {}x{})", id, size.width, size.height)
            }
            OrchestratorMessage::SearchTermChanged(_) => write!(f, "SearchTermChanged"),
            OrchestratorMessage::SearchRequested => write!(f, "SearchRequested"),
            OrchestratorMessage::SearchCompleted(generation, outcome) => match outcome {
                Ok(items) => write!(f, "SearchCompleted({}, {} items)", generation, items.len()),
                Err(error) => write!(f, "SearchCompleted({}, {})", generation, error),
            },
            OrchestratorMessage::ImageLoaded(generation, index, result) => {
                write!(
                    f,
                    "ImageLoaded({}, {}, {:?})",
                    generation,
                    index,
                    result.is_ok()
                )
            }
            OrchestratorMessage::AnimationTick => write!(f, "AnimationTick"),
            OrchestratorMessage::Grid(message) => write!(f, "Grid({:?})", message),
            OrchestratorMessage::DismissAlert => write!(f, "DismissAlert"),
        }
    }
}

impl AppOrchestrator {
    pub fn build(http_client: Arc<dyn HttpClient>, settings: UserSettings) -> Self {
        Self {
            query_builder: SearchQueryBuilder::new(settings.search_config()),
            pipeline: SearchPipeline::new(http_client),
            settings,
            grid: GifGridView::new(),
            generations: RequestGenerationCounter::new(),
            search_term: String::new(),
            status: global_constants::STATUS_READY.to_string(),
            alert: None,
            main_window_id: None,
            main_window_width: MAIN_WINDOW_SIZE.width,
        }
    }

    pub fn grid(&self) -> &GifGridView {
        &self.grid
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn latest_generation(&self) -> u64 {
        self.generations.latest()
    }

    /// Ticks only while at least one tile is animating.
    pub fn animation_subscription(&self) -> Subscription<OrchestratorMessage> {
        if self.grid.has_animations() {
            iced::time::every(ANIMATION_TICK).map(|_| OrchestratorMessage::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::AnimationTick) {
            log::debug!("[ORCHESTRATOR] Received message: {:?}", message);
        }

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
            OrchestratorMessage::WindowResized(id, size) => {
                if Some(id) == self.main_window_id {
                    self.main_window_width = size.width;
                }
                Task::none()
            }
            OrchestratorMessage::SearchTermChanged(term) => {
                self.search_term = term;
                Task::none()
            }
            OrchestratorMessage::SearchRequested => self.handle_search_requested(),
            OrchestratorMessage::SearchCompleted(generation, outcome) => {
                self.handle_search_completed(generation, outcome)
            }
            OrchestratorMessage::ImageLoaded(generation, index, result) => {
                self.handle_image_loaded(generation, index, result);
                Task::none()
            }
            OrchestratorMessage::AnimationTick => {
                self.grid.advance_animations(ANIMATION_TICK);
                Task::none()
            }
            OrchestratorMessage::Grid(GridMessage::OpenImage(url)) => {
                log::info!("[ORCHESTRATOR] Opening {} in browser", url);
                if let Err(e) = open::that(&url) {
                    log::error!("[ORCHESTRATOR] Failed to open {}: {}", url, e);
                }
                Task::none()
            }
            OrchestratorMessage::DismissAlert => {
                self.alert = None;
                Task::none()
            }
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists and is open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: MAIN_WINDOW_SIZE,
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            return iced::exit();
        }

        Task::none()
    }

    fn handle_search_requested(&mut self) -> Task<OrchestratorMessage> {
        if self.alert.is_some() {
            log::debug!("[ORCHESTRATOR] Search ignored while alert is shown");
            return Task::none();
        }

        let request = match self.query_builder.build(&self.search_term) {
            Ok(request) => request,
            Err(SearchError::EmptySearchTerm) => {
                self.alert = Some(global_constants::EMPTY_TERM_ALERT.to_string());
                return Task::none();
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to build search request: {}", e);
                return Task::none();
            }
        };

        let generation = self.generations.dispatch();
        self.status = global_constants::STATUS_SEARCHING.to_string();

        log::info!(
            "[ORCHESTRATOR] Dispatching search #{} for '{}'{}",
            generation,
            request.term.as_str(),
            if request.used_default_term {
                " (default term)"
            } else {
                ""
            }
        );

        let pipeline = self.pipeline.clone();
        Task::future(async move {
            let outcome = pipeline.fetch_image_items(&request.url).await;
            OrchestratorMessage::SearchCompleted(generation, outcome)
        })
    }

    fn handle_search_completed(
        &mut self,
        generation: u64,
        outcome: SearchOutcome,
    ) -> Task<OrchestratorMessage> {
        if !self.generations.is_current(generation) {
            log::debug!(
                "[ORCHESTRATOR] Discarding stale search #{} (latest is #{})",
                generation,
                self.generations.latest()
            );
            return Task::none();
        }

        SearchPipeline::render_outcome(&outcome, &mut self.grid);

        self.status = match &outcome {
            Ok(_) => Self::describe_result_count(self.grid.image_count()),
            Err(_) => global_constants::STATUS_FAILED.to_string(),
        };

        let image_tasks: Vec<Task<OrchestratorMessage>> = self
            .grid
            .image_urls()
            .into_iter()
            .map(|(index, url)| {
                let pipeline = self.pipeline.clone();
                Task::future(async move {
                    let result = pipeline.fetch_image_bytes(&url).await.map(decode_image_bytes);
                    OrchestratorMessage::ImageLoaded(generation, index, result)
                })
            })
            .collect();

        Task::batch(image_tasks)
    }

    fn describe_result_count(count: usize) -> String {
        match count {
            1 => "1 result".to_string(),
            count => format!("{} results", count),
        }
    }

    fn handle_image_loaded(
        &mut self,
        generation: u64,
        index: usize,
        result: Result<DecodedImage, SearchError>,
    ) {
        if !self.generations.is_current(generation) {
            return;
        }

        match result {
            Ok(decoded) => self.grid.apply_decoded_image(index, decoded),
            Err(e) => {
                log::warn!("[ORCHESTRATOR] Image {} failed to load: {}", index, e);
                self.grid.mark_image_failed(index);
            }
        }
    }

    fn grid_columns(&self) -> usize {
        GifGridView::columns_for_width(
            self.main_window_width - 2.0 * MAIN_WINDOW_PADDING,
            self.settings.effective_grid_columns(),
        )
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) == self.main_window_id {
            self.render_main_window()
        } else {
            text("Loading...").into()
        }
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);

        let title = text(global_constants::APPLICATION_TITLE).size(32);

        let search_input = text_input("Search GIFs...", &self.search_term)
            .on_input(OrchestratorMessage::SearchTermChanged)
            .on_submit(OrchestratorMessage::SearchRequested)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let search_button = button(text("Search").size(16))
            .padding([10, 24])
            .style(|theme, status| app_theme::primary_button_style(theme, status));
        let search_button = if self.alert.is_none() {
            search_button.on_press(OrchestratorMessage::SearchRequested)
        } else {
            search_button
        };

        let search_row = row![search_input, search_button]
            .spacing(10)
            .align_y(Alignment::Center);

        let alert_banner: Element<'_, OrchestratorMessage> = match &self.alert {
            Some(alert) => container(
                row![
                    text(alert).size(14).width(Length::Fill),
                    button(text("OK").size(14))
                        .padding([6, 16])
                        .style(|theme, status| app_theme::secondary_button_style(theme, status))
                        .on_press(OrchestratorMessage::DismissAlert),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fill)
            .style(app_theme::alert_banner_style)
            .into(),
            None => Space::new().height(Length::Fixed(0.0)).into(),
        };

        let status_line = text(&self.status)
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            });

        let grid = self
            .grid
            .render_ui(self.grid_columns())
            .map(OrchestratorMessage::Grid);

        let content = column![title, search_row, alert_banner, status_line, grid]
            .spacing(12)
            .padding(MAIN_WINDOW_PADDING)
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }
}
