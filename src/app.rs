use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task};

use crate::adapters::ReqwestHttpClient;
use crate::core::interfaces::adapters::{HttpClient, HttpResponse};
use crate::core::models::{SearchError, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

struct UnavailableHttpClient {
    reason: String,
}

#[async_trait::async_trait]
impl HttpClient for UnavailableHttpClient {
    async fn get(&self, _url: &str) -> Result<HttpResponse, SearchError> {
        Err(SearchError::Transport(format!(
            "HTTP client not available: {}",
            self.reason
        )))
    }
}

pub struct GifSearchApp {
    orchestrator: AppOrchestrator,
}

impl GifSearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let http_client: Arc<dyn HttpClient> = match ReqwestHttpClient::build() {
            Ok(client) => Arc::new(client),
            Err(e) => {
                log::error!("[APP] Failed to initialize HTTP client: {}", e);
                Arc::new(UnavailableHttpClient {
                    reason: e.to_string(),
                })
            }
        };

        let orchestrator = AppOrchestrator::build(http_client, settings);

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        let window_events = iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::Closed) => {
                Some(OrchestratorMessage::WindowClosed(id))
            }
            iced::Event::Window(window::Event::Resized(size)) => {
                Some(OrchestratorMessage::WindowResized(id, size))
            }
            _ => None,
        });

        iced::Subscription::batch([window_events, self.orchestrator.animation_subscription()])
    }
}
