use iced::widget::image::Handle;
use iced::widget::{column, container, text, Column};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use rfd::FileDialog;

mod config;
mod error;
mod frames;
mod i18n;
mod instance;
mod state;
mod ui;

use config::{AppConfig, LogLevel};
use error::VoteError;
use frames::{ImageCache, ScaledFrameLoader};
use i18n::Language;
use instance::InstanceGuard;
use state::data::{Emotion, VoteKind};
use state::library::Library;
use state::session::Session;
use ui::panels;

/// Main application state
struct EmotionVoteApp {
    /// Records, votes, roles and the cursor
    session: Session,
    /// Recently decoded frames
    cache: ImageCache<ScaledFrameLoader>,
    /// Frames of the current sample (onset, apex, offset)
    frames: [Option<Handle>; 3],
    language: Language,
    image_size: u32,
    /// Last save error, shown under the controls
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// An emotion button was pressed
    Vote(VoteKind, Emotion),
    /// A role category (or the placeholder) was picked
    CategorySelected(String),
    /// A role name was picked
    RoleNameSelected(String),
    Previous,
    Next,
    GotoFirstUnvoted,
}

impl EmotionVoteApp {
    /// Create a new instance of the application
    fn new(library: Library, config: AppConfig) -> (Self, Task<Message>) {
        let loader = ScaledFrameLoader::new(config.image_size);
        let mut app = EmotionVoteApp {
            session: Session::new(library),
            cache: ImageCache::new(loader, config.cache_capacity),
            frames: [None, None, None],
            language: config.language,
            image_size: config.image_size,
            status: None,
        };
        app.refresh_frames();

        let progress = app.session.progress();
        log::info!(
            "🎨 Emotion vote initialized with {} samples, {} remaining",
            progress.total,
            progress.remaining
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.language.texts().title.to_string()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::Vote(kind, emotion) => self.session.cast_vote(kind, emotion),
            Message::CategorySelected(category) => {
                let placeholder = self.language.texts().select_category;
                let category = (category != placeholder).then_some(category.as_str());
                self.session.select_category(category)
            }
            Message::RoleNameSelected(name) => self.session.select_role_name(&name),
            Message::Previous => {
                self.session.previous();
                Ok(())
            }
            Message::Next => {
                self.session.next();
                Ok(())
            }
            Message::GotoFirstUnvoted => {
                self.session.goto_first_unvoted();
                Ok(())
            }
        };

        self.status = match result {
            Ok(()) => None,
            Err(e) => {
                log::error!("❌ {}", e);
                Some(e.to_string())
            }
        };

        self.refresh_frames();
        Task::none()
    }

    /// Load the current sample's frames through the cache
    fn refresh_frames(&mut self) {
        self.frames = match self.session.current() {
            Some(record) => {
                let paths = record.image_paths.clone();
                paths.map(|path| self.cache.get_or_load(&path))
            }
            None => [None, None, None],
        };
        log::debug!(
            "🖼️  Frame cache holds {}/{} images",
            self.cache.len(),
            self.cache.capacity()
        );
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let texts = self.language.texts();

        let Some(record) = self.session.current() else {
            return container(text(texts.no_samples).size(panels::FONT_SIZE))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let mut content: Column<'_, Message> = column![
            panels::header(texts, &record.scene),
            panels::frame_row(&self.frames, self.image_size, texts),
            panels::role_picker(texts, record.role.as_ref()),
            panels::vote_section(self.language, VoteKind::External, record.vote(VoteKind::External)),
            panels::vote_section(self.language, VoteKind::Internal, record.vote(VoteKind::Internal)),
            panels::navigation(texts, self.session.progress()),
            panels::goto_first_button(texts),
        ]
        .spacing(16)
        .padding(20)
        .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            content = content.push(text(status.clone()).style(text::danger));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();
}

/// Ask for the data folder when the configured one does not exist
fn resolve_data_root(mut config: AppConfig) -> AppConfig {
    if config.data_root.is_dir() {
        return config;
    }

    log::warn!(
        "⚠️  Data folder {} not found, asking the user",
        config.data_root.display()
    );

    if let Some(folder) = FileDialog::new()
        .set_title("Select the folder containing the scene folders")
        .pick_folder()
    {
        config.data_root = folder;
    }
    config
}

fn main() -> iced::Result {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️  {}; using default settings", e);
            AppConfig::default()
        }
    };

    init_logging(config.log_level);

    let _guard = match InstanceGuard::acquire_default() {
        Ok(guard) => Some(guard),
        Err(VoteError::AlreadyRunning) => {
            log::info!("Application already running, exiting...");
            return Ok(());
        }
        Err(e) => {
            log::warn!("⚠️  Could not take the instance lock: {}", e);
            None
        }
    };

    let config = resolve_data_root(config);

    let library = match Library::open(&config) {
        Ok(library) => library,
        Err(e) => {
            log::error!("❌ Failed to load review data: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(
        EmotionVoteApp::title,
        EmotionVoteApp::update,
        EmotionVoteApp::view,
    )
    .theme(EmotionVoteApp::theme)
    .window_size(Size::new(1350.0, 900.0))
    .centered()
    .run_with(move || EmotionVoteApp::new(library, config))
}
