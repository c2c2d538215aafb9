//! App module - application state and submit orchestration

mod submit;

use crate::api::{RegistrationApi, SubmissionOutcome};
use crate::form::{RegistrationForm, UiState};
use crate::message::MessageBar;
use crate::nav::NavMenu;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Page sections reachable from the nav menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    Pricing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

pub struct App {
    // Form state
    pub(crate) form: RegistrationForm,
    pub(crate) ui_state: UiState,
    pub(crate) messages: MessageBar,
    pub(crate) api: RegistrationApi,
    pub(crate) pending_outcome: Arc<Mutex<Option<SubmissionOutcome>>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Navigation state
    pub(crate) nav: NavMenu,
    pub(crate) active_section: Section,
    pub(crate) last_width: f32,
    // Rects captured at render time, checked next frame for outside clicks
    pub(crate) trigger_rect: Option<egui::Rect>,
    pub(crate) menu_rect: Option<egui::Rect>,
    // Window state
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: RegistrationApi,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        // One-time error border styling for invalid fields
        theme::install_error_style(&cc.egui_ctx);

        Self {
            form: RegistrationForm::new(),
            ui_state: UiState::Idle,
            messages: MessageBar::new(),
            api,
            pending_outcome: Arc::new(Mutex::new(None)),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            nav: NavMenu::new(),
            active_section: Section::Home,
            last_width: 0.0,
            trigger_rect: None,
            menu_rect: None,
            window_pos: None,
            window_size: None,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = crate::settings::Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
