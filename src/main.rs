#![windows_subsystem = "windows"]
//! DemandGenX - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod form;
mod message;
mod nav;
mod settings;
mod theme;
mod ui;

use api::RegistrationApi;
use app::{App, Section};
use constants::*;
use eframe::egui;
use form::UiState;
use message::MessageKind;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "demandgenx.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,demandgenx=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("DemandGenX");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "DemandGenX starting");

    let api = match std::env::var(REGISTER_ENDPOINT_ENV) {
        Ok(endpoint) if !endpoint.is_empty() => {
            info!(endpoint = %endpoint, "Using HTTP registration endpoint");
            RegistrationApi::http(endpoint)
        }
        _ => {
            info!("Using simulated registration backend");
            RegistrationApi::simulated()
        }
    };

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1024.0, 760.0)))
        // Narrow enough to exercise the collapsed nav below the breakpoint
        .with_min_inner_size([360.0, 620.0])
        .with_title("DemandGenX");

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "DemandGenX",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, api, data_dir)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Pick up a finished submission before rendering
        self.poll_submission();

        let width = ctx.screen_rect().width();

        // Resizing past the breakpoint closes the collapsed menu
        if self.last_width > 0.0 && width != self.last_width {
            self.nav.viewport_resized(width);
        }
        self.last_width = width;

        // A pointer press outside both the menu and its trigger closes the
        // menu. Rects are the ones captured on the previous frame.
        if self.nav.is_open() {
            if let (Some(menu), Some(trigger)) = (self.menu_rect, self.trigger_rect) {
                let outside = ctx.input(|i| {
                    i.pointer.any_pressed()
                        && i.pointer
                            .interact_pos()
                            .is_some_and(|p| !menu.contains(p) && !trigger.contains(p))
                });
                if outside {
                    self.nav.pointer_outside();
                }
            }
        }

        self.render_nav_bar(ctx, width);
        self.render_nav_menu(ctx, width);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    match self.active_section {
                        Section::Home => self.render_home(ui, ctx),
                        Section::Features => self.render_features(ui),
                        Section::Pricing => self.render_pricing(ui),
                        Section::Contact => self.render_contact(ui, ctx),
                    }
                });
            });

        // Keep polling while a submission is in flight
        if self.ui_state == UiState::Submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// PAGE RENDERING
// ============================================================================

impl App {
    fn render_nav_bar(&mut self, ctx: &egui::Context, width: f32) {
        let narrow = width <= MOBILE_BREAKPOINT;

        egui::TopBottomPanel::top("nav_bar")
            .exact_height(theme::NAV_BAR_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("DemandGenX")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ACCENT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if narrow {
                            // Hamburger trigger
                            let icon = if self.nav.is_open() {
                                egui_phosphor::regular::X
                            } else {
                                egui_phosphor::regular::LIST
                            };
                            let response = ui.add(
                                egui::Button::new(
                                    egui::RichText::new(icon)
                                        .size(20.0)
                                        .color(theme::TEXT_PRIMARY),
                                )
                                .frame(false),
                            );
                            if response.clicked() {
                                self.nav.toggle();
                            }
                            self.trigger_rect = Some(response.rect);
                        } else {
                            self.trigger_rect = None;
                            for section in Section::ALL.iter().rev() {
                                let response = components::nav_link(
                                    ui,
                                    section.label(),
                                    self.active_section == *section,
                                );
                                if response.clicked() {
                                    self.active_section = *section;
                                    self.nav.link_activated(width);
                                }
                            }
                        }
                    });
                });
            });
    }

    fn render_nav_menu(&mut self, ctx: &egui::Context, width: f32) {
        if !self.nav.is_open() || width > MOBILE_BREAKPOINT {
            self.menu_rect = None;
            return;
        }

        let pos = egui::pos2(
            width - theme::NAV_MENU_WIDTH - theme::SPACING_MD,
            theme::NAV_BAR_HEIGHT + theme::SPACING_SM,
        );
        let area = egui::Area::new(egui::Id::new("nav_menu"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                theme::menu_frame().show(ui, |ui| {
                    ui.set_width(theme::NAV_MENU_WIDTH);
                    for section in Section::ALL {
                        let response =
                            components::nav_link(ui, section.label(), self.active_section == section);
                        if response.clicked() {
                            self.active_section = section;
                            self.nav.link_activated(width);
                        }
                    }
                });
            });
        self.menu_rect = Some(area.response.rect);
    }

    fn render_home(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Demand generation that converts")
                    .size(theme::FONT_HERO)
                    .strong(),
            );
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(
                    "Join marketing teams growing their pipeline with DemandGenX.",
                )
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);
        self.render_registration_card(ui, ctx);
        ui.add_space(24.0);
    }

    fn render_features(&mut self, ui: &mut egui::Ui) {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Features")
                    .size(theme::FONT_HERO)
                    .strong(),
            );
            ui.add_space(theme::SPACING_LG);
            for (icon, title, blurb) in [
                (
                    egui_phosphor::regular::CHART_LINE_UP,
                    "Pipeline analytics",
                    "Track every campaign from first touch to closed deal.",
                ),
                (
                    egui_phosphor::regular::USERS_THREE,
                    "Audience targeting",
                    "Reach the accounts that actually match your ICP.",
                ),
                (
                    egui_phosphor::regular::LIGHTNING,
                    "Instant activation",
                    "Launch campaigns in minutes, not weeks.",
                ),
            ] {
                ui.label(
                    egui::RichText::new(format!("{}  {}", icon, title))
                        .size(theme::FONT_HEADING)
                        .color(theme::ACCENT_LIGHT),
                );
                ui.label(
                    egui::RichText::new(blurb)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(theme::SPACING_LG);
            }
        });
    }

    fn render_pricing(&mut self, ui: &mut egui::Ui) {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Pricing")
                    .size(theme::FONT_HERO)
                    .strong(),
            );
            ui.add_space(theme::SPACING_LG);
            for (tier, price) in [
                ("Starter", "Free"),
                ("Growth", "$49 / month"),
                ("Enterprise", "Contact us"),
            ] {
                ui.label(
                    egui::RichText::new(tier)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_SECONDARY),
                );
                ui.label(
                    egui::RichText::new(price)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(theme::SPACING_LG);
            }
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Get in touch")
                    .size(theme::FONT_HERO)
                    .strong(),
            );
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new("Register below and our team will reach out.")
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);
        self.render_registration_card(ui, ctx);
    }

    // ========================================================================
    // REGISTRATION FORM
    // ========================================================================

    fn render_registration_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(theme::FORM_CARD_WIDTH);
            theme::card_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Create your account")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_MD);

                for field in self.form.fields_mut() {
                    components::form_field(ui, field);
                    ui.add_space(theme::SPACING_MD);
                }

                ui.add_space(theme::SPACING_SM);
                if self.ui_state == UiState::Submitting {
                    ui.horizontal(|ui| {
                        ui.add_enabled(false, theme::button_accent(SUBMIT_LABEL_BUSY));
                        ui.spinner();
                    });
                } else {
                    let btn = ui.add(theme::button_accent(format!(
                        "{}  {}",
                        egui_phosphor::regular::PAPER_PLANE_TILT,
                        SUBMIT_LABEL
                    )));
                    if btn.clicked() {
                        self.submit_registration(ctx);
                    }
                }

                self.render_message_region(ui, ctx);
            });
        });
    }

    fn render_message_region(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let now = Instant::now();
        let (text, kind) = match self.messages.current(now) {
            Some(msg) => (msg.text.clone(), msg.kind),
            None => return,
        };

        let (bg, border, color, icon) = match kind {
            MessageKind::Success => (
                theme::BANNER_SUCCESS_BG,
                theme::BANNER_SUCCESS_BORDER,
                theme::STATUS_SUCCESS,
                egui_phosphor::regular::CHECK_CIRCLE,
            ),
            MessageKind::Error => (
                theme::BANNER_ERROR_BG,
                theme::BANNER_ERROR_BORDER,
                theme::BANNER_ERROR_TEXT,
                egui_phosphor::regular::WARNING,
            ),
        };

        ui.add_space(theme::SPACING_MD);
        egui::Frame::new()
            .fill(bg)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, border))
            .corner_radius(theme::RADIUS_DEFAULT)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{}  {}", icon, text)).color(color),
                    )
                    .wrap(),
                );
            });

        // Success banners expire on their own; keep repainting until then
        if kind == MessageKind::Success {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
