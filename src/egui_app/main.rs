/**
 * Receipt Manager - Main Entry Point
 *
 * Installs logging, loads configuration and runs the egui application.
 */
use std::time::Duration;

use eframe::egui;
use receipt_manager::egui_app::theme::styles;
use receipt_manager::egui_app::{views, AppState, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let title = format!("{} - {}", config.app().app_name, config.app().restaurant_name);

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(ReceiptApp { state }))
        }),
    )
}

/// Main application state
struct ReceiptApp {
    state: AppState,
}

impl eframe::App for ReceiptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render(ctx, &mut self.state);

        // Keep polling background results and expiring toasts
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
