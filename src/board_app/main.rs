/**
 * Task Board Desktop Client - Main Entry Point
 *
 * Implements eframe::App: a login/registration screen, then the Kanban
 * board for the signed-in session.
 */
use std::time::Duration;

use eframe::egui;
use taskboard::board_app::theme::styles;
use taskboard::board_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Task Board",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BoardApp { state }))
        }),
    )?;

    Ok(())
}

/// Main application
struct BoardApp {
    state: AppState,
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while requests are in flight
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
