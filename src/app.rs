use eframe::egui::{self, Color32};

use crate::state::AppState;
use crate::ui::{detail, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyDexApp {
    pub state: AppState,
}

impl RustyDexApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        apply_visuals(&cc.egui_ctx);
        Self { state }
    }
}

/// Light theme with a blue selection highlight.
fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = Color32::from_rgb(245, 245, 245);
    visuals.window_fill = Color32::from_rgb(245, 245, 245);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.selection.bg_fill = Color32::from_rgb(76, 163, 224);
    visuals.selection.stroke.color = Color32::WHITE;
    ctx.set_visuals(visuals);
}

impl eframe::App for RustyDexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: home + counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search + list ----
        egui::SidePanel::left("creature_list")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: detail ----
        egui::CentralPanel::default().show(ctx, |ui| {
            detail::detail_panel(ui, &mut self.state);
        });
    }
}
