use eframe::egui::{self, Color32, Label, Margin, RichText, ScrollArea, Sense, Ui, vec2};

use crate::color::{stat_fill, type_color};
use crate::data::evolution::RenderItem;
use crate::images::IconCache;
use crate::state::AppState;
use crate::view::{CreatureDetail, display_name};

const PORTRAIT_SIZE: f32 = 220.0;
const EVOLUTION_ICON_SIZE: f32 = 96.0;
const INFO_CARD_FILL: Color32 = Color32::from_rgb(0x32, 0xA8, 0xD6);
const ARROW_COLOR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

// ---------------------------------------------------------------------------
// Detail panel (central panel)
// ---------------------------------------------------------------------------

/// Render the selected creature. Clicking an evolution node selects it.
pub fn detail_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(detail) = &state.detail else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick a creature from the list");
        });
        return;
    };

    let mut activated = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(&detail.name).size(22.0).strong());
                if let Some(uri) = state.icons.get(detail.id) {
                    ui.add(egui::Image::new(uri).max_size(vec2(PORTRAIT_SIZE, PORTRAIT_SIZE)));
                }
            });
            ui.add_space(8.0);

            info_card(ui, detail);
            ui.add_space(8.0);

            stat_bars(ui, detail);
            ui.add_space(8.0);

            badge_row(ui, "Types", &detail.types);
            badge_row(ui, "Weaknesses", &detail.weaknesses);

            if !detail.evolution.is_empty() {
                ui.add_space(12.0);
                ui.strong("Evolution");
                activated = evolution_strip(ui, &state.icons, &detail.evolution);
            }
        });

    if let Some(item) = activated {
        state.activate(&item);
    }
}

fn info_card(ui: &mut Ui, detail: &CreatureDetail) {
    egui::Frame::new()
        .fill(INFO_CARD_FILL)
        .corner_radius(14.0)
        .inner_margin(Margin::same(12))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("info_card")
                .num_columns(2)
                .spacing(vec2(24.0, 8.0))
                .show(ui, |ui: &mut Ui| {
                    info_field(ui, "Height", &detail.height);
                    info_field(ui, "Weight", &detail.weight);
                    ui.end_row();
                    info_field(ui, "Category", &detail.category);
                    info_field(ui, "Gender", &detail.gender);
                    ui.end_row();
                    info_field(ui, "Abilities", &detail.abilities);
                    ui.end_row();
                });
        });
}

fn info_field(ui: &mut Ui, title: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).color(Color32::WHITE).size(14.0).strong());
        ui.add(Label::new(RichText::new(value).color(Color32::WHITE).size(14.0)).wrap());
    });
}

fn stat_bars(ui: &mut Ui, detail: &CreatureDetail) {
    for bar in &detail.stats {
        ui.add(
            egui::ProgressBar::new(bar.fraction())
                .text(bar.text())
                .fill(stat_fill(bar.fraction())),
        )
        .on_hover_text(format!("Base {}", bar.raw));
    }
}

fn badge_row(ui: &mut Ui, title: &str, tags: &[String]) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{title}:")).strong());
        for tag in tags {
            egui::Frame::new()
                .fill(type_color(tag))
                .corner_radius(10.0)
                .inner_margin(Margin::symmetric(14, 6))
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new(display_name(tag)).color(Color32::WHITE).strong());
                });
        }
    });
}

/// Draw the strip left to right. Returns the node the user clicked, if any.
fn evolution_strip(ui: &mut Ui, icons: &IconCache, items: &[RenderItem]) -> Option<RenderItem> {
    let mut activated = None;
    ScrollArea::horizontal()
        .id_salt("evolution_strip")
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for item in items {
                    match item {
                        RenderItem::Arrow => {
                            ui.add_space(18.0);
                            ui.label(RichText::new("→").size(22.0).strong().color(ARROW_COLOR));
                            ui.add_space(18.0);
                        }
                        RenderItem::Node { id, name } => {
                            if evolution_node(ui, icons, *id, name) {
                                activated = Some(item.clone());
                            }
                        }
                    }
                }
            });
        });
    activated
}

fn evolution_node(ui: &mut Ui, icons: &IconCache, id: u32, name: &str) -> bool {
    ui.vertical(|ui: &mut Ui| {
        let mut clicked = false;
        if let Some(uri) = icons.get(id) {
            let icon = egui::Image::new(uri)
                .fit_to_exact_size(vec2(EVOLUTION_ICON_SIZE, EVOLUTION_ICON_SIZE));
            clicked |= ui.add(egui::Button::image(icon).frame(false)).clicked();
        }
        let label = Label::new(RichText::new(display_name(name)).size(13.0).strong())
            .sense(Sense::click());
        clicked |= ui.add(label).on_hover_text(format!("#{id}")).clicked();
        clicked
    })
    .inner
}
