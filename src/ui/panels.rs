use eframe::egui::{self, RichText, ScrollArea, Ui, vec2};

use crate::state::AppState;
use crate::view::display_name;

const LIST_ICON_SIZE: f32 = 32.0;

// ---------------------------------------------------------------------------
// Left side panel – search box and creature list
// ---------------------------------------------------------------------------

/// Render the searchable creature list.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("🔍");
        let mut query = state.query.clone();
        let edit = egui::TextEdit::singleline(&mut query)
            .hint_text("Search")
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            state.set_query(&query);
        }
    });
    ui.separator();

    let mut clicked = None;
    let scroll_to_selected = std::mem::take(&mut state.scroll_to_selected);
    let row_height = LIST_ICON_SIZE;
    let row_stride = row_height + ui.spacing().item_spacing.y;

    let mut scroll = ScrollArea::vertical().auto_shrink([false, false]);
    if scroll_to_selected {
        let row = state
            .selected
            .and_then(|sel| state.visible_indices.iter().position(|&idx| idx == sel));
        if let Some(row) = row {
            scroll = scroll.vertical_scroll_offset(row as f32 * row_stride);
        }
    }

    // Only the rows in view are laid out each frame.
    scroll.show_rows(ui, row_height, state.visible_indices.len(), |ui: &mut Ui, rows| {
        for &idx in &state.visible_indices[rows] {
            let Some((key, record)) = state.dataset.entry(idx) else {
                continue;
            };
            let is_selected = state.selected == Some(idx);

            let response = ui
                .horizontal(|ui: &mut Ui| {
                    ui.set_min_height(row_height);
                    match state.icons.get(record.id) {
                        Some(uri) => {
                            ui.add(
                                egui::Image::new(uri)
                                    .fit_to_exact_size(vec2(LIST_ICON_SIZE, LIST_ICON_SIZE)),
                            );
                        }
                        None => ui.add_space(LIST_ICON_SIZE + ui.spacing().item_spacing.x),
                    }
                    ui.selectable_label(is_selected, RichText::new(display_name(key)).strong())
                })
                .inner;

            if response.clicked() {
                clicked = Some(idx);
            }
        }
    });

    if let Some(idx) = clicked {
        state.select_index(idx);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: home button and list counts.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let home = ui
            .button(RichText::new("⌂ Home").strong())
            .on_hover_text(format!("Jump to #{}", state.home_id));
        if home.clicked() && !state.go_home() {
            log::warn!("Home creature #{} is not in the dataset", state.home_id);
        }

        ui.separator();

        ui.label(format!(
            "{} creatures, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        if let Some(record) = state.selected_record() {
            ui.separator();
            ui.label(format!("#{:03}", record.id));
        }
    });
}
