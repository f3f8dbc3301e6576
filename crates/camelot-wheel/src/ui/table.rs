//! Harmonic mixing table drawn as an `egui::Grid`.
//!
//! Each cell is a filled frame holding the short and long name of the key
//! it shows. The key cell of every row takes keyboard focus, so rows can be
//! highlighted with Tab as well as with the pointer.
use eframe::egui::{self, Color32, Margin, Rect, RichText, Sense, Stroke};

use camelot::highlight::TRANSITION_SECS;
use camelot::{CellFocus, Column, HighlightSnapshot, Key, Paint, PointerEvent, TableView};

use super::{EventTarget, hover_transition, to_color32};

const SHORT_SIZE: f32 = 15.0;
const SHORT_SIZE_BOLD: f32 = 17.0;

pub struct TableWidget {
    hovered_row: Option<Key>,
    hovered_cell: Option<CellFocus>,
}

fn paint_color(paint: Paint) -> Color32 {
    match paint {
        Paint::White => Color32::WHITE,
        Paint::Color(c) => to_color32(c.to_srgb()),
    }
}

impl TableWidget {
    pub fn new() -> Self {
        Self {
            hovered_row: None,
            hovered_cell: None,
        }
    }

    /// Draw the table for `snapshot` and report row, cell and focus
    /// transitions.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view: &TableView,
        snapshot: &HighlightSnapshot,
    ) -> Vec<(EventTarget, PointerEvent)> {
        let mut events = Vec::new();
        let mut hovered_row = None;
        let mut hovered_cell = None;
        let ctx = ui.ctx().clone();
        let row_gap = ui.spacing().item_spacing.y / 2.0;

        egui::Grid::new("mixing_table").show(ui, |ui| {
            for &column in view.columns() {
                let mut text = RichText::new(column.label()).strong();
                if let Some(tint) = view.header_tint(snapshot, column) {
                    text = text.color(to_color32(tint.to_srgb()));
                }
                ui.label(text);
            }
            ui.end_row();

            for row in view.rows() {
                let state = view.row_state(snapshot, row.key);
                let opacity = ctx.animate_value_with_time(
                    egui::Id::new(("row", row.key.index())),
                    state.opacity(),
                    TRANSITION_SECS,
                );
                let mut row_rect: Option<Rect> = None;

                for cell in &row.cells {
                    let style = view.cell_style(snapshot, cell, row.key);
                    let fill = style
                        .background
                        .map(|c| to_color32(c.to_srgb()))
                        .unwrap_or(Color32::TRANSPARENT)
                        .gamma_multiply(opacity);
                    let fg = paint_color(style.foreground).gamma_multiply(opacity);
                    let long = if style.muted_long_name {
                        ui.visuals().weak_text_color().gamma_multiply(opacity)
                    } else {
                        fg
                    };

                    let frame = egui::Frame::none()
                        .fill(fill)
                        .rounding(2.0)
                        .inner_margin(Margin::symmetric(8.0, 4.0))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                let short = if style.bold {
                                    RichText::new(cell.notation.short)
                                        .size(SHORT_SIZE_BOLD)
                                        .strong()
                                } else {
                                    RichText::new(cell.notation.short).size(SHORT_SIZE)
                                };
                                ui.label(short.color(fg));
                                ui.label(RichText::new(cell.notation.long).small().color(long));
                            });
                        });
                    let rect = frame.response.rect;
                    if ui.rect_contains_pointer(rect) {
                        hovered_cell = Some(CellFocus {
                            row: row.key,
                            column: cell.column,
                        });
                    }
                    row_rect = Some(row_rect.map_or(rect, |r| r.union(rect)));

                    if cell.column == Column::Key {
                        let focus = ui.interact(
                            rect,
                            egui::Id::new(("row_focus", row.key.index())),
                            Sense::click(),
                        );
                        if focus.gained_focus() {
                            events.push((EventTarget::Row, PointerEvent::Enter(row.key)));
                        }
                        if focus.lost_focus() {
                            events.push((EventTarget::Row, PointerEvent::Leave));
                        }
                        if focus.has_focus() {
                            ui.painter().rect_stroke(
                                rect.expand(1.0),
                                2.0,
                                Stroke::new(1.5, ui.visuals().selection.stroke.color),
                            );
                        }
                        focus.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Button,
                                format!("{} {}", cell.notation.short, cell.notation.long),
                            )
                        });
                    }
                }
                ui.end_row();

                if let Some(rect) = row_rect {
                    if ui.rect_contains_pointer(rect.expand2(egui::vec2(0.0, row_gap))) {
                        hovered_row = Some(row.key);
                    }
                }
            }
        });

        for event in hover_transition(self.hovered_row, hovered_row, PointerEvent::Enter) {
            events.push((EventTarget::Row, event));
        }
        for event in hover_transition(self.hovered_cell, hovered_cell, |f: CellFocus| {
            PointerEvent::Enter(f.row)
        }) {
            let column = match event {
                PointerEvent::Enter(_) => hovered_cell.map(|f| f.column),
                PointerEvent::Leave => self.hovered_cell.map(|f| f.column),
            };
            if let Some(column) = column {
                events.push((EventTarget::Cell(column), event));
            }
        }
        self.hovered_row = hovered_row;
        self.hovered_cell = hovered_cell;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camelot::Oklch;

    #[test]
    fn white_paint_is_white() {
        assert_eq!(paint_color(Paint::White), Color32::WHITE);
    }

    #[test]
    fn key_paint_converts_through_srgb() {
        let c = Oklch::new(0.0, 0.0, 0.0);
        assert_eq!(paint_color(Paint::Color(c)), Color32::BLACK);
    }
}
