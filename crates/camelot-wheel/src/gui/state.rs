/*! Per-window UI state and the frame function.

Each frame reads the shared highlight once and hands that snapshot to both
widgets, so the wheel and the table always paint the same value. Pointer and
focus transitions reported by the widgets are applied only after both have
been drawn, leaves before enters.
*/

use eframe::egui;

use camelot::geometry::WheelLayout;
use camelot::highlight::settle_events;
use camelot::{HighlightCoordinator, PointerEvent, TableOptions, TableView, WheelView};

use crate::ui::{EventTarget, TableWidget, WheelWidget};

pub struct UiState {
    pub coordinator: HighlightCoordinator,
    pub wheel: WheelView,
    pub table: TableView,
    wheel_widget: WheelWidget,
    table_widget: TableWidget,
}

impl UiState {
    pub fn new(show_perfect: bool) -> Self {
        let coordinator = HighlightCoordinator::new();
        let wheel = WheelView::new(
            WheelLayout::default(),
            coordinator.reader(),
            coordinator.writer(),
        );
        let table = TableView::new(
            TableOptions { show_perfect },
            coordinator.reader(),
            coordinator.writer(),
        );
        Self {
            coordinator,
            wheel,
            table,
            wheel_widget: WheelWidget::new(),
            table_widget: TableWidget::new(),
        }
    }

    fn dispatch(&self, target: EventTarget, event: PointerEvent) {
        match (target, event) {
            (EventTarget::Wheel, event) => self.wheel.handle(event),
            (EventTarget::Row, event) => self.table.handle(event),
            (EventTarget::Cell(column), PointerEvent::Enter(row)) => {
                self.table.on_cell_enter(row, column)
            }
            (EventTarget::Cell(_), PointerEvent::Leave) => self.table.on_cell_leave(),
        }
    }
}

pub fn show_ui(state: &mut UiState, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    let snapshot = state.coordinator.snapshot();
    let mut events: Vec<(EventTarget, PointerEvent)> = Vec::new();

    egui::SidePanel::left("wheel_panel")
        .resizable(false)
        .exact_width(WheelWidget::PANEL_WIDTH)
        .show(ctx, |ui| {
            for event in state.wheel_widget.show(ui, &state.wheel, &snapshot) {
                events.push((EventTarget::Wheel, event));
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            events.extend(state.table_widget.show(ui, &state.table, &snapshot));
        });
    });

    if events.is_empty() {
        return;
    }
    settle_events(&mut events);
    for (target, event) in events {
        state.dispatch(target, event);
    }
}
