/*! Native window wrapper.

`CamelotApp` implements `eframe::App` and forwards each frame to
`show_ui`.
*/

use std::cell::RefCell;

use eframe::egui;
use eframe::{CreationContext, Frame, NativeOptions};

use super::UiState;

/// Window settings taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct GuiOptions {
    pub show_perfect: bool,
    pub scale: f32,
}

pub fn run_gui(options: GuiOptions) {
    let native_options = NativeOptions {
        initial_window_size: Some(egui::vec2(1480.0, 820.0)),
        min_window_size: Some(egui::vec2(900.0, 500.0)),
        ..NativeOptions::default()
    };

    log::info!(
        "launching window (perfect column: {}, scale: {})",
        options.show_perfect,
        options.scale
    );
    if let Err(err) = eframe::run_native(
        "Camelot Wheel",
        native_options,
        Box::new(move |cc: &CreationContext| Box::new(CamelotApp::new(cc, options))),
    ) {
        eprintln!("failed to launch native window: {:?}", err);
    }
}

pub struct CamelotApp {
    pub state: RefCell<UiState>,
}

impl CamelotApp {
    pub fn new(cc: &CreationContext, options: GuiOptions) -> Self {
        let ctx = &cc.egui_ctx;
        let current = ctx.pixels_per_point();
        ctx.set_pixels_per_point(current * options.scale);

        let state = UiState::new(options.show_perfect);

        // Repaint as soon as the highlight changes, whichever view wrote it.
        let repaint = ctx.clone();
        state.coordinator.subscribe(move |key| {
            match key {
                Some(k) => log::debug!("highlight -> {}", k),
                None => log::debug!("highlight cleared"),
            }
            repaint.request_repaint();
        });

        Self {
            state: RefCell::new(state),
        }
    }
}

impl eframe::App for CamelotApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        super::show_ui(&mut self.state.borrow_mut(), ctx, frame);
    }
}
