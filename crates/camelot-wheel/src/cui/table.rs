use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use camelot::{
    Column, HighlightCoordinator, HighlightSnapshot, Key, Oklch, Paint, Relation, RowState,
    TableOptions, TableView,
};

pub struct PrintOptions {
    pub highlight: Option<Key>,
    pub relation: Option<Relation>,
    pub perfect: bool,
    pub color: bool,
}

fn rgb(color: Oklch) -> Color {
    let c = color.to_srgb();
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Build the matrix as a terminal table.
///
/// Styling mirrors the window: highlighted row cells are filled with the
/// color of the key they show, dimmed rows use the terminal's dim attribute.
pub(crate) fn build_table(view: &TableView, snapshot: &HighlightSnapshot, color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let header: Vec<Cell> = view
        .columns()
        .iter()
        .map(|&column| {
            let cell = Cell::new(column.label()).add_attribute(Attribute::Bold);
            match view.header_tint(snapshot, column) {
                Some(tint) if color => cell.fg(rgb(tint)),
                _ => cell,
            }
        })
        .collect();
    table.set_header(header);

    for row in view.rows() {
        let state = view.row_state(snapshot, row.key);
        let cells: Vec<Cell> = row
            .cells
            .iter()
            .map(|cell| {
                let text = format!("{}\n{}", cell.notation.short, cell.notation.long);
                let mut out = Cell::new(text);
                let style = view.cell_style(snapshot, cell, row.key);
                if style.bold {
                    out = out.add_attribute(Attribute::Bold);
                }
                if !color {
                    return out;
                }
                if let Some(bg) = style.background {
                    out = out.bg(rgb(bg));
                }
                out = match style.foreground {
                    Paint::White => out.fg(Color::White),
                    Paint::Color(c) => out.fg(rgb(c)),
                };
                if state == RowState::Dimmed {
                    out = out.add_attribute(Attribute::Dim);
                }
                out
            })
            .collect();
        table.add_row(cells);
    }
    table
}

/// Print the harmonic mixing table to stdout.
pub fn print_table(options: &PrintOptions) -> Result<()> {
    let coordinator = HighlightCoordinator::new();
    let view = TableView::new(
        TableOptions {
            show_perfect: options.perfect,
        },
        coordinator.reader(),
        coordinator.writer(),
    );

    match (options.highlight, options.relation) {
        (Some(key), Some(relation)) => view.on_cell_enter(key, Column::Relation(relation)),
        (Some(key), None) => view.on_pointer_enter(key),
        (None, Some(relation)) => {
            log::warn!("--relation {} has no effect without --highlight", relation.name());
        }
        (None, None) => {}
    }

    let table = build_table(&view, &view.snapshot(), options.color);
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", table).context("failed to write table to stdout")?;
    Ok(())
}
