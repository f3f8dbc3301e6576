//! Harmonic mixing table view model.
//!
//! One row per key in domain order; a leading key column, an optional
//! "Perfect" column, then one column per relation. Row states follow the
//! shared highlight slot:
//!
//! - nothing highlighted: all rows `Normal`, transparent cells, text in the
//!   color of the key each cell shows;
//! - row key highlighted: that row is `Highlighted`, each cell filled with
//!   the color of the key it shows, white text;
//! - another key highlighted: the row is `Dimmed`.
//!
//! Hovering a single cell additionally emphasizes that cell (bold) and tints
//! its column header. The emphasis is only reported while the shared slot
//! still holds that cell's row, so it cannot disagree with the row state.
use std::cell::Cell;

use crate::color::Oklch;
use crate::highlight::{
    DIMMED_OPACITY, HighlightReader, HighlightSnapshot, HighlightWriter, PointerEvent,
};
use crate::key::Key;
use crate::notation::KeyNotation;
use crate::relation::{Relation, harmonic_mixing};

/// Table layout switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// Show the identity relation as its own column after the key column.
    pub show_perfect: bool,
}

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Key,
    Perfect,
    Relation(Relation),
}

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Key => "Key",
            Column::Perfect => "Perfect",
            Column::Relation(r) => r.label(),
        }
    }

    /// The key shown in this column of `row`'s row.
    pub fn value(self, row: Key) -> Key {
        match self {
            Column::Key | Column::Perfect => row,
            Column::Relation(r) => row.related(r),
        }
    }
}

/// Row state derived from the highlight snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Normal,
    Highlighted,
    Dimmed,
}

impl RowState {
    pub fn opacity(self) -> f32 {
        match self {
            RowState::Dimmed => DIMMED_OPACITY,
            RowState::Normal | RowState::Highlighted => 1.0,
        }
    }
}

/// Foreground paint of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    White,
    Color(Oklch),
}

/// Resolved look of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    /// `None` means transparent.
    pub background: Option<Oklch>,
    pub foreground: Paint,
    pub bold: bool,
    /// Render the long name in a muted tone.
    pub muted_long_name: bool,
}

/// One cell: the key it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableCell {
    pub column: Column,
    pub value: Key,
    pub notation: KeyNotation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: Key,
    pub cells: Vec<TableCell>,
}

/// The cell currently hovered, for cell-level emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFocus {
    pub row: Key,
    pub column: Column,
}

pub struct TableView {
    options: TableOptions,
    columns: Vec<Column>,
    rows: Vec<TableRow>,
    reader: HighlightReader,
    writer: HighlightWriter,
    cell_focus: Cell<Option<CellFocus>>,
}

impl TableView {
    pub fn new(options: TableOptions, reader: HighlightReader, writer: HighlightWriter) -> Self {
        let mut columns = vec![Column::Key];
        if options.show_perfect {
            columns.push(Column::Perfect);
        }
        columns.extend(Relation::ALL.into_iter().map(Column::Relation));

        let rows = Key::all()
            .map(|key| {
                let mixing = harmonic_mixing(key);
                let cells = columns
                    .iter()
                    .map(|&column| {
                        let value = match column {
                            Column::Key => mixing.key(),
                            Column::Perfect => mixing.perfect(),
                            Column::Relation(r) => mixing.get(r),
                        };
                        TableCell {
                            column,
                            value,
                            notation: value.notation(),
                        }
                    })
                    .collect();
                TableRow { key, cells }
            })
            .collect();

        Self {
            options,
            columns,
            rows,
            reader,
            writer,
            cell_focus: Cell::new(None),
        }
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in domain order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, key: Key) -> &TableRow {
        &self.rows[key.index()]
    }

    pub fn snapshot(&self) -> HighlightSnapshot {
        self.reader.snapshot()
    }

    pub fn row_state(&self, snapshot: &HighlightSnapshot, row: Key) -> RowState {
        match snapshot.key() {
            None => RowState::Normal,
            Some(k) if k == row => RowState::Highlighted,
            Some(_) => RowState::Dimmed,
        }
    }

    /// State of every row, in domain order.
    pub fn row_states(&self, snapshot: &HighlightSnapshot) -> Vec<(Key, RowState)> {
        self.rows
            .iter()
            .map(|r| (r.key, self.row_state(snapshot, r.key)))
            .collect()
    }

    /// Cell emphasis, valid only while the shared slot holds the focused row.
    pub fn cell_focus(&self, snapshot: &HighlightSnapshot) -> Option<CellFocus> {
        self.cell_focus
            .get()
            .filter(|focus| snapshot.is(focus.row))
    }

    pub fn cell_style(&self, snapshot: &HighlightSnapshot, cell: &TableCell, row: Key) -> CellStyle {
        let color = cell.value.color();
        let highlighted = self.row_state(snapshot, row) == RowState::Highlighted;
        let emphasized = self
            .cell_focus(snapshot)
            .is_some_and(|f| f.row == row && f.column == cell.column);
        CellStyle {
            background: highlighted.then_some(color),
            foreground: if highlighted {
                Paint::White
            } else {
                Paint::Color(color)
            },
            bold: cell.column == Column::Key || emphasized,
            muted_long_name: !highlighted,
        }
    }

    /// Header tint for `column`: the color of the emphasized cell's value.
    pub fn header_tint(&self, snapshot: &HighlightSnapshot, column: Column) -> Option<Oklch> {
        self.cell_focus(snapshot)
            .filter(|f| f.column == column)
            .map(|f| column.value(f.row).color())
    }

    pub fn on_pointer_enter(&self, row: Key) {
        self.writer.set(Some(row));
    }

    pub fn on_pointer_leave(&self) {
        self.cell_focus.set(None);
        self.writer.clear();
    }

    /// Keyboard focus on a row mirrors pointer enter.
    pub fn on_focus(&self, row: Key) {
        self.on_pointer_enter(row);
    }

    /// Losing keyboard focus mirrors pointer leave.
    pub fn on_blur(&self) {
        self.on_pointer_leave();
    }

    /// Pointer entered one cell: highlight its row and emphasize the cell.
    pub fn on_cell_enter(&self, row: Key, column: Column) {
        self.cell_focus.set(Some(CellFocus { row, column }));
        self.on_pointer_enter(row);
    }

    /// Pointer left a cell but may still be inside the row.
    pub fn on_cell_leave(&self) {
        self.cell_focus.set(None);
    }

    pub fn handle(&self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(key) => self.on_pointer_enter(key),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }
}
