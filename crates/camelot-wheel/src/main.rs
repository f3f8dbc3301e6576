//! Camelot wheel frontend.
//!
//! Without a subcommand this opens the interactive window: the wheel on the
//! left, the harmonic mixing table on the right, both driven by one shared
//! highlight. The subcommands render the same views headless.

mod cui;
mod gui;
mod ui;

use std::path::PathBuf;

use camelot::{Key, Relation};
use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the wheel as a standalone SVG document
    Svg {
        /// Key to highlight (e.g. `8A`, `C Major`)
        #[arg(long, value_name = "KEY")]
        highlight: Option<Key>,

        /// Output path (use '-' or omit for stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the harmonic mixing table
    Table {
        /// Key whose row is highlighted
        #[arg(long, value_name = "KEY")]
        highlight: Option<Key>,

        /// Emphasize one relation cell of the highlighted row (e.g. `jaws`)
        #[arg(long, value_name = "NAME")]
        relation: Option<Relation>,

        /// Include the "Perfect" column
        #[arg(long)]
        perfect: bool,

        /// Print plain text without terminal colors
        #[arg(long)]
        no_color: bool,
    },
    /// Print every harmonic mixing target of one key
    Relations {
        #[arg(value_name = "KEY")]
        key: Key,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "camelot-wheel",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show the "Perfect" column in the window's table
    #[arg(long)]
    perfect: bool,

    /// UI scale factor for the window
    #[arg(long, default_value_t = 1.2)]
    scale: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Some(Commands::Svg { highlight, output }) => {
            match cui::svg::export_svg(highlight, output.as_deref()) {
                Ok(_) => std::process::exit(0),
                Err(e) => {
                    eprintln!("svg export failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Table {
            highlight,
            relation,
            perfect,
            no_color,
        }) => {
            let options = cui::table::PrintOptions {
                highlight,
                relation,
                perfect,
                color: !no_color,
            };
            match cui::table::print_table(&options) {
                Ok(_) => std::process::exit(0),
                Err(e) => {
                    eprintln!("table failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Relations { key }) => match cui::relations::print_relations(key) {
            Ok(_) => std::process::exit(0),
            Err(e) => {
                eprintln!("relations failed: {:#}", e);
                std::process::exit(1);
            }
        },
        None => {}
    }

    gui::run_gui(gui::GuiOptions {
        show_perfect: args.perfect,
        scale: args.scale,
    });
}
