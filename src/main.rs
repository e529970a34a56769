//! cellbox demo
//!
//! Run with: cargo run -- [cols] [rows] [options]
//!
//! Options:
//!   --theme <file>  Load colors and glyphs from a JSON theme
//!                   (falls back to the built-in theme if unreadable)
//!
//! Draws a handful of panels into a grid and prints one ANSI frame.

use std::env;
use std::error::Error;
use std::io::{self, Write};

use log::{debug, info, warn};

use cellbox::core::{glyphs, Align, Grid, Padding, Rect};
use cellbox::renderer::{AnsiRenderer, Renderer};
use cellbox::{Panel, ScrollPosition, Theme};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let mut cols: usize = 80;
    let mut rows: usize = 24;
    let mut theme_path: Option<String> = None;
    let mut positional = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--theme" => {
                if i + 1 < args.len() {
                    theme_path = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --theme requires a file");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("cellbox demo v0.1.0");
                println!();
                println!("Usage: cellbox-demo [cols] [rows] [options]");
                println!();
                println!("Options:");
                println!("  --theme <file>  Load colors and glyphs from a JSON theme");
                println!("  --help, -h      Show this help");
                std::process::exit(0);
            }
            arg => {
                // Positional arguments: cols, rows
                if let Ok(n) = arg.parse::<usize>() {
                    if positional == 0 {
                        cols = n;
                    } else {
                        rows = n;
                    }
                    positional += 1;
                }
                i += 1;
            }
        }
    }

    let theme = match &theme_path {
        Some(path) => match Theme::load(path) {
            Ok(theme) => {
                info!("Loaded theme from {}", path);
                theme
            }
            Err(e) => {
                warn!("{}; using the built-in theme", e);
                Theme::default()
            }
        },
        None => Theme::default(),
    };
    info!("Demo screen {}x{}", cols, rows);

    let mut grid = Grid::new(cols, rows);
    let mut panels = layout(&theme);
    for panel in &mut panels {
        panel.draw(&mut grid);
        debug!("{:?} inner {:?}", panel.title(), panel.inner_rect());
    }

    // The last panel pretends to scroll a long list
    if let Some(list) = panels.last() {
        list.draw_overflow(&mut grid, true, true, ScrollPosition::from_value(0.4));
    }

    let mut renderer = AnsiRenderer::new();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", renderer.render_full(&grid))?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

fn layout(theme: &Theme) -> Vec<Panel> {
    let mut panels = Vec::new();

    let mut full = Panel::with_theme(theme);
    full.set_rect(Rect::new(1, 1, 24, 7));
    full.set_border(true);
    full.set_title("Focused");
    full.focus(&mut |_| {});
    panels.push(full);

    let mut left = Panel::with_theme(theme);
    left.set_rect(Rect::new(27, 1, 24, 7));
    left.set_border(true);
    left.set_border_glyphs(&glyphs::DOUBLE);
    left.set_title("Left");
    left.set_title_align(Align::Left);
    panels.push(left);

    let mut sides = Panel::with_theme(theme);
    sides.set_rect(Rect::new(53, 1, 24, 7));
    sides.set_border(true);
    sides.set_border_sides(true, false, true, false);
    sides.set_title("Right");
    sides.set_title_align(Align::Right);
    panels.push(sides);

    let mut bar = Panel::with_theme(theme);
    bar.set_rect(Rect::new(1, 9, 50, 1));
    bar.set_border(true);
    bar.set_border_sides(false, true, false, true);
    bar.set_background_color(theme.contrast_background_color);
    panels.push(bar);

    let mut list = Panel::with_theme(theme);
    list.set_rect(Rect::new(53, 9, 24, 10));
    list.set_border(true);
    list.set_border_glyphs(&glyphs::ROUNDED);
    list.set_border_padding(Padding::new(0, 0, 1, 1));
    list.set_title("List");
    list.set_indicate_overflow(true);
    panels.push(list);

    panels
}
