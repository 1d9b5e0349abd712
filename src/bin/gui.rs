// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use web_scrape::{config::consts::STORE_DIR, gui};

const ICON_SIZE: u32 = 64;

// A magnifier over a page, drawn in code so the binary carries no assets.
fn app_icon() -> IconData {
    let n = ICON_SIZE as f32;
    let (cx, cy, r) = (n * 0.42, n * 0.42, n * 0.26);

    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let d = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();

        // handle: thick diagonal from the lens rim to the corner
        let on_handle = fx > cx + r * 0.6 && fy > cy + r * 0.6 && (fx - fy).abs() < n * 0.08 && fx < n * 0.92;

        if (d - r).abs() < n * 0.055 || on_handle {
            Rgba([0x1f, 0x4e, 0x8c, 0xff])
        } else if d < r {
            Rgba([0xd6, 0xe8, 0xfa, 0xff])
        } else if fx > n * 0.1 && fx < n * 0.9 && fy > n * 0.06 && fy < n * 0.94 {
            Rgba([0xfa, 0xfa, 0xf7, 0xff])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });

    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_title("Web Scraper")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, PathBuf::from(STORE_DIR)) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
