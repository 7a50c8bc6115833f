//! Lays out a row of thumbnails, clips them to a viewport and hit-tests a
//! click. Run with `cargo run --example layout --features tracing` and
//! `RUST_LOG=debug` to see the kernel's own logging.

use geomutil::{PointD, RectD, RectI, SizeD};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let zoom = 1.25;
    let thumb = SizeD::new(96.0 * zoom, 128.0 * zoom);
    let gap = 8.0;

    let mut cells = Vec::new();
    let mut next = RectD::from_point_size(PointD::new(gap, gap), thumb);
    for _ in 0..6 {
        cells.push(next);
        next.offset(thumb.dx + gap, 0.0);
    }

    let bounds = cells
        .iter()
        .fold(RectD::default(), |acc, cell| acc.union(*cell));
    tracing::info!(%bounds, "content bounds");

    let viewport = RectI::new(0, 0, 480, 200).convert::<f64>();
    for (idx, cell) in cells.iter().enumerate() {
        let visible = cell.intersect(viewport);
        if visible.is_empty() {
            println!("page {idx}: hidden");
            continue;
        }
        let pixels = visible.round_outward();
        println!(
            "page {idx}: visible {visible}, repaint {:?}",
            pixels.to_native_rect()
        );
    }

    let click_x = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(300.0);
    let click = PointD::new(click_x, 60.0);
    match cells.iter().position(|cell| cell.contains(click)) {
        Some(idx) => println!("click at {click} hits page {idx}"),
        None => println!("click at {click} hits nothing"),
    }
}
