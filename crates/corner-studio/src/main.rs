use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use corner_engine::coords::{Corner, CornerRadii, Size};
use corner_engine::corner::{
    CornerConfig, CornerDecoration, CornerHost, CornerStyle, RenderParams,
};
use corner_engine::device::{HeadlessGpu, HeadlessGpuInit};
use corner_engine::geometry::RadiusRange;
use corner_engine::logging::{init_logging, LoggingConfig};
use corner_engine::render::{CornerMaterial, GpuCornerHost};

/// Host used when no GPU adapter is available: never yields a material.
struct Detached;

struct NoMaterial;

impl CornerMaterial for NoMaterial {
    fn apply(&mut self, _params: &RenderParams) {}
}

impl CornerHost for Detached {
    type Material = NoMaterial;

    fn create_material(&mut self) -> Option<NoMaterial> {
        None
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          CORNER STUDIO v0.1            ║");
    println!("  ║   clamp · reference rect · uniform     ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = CornerConfig::default()
        .with_radius(Corner::TopRight, 12.0)
        .with_style(Corner::BottomLeft, CornerStyle::Chamfered);

    match HeadlessGpu::new_blocking(HeadlessGpuInit::default()) {
        Ok(gpu) => {
            let info = gpu.adapter_info();
            println!("  adapter: {} ({:?})", info.name, info.backend);
            let host = GpuCornerHost::new(&gpu.render_ctx());
            run(CornerDecoration::new(host, config));
        }
        Err(err) => {
            log::warn!("no GPU available, running geometry only: {err:#}");
            println!("  adapter: none (geometry only)");
            run(CornerDecoration::new(Detached, config));
        }
    }

    Ok(())
}

fn run<H: CornerHost>(mut deco: CornerDecoration<H>) {
    let recomputes = Rc::new(Cell::new(0u32));
    let counter = recomputes.clone();
    deco.on_properties_changed(move || counter.set(counter.get() + 1));

    println!();
    print_header();

    let size = Size::new(320.0, 120.0);
    print_row("enable", size, &deco.on_enable(size));

    // Layout shrinks the rectangle until the 40 px corners no longer fit.
    for (w, h) in [(240.0, 90.0), (120.0, 60.0), (70.0, 40.0), (320.0, 120.0)] {
        let size = Size::new(w, h);
        if let Some(params) = deco.on_dimensions_changed(size) {
            print_row("resize", size, &params);
        } else {
            print_row("resize*", size, &deco.refresh());
        }
    }

    // Slider drag on the top-left radius, overshooting both ends.
    let range = RadiusRange::for_size(deco.size());
    for raw in [-8.0, 0.0, 25.0, 60.0, 75.0] {
        let params = deco.set_radius(Corner::TopLeft, range.clamp_input(raw));
        print_row("drag tl", deco.size(), &params);
    }

    deco.set_style(Corner::TopLeft, CornerStyle::Chamfered);
    let params = deco.set_radii(CornerRadii::all(500.0));
    print_row("all 500", deco.size(), &params);

    deco.destroy();

    println!();
    println!("  slider range: 0 .. {:.1}", range.max);
    println!("  change notifications: {}", recomputes.get());
    println!();
}

fn print_header() {
    println!(
        "  {:<8} {:>11}  {:>27}  {:>26}  {}",
        "step", "size", "radii tl/tr/br/bl", "ref origin / half extents", "styles"
    );
}

fn print_row(step: &str, size: Size, p: &RenderParams) {
    let r = p.radii;
    let rr = p.reference;
    println!(
        "  {:<8} {:>5.0}x{:<5.0}  {:>6.1} {:>6.1} {:>6.1} {:>6.1}  ({:>5.1},{:>5.1}) {:>6.1} {:>6.1}  {:?}",
        step,
        size.width,
        size.height,
        r.top_left,
        r.top_right,
        r.bottom_right,
        r.bottom_left,
        rr.origin.x,
        rr.origin.y,
        rr.half_width,
        rr.half_height,
        p.corner_styles.to_shader_vec(),
    );
}
