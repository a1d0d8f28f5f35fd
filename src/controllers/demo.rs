use std::time::Instant;

use crate::controllers::explorer::{Explorer, RenderRequest};
use crate::core::data::precision::Precision;
use crate::core::fractals::mandelbrot::colour_maps::kinds::PaletteKind;
use crate::storage::write_ppm::write_ppm;

pub fn demo_controller() -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = 800;
    let height: u32 = 600;
    let max_iterations: u32 = 256;
    let filepath = "output/mandelbrot.ppm";

    let request = RenderRequest {
        width,
        height,
        max_iterations,
        precision: Precision::Native,
        worker_count: None,
        palette: PaletteKind::UltraFractal,
    };
    let workers = request.resolved_workers();

    let mut explorer = Explorer::corner(request, 10.0)?;

    // Dive towards the seahorse valley before rendering
    explorer.zoom_in(320, 290)?;

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);
    println!("Max iterations: {}", max_iterations);
    println!("Workers: {}", workers);

    let start = Instant::now();
    let frame = explorer.render()?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);

    std::fs::create_dir_all("output")?;
    write_ppm(&frame, filepath)?;
    println!("Saved to {}", filepath);
    Ok(())
}
