fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelzoom::demo_controller()?;

    Ok(())
}
