use std::io::Write;
use std::path::Path;
use crate::core::data::frame::Frame;

pub fn write_ppm(frame: &Frame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", frame.width(), frame.height())?;
    writeln!(file, "255")?;
    file.write_all(frame.pixels())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_payload() {
        let frame = Frame::from_pixels(2, 2, 10, vec![255; 12]).unwrap();
        let path = std::env::temp_dir().join("mandelzoom_write_ppm_test.ppm");

        write_ppm(&frame, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(&bytes[..11], b"P6\n2 2\n255\n");
        assert_eq!(bytes.len(), 11 + 12);
        assert!(bytes[11..].iter().all(|&b| b == 255));
    }
}
