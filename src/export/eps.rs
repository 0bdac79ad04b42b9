//! Level 2 encapsulated PostScript holding the figure as a JPEG image.

use std::fmt::Write;

use super::raster::RasterImage;

const HEX_LINE_BYTES: usize = 32;

/// Build an EPS file whose bounding box is `page` points large.
pub fn write_eps(image: &RasterImage, jpeg: &[u8], page: (f64, f64)) -> Vec<u8> {
    let (w, h) = page;
    let (px_w, px_h) = (image.width, image.height);

    let mut out = String::with_capacity(jpeg.len() * 2 + jpeg.len() / HEX_LINE_BYTES + 1024);
    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    out.push_str("%%Creator: sciplots\n");
    let _ = writeln!(out, "%%BoundingBox: 0 0 {} {}", w.ceil() as i64, h.ceil() as i64);
    let _ = writeln!(out, "%%HiResBoundingBox: 0 0 {:.2} {:.2}", w, h);
    out.push_str("%%LanguageLevel: 2\n%%Pages: 1\n%%EndComments\n%%Page: 1 1\n");
    out.push_str("gsave\n");
    let _ = writeln!(out, "{:.2} {:.2} scale", w, h);
    out.push_str("/DeviceRGB setcolorspace\n");
    let _ = writeln!(
        out,
        "<< /ImageType 1 /Width {} /Height {} /BitsPerComponent 8 /Decode [0 1 0 1 0 1]",
        px_w, px_h
    );
    let _ = writeln!(out, "   /ImageMatrix [{} 0 0 -{} 0 {}]", px_w, px_h, px_h);
    out.push_str("   /DataSource currentfile /ASCIIHexDecode filter /DCTDecode filter\n>> image\n");
    for chunk in jpeg.chunks(HEX_LINE_BYTES) {
        for byte in chunk {
            let _ = write!(out, "{:02X}", byte);
        }
        out.push('\n');
    }
    out.push_str(">\ngrestore\nshowpage\n%%Trailer\n%%EOF\n");
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eps_header_and_data() {
        let image = RasterImage {
            width: 2,
            height: 2,
            rgba: vec![0; 2 * 2 * 4],
        };
        let jpeg = image.encode_jpeg(90).unwrap();
        let eps = String::from_utf8(write_eps(&image, &jpeg, (100.5, 50.0))).unwrap();

        assert!(eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0\n"));
        assert!(eps.contains("%%BoundingBox: 0 0 101 50\n"));
        assert!(eps.contains("%%HiResBoundingBox: 0 0 100.50 50.00\n"));
        assert!(eps.contains("/ImageMatrix [2 0 0 -2 0 2]"));
        // JPEG start-of-image marker opens the hex data
        assert!(eps.contains("\nFFD8"));
        assert!(eps.ends_with("%%EOF\n"));
    }
}
