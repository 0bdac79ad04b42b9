//! Single-page PDF holding the figure as a JPEG image.

use super::raster::RasterImage;

/// Build a PDF whose page is `page` points large and covered by `jpeg`.
pub fn write_pdf(image: &RasterImage, jpeg: &[u8], page: (f64, f64)) -> Vec<u8> {
    let (w, h) = page;
    let content = format!("q\n{:.2} 0 0 {:.2} 0 0 cm\n/Im0 Do\nQ\n", w, h);

    let mut out: Vec<u8> = Vec::with_capacity(jpeg.len() + 1024);
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(5);
    let mut object = |out: &mut Vec<u8>, body: &[u8]| {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", offsets.len()).as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    };

    object(&mut out, b"<< /Type /Catalog /Pages 2 0 R >>");
    object(&mut out, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    object(
        &mut out,
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /XObject << /Im0 5 0 R >> >> /Contents 4 0 R >>",
            w, h
        )
        .as_bytes(),
    );
    object(
        &mut out,
        stream(&format!("<< /Length {} >>", content.len()), content.as_bytes()).as_slice(),
    );
    object(
        &mut out,
        stream(
            &format!(
                "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>",
                image.width,
                image.height,
                jpeg.len()
            ),
            jpeg,
        )
        .as_slice(),
    );

    let xref = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref
        )
        .as_bytes(),
    );
    out
}

fn stream(dict: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(dict.len() + data.len() + 32);
    body.extend_from_slice(dict.as_bytes());
    body.extend_from_slice(b"\nstream\n");
    body.extend_from_slice(data);
    body.extend_from_slice(b"\nendstream");
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_structure() {
        let image = RasterImage {
            width: 4,
            height: 3,
            rgba: vec![255; 4 * 3 * 4],
        };
        let jpeg = image.encode_jpeg(90).unwrap();
        let pdf = write_pdf(&image, &jpeg, (288.0, 216.0));
        let text = String::from_utf8_lossy(&pdf);

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/MediaBox [0 0 288.00 216.00]"));
        assert!(text.contains("/Width 4 /Height 3"));
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.trim_end().ends_with("%%EOF"));

        // The xref table points at each object header
        let tail_start = pdf
            .windows(b"startxref\n".len())
            .rposition(|w| w == b"startxref\n")
            .unwrap();
        let tail = std::str::from_utf8(&pdf[tail_start..]).unwrap();
        let xref: usize = tail.lines().nth(1).unwrap().parse().unwrap();
        assert!(pdf[xref..].starts_with(b"xref\n0 6\n"));
        let table = std::str::from_utf8(&pdf[xref..]).unwrap();
        let first = table.lines().nth(3).unwrap();
        let offset: usize = first[..10].parse().unwrap();
        assert!(pdf[offset..].starts_with(b"1 0 obj"));
    }
}
