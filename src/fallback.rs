use quick_xml::escape::escape;

use crate::config;

/// Inline SVG placeholder as a `data:` URI, sized `width` x `height` with
/// `text` centred on it.
pub fn svg_fallback(text: &str, width: u32, height: u32) -> String {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="#012147" /><text x="50%" y="50%" fill="#7aafff" font-family="Poppins, sans-serif" font-size="20" text-anchor="middle" dominant-baseline="middle">{text}</text></svg>"##,
        w = width,
        h = height,
        text = escape(text),
    );
    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}

/// Placeholder used for every broken image on the page.
pub fn unavailable_image() -> String {
    svg_fallback(config::FALLBACK_TEXT, config::FALLBACK_WIDTH, config::FALLBACK_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(uri: &str) -> String {
        let payload = uri.strip_prefix("data:image/svg+xml;utf8,").expect("data uri prefix");
        urlencoding::decode(payload).expect("valid percent encoding").into_owned()
    }

    #[test]
    fn placeholder_is_a_percent_encoded_svg() {
        let uri = unavailable_image();
        assert!(uri.starts_with("data:image/svg+xml;utf8,%3Csvg"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('#'));

        let svg = decoded(&uri);
        assert!(svg.contains(r#"width="800" height="500""#));
        assert!(svg.contains(r#"viewBox="0 0 800 500""#));
        assert!(svg.contains(">Imagem indisponível</text>"));
    }

    #[test]
    fn custom_size_and_text() {
        let svg = decoded(&svg_fallback("Sem foto", 320, 200));
        assert!(svg.contains(r#"viewBox="0 0 320 200""#));
        assert!(svg.contains(">Sem foto</text>"));
    }

    #[test]
    fn text_is_escaped() {
        let svg = decoded(&svg_fallback("A & <B>", 10, 10));
        assert!(svg.contains(">A &amp; &lt;B&gt;</text>"));

        let quoted = decoded(&svg_fallback("\"Luzion\"", 10, 10));
        assert!(quoted.contains(">&quot;Luzion&quot;</text>"));
    }
}
