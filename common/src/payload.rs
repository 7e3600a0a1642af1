// base64 payloads -> image sources
//
// the backend stores images as bare base64 without any mime information, so the
// type is guessed from the first few encoded bytes of the file signature

const DEFAULT_MIME: &str = "image/jpeg";

// base64 encodings of the leading magic bytes for the formats browsers render
const SIGNATURES: &[(&str, &str)] = &[
    ("/9j/", "image/jpeg"),
    ("iVBORw0KGgo", "image/png"),
    ("R0lGOD", "image/gif"),
    ("UklGR", "image/webp"),
    ("PHN2Zy", "image/svg+xml"),
    ("PD94bW", "image/svg+xml"),
    ("Qk", "image/bmp"),
];

pub fn sniff_mime(payload: &str) -> &'static str {
    SIGNATURES
        .iter()
        .find(|(prefix, _)| payload.starts_with(prefix))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME)
}

// turn one payload into something an img element can display
//
// returns None for payloads that are blank once trimmed
pub fn image_source(payload: &str) -> Option<String> {
    let payload = payload.trim();

    if payload.is_empty() {
        return None;
    }

    if payload.starts_with("data:") {
        return Some(payload.to_string());
    }

    Some(format!("data:{};base64,{payload}", sniff_mime(payload)))
}

pub fn image_sources<I, S>(payloads: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    payloads
        .into_iter()
        .filter_map(|payload| image_source(payload.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_signatures() {
        assert_eq!(sniff_mime("/9j/4AAQSkZJRg"), "image/jpeg");
        assert_eq!(sniff_mime("iVBORw0KGgoAAAANSUhEUg"), "image/png");
        assert_eq!(sniff_mime("R0lGODlhAQABAIAAAP"), "image/gif");
        assert_eq!(sniff_mime("UklGRiQAAABXRUJQ"), "image/webp");
        assert_eq!(sniff_mime("Qk02AAAAAAAAADYAAAAo"), "image/bmp");
        assert_eq!(sniff_mime("AAAAIGZ0eXBhdmlm"), "image/jpeg");
    }

    #[test]
    fn raw_payload_gets_a_data_uri() {
        assert_eq!(
            image_source("iVBORw0KGgoAAAANSUhEUg").as_deref(),
            Some("data:image/png;base64,iVBORw0KGgoAAAANSUhEUg")
        );
        assert_eq!(
            image_source("  /9j/4AAQ\n").as_deref(),
            Some("data:image/jpeg;base64,/9j/4AAQ")
        );
    }

    #[test]
    fn data_uri_passes_through() {
        let uri = "data:image/png;base64,iVBORw0KGgo";

        assert_eq!(image_source(uri).as_deref(), Some(uri));
    }

    #[test]
    fn blank_payloads_are_dropped() {
        assert_eq!(image_source(""), None);
        assert_eq!(image_source("   "), None);

        let sources = image_sources(["/9j/a", " ", "R0lGODb"]);

        assert_eq!(
            sources,
            vec![
                "data:image/jpeg;base64,/9j/a".to_string(),
                "data:image/gif;base64,R0lGODb".to_string(),
            ]
        );
    }
}
