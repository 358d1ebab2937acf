//! Rendering of a finished generation: the composite portrait, the optional
//! scan-code panel, and the downloadable artifact.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Local};

use crate::generation::GenerationOutcome;

pub const SCAN_CODE_HEADING: &str = "Scan to download your photo";
pub const SCAN_CODE_CAPTION: &str = "Scan with your phone to save your graduation portrait";

/// What the kiosk renders on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Primary output, an encoded image payload displayed as-is.
    pub composite_image: String,
    /// Populated only when the backend returned a scan code; an absent code
    /// leaves the region empty and is not an error.
    pub scan_code: Option<ScanCodePanel>,
}

/// The dedicated scan-code region with its static explanatory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCodePanel {
    pub image: String,
    pub heading: &'static str,
    pub caption: &'static str,
}

pub fn present(outcome: &GenerationOutcome) -> ResultView {
    ResultView {
        composite_image: outcome.composite_image.clone(),
        scan_code: outcome.scan_code.clone().map(|image| ScanCodePanel {
            image,
            heading: SCAN_CODE_HEADING,
            caption: SCAN_CODE_CAPTION,
        }),
    }
}

/// Filename offered for the downloadable composite: sanitized display name
/// plus a to-the-second timestamp.
pub fn download_filename(display_name: &str, when: DateTime<Local>) -> String {
    format!(
        "GraduationPortrait_{}_{}.png",
        sanitize_name(display_name),
        when.format("%d-%m-%Y_%H-%M-%S"),
    )
}

/// Replace everything outside the restricted set (letters, digits, a small
/// accented set) with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "áéíóúñÁÉÍÓÚÑ".contains(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Decode an encoded image payload (a `data:` URL or bare base64) into raw
/// bytes for writing the download artifact.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, String> {
    let encoded = match payload.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => payload,
    };
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("Invalid image payload: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn outcome(scan_code: Option<&str>) -> GenerationOutcome {
        GenerationOutcome {
            composite_image: "data:image/png;base64,AAAA".to_string(),
            scan_code: scan_code.map(|s| s.to_string()),
        }
    }

    #[test]
    fn present_includes_scan_panel_when_code_returned() {
        let view = present(&outcome(Some("data:image/png;base64,BBBB")));
        let panel = view.scan_code.unwrap();
        assert_eq!(panel.image, "data:image/png;base64,BBBB");
        assert_eq!(panel.heading, SCAN_CODE_HEADING);
        assert_eq!(panel.caption, SCAN_CODE_CAPTION);
    }

    #[test]
    fn present_leaves_scan_region_empty_without_code() {
        let view = present(&outcome(None));
        assert_eq!(view.composite_image, "data:image/png;base64,AAAA");
        assert!(view.scan_code.is_none());
    }

    #[test]
    fn filename_encodes_name_and_timestamp() {
        let when = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        let filename = download_filename("Valeria Ríos", when);
        assert_eq!(filename, "GraduationPortrait_Valeria_Ríos_14-03-2026_15-09-26.png");
    }

    #[test]
    fn filename_sanitizes_outside_the_restricted_set() {
        let when = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let filename = download_filename("a/b\\c:d*e", when);
        assert!(filename.starts_with("GraduationPortrait_a_b_c_d_e_"));
    }

    #[test]
    fn filename_keeps_accented_characters() {
        assert_eq!(sanitize_name("Ángel Muñoz"), "Ángel_Muñoz");
    }

    #[test]
    fn decodes_data_url_payload() {
        let payload = format!("data:image/png;base64,{}", STANDARD.encode(b"png-bytes"));
        assert_eq!(decode_image_payload(&payload).unwrap(), b"png-bytes");
    }

    #[test]
    fn decodes_bare_base64_payload() {
        let payload = STANDARD.encode(b"raw");
        assert_eq!(decode_image_payload(&payload).unwrap(), b"raw");
    }

    #[test]
    fn rejects_undecodable_payload() {
        assert!(decode_image_payload("data:image/png;base64,!!!").is_err());
    }
}
