//! QR encoding of verification URLs

use std::io::Cursor;

use image::Luma;
use qrcode::{EcLevel, QrCode};
use uuid::Uuid;

use crate::error::QrError;

/// Pixels per QR module.
const MODULE_SIZE: u32 = 10;

/// Build the verification URL for an agency identifier.
///
/// The URL is `{base}/verificar_agencia/{id}`; a trailing slash on the base
/// is tolerated.
///
/// # Example
///
/// ```rust
/// use agencia_qr::verification_url;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let url = verification_url("http://localhost:8080/", id);
/// assert_eq!(
///     url,
///     "http://localhost:8080/verificar_agencia/00000000-0000-0000-0000-000000000000"
/// );
/// ```
pub fn verification_url(base_url: &str, id: Uuid) -> String {
    format!("{}/verificar_agencia/{}", base_url.trim_end_matches('/'), id)
}

/// Encode a verification URL into a scannable QR PNG.
///
/// Error-correction level L (tolerates ~7% codeword damage), 10x10 px
/// modules, the standard 4-module quiet zone, black on white. The output is
/// a deterministic function of the URL, so repeated calls yield
/// byte-identical PNGs.
///
/// # Errors
///
/// Returns [`QrError`] if the payload does not fit a QR code or PNG
/// rendering fails.
pub fn encode_verification_qr(url: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;

    let rendered = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(rendered)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_url_shape() {
        let id = Uuid::new_v4();
        let url = verification_url("http://localhost:8080", id);
        assert_eq!(url, format!("http://localhost:8080/verificar_agencia/{id}"));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let url = verification_url("http://localhost:8080", Uuid::nil());
        let a = encode_verification_qr(&url).unwrap();
        let b = encode_verification_qr(&url).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_output_is_png() {
        let png = encode_verification_qr("http://localhost:8080/verificar_agencia/x").unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
