use qrcode::render::unicode::Dense1x2;
use qrcode::types::QrError;
use qrcode::QrCode;

/// Terminal rendering of the payload, two modules per character cell.
pub fn render(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes())?;

    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
