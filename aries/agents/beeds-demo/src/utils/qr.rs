use qrcode::{render::unicode::Dense1x2, QrCode};

use crate::error::AgentResult;

/// Renders `data` as a QR code made of half block characters, two modules
/// per line. Colors are inverted so the code scans from a dark terminal.
pub fn render_qr(data: &str) -> AgentResult<String> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .build())
}
