//! ANSI helpers shared by the console formatter.

/// Remove the CSI escape sequences the console formatter and renderers emit.
///
/// Each `ESC [` runs up to and including its final byte (`@` through `~`).
/// An `ESC` that does not open a CSI sequence is dropped on its own.
#[must_use]
pub(super) fn strip_ansi(s: &str) -> String {
    let mut pieces = s.split('\x1b');
    let mut out = pieces.next().unwrap_or_default().to_string();
    for piece in pieces {
        out.push_str(piece.strip_prefix('[').map_or(piece, after_csi));
    }
    out
}

/// The text following the final byte of a CSI body; empty if unterminated.
fn after_csi(body: &str) -> &str {
    body.find(|c: char| ('@'..='~').contains(&c))
        .and_then(|end| body.get(end + 1..))
        .unwrap_or_default()
}
