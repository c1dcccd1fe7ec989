//! NOVA processing group descriptions

/// Human-readable label for a NOVA group
pub fn nova_description(nova_group: Option<i64>) -> &'static str {
    match nova_group {
        Some(1) => "Unprocessed or minimally processed foods",
        Some(2) => "Processed culinary ingredients",
        Some(3) => "Processed foods",
        Some(4) => "Ultra-processed foods",
        _ => "Unknown processing level",
    }
}
