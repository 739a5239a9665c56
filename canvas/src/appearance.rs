use eframe::egui;

/// Light theme, the fields are white canvases.
pub fn style() -> egui::Style {
    use egui::{vec2, FontFamily, FontId, Rounding, Style, TextStyle, Visuals};

    let mut style = Style {
        visuals: Visuals::light(),
        ..Default::default()
    };

    const MEDIUM: f32 = 14.0;
    const LARGE: f32 = 18.0;
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(MEDIUM, FontFamily::Proportional));
    // match the big buttons under the field
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(LARGE, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::new(LARGE, FontFamily::Proportional));

    style.spacing.item_spacing = vec2(10.0, 10.0);
    style.spacing.button_padding = vec2(8.0, 4.0);
    style.visuals.window_rounding = Rounding::same(0.0);
    style
}

/// Size of the "Delete" and "Exit" buttons.
pub fn button_size() -> egui::Vec2 {
    egui::vec2(140.0, 36.0)
}
