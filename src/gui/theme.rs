use egui::{Color32, Context, Rounding, Stroke, Visuals};

/// Variable names in result tables
pub const LABEL_BLUE: Color32 = Color32::from_rgb(30, 80, 200);
/// Statistically significant values
pub const SIGNIFICANT_RED: Color32 = Color32::from_rgb(200, 30, 30);
/// Fallback notices for missing assets
pub const WARNING_AMBER: Color32 = Color32::from_rgb(170, 110, 0);
pub const INFO_FILL: Color32 = Color32::from_rgb(225, 238, 252);

/// Light report-style theme
pub fn setup_custom_theme(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Color32::from_rgb(250, 250, 252);
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(242, 242, 242);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(232, 236, 242);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(40, 40, 50));
    visuals.widgets.active.bg_fill = Color32::from_rgb(205, 215, 230);

    // Selected navigation entry
    visuals.selection.bg_fill = Color32::from_rgb(210, 65, 60);
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.hyperlink_color = Color32::from_rgb(20, 100, 200);

    let rounding = Rounding::same(4.0);
    visuals.window_rounding = rounding;
    visuals.menu_rounding = rounding;

    ctx.set_visuals(visuals);
}
