use eframe::egui::{
    Align2, FontFamily, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget,
};
use gyrovis_device::GyroSample;

pub const TEXT_MARGIN: f32 = 20.0;
pub const LINE_HEIGHT: f32 = 40.0;
pub const TEXT_SIZE: f32 = 30.0;
pub const CIRCLE_RADIUS: f32 = 30.0;
pub const CIRCLE_BOTTOM_OFFSET: f32 = 50.0;
pub const CIRCLE_STROKE_WIDTH: f32 = 3.0;
pub const DOT_RADIUS: f32 = 10.0;
pub const DOT_SCALE: f32 = 20.0;

const MIN_HEIGHT: f32 = 260.0;

/// Renders the cached gyroscope reading: header, per-axis text, and a dot
/// offset from a reference circle by the scaled angular velocity.
pub struct GyroIndicatorView {
    sample: GyroSample,
}

impl GyroIndicatorView {
    pub fn new(sample: GyroSample) -> Self {
        GyroIndicatorView { sample }
    }
}

pub fn axis_line(axis: &str, value: f32) -> String {
    format!("{axis}: {value:.2} rad/s")
}

pub fn circle_center(rect: Rect) -> Pos2 {
    Pos2::new(rect.center().x, rect.bottom() - CIRCLE_BOTTOM_OFFSET)
}

// Horizontal displacement tracks the Y axis, vertical tracks negative X.
// Raw velocity scaled to pixels, deliberately not integrated into an angle.
pub fn dot_offset(sample: GyroSample) -> Vec2 {
    Vec2::new(sample.y * DOT_SCALE, -sample.x * DOT_SCALE)
}

impl Widget for GyroIndicatorView {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = Vec2::new(
            ui.available_width(),
            f32::max(ui.available_height(), MIN_HEIGHT),
        );
        let (rect, response) = ui.allocate_at_least(size, Sense::hover());

        let font = FontId::new(TEXT_SIZE, FontFamily::Proportional);
        let color = ui.visuals().text_color();
        let painter = ui.painter();

        let lines = [
            ("Gyroscope Data:".to_owned(), LINE_HEIGHT),
            (axis_line("X", self.sample.x), LINE_HEIGHT * 2.0),
            (axis_line("Y", self.sample.y), LINE_HEIGHT * 3.0),
            (axis_line("Z", self.sample.z), LINE_HEIGHT * 4.0),
        ];

        for (text, baseline) in lines {
            painter.text(
                rect.left_top() + Vec2::new(TEXT_MARGIN, baseline),
                Align2::LEFT_BOTTOM,
                text,
                font.clone(),
                color,
            );
        }

        let center = circle_center(rect);
        painter.circle_stroke(center, CIRCLE_RADIUS, Stroke::new(CIRCLE_STROKE_WIDTH, color));
        painter.circle_filled(center + dot_offset(self.sample), DOT_RADIUS, color);

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_lines_round_to_two_decimals() {
        assert_eq!(axis_line("X", 1.5), "X: 1.50 rad/s");
        assert_eq!(axis_line("Y", -2.0), "Y: -2.00 rad/s");
        assert_eq!(axis_line("Z", 0.3), "Z: 0.30 rad/s");
    }

    #[test]
    fn zero_sample_centers_the_dot() {
        assert_eq!(dot_offset(GyroSample::default()), Vec2::ZERO);
    }

    #[test]
    fn dot_tracks_y_horizontally_and_negative_x_vertically() {
        let offset = dot_offset(GyroSample {
            x: 1.5,
            y: -2.0,
            z: 0.3,
        });
        assert_eq!(offset, Vec2::new(-40.0, -30.0));
    }

    #[test]
    fn circle_centers_horizontally_above_the_bottom_edge() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0));
        assert_eq!(circle_center(rect), Pos2::new(200.0, 250.0));
    }

    #[test]
    fn degenerate_rect_still_yields_a_center() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::ZERO);
        assert_eq!(circle_center(rect), Pos2::new(0.0, -CIRCLE_BOTTOM_OFFSET));
    }
}
