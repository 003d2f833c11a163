use std::f32::consts::TAU;

use iced::{
    Color, Point, Radians, Rectangle, Renderer, Size, Theme, mouse,
    widget::canvas::{self, Frame, Geometry, Path, path::Arc},
};

const PALETTE: [Color; 6] = [
    Color::from_rgb(0.12, 0.47, 0.71),
    Color::from_rgb(1.0, 0.50, 0.05),
    Color::from_rgb(0.17, 0.63, 0.17),
    Color::from_rgb(0.84, 0.15, 0.16),
    Color::from_rgb(0.58, 0.40, 0.74),
    Color::from_rgb(0.55, 0.34, 0.29),
];

const LABEL_SIZE: f32 = 14.0;
// average glyph advance of the default font, relative to its size
const GLYPH_WIDTH: f32 = 0.6;

/// Shorten `name` with a trailing ellipsis so it fits in `width` pixels.
fn fit_label(name: &str, width: f32) -> String {
    let max_chars = (width / (LABEL_SIZE * GLYPH_WIDTH)).floor() as usize;
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut short: String = name.chars().take(max_chars - 1).collect();
    short.push('…');
    short
}

fn label(content: String, position: Point, color: Color) -> canvas::Text {
    canvas::Text {
        content,
        position,
        color,
        size: LABEL_SIZE.into(),
        ..canvas::Text::default()
    }
}

/// Vertical bars, one per label, scaled to the largest count.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub counts: Vec<(String, usize)>,
}

impl<Message> canvas::Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let Some(max) = self.counts.iter().map(|(_, n)| *n).max() else {
            return vec![frame.into_geometry()];
        };
        let text_color = theme.palette().text;

        // room for a count above each bar and a label below
        let top = LABEL_SIZE * 1.5;
        let bottom = bounds.height - LABEL_SIZE * 2.0;
        let plot_height = (bottom - top).max(1.0);
        let slot = bounds.width / self.counts.len() as f32;
        let bar_width = slot * 0.6;

        for (i, (name, count)) in self.counts.iter().enumerate() {
            let height = plot_height * (*count as f32 / max as f32);
            let x = slot * i as f32 + (slot - bar_width) / 2.0;
            frame.fill_rectangle(
                Point::new(x, bottom - height),
                Size::new(bar_width, height),
                PALETTE[0],
            );
            frame.fill_text(label(
                count.to_string(),
                Point::new(x, bottom - height - LABEL_SIZE * 1.2),
                text_color,
            ));
            frame.fill_text(label(
                fit_label(name, slot),
                Point::new(slot * i as f32, bottom + LABEL_SIZE * 0.4),
                text_color,
            ));
        }
        vec![frame.into_geometry()]
    }
}

/// Pie with one slice per label and a percentage legend.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub counts: Vec<(String, usize)>,
}

impl<Message> canvas::Program<Message> for PieChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let total: usize = self.counts.iter().map(|(_, n)| *n).sum();
        if total == 0 {
            return vec![frame.into_geometry()];
        }
        let text_color = theme.palette().text;

        let legend_width = bounds.width * 0.35;
        let radius = ((bounds.width - legend_width).min(bounds.height) / 2.0 - 10.0).max(1.0);
        let center = Point::new((bounds.width - legend_width) / 2.0, bounds.height / 2.0);

        let mut start = -TAU / 4.0;
        for (i, (name, count)) in self.counts.iter().enumerate() {
            let share = *count as f32 / total as f32;
            let end = start + share * TAU;
            let color = PALETTE[i % PALETTE.len()];
            let slice = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(end),
                });
                builder.close();
            });
            frame.fill(&slice, color);

            let legend_y = 10.0 + i as f32 * LABEL_SIZE * 1.6;
            let legend_x = bounds.width - legend_width;
            frame.fill_rectangle(
                Point::new(legend_x, legend_y),
                Size::new(LABEL_SIZE, LABEL_SIZE),
                color,
            );
            frame.fill_text(label(
                format!("{name} ({:.1}%)", share * 100.0),
                Point::new(legend_x + LABEL_SIZE * 1.5, legend_y),
                text_color,
            ));
            start = end;
        }
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fit_their_slot() {
        let slot = LABEL_SIZE * GLYPH_WIDTH * 8.5;
        assert_eq!(fit_label("Kinshasa", slot), "Kinshasa");
        assert_eq!(fit_label("Navigation Internet", slot), "Navigat…");
        assert_eq!(fit_label("Navigation Internet", slot).chars().count(), 8);
        assert_eq!(fit_label("Éducation", 1.0), "");
    }
}
