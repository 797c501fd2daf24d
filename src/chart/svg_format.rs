use itertools::Itertools;

use crate::{SolverKind, TimingReport};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 150.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;

/// Trait for things that can have a representation as an svg image.
pub trait SvgFormat {
    fn get_svg(&self) -> String;
}

fn color(kind: SolverKind) -> &'static str {
    match kind {
        SolverKind::Naive => "#d62728",
        SolverKind::Memoized => "#1f77b4",
        SolverKind::BottomUp => "#2ca02c",
    }
}

/// Line chart with one line per solver.
///
/// The x axis has one evenly spaced tick per tested length in input order and
/// the y axis shows the average running time in seconds.
impl SvgFormat for TimingReport {
    fn get_svg(&self) -> String {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let max_secs = self.max_average().as_secs_f64().max(f64::EPSILON);

        let x_of = |i: usize| {
            if self.lengths.len() <= 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + plot_width * i as f64 / (self.lengths.len() - 1) as f64
            }
        };
        let y_of = |secs: f64| MARGIN_TOP + plot_height * (1.0 - secs / max_secs);

        let mut svg = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
                w = WIDTH,
                h = HEIGHT
            ),
            format!(r#"<rect width="{}" height="{}" fill="white"/>"#, WIDTH, HEIGHT),
            format!(
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">Rod cutting running times ({} samples)</text>"#,
                WIDTH / 2.0,
                MARGIN_TOP / 2.0,
                self.samples
            ),
        ];

        // Axes.
        let bottom = MARGIN_TOP + plot_height;
        let right = MARGIN_LEFT + plot_width;
        svg.push(format!(
            r#"<path d="M{l},{t} L{l},{b} L{r},{b}" fill="none" stroke="black"/>"#,
            l = MARGIN_LEFT,
            t = MARGIN_TOP,
            b = bottom,
            r = right
        ));

        for tick in 0..=Y_TICKS {
            let secs = max_secs * tick as f64 / Y_TICKS as f64;
            let y = y_of(secs);
            svg.push(format!(
                r##"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="#dddddd"/>"##,
                MARGIN_LEFT,
                right,
                y = y
            ));
            svg.push(format!(
                r#"<text x="{}" y="{}" text-anchor="end">{:.2e}</text>"#,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                secs
            ));
        }

        for (i, length) in self.lengths.iter().enumerate() {
            svg.push(format!(
                r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                x_of(i),
                bottom + 18.0,
                length
            ));
        }

        svg.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle">rod length</text>"#,
            MARGIN_LEFT + plot_width / 2.0,
            HEIGHT - 15.0
        ));
        svg.push(format!(
            r#"<text x="20" y="{y}" text-anchor="middle" transform="rotate(-90 20 {y})">average time (s)</text>"#,
            y = MARGIN_TOP + plot_height / 2.0
        ));

        for (legend_i, series) in self.series.iter().enumerate() {
            let stroke = color(series.kind);
            let points = series
                .measured()
                .map(|(i, average)| (x_of(i), y_of(average.as_secs_f64())))
                .collect_vec();
            if !points.is_empty() {
                svg.push(format!(
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                    points.iter().map(|(x, y)| format!("{:.2},{:.2}", x, y)).join(" "),
                    stroke
                ));
                for (x, y) in points.iter() {
                    svg.push(format!(
                        r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}"/>"#,
                        x, y, stroke
                    ));
                }
            }

            let legend_y = MARGIN_TOP + 20.0 * legend_i as f64;
            svg.push(format!(
                r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{c}" stroke-width="2"/>"#,
                x1 = right + 15.0,
                x2 = right + 35.0,
                y = legend_y,
                c = stroke
            ));
            svg.push(format!(
                r#"<text x="{}" y="{}">{}</text>"#,
                right + 40.0,
                legend_y + 4.0,
                series.kind
            ));
        }

        svg.push("</svg>".to_string());
        svg.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimingSeries;
    use std::time::Duration;

    fn report() -> TimingReport {
        let series = |kind, millis: [u64; 3], skipped: [bool; 3]| TimingSeries {
            kind,
            averages: millis.iter().map(|&ms| Duration::from_millis(ms)).collect(),
            skipped: skipped.to_vec(),
        };
        TimingReport {
            lengths: vec![2, 4, 6],
            samples: 3,
            series: vec![
                series(SolverKind::Naive, [1, 4, 0], [false, false, true]),
                series(SolverKind::Memoized, [1, 2, 3], [false; 3]),
                series(SolverKind::BottomUp, [1, 1, 2], [false; 3]),
            ],
        }
    }

    #[test]
    fn test_svg_has_one_line_per_series() {
        let svg = report().get_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 3);
        for kind in SolverKind::ALL.iter() {
            assert!(svg.contains(&format!(">{}</text>", kind)));
        }
    }

    #[test]
    fn test_y_axis_is_in_seconds() {
        let svg = report().get_svg();
        assert!(svg.contains("average time (s)"));
        // Top tick is the longest average, 4 ms.
        assert!(svg.contains(">4.00e-3</text>"));
    }

    #[test]
    fn test_points_match_polyline() {
        let svg = report().get_svg();
        let polyline = svg.lines().find(|line| line.contains("<polyline")).unwrap();
        let circle = svg.lines().find(|line| line.contains("<circle")).unwrap();
        let first_point = polyline
            .split('"')
            .nth(1)
            .and_then(|points| points.split(' ').next())
            .unwrap();
        let (x, y) = first_point.split_once(',').unwrap();
        assert_eq!(circle, format!(r##"<circle cx="{}" cy="{}" r="3" fill="#d62728"/>"##, x, y));
    }

    #[test]
    fn test_skipped_points_are_not_drawn() {
        let svg = report().get_svg();
        // 2 naive points + 3 memoized + 3 bottom-up.
        assert_eq!(svg.matches("<circle").count(), 8);
    }

    #[test]
    fn test_empty_report() {
        let report = TimingReport {
            lengths: vec![],
            samples: 1,
            series: vec![],
        };
        let svg = report.get_svg();
        assert!(!svg.contains("<polyline"));
    }
}
