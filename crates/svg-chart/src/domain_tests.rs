//! Regression tests for the chart contract as the report uses it.
//!
//! Each test documents the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::TimeSeriesChart;
    use crate::chart::MarkKind;
    use crate::dataset::{Category, Dataset, Series, SeriesMode};

    fn nine_months() -> Vec<Category> {
        [
            "2024-09-30",
            "2024-10-31",
            "2024-11-30",
            "2024-12-31",
            "2025-01-31",
            "2025-02-28",
            "2025-03-31",
            "2025-04-30",
            "2025-05-31",
        ]
        .iter()
        .map(|k| Category::new(*k, *k))
        .collect()
    }

    fn combined() -> Dataset {
        Dataset::new(nine_months())
            .with_series(Series::new(
                "balance",
                SeriesMode::Bar,
                vec![
                    125_816.38, 178_279.38, 223_518.38, 247_926.88, 270_112.87, 301_470.79,
                    333_063.10, 353_948.09, 338_189.75,
                ],
            ))
            .with_series(Series::new(
                "income",
                SeriesMode::Line,
                vec![
                    199_110.73, 98_953.00, 135_121.00, 84_747.50, 99_044.50, 103_502.91,
                    95_864.81, 91_449.99, 109_351.66,
                ],
            ))
    }

    /// If this breaks, a series was drawn against its own axis: the same
    /// value must land at the same height whichever series carries it.
    #[test]
    fn test_series_share_one_axis() {
        let dataset = Dataset::new(vec![Category::new("a", "A")])
            .with_series(Series::new("bar", SeriesMode::Bar, vec![50.0]))
            .with_series(Series::new("line", SeriesMode::Line, vec![50.0]));
        let chart = TimeSeriesChart::new(600, 400).render(&dataset).unwrap();

        let bar = chart.marks_of(MarkKind::Bar).next().unwrap();
        let point = chart.marks_of(MarkKind::Point).next().unwrap();
        assert!((bar.y - point.y).abs() < 1e-9);
    }

    /// If this breaks, bars and line points for the same month drift apart
    /// on the x axis, so the combined chart no longer pairs them.
    #[test]
    fn test_bar_and_point_pairs_share_x() {
        let chart = TimeSeriesChart::new(900, 500).render(&combined()).unwrap();

        let bars: Vec<_> = chart.marks_of(MarkKind::Bar).collect();
        let points: Vec<_> = chart.marks_of(MarkKind::Point).collect();
        assert_eq!(bars.len(), 9);
        assert_eq!(points.len(), 9);

        for (bar, point) in bars.iter().zip(points.iter()) {
            assert_eq!(bar.key, point.key);
            assert_eq!(bar.x, point.x);
        }
    }

    /// If this breaks, the markup and the mark list disagree, and anything
    /// inspecting the SVG sees a different chart than the caller.
    #[test]
    fn test_svg_mark_count_matches_marks() {
        let chart = TimeSeriesChart::new(900, 500).render(&combined()).unwrap();
        assert_eq!(chart.svg().matches(r#"class="mark bar""#).count(), 9);
        assert_eq!(chart.svg().matches(r#"class="mark point""#).count(), 9);
    }

    /// If this breaks, categories were re-sorted or dropped: marks must come
    /// out in dataset order with no gaps.
    #[test]
    fn test_marks_keep_category_order() {
        let chart = TimeSeriesChart::new(900, 500).render(&combined()).unwrap();
        let keys: Vec<&str> = chart
            .marks_of(MarkKind::Bar)
            .map(|m| m.key.as_str())
            .collect();
        let expected: Vec<String> = nine_months().into_iter().map(|c| c.key).collect();
        assert_eq!(keys, expected.iter().map(String::as_str).collect::<Vec<_>>());

        let xs: Vec<f64> = chart.marks_of(MarkKind::Bar).map(|m| m.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    /// If this breaks, the tallest mark (or its label) is clipped at the
    /// top of the plot.
    #[test]
    fn test_tallest_label_inside_canvas() {
        let labels: Vec<String> = (0..9).map(|i| format!("label {i}")).collect();
        let dataset = Dataset::new(nine_months()).with_series(
            Series::new("balance", SeriesMode::Bar, vec![353_948.09; 9]).labels(labels),
        );
        let chart = TimeSeriesChart::new(900, 500)
            .title("t")
            .render(&dataset)
            .unwrap();

        for mark in chart.marks() {
            assert!(mark.label_y.unwrap() > 40.0);
        }
    }

    /// If this breaks, output depends on something other than the input.
    #[test]
    fn test_render_is_deterministic() {
        let builder = TimeSeriesChart::new(900, 500).title("same");
        let a = builder.render(&combined()).unwrap();
        let b = builder.render(&combined()).unwrap();
        assert_eq!(a.svg(), b.svg());
        assert_eq!(a.marks(), b.marks());
    }
}
