//! 현재 차트를 만드는 코드 조각 생성

use charts_core::{ChartKind, DataPoint, Segment, ValueSet, Values};
use std::fmt::Write;

fn factory(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::Radar => "radar",
        ChartKind::Pie => "pie",
        ChartKind::Doughnut => "doughnut",
        ChartKind::PolarArea => "polar",
    }
}

/// Line / Bar / Radar 차트 코드
pub fn series(kind: ChartKind, set: &ValueSet, rows: &[Values], element_id: &str) -> String {
    let mut code = String::from("// use charts_core::*;\n");
    let _ = writeln!(
        code,
        "let chart = Chart::{}(vec![ValueSet::new({:?}, Color::from({:?}), Color::from({:?}))]);",
        factory(kind),
        set.label(),
        set.fill_color().as_str(),
        set.stroke_color().as_str()
    );
    for row in rows {
        let values: Vec<String> = row.values().iter().map(|v| format!("{:?}", v)).collect();
        let _ = writeln!(
            code,
            "chart.data().push(Values::new({:?}, [{}]))?;",
            row.label(),
            values.join(", ")
        );
    }
    let _ = writeln!(code, "chart.apply_to({:?}, renderer)?;", element_id);
    code
}

/// Pie / Doughnut / Polar 차트 코드
pub fn segments(kind: ChartKind, rows: &[Segment], element_id: &str) -> String {
    let mut code = String::from("// use charts_core::*;\n");
    let _ = writeln!(code, "let chart = Chart::{}();", factory(kind));
    for row in rows {
        let _ = writeln!(
            code,
            "chart.data().push(Segment::new({:?}, {:?}, Color::from({:?}), Color::from({:?})))?;",
            row.label(),
            row.value(),
            row.color().as_str(),
            row.highlight().as_str()
        );
    }
    let _ = writeln!(code, "chart.apply_to({:?}, renderer)?;", element_id);
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts_core::Color;

    #[test]
    fn test_series_snippet() {
        let set = ValueSet::new("Months", Color::from("#4D4D4D"), Color::from("#5DA5DA"));
        let rows = vec![Values::new("January", [42.0])];
        let code = series(ChartKind::Bar, &set, &rows, "chart");

        assert!(code.contains("Chart::bar(vec![ValueSet::new(\"Months\""));
        assert!(code.contains("Values::new(\"January\", [42.0])"));
        assert!(code.ends_with("chart.apply_to(\"chart\", renderer)?;\n"));
    }

    #[test]
    fn test_segment_snippet() {
        let rows = vec![Segment::new(
            "March",
            7.0,
            Color::from("#FAA43A"),
            Color::from("#FAA43A"),
        )];
        let code = segments(ChartKind::PolarArea, &rows, "chart");

        assert!(code.contains("Chart::polar();"));
        assert!(code.contains("Segment::new(\"March\", 7.0"));
    }
}
