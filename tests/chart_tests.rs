use plotters::prelude::RGBColor;
use pubtrends::chart::{parse_color, LineChart, Series};
use tempfile::TempDir;

#[test]
fn test_parse_color() {
    let color = parse_color("#E57200").unwrap();
    assert_eq!((color.0, color.1, color.2), (0xE5, 0x72, 0x00));

    let bare = parse_color("32006e").unwrap();
    assert_eq!((bare.0, bare.1, bare.2), (0x32, 0x00, 0x6e));
}

#[test]
fn test_parse_color_rejects_malformed() {
    assert!(parse_color("#12").is_err());
    assert!(parse_color("#zzzzzz").is_err());
    assert!(parse_color("red").is_err());
}

#[test]
fn test_render_writes_svg() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chart.svg");

    let mut chart = LineChart::new("Number of Papers", 2012..=2014);
    chart.title = Some("Test".to_string());
    chart.x_desc = Some("Year".to_string());
    chart.series.push(Series {
        label: "UVA".to_string(),
        color: RGBColor(0xE5, 0x72, 0x00),
        points: vec![(2012, 1.0), (2013, 3.0), (2014, 2.0)],
        emphasis: true,
    });
    chart.series.push(Series {
        label: "Peers".to_string(),
        color: RGBColor(0x80, 0x80, 0x80),
        points: vec![],
        emphasis: false,
    });
    chart.render(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}

#[test]
fn test_render_all_zero_chart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.svg");

    let chart = LineChart::new("Fraction of Citings", 2020..=2020);
    chart.render(&path).unwrap();

    assert!(path.exists());
}
