// File: crates/chartesque-skia/tests/png.rs
// Purpose: End-to-end PNG rendering through the Skia adapter.

use chartesque_core::{Chart, ChartError};
use chartesque_skia::{render_to_file, render_to_png_bytes, write_png, PngOptions, SkiaTextMeasurer};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn reference_chart() -> Chart {
    let mut chart = Chart::new();
    chart.set_width(640);
    chart.set_height(280);
    chart
        .set_data(
            &[250.0, 350.0, 450.0, 550.0, 650.0, 750.0, 850.0, 950.0, 1050.0, 1150.0, 1250.0],
            &[10.1, 20.2, 10.1, 35.1, 40.2, 45.3, 30.35, 20.4, 10.35, 5.3, 1.0],
        )
        .expect("data");
    chart.x_axis_mut().set_limit(200.0, 2000.0).expect("x limits");
    chart.y_axis_mut().set_limit(1.0, 50.0).expect("y limits");
    chart
}

#[test]
fn render_smoke_png() {
    let mut chart = reference_chart();
    let bytes = render_to_png_bytes(&mut chart, &PngOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (640, 280));
    // Inside the top margin nothing is drawn.
    assert_eq!(img.get_pixel(2, 2)[3], 0);
}

#[test]
fn y_axis_line_is_painted_dark_gray() {
    let mut chart = reference_chart();
    let layout = chart.layout(&SkiaTextMeasurer::new()).expect("layout");
    let bytes = render_to_png_bytes(&mut chart, &PngOptions::default()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    let x = layout.axis_lines.top.x.floor() as u32;
    let y = ((layout.axis_lines.top.y + layout.axis_lines.corner.y) / 2.0) as u32;
    let px = img.get_pixel(x, y);
    assert!(px[3] > 0, "axis pixel should be opaque: {px:?}");
    assert!(px[0] < 128 && px[1] < 128 && px[2] < 128, "axis should be dark: {px:?}");
}

#[test]
fn write_png_streams_into_sink() {
    let mut chart = reference_chart();
    let mut sink = Vec::new();
    write_png(&mut chart, &PngOptions::default(), &mut sink).expect("write");
    assert!(sink.starts_with(&PNG_MAGIC));
}

#[test]
fn render_to_file_uses_output_filename() {
    let mut chart = reference_chart();
    let out = std::path::PathBuf::from("target/test_out/reference.png");
    chart.set_output_file(&out);
    let written = render_to_file(&mut chart, &PngOptions::default()).expect("render to file");
    assert_eq!(written, out);
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn invalid_configuration_writes_nothing() {
    let mut chart = reference_chart();
    chart.set_height(0);
    let out = std::path::PathBuf::from("target/test_out/never_written.png");
    std::fs::remove_file(&out).ok();
    chart.set_output_file(&out);

    let err = render_to_file(&mut chart, &PngOptions::default()).expect_err("zero height");
    let chart_err = err.downcast_ref::<ChartError>().expect("chart error");
    assert!(matches!(chart_err, ChartError::InvalidSize { width: 640, height: 0 }));
    assert!(!out.exists());
}

#[test]
fn repeated_renders_are_pixel_identical() {
    let mut chart = reference_chart();
    let a = render_to_png_bytes(&mut chart, &PngOptions::default()).expect("first");
    let b = render_to_png_bytes(&mut chart, &PngOptions::default()).expect("second");
    let a = image::load_from_memory(&a).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&b).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn unwritable_output_path_reports_io_error() {
    let blocker = std::path::PathBuf::from("target/test_out/blocker_file");
    std::fs::create_dir_all("target/test_out").expect("test dir");
    std::fs::write(&blocker, b"not a directory").expect("blocker file");

    let mut chart = reference_chart();
    chart.set_output_file(blocker.join("chart.png"));
    let err = render_to_file(&mut chart, &PngOptions::default()).expect_err("parent is a file");
    let chart_err = err.downcast_ref::<ChartError>().expect("chart error");
    assert!(matches!(chart_err, ChartError::Io(_)), "got {chart_err:?}");
    assert!(!chart_err.is_configuration());
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_sink_reports_io_error() {
    let mut chart = reference_chart();
    let err = write_png(&mut chart, &PngOptions::default(), FailingSink).expect_err("sink fails");
    let chart_err = err.downcast_ref::<ChartError>().expect("chart error");
    assert!(matches!(chart_err, ChartError::Io(e) if e.kind() == std::io::ErrorKind::Other));
}
