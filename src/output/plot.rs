use std::fs;
use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use log::{debug, warn};
use plotters::prelude::*;
use crate::analysis::Waveform;
use crate::output::OutputError;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub trace: RGBColor,
    pub marker: RGBColor,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: RGBColor(10, 10, 10),
            foreground: WHITE,
            trace: RGBColor(31, 119, 180),
            marker: RGBColor(255, 165, 0),
        }
    }
}
/// What to draw on top of the trace.
#[derive(Clone, Debug, Default)]
pub struct PlotRequest {
    pub title: String,
    pub annotation: Option<String>,
    /// Dashed vertical line, in sample units (the tp0 rising-edge time).
    pub marker_x: Option<f64>,
}
impl PlotRequest {
    pub fn for_record(index: usize) -> Self {
        Self {
            title: format!("Random Raw Waveform (Index: {index})"),
            ..Default::default()
        }
    }
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }
    pub fn with_marker(mut self, x: f64) -> Self {
        self.marker_x = Some(x);
        self
    }
}
/// Renders the pulse to PNG. Falls back to a text-free image when no usable
/// font is installed.
pub fn render_waveform_png(
    waveform: &Waveform,
    request: &PlotRequest,
    style: &PlotStyle,
) -> Result<Vec<u8>, OutputError> {
    if waveform.is_empty() {
        return Err(OutputError::Plot("waveform has no samples".into()));
    }
    match draw_png(waveform, request, style, true) {
        Ok(png) => Ok(png),
        Err(err) => {
            warn!("plot text unavailable ({err}); rendering without labels");
            draw_png(waveform, request, style, false)
        }
    }
}
pub fn save_waveform_png(
    waveform: &Waveform,
    request: &PlotRequest,
    style: &PlotStyle,
    path: &Path,
) -> Result<(), OutputError> {
    let png = render_waveform_png(waveform, request, style)?;
    fs::write(path, &png).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} byte plot to {}", png.len(), path.display());
    Ok(())
}
fn draw_png(
    waveform: &Waveform,
    request: &PlotRequest,
    style: &PlotStyle,
    with_text: bool,
) -> Result<Vec<u8>, OutputError> {
    let marker_x = request.marker_x.filter(|x| x.is_finite());
    let (x_lo, x_hi) = x_bounds(waveform.len(), marker_x);
    let (y_lo, y_hi) = y_bounds(waveform);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if with_text {
            builder
                .caption(
                    &request.title,
                    ("sans-serif", 20).into_font().color(&style.foreground),
                )
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .set_label_area_size(LabelAreaPosition::Bottom, 45);
        }
        let mut chart = builder.build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
        if with_text {
            chart
                .configure_mesh()
                .light_line_style(&style.foreground.mix(0.1))
                .axis_style(&style.foreground)
                .label_style(("sans-serif", 12).into_font().color(&style.foreground))
                .x_desc("Time Index (μs)")
                .y_desc("ADC Counts")
                .draw()?;
        }
        let trace = style.trace;
        let points = waveform
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (i as f64, v));
        let series = chart.draw_series(LineSeries::new(points, &trace))?;
        if with_text {
            series
                .label("Waveform")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &trace));
        }
        if let Some(x) = marker_x {
            let marker = style.marker;
            let dash = (y_hi - y_lo) / 40.0;
            let dashes = (0..40).step_by(2).map(move |k| {
                let y0 = y_lo + k as f64 * dash;
                PathElement::new(vec![(x, y0), (x, y0 + dash)], marker.stroke_width(2))
            });
            let series = chart.draw_series(dashes)?;
            if with_text {
                series.label("Rising Edge (tp0)").legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 8, y)], marker.stroke_width(2))
                });
            }
        }
        if with_text {
            chart
                .configure_series_labels()
                .border_style(&style.foreground.mix(0.2))
                .background_style(&style.background)
                .label_font(("sans-serif", 12).into_font().color(&style.foreground))
                .draw()?;
            if let Some(text) = &request.annotation {
                // Anchored like a figure-relative text box at (0.45, 0.2).
                let font = ("sans-serif", 13).into_font().color(&style.foreground);
                let line_height = 15;
                let lines: Vec<&str> = text.lines().collect();
                let x = (style.width as f64 * 0.45) as i32;
                let bottom = (style.height as f64 * 0.8) as i32;
                let top = bottom - line_height * lines.len() as i32;
                for (i, line) in lines.iter().enumerate() {
                    root.draw(&Text::new(
                        *line,
                        (x, top + i as i32 * line_height),
                        font.clone(),
                    ))?;
                }
            }
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn x_bounds(len: usize, marker_x: Option<f64>) -> (f64, f64) {
    let mut lo: f64 = 0.0;
    let mut hi = (len.saturating_sub(1) as f64).max(1.0);
    if let Some(x) = marker_x {
        lo = lo.min(x);
        hi = hi.max(x);
    }
    (lo, hi)
}
fn y_bounds(waveform: &Waveform) -> (f64, f64) {
    match waveform.finite_bounds() {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (-1.0, 1.0),
    }
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, OutputError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| OutputError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
