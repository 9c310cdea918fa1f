//! 평가 결과를 일반 텍스트 보고서, CSV 시계열, PNG 그래프로 내보낸다.

use std::fs;
use std::io::Write;
use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::fiv::{ResponseSeries, Screening};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("이미지 저장 오류: {0}")]
    Image(#[from] image::ImageError),
    #[error("그래프 크기가 너무 작습니다 ({width}x{height})")]
    CanvasTooSmall { width: u32, height: u32 },
    #[error("지원하지 않는 시계열 파일 확장자: {0} (csv 또는 png)")]
    UnsupportedExtension(String),
}

/// `라벨: 값` 형식의 보고서 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

/// 모든 탭의 결과를 원래 탭 순서대로 모은 보고서.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningReport {
    lines: Vec<ReportLine>,
}

impl ScreeningReport {
    pub fn from_screening(s: &Screening) -> ScreeningReport {
        let flow = &s.flow;
        let dynamics = &s.damage.dynamics;
        let risk = &s.damage.risk;
        let reynolds = flow
            .reynolds_number
            .map(|re| format!("{re:.2}"))
            .unwrap_or_else(|| "N/A".to_string());
        let entries: Vec<(&'static str, String)> = vec![
            ("Natural Frequency", format!("{:.2} Hz", flow.natural_frequency_hz)),
            ("Reynolds Number", reynolds),
            ("Vortex Shedding Frequency", format!("{:.2} Hz", flow.vortex_shedding_hz)),
            ("Turbulent Buffeting Effect", format!("{:.2} N", flow.buffeting_effect_n)),
            ("Axial Resonance", format!("{:.2} Hz", s.acoustic.axial_hz)),
            ("Angular Resonance", format!("{:.2} Hz", s.acoustic.angular_hz)),
            ("Fluid Elastic Instability Factor", format!("{:.2}", flow.instability_factor)),
            ("Tube Mass", format!("{:.3} kg", dynamics.mass_kg)),
            ("Tube Stiffness", format!("{:.1} N/m", dynamics.stiffness_n_per_m)),
            ("Fluid Force Amplitude", format!("{:.2} N", dynamics.force_amplitude_n)),
            (
                "Natural Frequency (rad/s)",
                format!("{:.2}", dynamics.natural_angular_frequency_rad_s),
            ),
            ("Max Displacement", format!("{:.4} m", risk.max_displacement_m)),
            ("Mid-span Collision Risk", risk.collision_risk.to_string()),
            ("Wear Contact Events", risk.wear_events.to_string()),
            ("Noise Level", format!("{} dB", risk.noise_level_db)),
            ("Pressure Drop", format!("{} kPa", risk.pressure_drop_kpa)),
            ("Stress Corrosion Cracking Risk", risk.scc_risk.to_string()),
        ];
        ScreeningReport {
            lines: entries
                .into_iter()
                .map(|(label, value)| ReportLine { label, value })
                .collect(),
        }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}: {}", l.label, l.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn write_text(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_text())?;
        tracing::info!(path = %path.display(), "보고서 저장");
        Ok(())
    }
}

/// 시계열을 `time_s,displacement_m,fluid_force_n` CSV 로 쓴다.
pub fn write_series_csv(series: &ResponseSeries, path: &Path) -> Result<(), ReportError> {
    let mut out = std::io::BufWriter::new(fs::File::create(path)?);
    writeln!(out, "time_s,displacement_m,fluid_force_n")?;
    for s in series.samples() {
        writeln!(out, "{},{},{}", s.time_s, s.displacement_m, s.fluid_force_n)?;
    }
    out.flush()?;
    tracing::info!(path = %path.display(), rows = series.len(), "시계열 CSV 저장");
    Ok(())
}

const MARGIN: u32 = 32;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const TRACE: Rgb<u8> = Rgb([31, 119, 180]);

/// 변위-시간 그래프를 PNG 로 그린다. 축은 0 기준 대칭이다.
pub fn render_series_png(
    series: &ResponseSeries,
    width: u32,
    height: u32,
) -> Result<RgbImage, ReportError> {
    if width <= 3 * MARGIN || height <= 3 * MARGIN {
        return Err(ReportError::CanvasTooSmall { width, height });
    }
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let left = MARGIN as i64;
    let right = (width - MARGIN) as i64;
    let top = MARGIN as i64;
    let bottom = (height - MARGIN) as i64;
    let mid_y = (top + bottom) / 2;

    for i in 1..10 {
        let x = left + (right - left) * i / 10;
        draw_line(&mut img, (x, top), (x, bottom), GRID);
    }
    for i in 1..8 {
        let y = top + (bottom - top) * i / 8;
        draw_line(&mut img, (left, y), (right, y), GRID);
    }
    draw_line(&mut img, (left, top), (left, bottom), AXIS);
    draw_line(&mut img, (left, bottom), (right, bottom), AXIS);
    draw_line(&mut img, (left, mid_y), (right, mid_y), AXIS);

    let t_max = series.times().fold(0.0, f64::max);
    let peak = series.peak_abs_displacement();
    let y_span = if peak > 0.0 { peak * 1.1 } else { 1.0 };
    let to_px = |t: f64, x: f64| -> (i64, i64) {
        let fx = if t_max > 0.0 { t / t_max } else { 0.0 };
        let px = left + ((right - left) as f64 * fx).round() as i64;
        let half = (bottom - top) as f64 / 2.0;
        let py = mid_y - (half * x / y_span).round() as i64;
        (px, py)
    };
    let mut prev: Option<(i64, i64)> = None;
    for s in series.samples() {
        let p = to_px(s.time_s, s.displacement_m);
        if let Some(q) = prev {
            draw_line(&mut img, q, p, TRACE);
        }
        prev = Some(p);
    }
    Ok(img)
}

pub fn write_series_png(
    series: &ResponseSeries,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), ReportError> {
    let img = render_series_png(series, width, height)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), width, height, "응답 그래프 저장");
    Ok(())
}

/// 내보내기 기본 그래프 크기
pub const PNG_WIDTH: u32 = 900;
pub const PNG_HEIGHT: u32 = 480;

/// 확장자(.csv/.png)에 맞춰 시계열을 저장한다.
pub fn write_series(series: &ResponseSeries, path: &Path) -> Result<(), ReportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => write_series_csv(series, path),
        "png" => write_series_png(series, path, PNG_WIDTH, PNG_HEIGHT),
        _ => Err(ReportError::UnsupportedExtension(ext)),
    }
}

/// Bresenham 직선. 캔버스 밖의 점은 버린다.
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as u32) < img.width() && (y0 as u32) < img.height() {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiv::{evaluate, TubeInput};

    #[test]
    fn trace_pixels_are_drawn() {
        let eval = evaluate(&TubeInput::default()).unwrap();
        let img = render_series_png(&eval.series, 400, 240).unwrap();
        assert_eq!(img.dimensions(), (400, 240));
        assert!(img.pixels().any(|p| *p == TRACE));
    }

    #[test]
    fn unknown_extension_rejected() {
        let eval = evaluate(&TubeInput::default()).unwrap();
        let err = write_series(&eval.series, Path::new("series.xlsx")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedExtension(ref e) if e == "xlsx"));
    }

    #[test]
    fn tiny_canvas_rejected() {
        let eval = evaluate(&TubeInput::default()).unwrap();
        assert!(matches!(
            render_series_png(&eval.series, 50, 50),
            Err(ReportError::CanvasTooSmall { .. })
        ));
    }
}
