//! PDF payslips drawn with `printpdf`.
//!
//! Coordinates are PDF points from the bottom-left corner of a US Letter page.

use crate::domain::payslip::Payslip;
use crate::domain::ports::PayslipRenderer;
use crate::error::{PayrollError, Result};
use printpdf::path::PaintMode;
use printpdf::*;
use std::fs;
use std::path::PathBuf;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

const BRAND_GREEN: (f32, f32, f32) = (0x4C as f32 / 255.0, 0xAF as f32 / 255.0, 0x50 as f32 / 255.0);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);

const TABLE_X: f32 = 40.0;
const TABLE_TOP: f32 = 660.0;
const COLUMN_WIDTHS: [f32; 2] = [300.0, 150.0];
const HEADER_ROW_HEIGHT: f32 = 36.0;
const BODY_ROW_HEIGHT: f32 = 18.0;
const TABLE_FONT_SIZE: f32 = 10.0;

pub const TABLE_HEADER: [&str; 2] = ["Description", "Amount"];

/// Fixed wording of the payslip.
#[derive(Debug, Clone, PartialEq)]
pub struct PayslipTemplate {
    pub title: String,
    pub footer: String,
}

impl Default for PayslipTemplate {
    fn default() -> Self {
        Self {
            title: "PAYSLIP".to_string(),
            footer: "For queries, contact Payroll Team at payroll@tmmotors.com".to_string(),
        }
    }
}

impl PayslipTemplate {
    /// Body rows of the amount table as (label, formatted amount).
    pub fn rows(payslip: &Payslip) -> [(&'static str, String); 4] {
        let record = &payslip.record;
        [
            ("Basic Pay", record.basic_pay.to_string()),
            ("Allowances", record.allowance.to_string()),
            ("Deductions", record.deductions.to_string()),
            ("Net Salary", payslip.net.to_string()),
        ]
    }
}

/// `<employee id>_payslip.pdf`, with path separators in the id replaced.
pub fn payslip_file_name(employee_id: &str) -> String {
    let safe: String = employee_id
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_payslip.pdf")
}

/// Writes one PDF per payslip into a fixed output directory.
///
/// The file name depends only on the employee id, so re-rendering a payslip
/// overwrites the previous document instead of adding a second one.
#[derive(Debug, Clone)]
pub struct PdfPayslipRenderer {
    output_dir: PathBuf,
    template: PayslipTemplate,
}

impl PdfPayslipRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            template: PayslipTemplate::default(),
        }
    }

    pub fn document_path(&self, employee_id: &str) -> PathBuf {
        self.output_dir.join(payslip_file_name(employee_id))
    }

    pub fn render_bytes(&self, payslip: &Payslip) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            format!("Payslip {}", payslip.employee_id()),
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            "Payslip",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;

        let canvas = Canvas {
            layer: doc.get_page(page).get_layer(layer),
            regular,
            bold,
        };
        self.draw(&canvas, payslip);

        doc.save_to_bytes().map_err(render_error)
    }

    fn draw(&self, canvas: &Canvas, payslip: &Payslip) {
        let record = &payslip.record;

        // Page border
        canvas.rect(10.0, 10.0, 580.0, 770.0, PaintMode::Stroke, BLACK, 2.0);

        // Header band
        canvas.fill_color(BRAND_GREEN);
        canvas.rect(10.0, 730.0, 580.0, 40.0, PaintMode::Fill, BRAND_GREEN, 0.0);
        canvas.fill_color(WHITE);
        canvas.text(&self.template.title, 18.0, 20.0, 745.0, true);

        // Identity block
        canvas.fill_color(BLACK);
        canvas.text(&format!("Employee ID: {}", record.employee_id), 12.0, 20.0, 700.0, true);
        canvas.text(&format!("Name: {}", record.name), 12.0, 150.0, 700.0, false);
        canvas.text(&format!("Email: {}", record.email), 12.0, 20.0, 680.0, false);

        self.draw_table(canvas, payslip);

        canvas.fill_color(BRAND_GREEN);
        canvas.text(&self.template.footer, 10.0, 20.0, 30.0, false);
    }

    fn draw_table(&self, canvas: &Canvas, payslip: &Payslip) {
        let header_bottom = TABLE_TOP - HEADER_ROW_HEIGHT;
        let mut x = TABLE_X;
        for (width, label) in COLUMN_WIDTHS.iter().zip(TABLE_HEADER) {
            canvas.fill_color(BRAND_GREEN);
            canvas.rect(x, header_bottom, *width, HEADER_ROW_HEIGHT, PaintMode::FillStroke, BLACK, 1.0);
            canvas.fill_color(WHITE);
            canvas.centered_text(label, x, header_bottom, *width, HEADER_ROW_HEIGHT, true);
            x += width;
        }

        canvas.fill_color(BLACK);
        let mut row_bottom = header_bottom;
        for (label, amount) in PayslipTemplate::rows(payslip) {
            row_bottom -= BODY_ROW_HEIGHT;
            let mut x = TABLE_X;
            for (width, cell) in COLUMN_WIDTHS.iter().zip([label, amount.as_str()]) {
                canvas.rect(x, row_bottom, *width, BODY_ROW_HEIGHT, PaintMode::Stroke, BLACK, 1.0);
                canvas.centered_text(cell, x, row_bottom, *width, BODY_ROW_HEIGHT, false);
                x += width;
            }
        }
    }
}

impl PayslipRenderer for PdfPayslipRenderer {
    fn render(&self, payslip: &Payslip) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.document_path(payslip.employee_id());
        let bytes = self.render_bytes(payslip)?;
        fs::write(&path, bytes)?;

        tracing::debug!(
            employee_id = %payslip.employee_id(),
            path = %path.display(),
            "payslip rendered"
        );
        Ok(path)
    }
}

fn render_error(e: impl std::fmt::Display) -> PayrollError {
    PayrollError::Render(e.to_string())
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

struct Canvas {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Canvas {
    fn fill_color(&self, color: (f32, f32, f32)) {
        self.layer.set_fill_color(rgb(color));
    }

    #[allow(clippy::too_many_arguments)]
    fn rect(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mode: PaintMode,
        outline: (f32, f32, f32),
        thickness: f32,
    ) {
        self.layer.set_outline_color(rgb(outline));
        self.layer.set_outline_thickness(thickness);
        let rect = Rect::new(pt(x), pt(y), pt(x + width), pt(y + height)).with_mode(mode);
        self.layer.add_rect(rect);
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, pt(x), pt(y), font);
    }

    /// Builtin fonts carry no metrics here, so the width is an average-glyph estimate.
    fn centered_text(&self, text: &str, x: f32, y: f32, width: f32, height: f32, bold: bool) {
        let estimated = text.chars().count() as f32 * TABLE_FONT_SIZE * 0.5;
        let left = x + ((width - estimated) / 2.0).max(2.0);
        let baseline = y + (height - TABLE_FONT_SIZE * 0.7) / 2.0;
        self.text(text, TABLE_FONT_SIZE, left, baseline, bold);
    }
}
