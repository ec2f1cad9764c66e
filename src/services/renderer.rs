use base64::Engine;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::sync::Arc;
use tera::Context;

use crate::error::RenderError;
use crate::models::{Block, ChartSpec, ChartTable, DatedRecord, ImageRef, Section};
use crate::rendering::chart::render_chart;
use crate::rendering::markdown_to_html;
use crate::report::Report;
use crate::services::TemplateService;

pub const PAGE_TEMPLATE: &str = "report.html";
pub const SECTION_TEMPLATE: &str = "section.html";
pub const STYLESHEET: &str = "report.css";

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub html: String,
    /// SHA-256 of `html`, hex encoded
    pub etag: String,
}

/// Knobs for standalone exports
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Embed the stylesheet instead of linking `/static/report.css`
    pub inline_css: bool,
    /// Embed images from this directory as data URIs instead of linking `/images/`
    pub inline_images_from: Option<PathBuf>,
}

/// One block as the section template sees it
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum BlockView {
    Html {
        html: String,
    },
    Callout {
        class: &'static str,
        icon: Option<String>,
        html: String,
    },
    Subheading {
        text: String,
    },
    Divider,
    Image(ImageView),
    Columns {
        images: Vec<ImageView>,
    },
    Chart(ChartView),
}

#[derive(Debug, Serialize)]
struct ImageView {
    src: String,
    caption: String,
}

#[derive(Debug, Serialize)]
struct ChartView {
    id: String,
    title: String,
    svg: String,
    series: Vec<String>,
    rows: Vec<ChartRow>,
}

/// One record of the data table under a chart; amounts stay raw so the
/// template formats them
#[derive(Debug, Serialize)]
struct ChartRow {
    date: String,
    values: Vec<rust_decimal::Decimal>,
}

/// Walks the report sections once and produces the page.
///
/// Holds only immutable state, so one instance serves concurrent requests.
pub struct ReportRenderer {
    report: Arc<Report>,
    templates: TemplateService,
}

impl ReportRenderer {
    pub fn new(report: Arc<Report>, templates: TemplateService) -> Self {
        Self { report, templates }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn templates(&self) -> &TemplateService {
        &self.templates
    }

    /// Render the whole page.
    pub fn render(&self, options: &RenderOptions) -> Result<RenderedReport, RenderError> {
        let mut header_html = String::new();
        let mut sections_html = Vec::with_capacity(self.report.sections.len());

        for section in &self.report.sections {
            match section {
                Section::Header { title, icon, blocks } => {
                    header_html = self.render_header(title, icon.as_deref(), blocks, options)?;
                }
                Section::Text { blocks } => {
                    sections_html.push(self.render_text(blocks, options)?);
                }
                Section::Collapsible {
                    title,
                    expanded,
                    blocks,
                } => {
                    sections_html.push(self.render_section(title, *expanded, blocks, options)?);
                }
            }
        }

        let page = &self.report.page;
        let mut context = Context::new();
        context.insert("page", page);
        context.insert("layout_class", page.layout.css_class());
        context.insert("favicon", &emoji_favicon(&page.icon));
        context.insert("header", &header_html);
        context.insert("sections", &sections_html);
        if options.inline_css {
            context.insert("inline_css", &self.templates.read_raw(STYLESHEET)?);
        }

        let html = self.templates.render(PAGE_TEMPLATE, &context)?;
        let etag = hex::encode(Sha256::digest(html.as_bytes()));

        tracing::debug!(
            sections = self.report.sections.len(),
            bytes = html.len(),
            etag = %etag,
            "Rendered report"
        );

        Ok(RenderedReport { html, etag })
    }

    /// Title and introduction at the top of the page.
    pub fn render_header(
        &self,
        title: &str,
        icon: Option<&str>,
        blocks: &[Block],
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("kind", "header");
        context.insert("title", title);
        context.insert("icon", &icon);
        context.insert("blocks", &self.block_views(blocks, options)?);
        Ok(self.templates.render(SECTION_TEMPLATE, &context)?)
    }

    /// A labeled block that opens and closes on its own. The body is always
    /// emitted in full; `expanded` only sets the initial state.
    pub fn render_section(
        &self,
        title: &str,
        expanded: bool,
        blocks: &[Block],
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("kind", "collapsible");
        context.insert("title", title);
        context.insert("expanded", &expanded);
        context.insert("blocks", &self.block_views(blocks, options)?);
        Ok(self.templates.render(SECTION_TEMPLATE, &context)?)
    }

    fn render_text(&self, blocks: &[Block], options: &RenderOptions) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("kind", "text");
        context.insert("blocks", &self.block_views(blocks, options)?);
        Ok(self.templates.render(SECTION_TEMPLATE, &context)?)
    }

    /// SVG of one chart by id.
    pub fn render_chart_svg(&self, id: &str) -> Result<String, RenderError> {
        let spec = self
            .report
            .chart(id)
            .ok_or_else(|| RenderError::UnknownChart(id.to_string()))?;
        Ok(render_chart(&self.report.tables, spec)?.into_svg())
    }

    fn block_views(
        &self,
        blocks: &[Block],
        options: &RenderOptions,
    ) -> Result<Vec<BlockView>, RenderError> {
        blocks
            .iter()
            .map(|block| {
                Ok(match block {
                    Block::Markdown { text } => BlockView::Html {
                        html: markdown_to_html(text),
                    },
                    Block::Callout { level, icon, text } => BlockView::Callout {
                        class: level.css_class(),
                        icon: icon.clone(),
                        html: markdown_to_html(text),
                    },
                    Block::Subheading { text } => BlockView::Subheading { text: text.clone() },
                    Block::Divider => BlockView::Divider,
                    Block::Image(image) => BlockView::Image(image_view(image, options)),
                    Block::Columns { images } => BlockView::Columns {
                        images: images.iter().map(|i| image_view(i, options)).collect(),
                    },
                    Block::Chart(spec) => BlockView::Chart(self.chart_view(spec)?),
                })
            })
            .collect()
    }

    fn chart_view(&self, spec: &ChartSpec) -> Result<ChartView, RenderError> {
        let chart = render_chart(&self.report.tables, spec)?;
        let rows = match spec.table {
            ChartTable::Balance => chart_rows(&self.report.tables.balance, spec),
            ChartTable::AdminExpense => chart_rows(&self.report.tables.admin_expense, spec),
        };
        Ok(ChartView {
            id: spec.id.clone(),
            title: spec.title.clone(),
            svg: chart.into_svg(),
            series: spec.series.iter().map(|s| s.name.clone()).collect(),
            rows,
        })
    }
}

fn chart_rows<R: DatedRecord>(records: &[R], spec: &ChartSpec) -> Vec<ChartRow> {
    records
        .iter()
        .map(|record| ChartRow {
            date: record.report_date().format("%d/%m/%Y").to_string(),
            values: spec
                .series
                .iter()
                .filter_map(|s| record.value(s.field))
                .collect(),
        })
        .collect()
}

fn image_view(image: &ImageRef, options: &RenderOptions) -> ImageView {
    // Pasted into the template unescaped
    let linked = format!("/images/{}", escape_xml(&image.file));
    let src = match options.inline_images_from {
        Some(ref dir) => match std::fs::read(dir.join(&image.file)) {
            Ok(bytes) => format!(
                "data:{};base64,{}",
                image.mime_type(),
                base64::engine::general_purpose::STANDARD.encode(bytes)
            ),
            Err(e) => {
                tracing::warn!(file = %image.file, error = %e, "Image not found, linking instead");
                linked
            }
        },
        None => linked,
    };
    ImageView {
        src,
        caption: image.caption.clone(),
    }
}

/// Escape text for an XML or HTML attribute or text node.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Tab icon: the configured emoji drawn into a tiny SVG.
fn emoji_favicon(icon: &str) -> String {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">{}</text></svg>"#,
        escape_xml(icon)
    );
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}
