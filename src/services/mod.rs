pub mod renderer;
pub mod template_service;

pub use renderer::{RenderOptions, RenderedReport, ReportRenderer};
pub use template_service::{TemplateError, TemplateService};
