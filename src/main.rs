use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use parma_report::api;
use parma_report::assets::AssetLoader;
use parma_report::rendering::PngSize;
use parma_report::server;
use parma_report::services::RenderOptions;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_IMAGES_DIR: &str = "./images";

#[derive(Parser)]
#[command(name = "parma-report")]
#[command(about = "Financial accountability report for the Privada Parma community")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render the report page to an HTML file
    Render {
        /// Output HTML file path
        #[arg(short, long)]
        output: PathBuf,

        /// Embed the stylesheet and images so the file stands alone
        #[arg(long)]
        inline_css: bool,
    },
    /// Render one chart to an SVG or PNG file (format from the extension)
    Chart {
        /// Chart id: balance-income or admin-expense
        #[arg(long)]
        id: String,

        /// Output file path (.svg or .png)
        #[arg(short, long)]
        output: PathBuf,

        /// PNG width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// PNG height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract the page templates and stylesheet
        #[arg(long)]
        templates: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parma Report API",
        description = "Financial accountability report for the Privada Parma community",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_page,
        api::handle_report_json,
        api::handle_stylesheet,
        api::handle_chart,
    ),
    components(schemas(api::ErrorResponse)),
    tags(
        (name = "Report", description = "The report page and its data"),
        (name = "Charts", description = "Individual charts as SVG or PNG")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { output, inline_css }) => run_render_command(&output, inline_css),
        Some(Commands::Chart {
            id,
            output,
            width,
            height,
        }) => run_chart_command(&id, &output, width, height),
        Some(Commands::Init {
            templates,
            config,
            all,
            force,
            list,
        }) => run_init_command(templates, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parma_report=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Asset loader with optional external paths from env vars
fn asset_loader_from_env() -> AssetLoader {
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let fonts_dir = std::env::var("FONTS_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AssetLoader::new(templates_dir, fonts_dir, config_file)
}

fn images_dir_from_env() -> PathBuf {
    std::env::var("IMAGES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGES_DIR))
}

/// Seed configured-but-empty paths, logging what happened
fn seed_assets(asset_loader: &AssetLoader) {
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                templates = report.templates_seeded.len(),
                config = report.config_seeded,
                "Seeded empty directories with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }
}

/// Render the page to a file (no server needed)
fn run_render_command(output: &Path, inline_css: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let asset_loader = Arc::new(asset_loader_from_env());
    seed_assets(&asset_loader);

    let images_dir = images_dir_from_env();
    let state = server::create_app_state(asset_loader, images_dir.clone())?;

    let options = RenderOptions {
        inline_css,
        inline_images_from: inline_css.then_some(images_dir),
    };
    let rendered = state.renderer.render(&options)?;
    std::fs::write(output, &rendered.html)?;

    println!(
        "Rendered report to {} ({} bytes, etag {})",
        output.display(),
        rendered.html.len(),
        &rendered.etag[..12]
    );

    Ok(())
}

/// Render one chart to SVG or PNG
fn run_chart_command(
    id: &str,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let asset_loader = Arc::new(asset_loader_from_env());
    let state = server::create_app_state(asset_loader, images_dir_from_env())?;

    let svg = state.renderer.render_chart_svg(id)?;
    let extension = output.extension().and_then(|e| e.to_str()).unwrap_or("");

    let bytes = match extension {
        "svg" => svg.into_bytes(),
        "png" => {
            let spec = state
                .renderer
                .report()
                .chart(id)
                .ok_or_else(|| anyhow::anyhow!("Unknown chart: {id}"))?;
            let size = PngSize::new(width.unwrap_or(spec.width), height.unwrap_or(spec.height))?;
            state.rasterizer.render_png(svg.as_bytes(), size)?
        }
        other => anyhow::bail!("Unsupported output format '{other}', use .svg or .png"),
    };

    std::fs::write(output, &bytes)?;
    println!(
        "Rendered chart {id} to {} ({} bytes)",
        output.display(),
        bytes.len()
    );

    Ok(())
}

/// Extract embedded assets
fn run_init_command(
    templates: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    use parma_report::assets::AssetCategory;

    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config");
        eprintln!("\nRun 'parma-report init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = asset_loader_from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_or = |name: &str, fallback: &str| -> String {
        std::env::var(name).unwrap_or_else(|_| fallback.to_string())
    };

    println!("Parma Report v{VERSION}");
    println!("Financial accountability report for the Privada Parma community\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        env_or("BIND_ADDR", "0.0.0.0:3000 (default)")
    );
    println!("  CONFIG_FILE   = {}", env_or("CONFIG_FILE", "(not set)"));
    println!("  TEMPLATES_DIR = {}", env_or("TEMPLATES_DIR", "(not set)"));
    println!(
        "  IMAGES_DIR    = {}",
        env_or("IMAGES_DIR", "./images (default)")
    );
    println!("  FONTS_DIR     = {}", env_or("FONTS_DIR", "(not set)"));

    let loader = asset_loader_from_env();
    let templates = loader.list_templates();
    let fonts = loader.get_fonts();

    println!("\nAsset Sources:");
    println!("  Config:    {}", loader.config_source());
    println!(
        "  Templates: {} ({})",
        loader.templates_source(),
        templates.join(", ")
    );
    println!("  Fonts:     {} extra, plus system fonts", fonts.len());

    let images_dir = images_dir_from_env();
    let images_state = if images_dir.is_dir() {
        "found"
    } else {
        "missing, images will not load"
    };
    println!("  Images:    {} ({images_state})", images_dir.display());

    println!("\nCommands:");
    println!("  parma-report serve    Start the HTTP server");
    println!("  parma-report render   Render the report to an HTML file");
    println!("  parma-report chart    Render one chart to SVG or PNG");
    println!("  parma-report init     Extract embedded assets");
    println!("\nRun 'parma-report --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parma_report=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let images_dir = images_dir_from_env();
    let asset_loader = Arc::new(asset_loader_from_env());

    tracing::info!(
        templates = %asset_loader.templates_source(),
        config = %asset_loader.config_source(),
        images = %images_dir.display(),
        "Asset sources configured"
    );

    seed_assets(&asset_loader);

    let state = server::create_app_state(asset_loader, images_dir)?;

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Parma report server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
