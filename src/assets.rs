//! Report assets: page templates, stylesheet, config and extra fonts.
//!
//! Templates and config are compiled in. Setting `TEMPLATES_DIR` or
//! `CONFIG_FILE` layers a filesystem copy over them:
//!
//! - path not configured: embedded copy only, the filesystem is never touched
//! - path configured but empty or missing: seeded from the embedded copy at startup
//! - path configured with files: those files win, anything missing falls back
//!
//! Fonts are never embedded; `FONTS_DIR` only adds to the system fonts.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_NAME: &str = "config.yaml";
const TEMPLATE_EXTENSIONS: &[&str] = &["html", "css"];
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
#[include = "*.css"]
struct EmbeddedTemplates;

#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Which embedded assets an `init` run extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Templates,
    Config,
}

/// What startup seeding wrote
#[derive(Debug, Default)]
pub struct SeedReport {
    pub templates_seeded: Vec<String>,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.templates_seeded.is_empty() && !self.config_seeded
    }
}

/// Files written and left alone by `init`
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Resolves assets against the optional filesystem overrides
pub struct AssetLoader {
    templates_dir: Option<PathBuf>,
    fonts_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.contains(&ext))
}

fn not_found(what: String) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, what)
}

fn into_utf8(bytes: Cow<'static, [u8]>) -> io::Result<String> {
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// A directory counts as unpopulated when it is missing or holds nothing but `.gitkeep`.
fn is_unpopulated(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(mut entries) => entries.all(|entry| {
            entry
                .map(|e| e.file_name() == ".gitkeep")
                .unwrap_or(false)
        }),
        Err(_) => !dir.exists(),
    }
}

/// Embedded template names in sorted order
fn embedded_template_names() -> Vec<String> {
    let names: BTreeSet<String> = EmbeddedTemplates::iter().map(|s| s.into_owned()).collect();
    names.into_iter().collect()
}

fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
    EmbeddedConfig::get(CONFIG_NAME)
        .map(|f| f.data)
        .ok_or_else(|| not_found(format!("embedded {CONFIG_NAME} missing")))
}

/// Write `data` to `path` unless it exists and `force` is off.
fn extract(path: &Path, data: &[u8], force: bool, report: &mut InitReport) -> io::Result<()> {
    let shown = path.display().to_string();
    if path.exists() && !force {
        report.skipped.push(shown);
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;
    report.written.push(shown);
    Ok(())
}

impl AssetLoader {
    /// Paths are `Some` only when the matching env var was set.
    pub fn new(
        templates_dir: Option<PathBuf>,
        fonts_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> Self {
        Self {
            templates_dir,
            fonts_dir,
            config_file,
        }
    }

    /// Bytes of a template or stylesheet, filesystem override first.
    pub fn read_template(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.templates_dir.as_ref().map(|dir| dir.join(name)) {
            if path.is_file() {
                tracing::trace!(path = %path.display(), "Template from filesystem");
                return fs::read(&path).map(Cow::Owned);
            }
        }

        let file = EmbeddedTemplates::get(name)
            .ok_or_else(|| not_found(format!("Template not found: {name}")))?;
        tracing::trace!(template = %name, "Template from embedded assets");
        Ok(file.data)
    }

    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        into_utf8(self.read_template(name)?)
    }

    /// Every template name visible through the overlay, sorted
    pub fn list_templates(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = embedded_template_names().into_iter().collect();

        let overrides = self
            .templates_dir
            .as_deref()
            .and_then(|dir| fs::read_dir(dir).ok())
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| has_extension(path, TEMPLATE_EXTENSIONS))
            .filter_map(|path| Some(path.file_name()?.to_str()?.to_string()));
        names.extend(overrides);

        names.into_iter().collect()
    }

    /// Font files from `FONTS_DIR`, sorted by file name
    pub fn get_fonts(&self) -> Vec<(String, Cow<'static, [u8]>)> {
        let Some(dir) = self.fonts_dir.as_deref() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::warn!(dir = %dir.display(), "Fonts directory unreadable");
            return Vec::new();
        };

        let mut fonts: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| has_extension(path, FONT_EXTENSIONS))
            .filter_map(|path| {
                let data = fs::read(&path).ok()?;
                let name = path.file_name()?.to_string_lossy().into_owned();
                tracing::trace!(font = %name, "Font from filesystem");
                Some((name, Cow::Owned(data)))
            })
            .collect();
        fonts.sort_by(|a, b| a.0.cmp(&b.0));
        fonts
    }

    /// Config bytes, the external file when it exists.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        match self.config_file.as_deref() {
            Some(path) if path.is_file() => {
                tracing::trace!(path = %path.display(), "Config from filesystem");
                fs::read(path).map(Cow::Owned)
            }
            _ => embedded_config(),
        }
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        into_utf8(self.read_config()?)
    }

    /// Where templates come from, for the status screen
    pub fn templates_source(&self) -> String {
        match self.templates_dir.as_deref() {
            Some(dir) => format!("{} (embedded fallback)", dir.display()),
            None => "embedded".to_string(),
        }
    }

    /// Where the config comes from, for the status screen
    pub fn config_source(&self) -> String {
        match self.config_file.as_deref() {
            Some(path) if path.is_file() => path.display().to_string(),
            Some(path) => format!("{} (missing, using embedded)", path.display()),
            None => "embedded".to_string(),
        }
    }

    /// Populate configured paths that are still empty.
    ///
    /// Unconfigured paths are left alone.
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(dir) = self.templates_dir.as_deref().filter(|d| is_unpopulated(d)) {
            fs::create_dir_all(dir)?;
            for name in embedded_template_names() {
                if let Some(file) = EmbeddedTemplates::get(&name) {
                    fs::write(dir.join(&name), &*file.data)?;
                    report.templates_seeded.push(name);
                }
            }
            tracing::info!(
                dir = %dir.display(),
                count = report.templates_seeded.len(),
                "Seeded templates directory"
            );
        }

        if let Some(path) = self.config_file.as_deref().filter(|p| !p.exists()) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &*embedded_config()?)?;
            report.config_seeded = true;
            tracing::info!(path = %path.display(), "Seeded config file");
        }

        Ok(report)
    }

    /// Copy embedded assets out for editing (`init` command).
    ///
    /// Without a configured path, extracts next to the working directory.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Templates => {
                    let dir = self
                        .templates_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./templates"));
                    for name in embedded_template_names() {
                        if let Some(file) = EmbeddedTemplates::get(&name) {
                            extract(&dir.join(&name), &file.data, force, &mut report)?;
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(format!("./{CONFIG_NAME}")));
                    extract(&path, &embedded_config()?, force, &mut report)?;
                }
            }
        }

        Ok(report)
    }

    /// Embedded asset names for `init --list`
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Templates => embedded_template_names(),
            AssetCategory::Config => vec![CONFIG_NAME.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_present() {
        let loader = AssetLoader::new(None, None, None);
        assert_eq!(
            loader.list_templates(),
            vec!["report.css", "report.html", "section.html"]
        );
        assert!(loader
            .read_template_string("report.html")
            .unwrap()
            .contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let loader = AssetLoader::new(None, None, None);
        let err = loader.read_template("nope.html").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_override_falls_back_per_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("report.css"), "body{}").unwrap();
        fs::write(dir.path().join("extra.html"), "<p></p>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None, None);

        assert_eq!(loader.read_template_string("report.css").unwrap(), "body{}");
        assert!(loader
            .read_template_string("section.html")
            .unwrap()
            .contains("section"));
        assert_eq!(
            loader.list_templates(),
            vec!["extra.html", "report.css", "report.html", "section.html"]
        );
    }

    #[test]
    fn test_fonts_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.ttf"), b"b").unwrap();
        fs::write(dir.path().join("a.otf"), b"a").unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        let loader = AssetLoader::new(None, Some(dir.path().to_path_buf()), None);

        let names: Vec<_> = loader.get_fonts().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a.otf", "b.ttf"]);
    }

    #[test]
    fn test_gitkeep_only_dir_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitkeep"), "").unwrap();
        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None, None);

        let report = loader.seed_if_configured().unwrap();
        assert_eq!(report.templates_seeded.len(), 3);
    }
}
