//! Exif Extractor - print Exif metadata from JPEG files.
//!
//! Results go to stdout; logs go to stderr.

use std::fmt::{self, Write as _};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exif_extractor::{
    collect_image_paths, extract_batch, BatchSummary, Config, ImageReport, JfifHeader,
    MetadataSet, OutputFormat,
};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let paths = match collect_image_paths(&config.paths, config.recursive, &config.extensions) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("Found {} image(s)", paths.len());

    let reports = extract_batch(&paths);
    let summary = BatchSummary::from_reports(&reports);

    let rendered = match config.format {
        OutputFormat::Text => render_text(&reports).map_err(|e| e.to_string()),
        OutputFormat::Json => render_json(&reports).map_err(|e| e.to_string()),
    };
    let output = match rendered {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to render output: {}", e);
            return ExitCode::FAILURE;
        }
    };
    print!("{}", output);

    info!(
        "Decoded {} of {} image(s), {} failed",
        summary.decoded,
        summary.total(),
        summary.failed
    );

    if summary.decoded == 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Initialize the tracing subscriber on stderr. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exif_extractor=debug"
    } else {
        "exif_extractor=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// =============================================================================
// Text Output
// =============================================================================

fn render_text(reports: &[ImageReport]) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for report in reports {
        writeln!(out, "== {} ==", report.path.display())?;
        match &report.result {
            Ok(metadata) => render_metadata(&mut out, metadata)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn render_metadata(out: &mut impl fmt::Write, metadata: &MetadataSet) -> fmt::Result {
    if let Some(jfif) = metadata.jfif() {
        render_jfif(out, jfif)?;
    }

    if metadata.is_empty() {
        return writeln!(out, "(no Exif data)");
    }

    for (kind, tag) in metadata.iter() {
        let label = match tag.name {
            Some(name) => format!("0x{:04X} {}", tag.id, name),
            None => format!("0x{:04X}", tag.id),
        };
        writeln!(
            out,
            "[{}] {} ({}\u{d7}{}): {}",
            kind.name(),
            label,
            tag.field_type.name(),
            tag.count,
            tag.to_display_string()
        )?;
    }

    Ok(())
}

fn render_jfif(out: &mut impl fmt::Write, jfif: &JfifHeader) -> fmt::Result {
    write!(
        out,
        "[JFIF] version {}, density {}x{} ({:?})",
        jfif.version(),
        jfif.x_density,
        jfif.y_density,
        jfif.units
    )?;
    if jfif.has_thumbnail() {
        writeln!(
            out,
            ", thumbnail {}x{}",
            jfif.thumbnail_width, jfif.thumbnail_height
        )
    } else {
        writeln!(out, ", no thumbnail")
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a MetadataSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a ImageReport> for JsonReport<'a> {
    fn from(report: &'a ImageReport) -> Self {
        let (metadata, error) = match &report.result {
            Ok(metadata) => (Some(metadata), None),
            Err(e) => (None, Some(e.to_string())),
        };
        JsonReport {
            path: report.path.display().to_string(),
            metadata,
            error,
        }
    }
}

fn render_json(reports: &[ImageReport]) -> Result<String, serde_json::Error> {
    let entries: Vec<JsonReport<'_>> = reports.iter().map(JsonReport::from).collect();
    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

// =============================================================================
// Tests
// =============================================================================
