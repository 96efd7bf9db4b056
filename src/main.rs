use clap::{Parser, Subcommand};
use czml::{CzmlWidget, Dump, Encoder, EncoderOptions, WidgetConfig, scenarios};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Build CZML documents and preview them in CesiumJS.
#[derive(Parser, Debug)]
#[command(name = "czml")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sample "simple" scene
    Simple {
        /// Indent the output with four spaces
        #[arg(short, long)]
        pretty: bool,
    },

    /// Wrap a CZML file into an HTML page showing it in CesiumJS
    Html {
        /// CZML file to embed
        file: PathBuf,

        /// JSON file with viewer settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// CSS height of the viewer, overrides the configuration
        #[arg(long)]
        height: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Simple { pretty } => print_simple(pretty),
        Commands::Html {
            file,
            config,
            height,
        } => print_html(&file, config.as_deref(), height),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn print_simple(pretty: bool) -> Result<(), String> {
    let document = scenarios::simple().map_err(|e| format!("building the scene: {}", e))?;
    let options = if pretty {
        EncoderOptions::pretty(4)
    } else {
        EncoderOptions::compact()
    };
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    Encoder::new(options)
        .to_writer(&mut handle, &document)
        .map_err(|e| format!("writing the scene: {}", e))?;
    writeln!(handle).map_err(|e| e.to_string())
}

fn print_html(file: &Path, config: Option<&Path>, height: Option<String>) -> Result<(), String> {
    let czml = fs::read_to_string(file)
        .map_err(|e| format!("reading {}: {}", file.display(), e))?;
    let value: serde_json::Value = serde_json::from_str(&czml)
        .map_err(|e| format!("{} is not valid JSON: {}", file.display(), e))?;
    debug!(path = %file.display(), bytes = czml.len(), "read CZML input");

    let mut config = match config {
        Some(path) => read_config(path)?,
        None => WidgetConfig::default(),
    };
    if let Some(height) = height {
        config.height = height;
    }

    let compact = value.dumps().map_err(|e| e.to_string())?;
    let widget = CzmlWidget::new(compact, config);
    info!(container_id = widget.container_id(), "rendering widget");
    println!("{}", page(&widget.to_html()));
    Ok(())
}

fn read_config(path: &Path) -> Result<WidgetConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("reading {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid configuration {}: {}", path.display(), e))
}

fn page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<script src="https://cdnjs.cloudflare.com/ajax/libs/require.js/2.3.6/require.min.js"></script>
</head>
<body>{}
</body>
</html>"#,
        fragment
    )
}
