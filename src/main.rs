//! CLI entry point for observer-demo
//!
//! Launches the GUI by default, and offers a few commands for checking
//! image assets and the image fit rule without opening a window.

use clap::{Parser, Subcommand};
use colored::*;
use observer_demo::{
    config::Settings,
    core::{
        fit::SIDE_PANEL_FOOTPRINT, fit_image, AssetResolver, FitDecision, ModelState, Size,
    },
    logging::init_logging,
    ui::App,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "observer-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory whose <key>.png files replace the bundled images
    #[arg(short, long, global = true)]
    images_dir: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI (default)
    Gui,

    /// Check that every image choice resolves to an image
    Assets,

    /// Show which axis an image is fitted by for a given window size
    Fit {
        /// Container width
        #[arg(long)]
        width: f64,
        /// Container height
        #[arg(long)]
        height: f64,
        /// Image aspect ratio (width / height)
        #[arg(long)]
        aspect: f64,
        /// Side panel width, margins included
        #[arg(long, default_value_t = SIDE_PANEL_FOOTPRINT)]
        panel: f64,
    },

    /// Print the initial model state as JSON
    State,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose { "debug" } else { "info" })?;

    let settings = Settings::resolve(cli.config.as_deref(), cli.images_dir.as_deref())?;

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(settings)?,
        Commands::Assets => check_assets(&settings)?,
        Commands::Fit {
            width,
            height,
            aspect,
            panel,
        } => show_fit(Size::new(width, height), panel, aspect),
        Commands::State => print_state()?,
    }

    Ok(())
}

/// Runs the GTK application until the window closes
fn run_gui(settings: Settings) -> anyhow::Result<()> {
    let exit_code = App::new(settings).run();

    if exit_code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GUI exited with {:?}", exit_code);
    }
    Ok(())
}

/// Lists every image choice and where its image comes from
fn check_assets(settings: &Settings) -> anyhow::Result<()> {
    let resolver = AssetResolver::with_images_dir(settings.images_dir.clone());

    match resolver.images_dir() {
        Some(dir) => println!(
            "{} Checking images in: {} (bundled fallback)\n",
            "→".cyan(),
            dir.display()
        ),
        None => println!("{} Checking bundled images\n", "→".cyan()),
    }

    let report = resolver.check_all();
    let missing = report.iter().filter(|(_, result)| result.is_err()).count();

    for (choice, result) in &report {
        match result {
            Ok(source) => println!("  {} {} → {}", "✓".green(), choice.label().bold(), source),
            Err(e) => println!("  {} {} → {}", "✗".red(), choice.label().bold(), e),
        }
    }

    if missing == 0 {
        println!("\n{} All {} images found", "✓".green().bold(), report.len());
        Ok(())
    } else {
        println!(
            "\n{}",
            format!(
                "⚠ {} image{} missing; a placeholder will be shown",
                missing,
                if missing == 1 { "" } else { "s" }
            )
            .yellow()
        );
        std::process::exit(1);
    }
}

/// Prints the fit decision for a container
fn show_fit(container: Size, panel_width: f64, aspect_ratio: f64) {
    let decision = fit_image(container, panel_width, aspect_ratio);

    println!(
        "{} container {}x{}, panel {}, aspect {}",
        "→".cyan(),
        container.width,
        container.height,
        panel_width,
        aspect_ratio
    );

    match decision {
        FitDecision::Height(height) => {
            println!("{} fit by height: {}", "✓".green(), height.to_string().bold())
        }
        FitDecision::Width(width) => {
            println!("{} fit by width: {}", "✓".green(), width.to_string().bold())
        }
    }
}

/// Prints the default model state
fn print_state() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&ModelState::default())?;
    println!("{}", json);
    Ok(())
}
