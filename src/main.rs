//! cvgen CLI
//!
//! Usage:
//!   cvgen [OPTIONS]
//!
//! Options:
//!   --cv <PATH>        CV YAML file (default: cv.yaml)
//!   --template <PATH>  HTML template file (default: template.html)
//!   --theme <PATH>     Theme YAML file (default: theme.yaml)
//!   --output <PATH>    Output HTML file (default: index.html)

use std::path::PathBuf;
use std::process;

use clap::Parser;

use cvgen::{load_template, load_theme, load_yaml, render, write_output, BuildError};

#[derive(Parser)]
#[command(name = "cvgen")]
#[command(about = "Build a single-page CV site from YAML data and an HTML template")]
#[command(after_help = "Examples:
  cvgen
  cvgen --cv my_cv.yaml
  cvgen --template custom_template.html --theme dark_theme.yaml
  cvgen --cv my_cv.yaml --output my_cv.html")]
struct Cli {
    /// Path to the CV YAML file
    #[arg(long, default_value = "cv.yaml")]
    cv: PathBuf,

    /// Path to the HTML template file
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Path to the theme YAML file (theming is skipped if the file is absent)
    #[arg(long, default_value = "theme.yaml")]
    theme: PathBuf,

    /// Path to the output HTML file
    #[arg(long, default_value = "index.html")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    println!("Building CV site...");

    println!("  Reading CV data from {}...", cli.cv.display());
    let cv = match load_yaml(&cli.cv) {
        Ok(cv) => cv,
        Err(e) => fail(e),
    };

    println!("  Reading template from {}...", cli.template.display());
    let template = match load_template(&cli.template) {
        Ok(template) => template,
        Err(e) => fail(e),
    };

    let theme = if cli.theme.exists() {
        println!("  Applying theme from {}...", cli.theme.display());
        match load_theme(&cli.theme) {
            Ok(theme) => Some(theme),
            Err(e) => fail(e),
        }
    } else {
        println!(
            "  Note: theme file {} not found, using template defaults",
            cli.theme.display()
        );
        None
    };

    let html = render(&template, &cv, theme.as_ref());

    println!("  Writing output to {}...", cli.output.display());
    if let Err(e) = write_output(&cli.output, &html) {
        fail(e);
    }

    println!(
        "✓ Build complete! Open {} in your browser to view your CV.",
        cli.output.display()
    );
}

fn fail(err: BuildError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}
