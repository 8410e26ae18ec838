//! lamina - Cascade-layer stylesheet generator

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use lamina::manifest::Manifest;
use lamina::{HtmlIndex, Registry};

#[derive(Parser)]
#[command(name = "lamina")]
#[command(version, about = "Cascade-layer stylesheet generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    lamina rules.json page.html page.css    Write the stylesheet to page.css
    lamina rules.json page.html             Print the stylesheet to stdout
    lamina -c rules.json page.html          Validate without writing anything")]
struct Cli {
    /// Rule manifest (JSON)
    #[arg(value_name = "MANIFEST")]
    manifest: String,

    /// Document the rules target (XHTML)
    #[arg(value_name = "HTML")]
    html: String,

    /// Output stylesheet (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Validate the manifest against the document without writing output
    #[arg(short, long)]
    check: bool,

    /// Suppress the summary message
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = fs::read_to_string(&cli.manifest).map_err(|e| format!("{}: {e}", cli.manifest))?;
    let manifest = Manifest::from_json(&json).map_err(|e| format!("{}: {e}", cli.manifest))?;
    let document = HtmlIndex::from_file(&cli.html).map_err(|e| format!("{}: {e}", cli.html))?;

    let mut registry = Registry::new(document);
    registry.begin().map_err(|e| e.to_string())?;
    manifest.apply(&mut registry).map_err(|e| e.to_string())?;
    let sheet = registry.build().map_err(|e| e.to_string())?;

    if cli.check {
        if !cli.quiet {
            println!(
                "ok: {} rule(s) in {} layer(s)",
                sheet.rules.len(),
                sheet.layers.len()
            );
        }
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, sheet.text()).map_err(|e| format!("{path}: {e}"))?;
            if !cli.quiet {
                println!(
                    "Wrote {} rule(s) in {} layer(s) to {path}",
                    sheet.rules.len(),
                    sheet.layers.len()
                );
            }
        }
        None => print!("{sheet}"),
    }

    Ok(())
}
