//! contour - Document outline inference

use std::process::ExitCode;

use clap::Parser;

use contour::{NoConverter, Section, convert_named};

#[derive(Parser)]
#[command(name = "contour")]
#[command(version, about = "Infer a navigable outline from structured markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    contour report.xml           Print the inferred outline
    contour report.xml --json    Emit the full converted document as JSON")]
struct Cli {
    /// Input file (.xml; .docx requires an external converter)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Emit the converted document (markup, outline, title) as JSON
    #[arg(long)]
    json: bool,

    /// Only print the document title
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> contour::Result<()> {
    let bytes = std::fs::read(&cli.input)?;
    let doc = convert_named(&cli.input, &bytes, &NoConverter)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&doc).expect("document serializes")
        );
        return Ok(());
    }

    println!("Title: {}", doc.title);

    if !cli.quiet {
        println!("Sections: {}", count_sections(&doc.outline));
        print_outline(&doc.outline, 0);

        for diagnostic in &doc.diagnostics {
            eprintln!("{:?}: {}", diagnostic.level, diagnostic.message);
        }
    }

    Ok(())
}

fn count_sections(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|s| 1 + count_sections(&s.children))
        .sum()
}

fn print_outline(sections: &[Section], depth: usize) {
    for section in sections {
        println!("{}- {} (#{})", "  ".repeat(depth), section.title, section.id);
        print_outline(&section.children, depth + 1);
    }
}
