//! textdoc CLI - document conversion tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use textdoc::{
    detect_format, DocumentParser, ImagePolicy, InputFormat, JsonFormat, ParsedDocument,
    ParsingOptions, PartialMetadata, RenderOptions,
};

#[derive(Parser)]
#[command(name = "textdoc")]
#[command(version)]
#[command(about = "Convert markup, JSON and plain text documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it as markup
    #[command(alias = "md")]
    Markdown {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit images as links instead of omitting them
        #[arg(long)]
        images: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Parse a document and print it as JSON
    Json {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Parse a document and print its plain text
    Text {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the detected input format
    Detect {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Strictly validate a JSON document
    Validate {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document information
    Info {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Parsing flags shared by the converting commands.
#[derive(Args)]
struct ParseArgs {
    /// Document title (overrides the detected one)
    #[arg(long, env = "TEXTDOC_TITLE")]
    title: Option<String>,

    /// Treat pipe-delimited lines as text
    #[arg(long)]
    no_tables: bool,

    /// Treat list items as text
    #[arg(long)]
    no_lists: bool,

    /// Remove bold, italic and code markers from content
    #[arg(long)]
    strip_formatting: bool,
}

impl ParseArgs {
    fn options(&self) -> ParsingOptions {
        ParsingOptions::new()
            .with_tables(!self.no_tables)
            .with_lists(!self.no_lists)
            .with_preserve_formatting(!self.strip_formatting)
    }

    fn metadata(&self) -> Option<PartialMetadata> {
        self.title
            .as_ref()
            .map(|title| PartialMetadata::new().with_title(title.clone()))
    }

    fn parse(&self, text: &str) -> ParsedDocument {
        DocumentParser::with_options(self.options()).parse(text, self.metadata().as_ref())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Markdown {
            input,
            output,
            images,
            parse,
        } => cmd_markdown(&input, output.as_deref(), images, &parse),
        Commands::Json {
            input,
            output,
            compact,
            parse,
        } => cmd_json(&input, output.as_deref(), compact, &parse),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Detect { input } => cmd_detect(&input),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    images: bool,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse.parse(&text);

    let policy = if images {
        ImagePolicy::Link
    } else {
        ImagePolicy::Omit
    };
    let render_options = RenderOptions::new().with_image_policy(policy);
    let markup = textdoc::render::to_markup_with_options(&doc, &render_options);

    write_output(output, &markup)?;
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse.parse(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = textdoc::render::to_json(&doc, format)?;

    write_output(output, &json)?;
    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = textdoc::parse(&text, None);

    write_output(output, &doc.plain_text())?;
    Ok(())
}

fn cmd_detect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let format = detect_format(&text);
    println!("{}", format);

    if format == InputFormat::Markup {
        let found: Vec<String> = textdoc::detect::markup_indicators(&text)
            .iter()
            .map(|indicator| format!("{:?}", indicator))
            .collect();
        log::debug!("markup indicators: {}", found.join(", "));
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = textdoc::parse_structured(&text)?;

    println!(
        "{} {} ({} elements)",
        "Valid".green().bold(),
        doc.title(),
        doc.len()
    );
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let format = detect_format(&text);
    let doc = textdoc::parse(&text, None);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Title".bold(), doc.metadata.title);

    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = doc.metadata.keywords {
        println!("{}: {}", "Keywords".bold(), keywords.join(", "));
    }
    if let Some(ref created) = doc.metadata.created_at {
        println!("{}: {}", "Created".bold(), created.to_rfc3339());
    }
    if let Some(ref language) = doc.metadata.language {
        println!("{}: {}", "Language".bold(), language);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let count = |kind: &str| doc.elements.iter().filter(|e| e.kind() == kind).count();
    let text = doc.plain_text();

    println!("{}: {}", "Elements".bold(), doc.len());
    println!("{}: {}", "Headers".bold(), count("header"));
    println!("{}: {}", "Paragraphs".bold(), count("text"));
    println!("{}: {}", "Lists".bold(), count("list"));
    println!("{}: {}", "Tables".bold(), count("table"));
    println!("{}: {}", "Images".bold(), count("image"));
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "textdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markup, JSON and plain text document converter");
    println!();
    println!("License: MIT");
}
