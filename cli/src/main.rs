//! repdf CLI - rewrite a document with a hosted text model and rebuild it as PDF

mod gemini;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use repdf::render::{serialize, to_json, DEFAULT_TEMPLATE_FILE};
use repdf::{
    extract_text, CleanupPreset, JsonFormat, ListNumbering, PageSize, ParseOptions,
    PassthroughEditor, PromptTemplate, RenderOptions, Repdf,
};

use gemini::{GeminiEditor, DEFAULT_MODEL};

#[derive(Parser, Debug)]
#[command(name = "repdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Rewrite a PDF or text file with a hosted model, keeping headings and lists",
    long_about = None
)]
struct Cli {
    /// Input PDF or text file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF file
    #[arg(value_name = "OUTPUT", required_unless_present = "analyze_only")]
    output: Option<PathBuf>,

    /// What to do with the text (e.g. "translate to French")
    #[arg(
        value_name = "REQUEST",
        required_unless_present_any = ["analyze_only", "no_edit"]
    )]
    request: Option<String>,

    /// API key for the hosted model
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Prompt template file (defaults to ./gemini_prompt_template.txt when present)
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Text cleanup preset applied before analysis
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    /// Output page size
    #[arg(long, value_enum, default_value = "letter")]
    page_size: PageSizeArg,

    /// Label list items with the numbers written in the text instead of 1, 2, 3
    #[arg(long)]
    source_numbers: bool,

    /// Render short all-caps paragraphs as headings
    #[arg(long)]
    implicit_headings: bool,

    /// Document title (defaults to the input file name)
    #[arg(long)]
    title: Option<String>,

    /// Print the structure analysis and exit
    #[arg(long)]
    analyze_only: bool,

    /// Print the analysis as JSON (with --analyze-only)
    #[arg(long, requires = "analyze_only")]
    json: bool,

    /// Skip the hosted model and render the extracted text as-is
    #[arg(long)]
    no_edit: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (ligatures, page numbers, hyphenation)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PageSizeArg {
    /// US Letter (8.5 x 11 in)
    Letter,
    /// ISO A4 (210 x 297 mm)
    A4,
}

impl From<PageSizeArg> for PageSize {
    fn from(size: PageSizeArg) -> Self {
        match size {
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::A4 => PageSize::A4,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !cli.input.exists() {
        eprintln!(
            "{}: {} not found",
            "Error".red().bold(),
            cli.input.display()
        );
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Extracting text...");
    let text = extract_text(&cli.input)?;

    let repdf = Repdf::new()
        .with_parse_options(parse_options(cli))
        .with_render_options(render_options(cli));

    if cli.analyze_only {
        pb.set_message("Analyzing structure...");
        let map = repdf.analyze(&text)?;
        pb.finish_and_clear();
        if cli.json {
            println!("{}", to_json(&map, JsonFormat::Pretty)?);
        } else {
            print!("{}", serialize(&map));
        }
        return Ok(());
    }

    let output = cli
        .output
        .as_deref()
        .ok_or("missing OUTPUT argument")?;
    let request = cli.request.as_deref().unwrap_or_default();

    let template = match cli.template {
        Some(ref path) => PromptTemplate::from_file(path)?,
        None => PromptTemplate::from_file_or_default(DEFAULT_TEMPLATE_FILE)?,
    };
    let repdf = repdf.with_template(template);

    let repdf = if cli.no_edit {
        repdf.with_editor(PassthroughEditor)
    } else {
        let api_key = cli
            .api_key
            .clone()
            .ok_or("missing API key: pass --api-key or set GEMINI_API_KEY")?;
        repdf.with_editor(GeminiEditor::new(api_key, cli.model.clone())?)
    };

    if cli.no_edit {
        pb.set_message("Rendering...");
    } else {
        pb.set_message(format!("Editing with {}...", cli.model));
    }
    let rebuilt = repdf.rebuild(&text, request)?;
    log::info!(
        "{} source element(s), {} page(s)",
        rebuilt.structure.len(),
        rebuilt.document.page_count()
    );

    pb.set_message("Writing PDF...");
    rebuilt.save(output)?;
    pb.finish_and_clear();

    println!(
        "{} Output saved to {}",
        "Done!".green().bold(),
        output.display()
    );
    Ok(())
}

fn parse_options(cli: &Cli) -> ParseOptions {
    let options = ParseOptions::new();
    match cli.cleanup {
        Some(level) => options.with_cleanup_preset(level.into()),
        None => options,
    }
}

fn render_options(cli: &Cli) -> RenderOptions {
    let numbering = if cli.source_numbers {
        ListNumbering::Source
    } else {
        ListNumbering::Sequential
    };
    RenderOptions::new()
        .with_page_size(cli.page_size.into())
        .with_list_numbering(numbering)
        .with_implicit_headings(cli.implicit_headings)
        .with_title(
            cli.title
                .clone()
                .unwrap_or_else(|| default_title(&cli.input)),
        )
}

fn default_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
