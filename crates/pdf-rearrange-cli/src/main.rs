use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfr", about = "PDF page rearrangement CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rearrange pages by an explicit page order or a named sort mode
    Rearrange {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file (default: input name with `_rearranged` suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page order, e.g. "1,3-5,n" (1-based, `n` = last page)
        #[arg(short, long, conflicts_with = "mode")]
        pages: Option<String>,

        /// Named sort mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Print the computed zero-based page order without writing a PDF
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove pages from a PDF file
    RemovePages {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file (default: input name with `_removed_pages` suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pages to remove, e.g. "2,7-9,n"
        #[arg(short, long)]
        pages: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    ReverseOrder,
    DuplexSort,
    BookletSort,
    SideStitchBookletSort,
    OddEvenSplit,
    OddEvenMerge,
    RemoveFirst,
    RemoveLast,
    RemoveFirstAndLast,
    BookletHalfSheetSort,
    BookHalfSheetSort,
}

impl From<ModeArg> for pdf_rearrange::SortMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::ReverseOrder => Self::ReverseOrder,
            ModeArg::DuplexSort => Self::DuplexSort,
            ModeArg::BookletSort => Self::BookletSort,
            ModeArg::SideStitchBookletSort => Self::SideStitchBookletSort,
            ModeArg::OddEvenSplit => Self::OddEvenSplit,
            ModeArg::OddEvenMerge => Self::OddEvenMerge,
            ModeArg::RemoveFirst => Self::RemoveFirst,
            ModeArg::RemoveLast => Self::RemoveLast,
            ModeArg::RemoveFirstAndLast => Self::RemoveFirstAndLast,
            ModeArg::BookletHalfSheetSort => Self::BookletHalfSheetSort,
            ModeArg::BookHalfSheetSort => Self::BookHalfSheetSort,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rearrange {
            input,
            output,
            pages,
            mode,
            dry_run,
        } => {
            if pages.is_none() && mode.is_none() {
                bail!("either --pages or --mode is required");
            }
            let mode = mode.map(|m| pdf_rearrange::SortMode::from(m).to_string());

            let document = pdf_rearrange::load_pdf(&input).await?;
            let total_pages = document.get_pages().len();

            if dry_run {
                let order =
                    pdf_rearrange::compute_rearrangement(pages.as_deref(), mode.as_deref(), total_pages)?;
                println!("Page order ({total_pages} pages): {order:?}");
                return Ok(());
            }

            let output = output.unwrap_or_else(|| {
                pdf_rearrange::output_file_name(&input, pdf_rearrange::REARRANGED_SUFFIX)
            });
            let document = pdf_rearrange::rearrange_pages(document, pages, mode).await?;
            pdf_rearrange::save_pdf(document, &output).await?;
            println!("Rearranged {} pages → {}", total_pages, output.display());
        }

        Commands::RemovePages {
            input,
            output,
            pages,
        } => {
            let document = pdf_rearrange::load_pdf(&input).await?;
            let total_pages = document.get_pages().len();

            let output = output.unwrap_or_else(|| {
                pdf_rearrange::output_file_name(&input, pdf_rearrange::REMOVED_PAGES_SUFFIX)
            });
            let document = pdf_rearrange::remove_pages(document, pages).await?;
            let remaining = document.get_pages().len();
            pdf_rearrange::save_pdf(document, &output).await?;
            println!(
                "Removed {} of {} pages → {}",
                total_pages - remaining,
                total_pages,
                output.display()
            );
        }
    }

    Ok(())
}
