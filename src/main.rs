use clap::Parser;
use mddocset::markdown::RenderOptions;
use mddocset::package::ArchiveFormat;
use mddocset::output;
use mddocset::pipeline::{self, BuildOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mddocset")]
#[command(about = "Create a docset from a Markdown input directory")]
#[command(long_about = "\
Create a docset from a Markdown input directory

Every .md file under the input directory becomes a rendered HTML page and a
mind-map page inside a {name}.docset bundle, grouped on a generated index
page by classification label (the file's directory path with separators
replaced by '_'). A SQLite search index registers every page.

Input structure:

  docs/
  ├── intro.md                     # label \"\"          → _intro.html
  ├── guide/
  │   ├── setup.md                 # label \"guide\"     → guide_setup.html
  │   └── api/
  │       └── auth.md              # label \"guide_api\" → guide_api_auth.html
  └── .git/                        # pruned, never traversed

Output:

  {output}/{name}.docset/Contents/
  ├── Info.plist
  └── Resources/
      ├── docSet.dsidx
      └── Documents/{index,*}.html

Set MDDOCSET_RUN_PATH to resolve templates/Info.plist from a different base
directory than the current one.")]
#[command(version)]
struct Cli {
    /// Input directory containing Markdown documents
    input: PathBuf,

    /// Output directory the docset bundle is created in
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Display name of the docset (default: the input directory name)
    #[arg(short = 'n', long)]
    docname: Option<String>,

    /// Also produce a compressed package in the given format
    #[arg(short = 'p', long = "pkg", value_enum)]
    pkg: Option<ArchiveFormat>,

    /// Render document pages without CDN scripts (TeX stays as source text)
    #[arg(long)]
    offline: bool,
}

fn main() {
    let cli = Cli::parse();

    let docname = cli
        .docname
        .clone()
        .unwrap_or_else(|| default_docname(&cli.input));

    let opts = BuildOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        docname: docname.clone(),
        render: RenderOptions {
            math: true,
            offline: cli.offline,
        },
        package: cli.pkg,
    };

    println!("==> Building {docname}.docset from {}", cli.input.display());
    match pipeline::build(&opts) {
        Ok(report) => output::print_build_summary(&report),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

/// Docset name when `--docname` is omitted: the input directory's base name.
fn default_docname(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "docset".to_string())
}
