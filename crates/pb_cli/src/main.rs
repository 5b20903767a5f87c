use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pb_compile::compile;
use pb_config::CompilerConfig;
use pb_parser::parse_module;

#[derive(Parser)]
#[command(
    name = "playbox",
    about = "playbox — compile JS/JSX snippets for sandboxed live preview"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, lower, and emit a plain script.
    Compile {
        /// Input .js/.jsx file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Element constructor JSX lowers to.
        #[arg(long, default_value = "React.createElement")]
        pragma: String,
        /// Fragment constructor for bare JSX snippets.
        #[arg(long, default_value = "React.Fragment")]
        pragma_frag: String,
        /// Module loader call emitted for imports.
        #[arg(long, default_value = "require")]
        loader: String,
        /// Leave JSX untouched.
        #[arg(long)]
        keep_jsx: bool,
        /// Leave import/export statements untouched.
        #[arg(long)]
        keep_imports: bool,
    },
    /// Parse the file and report the first syntax error.
    Check { input: PathBuf },
    /// Parse and dump the AST.
    Parse {
        input: PathBuf,
        /// Dump as JSON instead of debug formatting.
        #[arg(long)]
        ast: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            output,
            pragma,
            pragma_frag,
            loader,
            keep_jsx,
            keep_imports,
        } => {
            let source = std::fs::read_to_string(&input)?;
            let config = CompilerConfig {
                jsx: !keep_jsx,
                imports: !keep_imports,
                pragma,
                pragma_frag,
                loader,
                ..CompilerConfig::default()
            };
            let compiled = compile(&source, &config)
                .map_err(|e| anyhow!("{} (line {}, column {})", e.message, e.line, e.column))?;
            match &output {
                Some(path) => std::fs::write(path, &compiled)?,
                None => print!("{compiled}"),
            }
        }
        Commands::Check { input } => {
            let source = std::fs::read_to_string(&input)?;
            let filename = input.display().to_string();
            parse_module(&source, &filename).map_err(|e| anyhow!("{e}"))?;
            eprintln!("OK: {filename}");
        }
        Commands::Parse { input, ast } => {
            let source = std::fs::read_to_string(&input)?;
            let filename = input.display().to_string();
            let parsed = parse_module(&source, &filename).map_err(|e| anyhow!("{e}"))?;
            if ast {
                let json = serde_json::to_string_pretty(&parsed.module)?;
                println!("{json}");
            } else {
                println!("{:#?}", parsed.module);
            }
        }
    }

    Ok(())
}
