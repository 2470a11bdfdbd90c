//! Development tasks: man pages and shell completions.
//!
//! Run with `cargo xtask <task>` (alias) or `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "penmeter development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
    },
    /// Generate man pages and completions under `target/dist`
    Dist,
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir } => completions(&out_dir),
        Task::Dist => {
            man(Path::new("target/dist/man"))?;
            completions(Path::new("target/dist/completions"))
        }
    }
}

/// One page for the root command and one per subcommand (`penmeter-<name>.1`).
fn man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = penmeter::command();
    let bin = cmd.get_name().to_string();
    write_man_page(out_dir, &bin, cmd.clone())?;

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{bin}-{}", sub.get_name());
        write_man_page(out_dir, &name, sub.clone().name(name.clone()))?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man_page(out_dir: &Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))
}

fn completions(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut cmd = penmeter::command();
    let bin = cmd.get_name().to_string();
    for &shell in Shell::value_variants() {
        clap_complete::generate_to(shell, &mut cmd, &bin, out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
    }

    println!("completions written to {}", out_dir.display());
    Ok(())
}
