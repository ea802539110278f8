//! Workspace tasks: dump the generated binding-set WGSL and check the bundled
//! shaders against the binding registry.
//!
//! ```text
//! cargo run -p mulch-xtask -- emit-wgsl target/wgsl
//! cargo run -p mulch-xtask -- check-shaders
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mulch::bindings::ALL_SETS;
use mulch::gpu::{ShaderComposer, BUNDLED_SHADERS};

#[derive(Parser)]
#[command(name = "xtask", about = "mulch workspace tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write each binding set's generated WGSL module into a directory.
    EmitWgsl {
        /// Output directory (created if missing).
        dir: PathBuf,
    },
    /// Compose every bundled shader and check it against the registry.
    CheckShaders,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match Cli::parse().command {
        Command::EmitWgsl { dir } => emit_wgsl(&dir),
        Command::CheckShaders => check_shaders(),
    }
}

fn emit_wgsl(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating {}", dir.display()))?;
    for set in ALL_SETS {
        let file_name = format!("{}.wgsl", set.import_path.replace("::", "_"));
        let path = dir.join(file_name);
        std::fs::write(&path, set.wgsl_module())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("{} set -> {}", set.label, path.display());
    }
    Ok(())
}

fn check_shaders() -> anyhow::Result<()> {
    let mut composer = ShaderComposer::new()?;
    for shader in BUNDLED_SHADERS {
        let module = composer
            .compose_checked(shader.set, shader.source, shader.file_path)
            .with_context(|| format!("checking {}", shader.file_path))?;
        log::info!(
            "{}: ok ({} set, {} entry points)",
            shader.file_path,
            shader.set.label,
            module.entry_points.len()
        );
    }
    log::info!("{} shader(s) match the registry", BUNDLED_SHADERS.len());
    Ok(())
}
