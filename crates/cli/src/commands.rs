use std::path::Path;

use pivotgen_codegen::{
    DEFAULT_CONFIG_FILE, GeneratedFile, GeneratorConfig, GeneratorsConfig, LocalFileSystem,
    PIVOT_KIND, PivotMigrationGenerator, SystemClock,
};
use pivotgen_core::{Clock, FileSystem, GenerationResult};

use crate::{Cli, Commands, PivotArgs};

/// Run the parsed command against the current working directory.
pub fn run(cli: &Cli) -> GenerationResult<GeneratedFile> {
    run_in(cli, Path::new("."))
}

/// Run the parsed command with `base_dir` as the project root.
pub fn run_in(cli: &Cli, base_dir: &Path) -> GenerationResult<GeneratedFile> {
    run_with_clock(cli, base_dir, &SystemClock)
}

/// Run the parsed command, timestamping migrations with `clock`.
pub fn run_with_clock(
    cli: &Cli,
    base_dir: &Path,
    clock: &dyn Clock,
) -> GenerationResult<GeneratedFile> {
    let fs = LocalFileSystem;
    let config = load_config(cli, &fs, base_dir)?;

    match &cli.command {
        Commands::MigrationPivot(args) => generate_pivot(args, &config, &fs, clock, base_dir),
    }
}

/// Load `generators.toml` and apply command-line overrides.
///
/// An explicitly requested config file must exist; the default one is
/// optional.
pub fn load_config(
    cli: &Cli,
    fs: &dyn FileSystem,
    base_dir: &Path,
) -> GenerationResult<GeneratorsConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorsConfig::load(fs, path)?,
        None => GeneratorsConfig::load_or_default(fs, &base_dir.join(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(stub) = &cli.stub {
        tracing::debug!(stub = %stub.display(), "stub overridden on the command line");
        config = config.with_stub(PIVOT_KIND, stub);
    }

    Ok(config)
}

pub fn generate_pivot(
    args: &PivotArgs,
    config: &GeneratorsConfig,
    fs: &dyn FileSystem,
    clock: &dyn Clock,
    base_dir: &Path,
) -> GenerationResult<GeneratedFile> {
    let mut generator_config = GeneratorConfig::new()
        .with_base_dir(base_dir)
        .with_migration_extension(config.migration_extension());
    if args.dry_run {
        generator_config = generator_config.dry_run();
    }

    let generator = PivotMigrationGenerator::new(generator_config, fs, config).with_clock(clock);

    generator.generate(&args.table_one, &args.table_two, args.force)
}
