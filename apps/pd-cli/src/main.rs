use clap::{Parser, Subcommand, ValueEnum};
use pd_app::{AppError, AppResult, EngineConfig, Outcome, SimulationFacade, query};
use pd_core::{ModelId, ParameterSet, Real};
use pd_results::export;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pd-cli")]
#[command(about = "popdyn CLI - population and epidemic model simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available models with their parameters
    Models,
    /// Evaluate one model and print the result
    Run {
        /// Model name (e.g. exponential, sir); optional with --scenario
        model: Option<ModelId>,
        /// Parameter assignment NAME=VALUE; repeatable. VALUE may be "none"
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, Option<Real>)>,
        /// Start from the model's default parameters
        #[arg(long)]
        defaults: bool,
        /// Scenario YAML file providing the model and parameters
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Engine configuration YAML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Log wall time of the evaluation
        #[arg(long)]
        timing: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Json,
    Csv,
}

fn parse_param(s: &str) -> Result<(String, Option<Real>), String> {
    ParameterSet::parse_assignment(s).map_err(|e| e.to_string())
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Run {
            model,
            params,
            defaults,
            scenario,
            config,
            format,
            output,
            timing,
        } => {
            let request = RunArgs {
                model,
                params,
                defaults,
                scenario,
                config,
                timing,
            };
            cmd_run(request, format, output.as_deref())
        }
    }
}

fn cmd_models() -> AppResult<()> {
    println!("Available models:");
    for model in ModelId::all() {
        println!("  {} - {}", model.name(), model.display_name());
        println!("      {}", model.equation());
        let defaults = model.default_params();
        let params: Vec<String> = model
            .required_params()
            .iter()
            .map(|name| match defaults.get(name) {
                Some(v) => format!("{name}={v}"),
                None => name.to_string(),
            })
            .collect();
        println!("      params: {}", params.join(" "));
    }
    Ok(())
}

struct RunArgs {
    model: Option<ModelId>,
    params: Vec<(String, Option<Real>)>,
    defaults: bool,
    scenario: Option<PathBuf>,
    config: Option<PathBuf>,
    timing: bool,
}

impl RunArgs {
    /// Resolve the model and parameter set. Precedence, lowest first:
    /// model defaults, scenario file, command-line assignments.
    fn resolve(self) -> AppResult<(ModelId, ParameterSet)> {
        let scenario = self
            .scenario
            .as_deref()
            .map(pd_app::load_scenario)
            .transpose()?;

        let model = match (self.model, &scenario) {
            (Some(model), Some(s)) if model != s.model => {
                return Err(AppError::InvalidInput(format!(
                    "Model '{}' does not match scenario model '{}'",
                    model, s.model
                )));
            }
            (Some(model), _) => model,
            (None, Some(s)) => s.model,
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "A model name or --scenario is required".to_string(),
                ));
            }
        };

        let mut set = if self.defaults {
            model.default_params()
        } else {
            ParameterSet::new()
        };
        if let Some(s) = scenario {
            set = set.merged(&s.params);
        }
        let overrides: ParameterSet = self.params.into_iter().collect();
        Ok((model, set.merged(&overrides)))
    }
}

fn cmd_run(args: RunArgs, format: Format, output: Option<&Path>) -> AppResult<()> {
    let config = match args.config.as_deref() {
        Some(path) => pd_app::load_config(path)?,
        None => EngineConfig::default(),
    };
    if args.timing || config.timing {
        pd_core::timing::enable_timing();
    }
    let facade = SimulationFacade::new(&config)?;
    let (model, params) = args.resolve()?;
    debug!(%model, params = params.len(), "running model");

    let outcome = facade.evaluate(model, &params)?;

    let rendered = match (&outcome, format) {
        (Outcome::Incomplete { missing }, Format::Summary | Format::Csv) => {
            // Nothing to render; not a failure.
            println!(
                "Incomplete: {} needs values for: {}",
                model.name(),
                missing.join(", ")
            );
            return Ok(());
        }
        (_, Format::Json) => serde_json::to_string_pretty(&outcome.to_record())
            .map_err(|e| AppError::Results(e.to_string()))?,
        (Outcome::Ok(envelope), Format::Csv) => {
            let mut buf = Vec::new();
            export::write_csv(&envelope.series, &mut buf)?;
            String::from_utf8_lossy(&buf).into_owned()
        }
        (Outcome::Ok(envelope), Format::Summary) => render_summary(envelope)?,
    };

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        println!("✓ Wrote {} output to {}", model.name(), path.display());
    } else {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn render_summary(envelope: &pd_results::ResultEnvelope) -> AppResult<String> {
    let summary = query::get_run_summary(envelope)?;
    let model = envelope.model;

    let mut out = String::new();
    out.push_str(&format!("✓ {} ({})\n", model.display_name(), model.equation()));
    out.push_str(&format!(
        "  Time range: {:.3} - {:.3}\n",
        summary.time_range.0, summary.time_range.1
    ));
    out.push_str(&format!("  Samples: {}\n", summary.sample_count));
    out.push_str(&format!(
        "  Channels: {}\n",
        query::list_channels(envelope).join(", ")
    ));
    out.push_str("\nHighlights:\n");
    for (key, value) in envelope.highlights.iter() {
        out.push_str(&format!("  {key}: {value:.6}\n"));
    }
    Ok(out)
}
