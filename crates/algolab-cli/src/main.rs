// crates/algolab-cli/src/main.rs
// ============================================================================
// Module: AlgoLab CLI Entry Point
// Description: Command dispatcher for the AlgoLab algorithms.
// Purpose: Run every algorithm over command-line or JSON file inputs.
// Dependencies: algolab-cli, algolab-config, algolab-core, clap, serde, thiserror
// ============================================================================

//! ## Overview
//! The `algolab` binary exposes matrix products and benchmarks, maximum
//! sub-array, sorting and search, closest pair, subset sum, and graph
//! searches. Results are written to stdout as JSON (or text where noted);
//! each run emits one run event through the sink chosen in `algolab.toml`.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use algolab_cli::bench::BenchPlan;
use algolab_cli::bench::render_bench_text;
use algolab_cli::bench::run_bench;
use algolab_cli::events::RunEvent;
use algolab_cli::events::sink_from_config;
use algolab_cli::inputs::read_graph;
use algolab_cli::inputs::read_matrix;
use algolab_cli::inputs::read_points;
use algolab_config::AlgoLabConfig;
use algolab_config::config_toml_example;
use algolab_core::GraphTrace;
use algolab_core::MultiplyAlgorithm;
use algolab_core::NoopTrace;
use algolab_core::PathEntry;
use algolab_core::Point2D;
use algolab_core::SquareMatrix;
use algolab_core::WorkerPool;
use algolab_core::binary_search;
use algolab_core::closest_pair;
use algolab_core::max_sub_array;
use algolab_core::max_sub_array_divide;
use algolab_core::minimum_spanning_tree;
use algolab_core::multiply;
use algolab_core::multiply_on;
use algolab_core::quick_sort;
use algolab_core::quick_sort_randomized;
use algolab_core::shortest_paths;
use algolab_core::subset_sum;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Operand seed for `matrix bench` when none is given.
const DEFAULT_BENCH_SEED: u64 = 0x5eed;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "algolab", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Config file path (overrides `ALGOLAB_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Square matrix products and timings.
    Matrix {
        /// Selected matrix subcommand.
        #[command(subcommand)]
        command: MatrixCommand,
    },
    /// Integer array algorithms.
    Array {
        /// Selected array subcommand.
        #[command(subcommand)]
        command: ArrayCommand,
    },
    /// Sort numbers with quicksort.
    Sort(SortCommand),
    /// Binary search a sorted list.
    Search(SearchCommand),
    /// Planar point algorithms.
    Points {
        /// Selected points subcommand.
        #[command(subcommand)]
        command: PointsCommand,
    },
    /// Dynamic programming algorithms.
    Dp {
        /// Selected dynamic programming subcommand.
        #[command(subcommand)]
        command: DpCommand,
    },
    /// Weighted graph searches.
    Graph {
        /// Selected graph subcommand.
        #[command(subcommand)]
        command: GraphCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

impl Commands {
    /// Stable label used in run events.
    const fn label(&self) -> &'static str {
        match self {
            Self::Matrix {
                command: MatrixCommand::Multiply(_),
            } => "matrix.multiply",
            Self::Matrix {
                command: MatrixCommand::Bench(_),
            } => "matrix.bench",
            Self::Array {
                command: ArrayCommand::MaxSubarray(_),
            } => "array.max_subarray",
            Self::Sort(_) => "sort",
            Self::Search(_) => "search",
            Self::Points {
                command: PointsCommand::Closest(_),
            } => "points.closest",
            Self::Dp {
                command: DpCommand::SubsetSum(_),
            } => "dp.subset_sum",
            Self::Graph {
                command: GraphCommand::ShortestPath(_),
            } => "graph.shortest_path",
            Self::Graph {
                command: GraphCommand::Mst(_),
            } => "graph.mst",
            Self::Config {
                command: ConfigCommand::Validate,
            } => "config.validate",
            Self::Config {
                command: ConfigCommand::Example,
            } => "config.example",
        }
    }
}

/// Multiplication strategy argument.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum AlgorithmArg {
    /// Classic triple loop.
    Standard,
    /// Eight recursive sub-products per level.
    DivideAndConquer,
    /// Strassen's seven recursive sub-products per level.
    Strassen,
}

impl From<AlgorithmArg> for MultiplyAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Standard => Self::Standard,
            AlgorithmArg::DivideAndConquer => Self::DivideAndConquer,
            AlgorithmArg::Strassen => Self::Strassen,
        }
    }
}

/// Output formats for commands with a text rendering.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON output.
    Json,
    /// Human-readable text output.
    Text,
}

/// Matrix subcommands.
#[derive(Subcommand, Debug)]
enum MatrixCommand {
    /// Multiply two matrices read from JSON files.
    Multiply(MatrixMultiplyCommand),
    /// Time the multiplication strategies on random matrices.
    Bench(MatrixBenchCommand),
}

/// Arguments for `matrix multiply`.
#[derive(Args, Debug)]
struct MatrixMultiplyCommand {
    /// Left operand (JSON list of rows).
    #[arg(long, value_name = "PATH")]
    left: PathBuf,
    /// Right operand (JSON list of rows).
    #[arg(long, value_name = "PATH")]
    right: PathBuf,
    /// Multiplication strategy.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Standard)]
    algorithm: AlgorithmArg,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Arguments for `matrix bench`; unset options fall back to `[bench]`.
#[derive(Args, Debug)]
struct MatrixBenchCommand {
    /// Comma-separated matrix sizes.
    #[arg(long, value_delimiter = ',', value_name = "N,...")]
    sizes: Vec<usize>,
    /// Timed runs per case.
    #[arg(long, value_name = "N")]
    iterations: Option<u32>,
    /// Untimed runs per case.
    #[arg(long, value_name = "N")]
    warmup: Option<u32>,
    /// Strategies to time (repeatable).
    #[arg(long, value_enum)]
    algorithm: Vec<AlgorithmArg>,
    /// Operand generator seed.
    #[arg(long, default_value_t = DEFAULT_BENCH_SEED)]
    seed: u64,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Array subcommands.
#[derive(Subcommand, Debug)]
enum ArrayCommand {
    /// Find the contiguous run with the largest sum.
    MaxSubarray(MaxSubarrayCommand),
}

/// Maximum sub-array strategy argument.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SubArrayMethod {
    /// Single linear pass.
    Scan,
    /// Divide and conquer around the midpoint.
    Divide,
}

/// Arguments for `array max-subarray`.
#[derive(Args, Debug)]
struct MaxSubarrayCommand {
    /// Comma-separated integers.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    values: Vec<i64>,
    /// Search strategy.
    #[arg(long, value_enum, default_value_t = SubArrayMethod::Scan)]
    method: SubArrayMethod,
}

/// Arguments for `sort`.
#[derive(Args, Debug)]
struct SortCommand {
    /// Comma-separated numbers.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    values: Vec<f64>,
    /// Pick pivots at random.
    #[arg(long, action = ArgAction::SetTrue)]
    randomized: bool,
}

/// Arguments for `search`.
#[derive(Args, Debug)]
struct SearchCommand {
    /// Comma-separated numbers in ascending order.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    values: Vec<f64>,
    /// Value to look for.
    #[arg(long, allow_hyphen_values = true)]
    key: f64,
}

/// Points subcommands.
#[derive(Subcommand, Debug)]
enum PointsCommand {
    /// Find the two closest points.
    Closest(PointsClosestCommand),
}

/// Arguments for `points closest`.
#[derive(Args, Debug)]
struct PointsClosestCommand {
    /// Points file (JSON list of `{"x", "y"}` objects).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

/// Dynamic programming subcommands.
#[derive(Subcommand, Debug)]
enum DpCommand {
    /// Largest subset total not above a target.
    SubsetSum(SubsetSumCommand),
}

/// Arguments for `dp subset-sum`.
#[derive(Args, Debug)]
struct SubsetSumCommand {
    /// Comma-separated non-negative integers.
    #[arg(long, value_delimiter = ',', required = true)]
    values: Vec<u64>,
    /// Upper bound for the subset total.
    #[arg(long)]
    target: u64,
}

/// Graph subcommands.
#[derive(Subcommand, Debug)]
enum GraphCommand {
    /// Cheapest paths from one node.
    ShortestPath(ShortestPathCommand),
    /// Minimum spanning tree from the first node.
    Mst(MstCommand),
}

/// Arguments for `graph shortest-path`.
#[derive(Args, Debug)]
struct ShortestPathCommand {
    /// Graph file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Start node.
    #[arg(long)]
    root: String,
}

/// Arguments for `graph mst`.
#[derive(Args, Debug)]
struct MstCommand {
    /// Graph file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration.
    Validate,
    /// Print an example `algolab.toml`.
    Example,
}

// ============================================================================
// SECTION: Output Types
// ============================================================================

/// JSON output of `matrix multiply`.
#[derive(Debug, Serialize)]
struct MultiplyOutput {
    /// Strategy used.
    algorithm: MultiplyAlgorithm,
    /// Operand size.
    size: usize,
    /// Product rows.
    product: SquareMatrix,
}

/// JSON output of `search`.
#[derive(Debug, Serialize)]
struct SearchOutput {
    /// Searched value.
    key: f64,
    /// Index of a match, if any.
    index: Option<usize>,
}

/// JSON output of `points closest`.
#[derive(Debug, Serialize)]
struct ClosestOutput {
    /// First point of the pair.
    first: Point2D,
    /// Second point of the pair.
    second: Point2D,
    /// Distance between them.
    distance: f64,
}

/// JSON output of `graph shortest-path`.
#[derive(Debug, Serialize)]
struct ShortestPathOutput<'a> {
    /// Start node.
    root: &'a str,
    /// Reachable nodes in settling order.
    entries: &'a [PathEntry<String>],
}

/// One spanning tree edge.
#[derive(Debug, Serialize, PartialEq)]
struct TreeEdge {
    /// Tree-side endpoint.
    from: String,
    /// Newly added endpoint.
    to: String,
    /// Edge weight.
    weight: f64,
}

/// JSON output of `graph mst`.
#[derive(Debug, Serialize)]
struct MstOutput {
    /// Spanned nodes.
    nodes: Vec<String>,
    /// Tree edges in the order they joined.
    edges: Vec<TreeEdge>,
    /// Sum of tree edge weights.
    total_weight: f64,
}

/// Trace hook collecting accepted spanning tree edges.
#[derive(Debug, Default)]
struct TreeEdgeCollector {
    /// Accepted edges in order.
    edges: Vec<TreeEdge>,
}

impl GraphTrace<String> for TreeEdgeCollector {
    fn on_node_settled(&mut self, _node: &String, _cost: f64) {}

    fn on_edge_accepted(&mut self, from: &String, to: &String, weight: f64) {
        self.edges.push(TreeEdge {
            from: from.clone(),
            to: to.clone(),
            weight,
        });
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("algolab {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };
    if matches!(
        command,
        Commands::Config {
            command: ConfigCommand::Example
        }
    ) {
        return command_config_example();
    }

    let config = AlgoLabConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let sink = sink_from_config(&config.logging)
        .map_err(|err| CliError::new(format!("failed to open event log: {err}")))?;

    let label = command.label();
    let started = Instant::now();
    let result = dispatch(command, &config);
    let error = result.as_ref().err().map(ToString::to_string);
    sink.record(&RunEvent::new(label, started.elapsed(), error));
    result
}

/// Routes a parsed command to its handler.
fn dispatch(command: Commands, config: &AlgoLabConfig) -> CliResult<ExitCode> {
    match command {
        Commands::Matrix {
            command,
        } => command_matrix(command, config),
        Commands::Array {
            command: ArrayCommand::MaxSubarray(command),
        } => command_max_subarray(&command),
        Commands::Sort(command) => command_sort(command),
        Commands::Search(command) => command_search(&command),
        Commands::Points {
            command: PointsCommand::Closest(command),
        } => command_points_closest(&command),
        Commands::Dp {
            command: DpCommand::SubsetSum(command),
        } => command_subset_sum(&command),
        Commands::Graph {
            command,
        } => command_graph(command),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(config),
        Commands::Config {
            command: ConfigCommand::Example,
        } => command_config_example(),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Matrix Commands
// ============================================================================

/// Dispatches matrix subcommands.
fn command_matrix(command: MatrixCommand, config: &AlgoLabConfig) -> CliResult<ExitCode> {
    match command {
        MatrixCommand::Multiply(command) => command_matrix_multiply(&command, config),
        MatrixCommand::Bench(command) => command_matrix_bench(command, config),
    }
}

/// Builds the worker pool sized by `[matrix]`.
fn matrix_pool(config: &AlgoLabConfig) -> CliResult<WorkerPool> {
    WorkerPool::new(config.matrix.worker_threads)
        .map_err(|err| CliError::new(format!("failed to start worker pool: {err}")))
}

/// Executes `matrix multiply`.
fn command_matrix_multiply(
    command: &MatrixMultiplyCommand,
    config: &AlgoLabConfig,
) -> CliResult<ExitCode> {
    let left = read_matrix(&command.left).map_err(|err| CliError::new(err.to_string()))?;
    let right = read_matrix(&command.right).map_err(|err| CliError::new(err.to_string()))?;
    let algorithm = MultiplyAlgorithm::from(command.algorithm);
    let options = config.multiply_options();
    let product = if options.parallel_threshold.is_some() {
        let pool = matrix_pool(config)?;
        multiply_on(&pool, &left, &right, algorithm, options)
    } else {
        multiply(&left, &right, algorithm, options)
    }
    .map_err(|err| CliError::new(format!("multiplication failed: {err}")))?;

    match command.format {
        OutputFormat::Json => write_json(&MultiplyOutput {
            algorithm,
            size: product.size(),
            product,
        })?,
        OutputFormat::Text => write_stdout_text(&product.to_string())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `matrix bench`.
fn command_matrix_bench(command: MatrixBenchCommand, config: &AlgoLabConfig) -> CliResult<ExitCode> {
    let mut bench = config.bench.clone();
    if !command.sizes.is_empty() {
        bench.sizes = command.sizes;
    }
    if let Some(iterations) = command.iterations {
        bench.iterations = iterations;
    }
    if let Some(warmup) = command.warmup {
        bench.warmup = warmup;
    }
    if !command.algorithm.is_empty() {
        bench.algorithms = command.algorithm.into_iter().map(MultiplyAlgorithm::from).collect();
    }
    let overridden = AlgoLabConfig {
        bench,
        ..config.clone()
    };
    overridden.validate().map_err(|err| CliError::new(err.to_string()))?;

    let plan = BenchPlan::from_config(&overridden.bench, config.multiply_options(), command.seed);
    let pool = matrix_pool(config)?;
    let records =
        run_bench(&plan, &pool).map_err(|err| CliError::new(format!("benchmark failed: {err}")))?;
    match command.format {
        OutputFormat::Json => write_json(&records)?,
        OutputFormat::Text => write_stdout_text(&render_bench_text(&records))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Array, Sorting, and Search Commands
// ============================================================================

/// Executes `array max-subarray`.
fn command_max_subarray(command: &MaxSubarrayCommand) -> CliResult<ExitCode> {
    let found = match command.method {
        SubArrayMethod::Scan => max_sub_array(&command.values),
        SubArrayMethod::Divide => max_sub_array_divide(&command.values),
    };
    let run = found.ok_or_else(|| CliError::new("values must not be empty".to_string()))?;
    write_json(&run)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `sort`.
fn command_sort(command: SortCommand) -> CliResult<ExitCode> {
    let mut values = command.values;
    if command.randomized {
        quick_sort_randomized(&mut values);
    } else {
        quick_sort(&mut values);
    }
    write_json(&values)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `search`.
fn command_search(command: &SearchCommand) -> CliResult<ExitCode> {
    if command.values.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(CliError::new("values must be in ascending order".to_string()));
    }
    write_json(&SearchOutput {
        key: command.key,
        index: binary_search(&command.values, &command.key),
    })?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Points and Dynamic Programming Commands
// ============================================================================

/// Executes `points closest`.
fn command_points_closest(command: &PointsClosestCommand) -> CliResult<ExitCode> {
    let points = read_points(&command.input).map_err(|err| CliError::new(err.to_string()))?;
    let pair = closest_pair(&points).map_err(|err| CliError::new(err.to_string()))?;
    write_json(&ClosestOutput {
        first: pair.first,
        second: pair.second,
        distance: pair.distance(),
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `dp subset-sum`.
fn command_subset_sum(command: &SubsetSumCommand) -> CliResult<ExitCode> {
    let result =
        subset_sum(&command.values, command.target).map_err(|err| CliError::new(err.to_string()))?;
    write_json(&result)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Graph Commands
// ============================================================================

/// Dispatches graph subcommands.
fn command_graph(command: GraphCommand) -> CliResult<ExitCode> {
    match command {
        GraphCommand::ShortestPath(command) => command_shortest_path(&command),
        GraphCommand::Mst(command) => command_mst(&command),
    }
}

/// Executes `graph shortest-path`.
fn command_shortest_path(command: &ShortestPathCommand) -> CliResult<ExitCode> {
    let graph = read_graph(&command.input).map_err(|err| CliError::new(err.to_string()))?;
    let tree = shortest_paths(&graph, &command.root, &mut NoopTrace)
        .map_err(|err| CliError::new(format!("shortest paths failed: {err}")))?;
    write_json(&ShortestPathOutput {
        root: &command.root,
        entries: tree.entries(),
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `graph mst`.
fn command_mst(command: &MstCommand) -> CliResult<ExitCode> {
    let graph = read_graph(&command.input).map_err(|err| CliError::new(err.to_string()))?;
    let mut collector = TreeEdgeCollector::default();
    let tree = minimum_spanning_tree(&graph, &mut collector);
    let total_weight = collector.edges.iter().map(|edge| edge.weight).sum();
    write_json(&MstOutput {
        nodes: tree.nodes().to_vec(),
        edges: collector.edges,
        total_weight,
    })?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes `config validate`; loading already validated the file.
fn command_config_validate(config: &AlgoLabConfig) -> CliResult<ExitCode> {
    config.validate().map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `config example`.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_text(&config_toml_example())?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a value to stdout as pretty JSON.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to encode output: {err}")))?;
    write_stdout_line(&payload).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes preformatted text to stdout as-is.
fn write_stdout_text(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes()).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
