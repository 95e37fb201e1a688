use clap::{Parser, ValueEnum};
use nagare::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderCli {
    Insertion,
    BreadthFirst,
}

impl From<OrderCli> for ExportOrder {
    fn from(order: OrderCli) -> Self {
        match order {
            OrderCli::Insertion => ExportOrder::Insertion,
            OrderCli::BreadthFirst => ExportOrder::BreadthFirst,
        }
    }
}

/// A workflow graph validation and export CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas flow JSON file
    flow_path: Option<String>,

    /// Optional path to write the exported step document to (stdout otherwise)
    #[arg(short, long)]
    output: Option<String>,

    /// The step ordering to use for the export
    #[arg(long, value_enum)]
    order: Option<OrderCli>,

    /// Treat validation issues as fatal instead of warnings
    #[arg(long)]
    strict: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_export(flow_path: String, output: Option<String>, order: ExportOrder, strict: bool) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let flow_json = fs::read_to_string(&flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", &flow_path, e))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let parse_start = Instant::now();
    let flow = CanvasFlow::from_json(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));
    let store = flow
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build graph from flow: {}", e)));
    let parse_duration = parse_start.elapsed();

    eprintln!(
        "Loaded flow: {} nodes, {} edges",
        store.nodes().len(),
        store.edges().len()
    );

    // --- 3. Validation ---
    let validate_start = Instant::now();
    let issues = validate(&store);
    for issue in &issues {
        eprintln!("warning: {}", issue);
    }
    if strict && !issues.is_empty() {
        exit_with_error(&format!(
            "{} validation issue(s) found and --strict is set",
            issues.len()
        ));
    }
    let validate_duration = validate_start.elapsed();

    // --- 4. Export ---
    let export_start = Instant::now();
    let document = Exporter::new(&store).with_order(order).export();
    let json = serde_json::to_string_pretty(&document)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize step document: {}", e)));
    let export_duration = export_start.elapsed();

    match output {
        Some(path) => {
            fs::write(&path, &json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write step document to '{}': {}", path, e))
            });
            eprintln!("Wrote {} steps to '{}'", document.steps.len(), path);
        }
        None => println!("{}", json),
    }

    let total_duration = total_start.elapsed();
    eprintln!("\n--- Performance Summary ---");
    eprintln!("File Loading:    {:?}", load_duration);
    eprintln!("Parsing:         {:?}", parse_duration);
    eprintln!("Validation:      {:?}", validate_duration);
    eprintln!("Export:          {:?}", export_duration);
    eprintln!("---------------------------");
    eprintln!("Total Execution: {:?}", total_duration);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the
/// command line.
fn run_non_interactive(cli: Cli) {
    let flow_path = cli
        .flow_path
        .unwrap_or_else(|| exit_with_error("Flow path is required in non-interactive mode."));
    let order = cli.order.unwrap_or(OrderCli::Insertion);

    run_export(flow_path, cli.output, order.into(), cli.strict);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Nagare Interactive Mode ---");

    let flow_path = prompt_for_input("Enter canvas flow path", Some("data/flow.json"));
    let output_str = prompt_for_input("Enter output path (optional, stdout otherwise)", None);
    let output = if output_str.is_empty() {
        None
    } else {
        Some(output_str)
    };

    let order = loop {
        println!("\nPlease select a step ordering:");
        println!("  1: Insertion (node array order, legacy behavior)");
        println!("  2: Breadth-first (execution order from the start node)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break ExportOrder::Insertion,
            "2" => break ExportOrder::BreadthFirst,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    run_export(flow_path, output, order, false);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
