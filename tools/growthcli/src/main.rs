use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use comfy_table::Table;
use cover::{CacheLayout, GrowthSummary, LandCover, PredictionStore, Region, Scenario};
use env_logger::{Env, TimestampPrecision};
use indicatif::{MultiProgress, ProgressBar};
use indicatif_log_bridge::LogWrapper;

pub type Error = cover::Error;
pub type Result<T> = cover::Result<T>;

#[derive(Parser, Debug)]
#[command(name = "growthcli")]
#[command(about = "Urban growth prediction toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct StoreArgs {
    #[arg(long = "country", help = "Country of the study region")]
    country: String,

    #[arg(long = "city", help = "City of the study region")]
    city: String,

    #[arg(long = "cache-dir", default_value = "./data/cache", help = "Local store directory")]
    cache_dir: PathBuf,

    #[arg(long = "base-url", default_value = cover::DEFAULT_BASE_URL, help = "Base URL of the prediction archive")]
    base_url: String,
}

impl StoreArgs {
    fn region(&self) -> Result<Region> {
        Region::new(self.country.as_str(), self.city.as_str())
    }

    fn store(&self) -> PredictionStore {
        PredictionStore::with_base_url(CacheLayout::new(&self.cache_dir), self.base_url.as_str())
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(name = "fetch", about = "Download the prediction stacks of a region")]
    Fetch {
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long = "scenario", help = "Single scenario to fetch instead of all three (inertial, accelerated, controlled)")]
        scenario: Option<Scenario>,
    },
    #[command(name = "coverage", about = "Tabulate the per-year land-cover coverage of a scenario")]
    Coverage {
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long = "scenario", default_value = "inertial", help = "Growth scenario")]
        scenario: Scenario,
        #[arg(long = "start-year", default_value = "2020", help = "Calendar year preceding the first prediction layer")]
        start_year: i32,
        #[arg(short = 'o', long = "output", help = "Also export the coverage table as CSV to this path")]
        output: Option<PathBuf>,
    },
    #[command(name = "composition", about = "Class composition of the land-cover grid of a region")]
    Composition {
        #[command(flatten)]
        store: StoreArgs,
    },
    #[command(name = "summary", about = "Urbanization summary across all scenarios")]
    Summary {
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long = "start-year", default_value = "2020", help = "Calendar year preceding the first prediction layer")]
        start_year: i32,
        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },
}

fn fetch_scenario(store: &PredictionStore, region: &Region, scenario: Scenario, multi: &MultiProgress) -> Result<()> {
    let bar = multi.add(ProgressBar::new(0));
    store.fetch_with_progress(region, scenario, |written, total| {
        if let Some(total) = total {
            bar.set_length(total);
        }

        bar.set_position(written);
    })?;
    bar.finish_and_clear();
    Ok(())
}

fn fetch(args: &StoreArgs, scenario: Option<Scenario>, multi: &MultiProgress) -> Result<()> {
    let store = args.store();
    let region = args.region()?;

    let scenarios = match scenario {
        Some(scenario) => vec![scenario],
        None => Scenario::ALL.to_vec(),
    };

    for scenario in scenarios {
        fetch_scenario(&store, &region, scenario, multi)?;
        let path = store.layout().predictions_path(&region, scenario);
        if path.exists() {
            println!("{scenario} predictions for {region}: {}", path.display());
        } else {
            println!("{scenario} predictions for {region}: not available");
        }
    }

    Ok(())
}

fn coverage(args: &StoreArgs, scenario: Scenario, start_year: i32, output: Option<&Path>, multi: &MultiProgress) -> Result<()> {
    let store = args.store();
    let region = args.region()?;

    fetch_scenario(&store, &region, scenario, multi)?;
    let land_cover = store.load_land_cover(&region)?;
    let predictions = store.load_predictions(&region, scenario)?;

    let coverage_path = store.layout().coverage_path(&region);
    let table = cover::load_or_compute_coverage(&coverage_path, &land_cover, &predictions, start_year)?;

    let columns = table.stacked_column_order();
    let indices: Vec<usize> = columns.iter().filter_map(|column| table.column_index(column)).collect();

    let mut output_table = Table::new();
    let mut header = vec!["Year".to_string()];
    header.extend(columns.iter().cloned());
    output_table.set_header(header);
    for (index, year) in table.years().iter().enumerate() {
        let mut row = vec![year.to_string()];
        row.extend(indices.iter().map(|&column| format!("{:.2}", table.row(index)[column])));
        output_table.add_row(row);
    }

    println!("Coverage of {region} ({scenario} scenario), % of total area");
    println!("{output_table}");

    let legend: Vec<String> = columns
        .iter()
        .filter_map(|column| LandCover::from_name(column))
        .map(|class| format!("{} {}", class.color().to_hex_rgb(), class.name()))
        .collect();
    if !legend.is_empty() {
        println!("Legend: {}", legend.join(", "));
    }

    if let Some(output) = output {
        table.write_csv(output)?;
        println!("Coverage table written to {}", output.display());
    }

    Ok(())
}

fn composition(args: &StoreArgs) -> Result<()> {
    let store = args.store();
    let region = args.region()?;
    let land_cover = store.load_land_cover(&region)?;

    let total = land_cover.len();
    let counts = cover::class_cell_counts(&land_cover);
    let classified: usize = counts.iter().map(|&(_, count)| count).sum();

    let mut table = Table::new();
    table.set_header(vec!["Class", "Cells", "Share"]);
    for (class, count) in counts {
        table.add_row(vec![
            class.name().to_string(),
            count.to_string(),
            format!("{:.2}%", 100.0 * count as f64 / total as f64),
        ]);
    }

    if classified < total {
        let rest = total - classified;
        table.add_row(vec![
            "Unclassified".to_string(),
            rest.to_string(),
            format!("{:.2}%", 100.0 * rest as f64 / total as f64),
        ]);
    }

    println!("Land cover of {region} ({total} cells)");
    println!("{table}");
    Ok(())
}

fn summary(args: &StoreArgs, start_year: i32, json: bool, multi: &MultiProgress) -> Result<()> {
    let store = args.store();
    let region = args.region()?;

    let mut predictions = Vec::with_capacity(Scenario::ALL.len());
    for scenario in Scenario::ALL {
        fetch_scenario(&store, &region, scenario, multi)?;
        predictions.push((scenario, store.load_predictions(&region, scenario)?));
    }

    // the built-up class of the land cover serves as the observed urban state
    let land_cover = store.load_land_cover(&region)?;
    let built_up = cover::class_mask(&land_cover, LandCover::BuiltUp);
    let summary = GrowthSummary::assemble(&[start_year], &[built_up], &predictions, start_year)?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|err| Error::Runtime(format!("Failed to serialize summary: {err}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let base = summary.base().map(|point| point.fraction).unwrap_or_default();
    let mut table = Table::new();
    table.set_header(vec![
        "Scenario".to_string(),
        format!("Urban {start_year}"),
        "Urban final".to_string(),
        "Change".to_string(),
    ]);
    for series in summary.scenarios() {
        let last = series.points.last().copied().unwrap_or_default();
        table.add_row(vec![
            series.scenario.label().to_string(),
            format!("{:.1}%", base * 100.0),
            format!("{:.1}% ({})", last.fraction * 100.0, last.year),
            format!("{:+.1} pp", summary.expansion_delta(series.scenario).unwrap_or_default()),
        ]);
    }

    println!("Urbanization of {region}");
    println!("{table}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(Some(TimestampPrecision::Millis))
        .build();

    let multi = MultiProgress::new();
    let level = logger.filter();
    LogWrapper::new(multi.clone(), logger).try_init().unwrap();
    log::set_max_level(level);

    match cli.command {
        Commands::Fetch { store, scenario } => fetch(&store, scenario, &multi),
        Commands::Coverage {
            store,
            scenario,
            start_year,
            output,
        } => coverage(&store, scenario, start_year, output.as_deref(), &multi),
        Commands::Composition { store } => composition(&store),
        Commands::Summary { store, start_year, json } => summary(&store, start_year, json, &multi),
    }
}
