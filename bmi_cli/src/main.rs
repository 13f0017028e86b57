use bmi_core::gauge::{band_for, Band, BANDS, GAUGE_RANGE};
use bmi_core::session::{validate_amount, MAX_AGE, MIN_AGE};
use bmi_core::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const GAUGE_WIDTH: usize = 30;
const BAND_LETTERS: [char; 4] = ['U', 'N', 'O', 'X'];

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body Mass Index calculator with saved results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from height and weight
    Calc {
        /// Height (cm for metric, in for imperial)
        #[arg(long, value_parser = parse_amount)]
        height: f64,

        /// Weight (kg for metric, lb for imperial)
        #[arg(long, value_parser = parse_amount)]
        weight: f64,

        /// Unit system (defaults to the configured one)
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,

        /// Age in years
        #[arg(long, default_value_t = MIN_AGE, value_parser = clap::value_parser!(u8).range(MIN_AGE as i64..=MAX_AGE as i64))]
        age: u8,

        /// Gender
        #[arg(long, value_enum, default_value_t = GenderArg::Unspecified)]
        gender: GenderArg,

        /// Save the result to the record file
        #[arg(long)]
        save: bool,
    },

    /// Show saved results
    #[command(visible_alias = "past")]
    Load {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all saved results
    Clear,

    /// Draw the gauge for a BMI value
    Gauge {
        #[arg(long)]
        bmi: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Metric,
    Imperial,
}

impl From<UnitArg> for UnitSystem {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Metric => UnitSystem::Metric,
            UnitArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Unspecified,
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Unspecified => Gender::Unspecified,
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    validate_amount("value", value).map_err(|e| e.to_string())?;
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    bmi_core::logging::init_cli(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store = CsvStore::new(config.store_path(&data_dir));
    tracing::debug!("Using record file {:?}", store.path());

    match cli.command {
        Commands::Calc {
            height,
            weight,
            unit,
            age,
            gender,
            save,
        } => {
            let unit_system = unit.map(UnitSystem::from).unwrap_or(config.input.unit_system);
            let input = FormInput {
                measurement: Measurement::new(height, weight, unit_system),
                age,
                gender: gender.into(),
            };
            cmd_calc(store, &input, save)
        }
        Commands::Load { json } => cmd_load(store, json),
        Commands::Clear => cmd_clear(store),
        Commands::Gauge { bmi } => {
            display_gauge(&Gauge { value: bmi });
            Ok(())
        }
    }
}

fn cmd_calc(store: CsvStore, input: &FormInput, save: bool) -> Result<()> {
    let mut session = Session::new(store);
    let measurement = &input.measurement;
    let unit_system = measurement.unit_system;

    tracing::debug!(
        "Submitting {} {} / {} {} ({})",
        measurement.height,
        unit_system.height_unit(),
        measurement.weight,
        unit_system.weight_unit(),
        unit_system
    );

    let assessment = match session.submit(input) {
        Submission::Computed(assessment) => assessment,
        Submission::Invalid(notice) => {
            display_notice(&notice);
            return Ok(());
        }
    };

    println!(
        "Height: {} {}  Weight: {} {}",
        measurement.height,
        unit_system.height_unit(),
        measurement.weight,
        unit_system.weight_unit()
    );
    println!("Your BMI is: {}", assessment.bmi());
    println!("Category: {}", assessment.result.category);
    for advisory in &assessment.advisories {
        let level = if advisory.is_warning() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Info
        };
        display_notice(&Notice::new(level, advisory.message()));
    }
    println!();
    display_gauge(&assessment.gauge);

    if save {
        let notice = session.save(&assessment)?;
        tracing::info!("Saved record to {:?}", session.store().path());
        display_notice(&notice);
    }

    Ok(())
}

fn cmd_load(store: CsvStore, json: bool) -> Result<()> {
    let session = Session::new(store);

    match session.load()? {
        Loaded::Records(records) => {
            tracing::debug!("Loaded {} records", records.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                display_records(&records);
            }
        }
        Loaded::NoData(notice) => display_notice(&notice),
    }

    Ok(())
}

fn cmd_clear(store: CsvStore) -> Result<()> {
    let mut session = Session::new(store);
    let notice = session.clear()?;
    tracing::debug!("Clear finished: {:?}", notice.level);
    display_notice(&notice);
    Ok(())
}

fn display_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!("✓ {}", notice.message),
        NoticeLevel::Info => println!("ℹ {}", notice.message),
        NoticeLevel::Warning => eprintln!("⚠ {}", notice.message),
        NoticeLevel::Error => eprintln!("✗ {}", notice.message),
    }
}

/// One cell per BMI unit across the axis, band letters underneath
fn display_gauge(gauge: &Gauge) {
    let (low, high) = GAUGE_RANGE;
    let filled = (gauge.position() * GAUGE_WIDTH as f64).round() as usize;
    let step = (high - low) / GAUGE_WIDTH as f64;

    let bar: String = (0..GAUGE_WIDTH)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    let bands: String = (0..GAUGE_WIDTH)
        .map(|i| band_for(low + step * (i as f64 + 0.5)).map_or(' ', band_letter))
        .collect();

    println!(
        "  BMI {} [{}]",
        gauge.value,
        gauge.band().map_or('-', band_letter)
    );
    println!("  {:<4}{}{:>4}", low, bar, high);
    println!("      {}", bands);
    println!("      U underweight  N normal  O overweight  X obese");
}

fn band_letter(band: &Band) -> char {
    BANDS
        .iter()
        .position(|b| b == band)
        .map_or(' ', |index| BAND_LETTERS[index])
}

fn display_records(records: &[Record]) {
    println!(
        "{:>3}  {:<17}  {:>8}  {:>8}  {:>6}  {}",
        "Age", "Gender", "Height", "Weight", "BMI", "Category"
    );
    for record in records {
        println!(
            "{:>3}  {:<17}  {:>8}  {:>8}  {:>6}  {}",
            record.age,
            record.gender.to_string(),
            record.height,
            record.weight,
            record.bmi,
            record.category.to_string()
        );
    }
    if records.is_empty() {
        println!("(no records)");
    }
}
