//! Command-line dashboard over the tender statistics API.
//!
//! Run with: cargo run --bin dashboard -- <command>

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tenderlens::{
    classification_options, Error, ItemEstimatesScreen, LocalityEstimatesScreen,
    LocalityInspectionsScreen, PageSize, RegionEstimatesScreen, RegionInspectionsScreen,
    StatsClient, TenderInspectionScreen,
};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(version, about = "Tender statistics and corruption-risk dashboard", long_about = None)]
struct Cli {
    /// API base URL override
    #[arg(long, env = "TENDERLENS_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all regions
    ListRegions,
    /// List the localities of a region
    ListLocalities {
        #[arg(long)]
        region: u64,
    },
    /// List item classifications, optionally narrowed by description
    ListClassifications {
        /// Case-insensitive substring filter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Regional expenditure statistics for one year
    Regions {
        #[arg(long)]
        year: u16,
    },
    /// Locality expenditure statistics within a region
    Localities {
        #[arg(long)]
        region: u64,
        #[arg(long)]
        year: u16,
    },
    /// Average item prices for a classification
    Items {
        #[arg(long)]
        year: u16,
        #[arg(long)]
        classification: String,
    },
    /// Corruption-risk report for one tender
    Tender {
        /// Tender id, e.g. UA-2023-05-12-000321-a
        id: String,
    },
    /// Inspection listing for a locality over a date range
    InspectLocality {
        #[arg(long)]
        region: u64,
        #[arg(long)]
        locality: u64,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        page_size: usize,
        /// Sort column: id, items, locality, suppliers or total
        #[arg(long)]
        sort: Option<String>,
    },
    /// Inspection listing for a region over a date range
    InspectRegion {
        #[arg(long)]
        region: u64,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        page_size: usize,
        /// Sort column: id, items, locality, suppliers or total
        #[arg(long)]
        sort: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = match cli.api_url {
        Some(url) => StatsClient::with_base_url(None, url)?,
        None => StatsClient::new(None, None)?,
    };

    if let Err(err) = run(cli.command, &client).await {
        eprintln!("{}", err.user_message());
        return Err(err.into());
    }
    Ok(())
}

async fn run(command: Command, client: &StatsClient) -> Result<(), Error> {
    match command {
        Command::ListRegions => {
            for region in client.regions().await? {
                println!("{:>6}  {}", region.id, region.name);
            }
        }
        Command::ListLocalities { region } => {
            for locality in client.localities(region).await? {
                println!("{:>6}  {}", locality.id, locality.name);
            }
        }
        Command::ListClassifications { filter } => {
            let classifications = client.item_classifications().await?;
            let input = filter.unwrap_or_default();
            for classification in classification_options(&classifications, &input) {
                println!("{}: {}", classification.id, classification.description);
            }
        }
        Command::Regions { year } => {
            let mut screen = RegionEstimatesScreen::new();
            screen.filters.year = Some(year);
            screen.submit(client).await?;

            info!(year, rows = screen.table().total_rows(), "region estimates loaded");
            println!(
                "{:<28} {:>8} {:>16} {:>16} {:>10}",
                "Region", "Tenders", "Real", "Defense", "Defense %"
            );
            for row in screen.rows() {
                println!(
                    "{:<28} {:>8} {:>16.2} {:>16.2} {:>9.1}%",
                    row.region_name,
                    row.tender_count,
                    row.real_expenditures,
                    row.defense_expenditures,
                    row.defense_ratio
                );
            }
        }
        Command::Localities { region, year } => {
            let mut screen = LocalityEstimatesScreen::new();
            screen.filters.region_id = Some(region);
            screen.filters.year = Some(year);
            screen.submit(client).await?;

            println!(
                "{:<24} {:>8} {:>14} {:>14} {:>8} {:<22}",
                "Locality", "Tenders", "Real", "Expected", "Ratio", "Row colour"
            );
            for (row, color) in screen.rows() {
                println!(
                    "{:<24} {:>8} {:>14.2} {:>14.2} {:>8.2} {:<22}",
                    row.locality_name,
                    row.tender_count,
                    row.real_expenditures,
                    row.expected_expenditures,
                    row.real_expected_ratio,
                    color
                );
            }
        }
        Command::Items {
            year,
            classification,
        } => {
            let mut screen = ItemEstimatesScreen::new();
            screen.filters.year = Some(year);
            screen.filters.classification_id = Some(classification);
            screen.submit(client).await?;

            println!("{:>14} {:>8} {:<10} {:<18}", "Avg price", "Count", "Unit id", "Unit");
            for row in screen.rows() {
                println!(
                    "{:>14.2} {:>8} {:<10} {:<18}",
                    row.average_price, row.count, row.unit.id, row.unit.name
                );
            }
        }
        Command::Tender { id } => {
            let mut screen = TenderInspectionScreen::new();
            screen.filters.tender_id = Some(id);
            screen.submit(client).await?;

            // submit either installed a report or returned an error
            if let Some(report) = screen.report() {
                println!("{}", report.tender.title);
                if let Some(price) = report.inspection.details.real_total_price {
                    println!("Real total price: {price:.2}");
                }
                println!();
                for gauge in report.gauges() {
                    println!(
                        "{:<24} {:>6.1} / {:<5} fill {}",
                        gauge.label, gauge.value, gauge.value_max, gauge.fill
                    );
                }

                let details = &report.inspection.details;
                println!();
                println!("Locality: {}", details.locality);
                println!(
                    "Defence customer: {}",
                    if details.is_defence { "yes" } else { "no" }
                );
                if let Some(ratio) = details.locality_year_estimate_ratio {
                    println!("Share of locality year budget: {:.1}%", ratio * 100.0);
                }
                if let Some(expected) = details.expected_total_price {
                    println!("Expected total price: {expected:.2}");
                }
                if let Some(ratio) = details.real_expected_price_ratio {
                    println!("Real/expected ratio: {ratio:.2}");
                }

                if !details.expected_item_prices_per_one.is_empty() {
                    println!();
                    println!(
                        "{:<32} {:>10} {:<10} {:>12}",
                        "Item", "Quantity", "Unit", "Unit price"
                    );
                    for item in &details.expected_item_prices_per_one {
                        println!(
                            "{:<32} {:>10} {:<10} {:>12.2}",
                            item.classification, item.quantity, item.unit, item.price
                        );
                    }
                }

                let history = report.supplier_history();
                if !history.is_empty() {
                    println!();
                    println!(
                        "{:<32} {:>6} {:>14} {:>14}",
                        "Supplier", "Wins", "Avg price", "Max price"
                    );
                    for row in history {
                        println!(
                            "{:<32} {:>6} {:>14} {:>14}",
                            row.supplier,
                            row.win_count,
                            row.average_price
                                .map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
                            row.max_price
                                .map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
                        );
                    }
                }
            }
        }
        Command::InspectLocality {
            region,
            locality,
            from,
            to,
            page,
            page_size,
            sort,
        } => {
            let mut screen = LocalityInspectionsScreen::new();
            screen.filters.region_id = Some(region);
            screen.filters.locality_id = Some(locality);
            screen.filters.from = Some(from);
            screen.filters.to = Some(to);
            screen.submit(client).await?;

            if let Some(size) = PageSize::from_usize(page_size) {
                screen.set_page_size(size);
            }
            screen.set_page(page);
            if let Some(key) = sort {
                screen.sort_by(&key);
            }

            print_inspection_rows(screen.rows(), page, screen.table().page_count());
        }
        Command::InspectRegion {
            region,
            from,
            to,
            page,
            page_size,
            sort,
        } => {
            let mut screen = RegionInspectionsScreen::new();
            screen.filters.region_id = Some(region);
            screen.filters.from = Some(from);
            screen.filters.to = Some(to);
            screen.submit(client).await?;

            if let Some(size) = PageSize::from_usize(page_size) {
                screen.set_page_size(size);
            }
            screen.set_page(page);
            if let Some(key) = sort {
                screen.sort_by(&key);
            }

            print_inspection_rows(screen.rows(), page, screen.table().page_count());
        }
    }

    Ok(())
}

fn print_inspection_rows(
    rows: Vec<(tenderlens::InspectionSummary, tenderlens::Rgba)>,
    page: usize,
    page_count: usize,
) {
    println!(
        "{:<76} {:>7} {:>9} {:>10} {:>7} {:<22}",
        "Tender", "Items", "Locality", "Suppliers", "Total", "Row colour"
    );
    for (row, color) in &rows {
        println!(
            "{:<76} {:>7.1} {:>9.1} {:>10.1} {:>7.1} {:<22}",
            row.display_title(),
            row.items,
            row.locality,
            row.suppliers,
            row.total,
            color
        );
    }
    println!();
    println!("page {} of {page_count}, {} rows shown", page + 1, rows.len());
}
