// src/cli/catalog.rs — Product catalog search command

use crate::portal::catalog::{self, Product};
use crate::portal::data::PortalDataSource;

pub async fn run_catalog(source: &dyn PortalDataSource, query: &str, json: bool) -> anyhow::Result<()> {
    let products = source.products().await?;
    let hits = catalog::search(&products, query);
    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        print!("{}", format_table(&hits, products.len()));
    }
    Ok(())
}

/// Aligned text table followed by the summary line.
pub fn format_table(hits: &[&Product], total: usize) -> String {
    let mut out = format!(
        "{:<36} {:<16} {:<20} {:<8} {:<11} {:<8} {}\n",
        "NAME", "SATELLITE", "LOCATION", "RES", "DATE", "SIZE", "TYPE"
    );
    for p in hits {
        out.push_str(&format!(
            "{:<36} {:<16} {:<20} {:<8} {:<11} {:<8} {}\n",
            p.name, p.satellite, p.location, p.resolution, p.date, p.size, p.kind
        ));
    }
    out.push_str(&catalog::summary(hits.len(), total));
    out.push('\n');
    out
}
