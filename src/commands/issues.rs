use tabled::Tabled;

use crate::cli::{IssueListArgs, IssueShowArgs};
use crate::client::FiveCallsClient;
use crate::config::Config;
use crate::error::{FiveCallsError, Result};
use crate::output::{active_colored, format_date_only, print_message, print_table, truncate};
use crate::query::{IssueQuery, Location};
use crate::types::Issue;

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            slug: issue.slug.clone(),
            name: truncate(&issue.name, 50),
            category: issue
                .categories
                .first()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            state: active_colored(issue.inactive),
        }
    }
}

fn parse_coords(raw: &str) -> Result<Location> {
    let invalid = || FiveCallsError::InvalidCoordinates(raw.to_string());

    let (lat, lon) = raw.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    Ok(Location::Coordinates { lat, lon })
}

fn resolve_query(config: &Config, args: &IssueListArgs) -> Result<IssueQuery> {
    if args.all {
        return Ok(IssueQuery::All);
    }

    let location = match &args.coords {
        Some(raw) => Some(parse_coords(raw)?),
        None => config
            .resolve_address(args.address.as_deref())
            .map(Location::Address),
    };

    Ok(IssueQuery::Nearby(location))
}

pub async fn list(client: &FiveCallsClient, config: &Config, args: IssueListArgs) -> Result<()> {
    let query = resolve_query(config, &args)?;
    let fetched = client.fetch_issues(&query).await?;

    print_table(&fetched.list.issues, |i| IssueRow::from(i));

    if !fetched.list.normalized_location.is_empty() {
        print_message(&format!(
            "Issues near: {}",
            fetched.list.normalized_location
        ));
    }
    if fetched.list.invalid_address {
        print_message("Note: the address could not be resolved; showing the default set.");
    }

    Ok(())
}

pub async fn show(client: &FiveCallsClient, config: &Config, args: IssueShowArgs) -> Result<()> {
    let location = config
        .resolve_address(args.address.as_deref())
        .map(Location::Address);
    let fetched = client.fetch_issues(&IssueQuery::Nearby(location)).await?;

    let issue = fetched
        .list
        .issues
        .iter()
        .find(|i| i.slug == args.id || i.id.to_string() == args.id)
        .ok_or_else(|| FiveCallsError::IssueNotFound(args.id.clone()))?;

    if crate::output::is_json_output() {
        println!(
            "{}",
            serde_json::to_string_pretty(issue).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} - {}", issue.id, issue.name);
    if let Some(created) = &issue.created_at {
        println!("Created: {}", format_date_only(created));
    }
    println!();
    println!("{}", issue.reason);
    println!();
    println!("Script:");
    println!("{}", issue.script);

    if !issue.contacts.is_empty() {
        println!();
        println!("Contacts:");
        for contact in &issue.contacts {
            println!(
                "  {} ({}) {}",
                contact.name,
                contact.area,
                contact.phone
            );
        }
    }

    Ok(())
}
