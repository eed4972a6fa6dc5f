//! One-shot `search` and `show` commands.

use anyhow::{Context, Result};
use marquee_core::config::MarqueeConfig;
use marquee_core::format;
use marquee_core::model::{validate_identifier, Query, RatingClass};
use marquee_core::omdb::{MovieApi, OmdbClient};
use marquee_core::viewer::DetailView;
use owo_colors::OwoColorize;

const TITLE_WIDTH: usize = 40;

pub async fn cmd_search(
    config: &MarqueeConfig,
    term: &str,
    json: bool,
    limit: Option<usize>,
) -> Result<()> {
    let query = Query::parse(term)?;
    let client = OmdbClient::from_config(&config.api).context("failed to create OMDb client")?;

    let items = match client.search(&query).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(query = %query, error = %e, "search failed");
            print_empty(&query, json);
            return Err(e).context(format!("search for \"{query}\" failed"));
        }
    };

    if items.is_empty() {
        print_empty(&query, json);
        return Ok(());
    }

    let total = items.len();
    let items: Vec<_> = items.into_iter().take(limit.unwrap_or(usize::MAX)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{}", format::count_label(total).bold());
    println!(
        "{:<12} {:<40} {:<6} {}",
        "ID".dimmed(),
        "Title".dimmed(),
        "Year".dimmed(),
        "Type".dimmed()
    );
    for item in &items {
        println!(
            "{:<12} {:<40} {:<6} {}",
            item.id.cyan(),
            format::truncate(&item.title, TITLE_WIDTH),
            item.year,
            item.kind.to_string().magenta()
        );
    }
    if items.len() < total {
        println!(
            "{}",
            format!("... {} more (raise --limit)", total - items.len()).dimmed()
        );
    }

    Ok(())
}

fn print_empty(query: &Query, json: bool) {
    if json {
        println!("[]");
    } else {
        println!("{}", format::empty_state_message(query.as_str()).dimmed());
    }
}

pub async fn cmd_show(config: &MarqueeConfig, id: &str, json: bool) -> Result<()> {
    let id = validate_identifier(id)?;
    let client = OmdbClient::from_config(&config.api).context("failed to create OMDb client")?;

    let record = client
        .details(&id)
        .await
        .with_context(|| format!("could not load details for {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_detail(&DetailView::from_record(&record));
    Ok(())
}

fn print_detail(view: &DetailView) {
    println!("{}", view.title.bold());
    println!("{}", view.meta_line().dimmed());
    println!("{}", view.genres.join(", ").magenta());
    println!();

    println!("{}", view.plot);
    println!();

    println!("{}", "--- Details ---".dimmed());
    println!("  {}  {}", "ID:".dimmed(), view.id.cyan());
    println!("  {}  {}", "Director:".dimmed(), view.director);
    println!("  {}  {}", "Writer:".dimmed(), view.writer);
    println!("  {}  {}", "Actors:".dimmed(), view.actors);
    if view.has_poster {
        println!("  {}  {}", "Poster:".dimmed(), view.poster);
    } else {
        println!("  {}  {}", "Poster:".dimmed(), view.poster.dimmed());
    }

    println!();
    println!("{}", "--- Ratings ---".dimmed());
    println!("  {}  {}", "IMDb:".dimmed(), colored_rating(view));
    for (source, value) in view.secondary_ratings() {
        println!("  {}  {}", format!("{source}:").dimmed(), value);
    }
}

fn colored_rating(view: &DetailView) -> String {
    match view.rating_class {
        RatingClass::High => view.rating.green().to_string(),
        RatingClass::Medium => view.rating.yellow().to_string(),
        RatingClass::Low => view.rating.red().to_string(),
        RatingClass::Unrated => view.rating.dimmed().to_string(),
    }
}
