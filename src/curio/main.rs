use clap::Parser;
use colored::Colorize;
use console::Term;
use curio::aic::{self, AicClient, ImageWidth};
use curio::api::CurioApi;
use curio::config::CurioConfig;
use curio::error::Result;
use curio::featured::{pick_topic, Rotation, RotationTimer};
use curio::model::Artwork;
use curio::store::fs::FileBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_artworks, print_gallery, print_messages, truncate_to_width};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: CurioApi<FileBackend>,
    config: CurioConfig,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Search { query, limit }) => {
            handle_search(&ctx, query.join(" "), limit).await
        }
        Some(Commands::Save { id }) => handle_save(&mut ctx, id).await,
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Note { id, text }) => handle_note(&mut ctx, id, text.join(" ")),
        Some(Commands::Image { id, width }) => handle_image(&ctx, id, width.into()).await,
        Some(Commands::Featured {
            cycles,
            interval,
            topic,
        }) => handle_featured(&ctx, cycles, interval, topic).await,
        None => handle_list(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    // CURIO_HOME lets tests (and the curious) relocate all state
    let data_dir = match std::env::var_os("CURIO_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "curio", "curio")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = CurioConfig::load(&data_dir).unwrap_or_default();

    let client = match std::env::var("CURIO_API_BASE") {
        Ok(base) => AicClient::with_base_url(base),
        Err(_) => AicClient::new(),
    };

    let api = CurioApi::new(FileBackend::new(data_dir), client);
    Ok(AppContext { api, config })
}

async fn handle_search(ctx: &AppContext, query: String, limit: Option<u32>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.search_limit);
    let result = ctx.api.search(&query, limit).await?;
    print_messages(&result.messages);
    print_artworks(&result.artworks, &result.items);
    Ok(())
}

async fn handle_save(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.save(id).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_messages(&result.messages);
    print_gallery(&result.items);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.remove(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, id: i64, text: String) -> Result<()> {
    let result = ctx.api.update_note(id, &text)?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_image(ctx: &AppContext, id: i64, width: ImageWidth) -> Result<()> {
    let url = ctx.api.image_url(id, width).await?;
    println!("{}", url);
    Ok(())
}

async fn handle_featured(
    ctx: &AppContext,
    cycles: u32,
    interval: Option<f64>,
    topic: Option<String>,
) -> Result<()> {
    let topic = topic.unwrap_or_else(|| pick_topic(None).to_string());
    let result = ctx
        .api
        .featured_preview(&topic, ctx.config.featured_count)
        .await?;
    let preview = result.artworks;

    if preview.is_empty() {
        println!("Nothing to feature for \"{}\".", topic);
        return Ok(());
    }

    println!("{} {}", "Featured:".bold(), topic);

    let term = Term::stdout();
    let period = interval
        .map(Duration::from_secs_f64)
        .unwrap_or_else(|| Duration::from_millis(ctx.config.rotation_millis));

    let mut rotation = Rotation::new(preview.len());
    show_featured(&term, &preview[rotation.current()]);

    if preview.len() < 2 || cycles == 0 {
        return Ok(());
    }

    let (tx, mut rx) = mpsc::channel(1);
    let mut timer = RotationTimer::start(period, tx);
    for _ in 0..cycles {
        if rx.recv().await.is_none() {
            break;
        }
        let _ = term.clear_last_lines(2);
        show_featured(&term, &preview[rotation.advance()]);
    }
    timer.stop();

    Ok(())
}

fn show_featured(term: &Term, art: &Artwork) {
    let title = truncate_to_width(&art.title, 80);
    let _ = term.write_line(&format!("  {} {}", title.bold(), format!("— {}", art.artist).dimmed()));
    let url = art
        .image_id
        .as_deref()
        .map(|id| aic::iiif_image_url(id, ImageWidth::Hero))
        .unwrap_or_default();
    let _ = term.write_line(&format!("  {}", url.dimmed()));
}
