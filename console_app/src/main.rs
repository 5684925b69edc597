//! Main entry point for the interactive console binary
//!
//! Builds the demo page, binds the five triggers, then maps stdin commands
//! onto trigger dispatches the way a user would click buttons and submit
//! forms.

use anyhow::Result;
use client_lib::{ids, App, AppConfig, EventBindings, Page, Trigger, UiPort};
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("API base URL: {}", config.api.base_url);

    let page = build_page();
    let app = Arc::new(App::new(Arc::new(page.clone()), config));

    info!("App: {} v{}", app.app_name, app.version);

    let bindings = app.bind_events();

    print_help();

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["show"] => print_page(&page),
            ["fetch"] => {
                dispatch(&bindings, Trigger::FetchButton).await;
                print_sink(&page, ids::GET_RESULTS);
            }
            ["xhr"] => {
                dispatch(&bindings, Trigger::XhrButton).await;
                print_sink(&page, ids::GET_RESULTS);
            }
            ["post", title, body @ ..] => {
                page.set_input("post-title", title);
                page.set_input("post-body", &body.join(" "));
                dispatch(&bindings, Trigger::PostForm).await;
                print_sink(&page, ids::POST_RESULTS);
            }
            ["put", id, title, body @ ..] => {
                page.set_input("put-id", id);
                page.set_input("put-title", title);
                page.set_input("put-body", &body.join(" "));
                dispatch(&bindings, Trigger::PutForm).await;
                print_sink(&page, ids::PUT_RESULTS);
            }
            ["delete", id] => {
                page.set_input(ids::DELETE_ID, id);
                dispatch(&bindings, Trigger::DeleteForm).await;
                print_sink(&page, ids::DELETE_RESULTS);
            }
            _ => println!("Unrecognized command; type 'help' for the list"),
        }

        print_banner(&page);
    }

    info!("Console shutdown complete");
    Ok(())
}

async fn dispatch(bindings: &EventBindings, trigger: Trigger) {
    if let Err(e) = bindings.dispatch(trigger).await {
        error!("Handler failed: {}", e);
    }
}

fn build_page() -> Page {
    Page::new()
        .with_element(ids::FETCH_BTN)
        .with_element(ids::XHR_BTN)
        .with_element(ids::POST_FORM)
        .with_element(ids::PUT_FORM)
        .with_element(ids::DELETE_FORM)
        .with_element(ids::GET_RESULTS)
        .with_element(ids::POST_RESULTS)
        .with_element(ids::PUT_RESULTS)
        .with_element(ids::DELETE_RESULTS)
        .with_element(ids::ERROR_BANNER)
        .with_element(ids::ERROR_TYPE)
        .with_element(ids::ERROR_MESSAGE)
        .with_input(ids::DELETE_ID, "")
}

fn print_help() {
    println!("Commands:");
    println!("  fetch                     GET the fetch demo post");
    println!("  xhr                       GET the xhr demo post");
    println!("  post <title> [body...]    create a post");
    println!("  put <id> <title> [body..] replace a post");
    println!("  delete <id>               delete a post");
    println!("  show                      print all result sinks");
    println!("  help | quit");
}

fn print_sink(page: &Page, sink: &str) {
    match page.content(sink) {
        Some(content) if !content.is_empty() => println!("[{}]\n{}", sink, content),
        _ => println!("[{}] (empty)", sink),
    }
}

fn print_page(page: &Page) {
    for sink in [
        ids::GET_RESULTS,
        ids::POST_RESULTS,
        ids::PUT_RESULTS,
        ids::DELETE_RESULTS,
    ] {
        print_sink(page, sink);
    }
}

fn print_banner(page: &Page) {
    if page.is_visible(ids::ERROR_BANNER) == Some(true) {
        println!(
            "!! {}: {}",
            page.text(ids::ERROR_TYPE).unwrap_or_default(),
            page.text(ids::ERROR_MESSAGE).unwrap_or_default()
        );
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };

        format!(
            "{}={},client_lib={}",
            env!("CARGO_CRATE_NAME").replace('-', "_"),
            default_level,
            default_level
        )
        .into()
    });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
