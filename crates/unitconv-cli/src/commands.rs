use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::{info_span, warn};

use unitconv_cli::render::{render_canonicalization, render_view};
use unitconv_cli::router::{Route, resolve};
use unitconv_cli::views::{NotFoundView, View, render_route};
use unitconv_client::{
    API_URL_ENV, ClientConfig, ClientError, HttpUnitClient, TIMEOUT_ENV, UnitSource,
};
use unitconv_text::Canonicalization;

use crate::cli::{Cli, NormalizeArgs, OpenArgs, UnitArgs};

/// Exit code for a failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a path that matched no route.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Client configuration: defaults, then environment, then flags.
pub fn client_config(cli: &Cli) -> Result<ClientConfig> {
    client_config_with(cli, |key| std::env::var(key).ok())
}

/// Same as [`client_config`] with an explicit environment lookup.
///
/// An environment key is not even read when its flag is set, so a broken
/// variable cannot fail a command that overrides it.
fn client_config_with<F>(cli: &Cli, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let set_by_flag = |key: &str| match key {
        API_URL_ENV => cli.api_url.is_some(),
        TIMEOUT_ENV => cli.timeout_secs.is_some(),
        _ => false,
    };
    let mut config = ClientConfig::default()
        .apply_overrides(|key| if set_by_flag(key) { None } else { lookup(key) })
        .context("read client configuration")?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

pub fn run_open(cli: &Cli, args: &OpenArgs) -> Result<i32> {
    let route = resolve(&args.path);
    show_route(cli, &route, args.value.as_deref())
}

pub fn run_units(cli: &Cli) -> Result<i32> {
    show_route(cli, &Route::Home, None)
}

pub fn run_unit(cli: &Cli, args: &UnitArgs) -> Result<i32> {
    show_route(cli, &Route::converter(args.name.as_str()), args.value.as_deref())
}

pub fn run_normalize(cli: &Cli, args: &NormalizeArgs) -> Result<i32> {
    for value in &args.values {
        let stages = Canonicalization::of(value);
        if cli.json {
            println!("{}", normalize_json(&stages));
        } else {
            println!("{}", render_canonicalization(&stages, args.steps));
        }
    }
    Ok(0)
}

/// JSON record printed by `normalize --json`.
fn normalize_json(stages: &Canonicalization) -> Value {
    json!({
        "raw": stages.raw,
        "compact": stages.compact,
        "canonical": stages.canonical,
        "changed": stages.changed(),
    })
}

fn show_route(cli: &Cli, route: &Route, value: Option<&str>) -> Result<i32> {
    let span = info_span!("route", path = %route.path());
    let _guard = span.enter();

    let view = route_view(route, value, || {
        let config = client_config(cli)?;
        Ok(HttpUnitClient::new(&config)?)
    })?;

    print_view(cli, &view)?;
    Ok(view_exit_code(&view))
}

/// Build the view for a route, connecting to the backend only if needed.
///
/// The not-found route never calls `connect`, so a bad `--api-url` does not
/// mask the 404.
fn route_view<S, F>(route: &Route, value: Option<&str>, connect: F) -> Result<View>
where
    S: UnitSource,
    F: FnOnce() -> Result<S>,
{
    let view = match route {
        Route::NotFound { path } => View::NotFound(NotFoundView { path: path.clone() }),
        Route::Home | Route::Converter { .. } => {
            let source = connect()?;
            render_route(route, &source, value)?
        }
    };
    Ok(view)
}

fn view_exit_code(view: &View) -> i32 {
    if view.is_not_found() {
        warn!("no route matched");
        EXIT_NOT_FOUND
    } else {
        0
    }
}

fn print_view(cli: &Cli, view: &View) -> Result<()> {
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(view).context("serialize view")?
        );
    } else {
        println!("{}", render_view(view));
    }
    Ok(())
}

/// Report a command's outcome on stderr and turn it into an exit code.
pub fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            eprintln!("error: {}", error_message(&error));
            EXIT_FAILURE
        }
    }
}

fn error_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ClientError>() {
        Some(client_error) => {
            if client_error.is_retryable() {
                warn!("request failed but may succeed if retried");
            }
            format!("{} ({client_error})", client_error.user_message())
        }
        None => format!("{error:#}"),
    }
}
