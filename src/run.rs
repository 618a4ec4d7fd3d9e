//! Application run modes: logger init, subcommands, TUI launch.

use std::error::Error;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::CommandFactory;
use crossterm::style::{ContentStyle, Stylize};

use crate::cli::{self, Args, Commands};
use crate::core;
use crate::core::config::Config;
use crate::core::contract::{ResultEntry, ServerResponse};
use crate::core::highlight::{self, Category};
use crate::core::request::{self, HttpRequest, RequestError};
use crate::core::snippets::{self, SnippetLang};

type RunResult = Result<(), Box<dyn Error>>;

fn log_file_path() -> Option<PathBuf> {
    core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)))
}

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = log_file_path()
        && path.parent().is_some_and(|d| std::fs::create_dir_all(d).is_ok())
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = logger.try_init();
}

/// Run the selected subcommand (or the TUI when there is none).
pub async fn run(args: Args, config: Config) -> RunResult {
    match args.command {
        None => launch_tui(config, SnippetLang::Python).await,
        Some(Commands::Snippets { lang }) => launch_tui(config, lang).await,
        Some(Commands::Snippet {
            lang,
            copy,
            no_color,
        }) => {
            let code = snippets::snippet(lang, &config.base_url);
            print_highlighted(&code, use_color(no_color))?;
            if copy {
                if core::clipboard::copy_to_clipboard(&code) {
                    eprintln!("{}", core::clipboard::copied_notice());
                } else {
                    log::info!("Snippet not copied: clipboard unavailable");
                }
            }
            Ok(())
        }
        Some(Commands::Highlight {
            file,
            json,
            no_color,
        }) => {
            let source = read_file_or_stdin(file.as_deref())?;
            if json {
                let tokens = highlight::tokenize(&source);
                println!("{}", serde_json::to_string_pretty(&tokens)?);
                Ok(())
            } else {
                print_highlighted(&source, use_color(no_color))
            }
        }
        Some(Commands::Normalize { input, pretty }) => {
            let raw = read_input(input.as_deref())?;
            let payload =
                core::normalize::normalize_input(&raw).ok_or(RequestError::EmptyInput)?;
            let out = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                payload.to_body()?
            };
            println!("{}", out);
            Ok(())
        }
        Some(Commands::Request { input, key, curl }) => {
            let raw = read_input(input.as_deref())?;
            let config = config.with_api_key(key);
            print_request(&request::inference_request(&config, &raw)?, curl);
            Ok(())
        }
        Some(Commands::Results { key, curl }) => {
            let config = config.with_api_key(key);
            print_request(&request::results_request(&config)?, curl);
            Ok(())
        }
        Some(Commands::Response { file }) => {
            let body = read_file_or_stdin(file.as_deref())?;
            print_response(ServerResponse::parse(body.trim())?)
        }
        Some(Commands::Config) => {
            print_config(&config);
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            cli::generate(
                shell,
                &mut Args::command(),
                core::app::NAME,
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

/// Read a positional input argument; `-` or a missing argument reads stdin.
fn read_input(arg: Option<&str>) -> io::Result<String> {
    match arg {
        Some(s) if s != "-" => Ok(s.to_string()),
        _ => read_stdin(),
    }
}

fn read_file_or_stdin(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p),
        _ => read_stdin(),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// Terminal style per token category.
fn ansi_style(category: Category) -> ContentStyle {
    let style = ContentStyle::new();
    match category {
        Category::Comment => style.dark_grey().italic(),
        Category::String => style.green(),
        Category::Keyword => style.magenta().bold(),
        Category::Builtin => style.blue(),
        Category::Plain => style,
    }
}

fn print_highlighted(source: &str, color: bool) -> RunResult {
    let mut out = io::stdout().lock();
    if color {
        for token in highlight::tokenize(source) {
            write!(out, "{}", ansi_style(token.category).apply(token.text))?;
        }
    } else {
        out.write_all(source.as_bytes())?;
    }
    if !source.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_request(req: &HttpRequest, curl: bool) {
    if curl {
        println!("{}", req.to_curl());
    } else {
        println!("{}", req);
    }
}

fn format_entry(entry: &ResultEntry) -> String {
    let when = entry
        .timestamp()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| entry.ts.to_string());
    format!("{}  {}", when, entry.result)
}

fn print_response(response: ServerResponse) -> RunResult {
    match response {
        ServerResponse::Submitted(resp) => {
            println!("ok: {}", resp.ok);
            println!("{}", format_entry(&resp.entry));
            Ok(())
        }
        ServerResponse::Results(resp) => {
            if resp.results.is_empty() {
                println!("No results yet.");
            }
            for entry in &resp.results {
                println!("{}", format_entry(entry));
            }
            Ok(())
        }
        ServerResponse::Error(err) => Err(format!("Server error: {}", err.error).into()),
    }
}

fn print_config(config: &Config) {
    println!("Base URL:  {}", config.base_url);
    match &config.api_key {
        Some(key) => {
            let tail: String = key
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            println!("API key:   set (…{})", tail);
        }
        None => println!("API key:   not set (APEX_API_KEY)"),
    }
    if let Some(path) = log_file_path() {
        println!("TUI log:   {}", path.display());
    }
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
async fn launch_tui(config: Config, lang: SnippetLang) -> RunResult {
    let config = Arc::new(config);
    let rt = tokio::runtime::Handle::current();
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, lang, rt)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(io::Error::other("TUI thread panicked")) as Box<dyn Error>);
        }
    }
    Ok(())
}
