use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweet_gemirator::client::{
    ClientState, GenerationBackend, GenerationClient, HttpBackend, Phase, SystemClipboard,
};
use tweet_gemirator::models::Config;
use tweet_gemirator::server;

#[derive(Debug, Parser)]
#[command(name = "tweet-gemirator")]
#[command(about = "Generate short social posts from a description")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the generation HTTP service.
    Serve {
        /// Address to bind, overrides BIND_ADDR.
        #[arg(long)]
        addr: Option<String>,
    },
    /// Generate one post and print it.
    Generate {
        description: String,
        /// Server base URL, overrides GENERATOR_SERVER_URL.
        #[arg(long)]
        server: Option<String>,
        /// Also copy the post to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Line-oriented session with history, regenerate and copy.
    Interactive {
        /// Server base URL, overrides GENERATOR_SERVER_URL.
        #[arg(long)]
        server: Option<String>,
    },
}

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Submit(&'a str),
    Regenerate,
    Copy,
    CopyPrevious(usize),
    History,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    match line {
        "/regen" | "/regenerate" => Input::Regenerate,
        "/copy" => Input::Copy,
        "/history" => Input::History,
        "/quit" | "/exit" => Input::Quit,
        cmd if cmd.starts_with("/copy ") => match cmd["/copy ".len()..].trim().parse() {
            Ok(n) => Input::CopyPrevious(n),
            Err(_) => Input::Unknown(cmd),
        },
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        text => Input::Submit(text),
    }
}

fn print_outcome(phase: Option<Phase>, state: &ClientState) {
    match phase {
        Some(Phase::Ready) => {
            if let Some(current) = &state.current {
                println!("\n{}\n", current);
            }
        }
        Some(_) => {
            println!(
                "Error: {}",
                state.error.as_deref().unwrap_or("Failed to generate tweet")
            );
        }
        None => println!("Nothing to send."),
    }
}

fn print_history(state: &ClientState) {
    if !state.history_visible() {
        println!("No history yet.");
        return;
    }
    println!("Tweet History");
    for (i, entry) in state.history.previous().enumerate() {
        println!("  {}. {}", i + 1, entry);
    }
}

async fn interactive<B: GenerationBackend>(client: GenerationClient<B>) -> Result<()> {
    println!("Write your thoughts and press enter. Commands: /regen /copy [N] /history /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Submit(text) => {
                let phase = client.submit(text).await;
                print_outcome(phase, &client.snapshot());
            }
            Input::Regenerate => {
                let phase = client.regenerate().await;
                if phase.is_none() {
                    println!("Nothing to regenerate yet.");
                } else {
                    print_outcome(phase, &client.snapshot());
                }
            }
            Input::Copy => {
                if client.copy_current() {
                    println!("Copied.");
                } else {
                    println!("Nothing to copy yet.");
                }
            }
            Input::CopyPrevious(n) => {
                if client.copy_previous(n) {
                    println!("Copied #{}.", n);
                } else {
                    println!("No history entry #{}.", n);
                }
            }
            Input::History => print_history(&client.snapshot()),
            Input::Quit => break,
            Input::Unknown(cmd) => println!("Unknown command: {}", cmd),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tweet_gemirator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let mut config = Config::from_env()?;

    match args.command {
        Command::Serve { addr } => {
            if let Some(addr) = addr {
                config.bind_addr = addr;
            }
            info!("Starting tweet-gemirator service");
            if let Err(e) = server::run(&config).await {
                error!("Server failed: {}", e);
                std::process::exit(1);
            }
        }
        Command::Generate {
            description,
            server,
            copy,
        } => {
            let backend = HttpBackend::new(server.unwrap_or(config.server_url));
            let client = GenerationClient::new(backend, Box::new(SystemClipboard));
            let phase = client.submit(&description).await;
            let state = client.snapshot();
            print_outcome(phase, &state);
            if phase != Some(Phase::Ready) {
                std::process::exit(1);
            }
            if copy {
                client.copy_current();
            }
        }
        Command::Interactive { server } => {
            let backend = HttpBackend::new(server.unwrap_or(config.server_url));
            info!("Using generation server at {}", backend.base_url());
            interactive(GenerationClient::new(backend, Box::new(SystemClipboard))).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_input, CliArgs, Command, Input};
    use clap::Parser;

    #[test]
    fn test_parse_input_commands() {
        assert_eq!(parse_input("/regen"), Input::Regenerate);
        assert_eq!(parse_input(" /copy "), Input::Copy);
        assert_eq!(parse_input("/copy 2"), Input::CopyPrevious(2));
        assert_eq!(parse_input("/copy two"), Input::Unknown("/copy two"));
        assert_eq!(parse_input("/history"), Input::History);
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("/nope"), Input::Unknown("/nope"));
    }

    #[test]
    fn test_parse_input_text_is_submitted() {
        assert_eq!(
            parse_input("a day at the beach\n"),
            Input::Submit("a day at the beach")
        );
        assert_eq!(parse_input("   "), Input::Submit(""));
    }

    #[test]
    fn test_cli_generate_args() {
        let args = CliArgs::parse_from(["tweet-gemirator", "generate", "hello", "--copy"]);
        match args.command {
            Command::Generate {
                description, copy, ..
            } => {
                assert_eq!(description, "hello");
                assert!(copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
