use std::io::{self, Read};

use clap::Parser;
use cryptomines_api::codec::JsonCodec;
use cryptomines_api::config::Config;
use cryptomines_api::domains::message::{Message, MessageOptions};
use cryptomines_api::domains::service::{mode_services, Mode, ServiceName, SIMULATOR_SERVICES};
use cryptomines_api::error::{ApiError, Result};
use cryptomines_api::interfaces::codec::MessageCodec;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cryptomines-message")]
#[command(about = "Build and inspect cryptomines service messages")]
struct Cli {
    #[arg(long, env = "CRYPTOMINES_API_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print an encoded message frame
    New {
        #[arg(long)]
        command: String,

        #[arg(long)]
        destination: String,

        #[arg(long, help = "Defaults to the configured service")]
        origin: Option<String>,

        #[arg(long, help = "JSON payload")]
        data: Option<String>,

        #[arg(long, default_value_t = false)]
        ack: bool,

        #[arg(long)]
        request_id: Option<String>,

        #[arg(long, default_value_t = false, help = "Write keys as given")]
        keep_case: bool,
    },
    /// Decode a message frame read from stdin
    Decode {
        #[arg(long, default_value_t = false, help = "Keep payload keys as received")]
        keep_case: bool,
    },
    /// List the services used in a mode
    Services {
        #[arg(long)]
        mode: Option<Mode>,

        #[arg(long, default_value_t = false)]
        simulator: bool,
    },
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cryptomines_api=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::New {
            command,
            destination,
            origin,
            data,
            ack,
            request_id,
            keep_case,
        } => {
            let origin = origin.map(ServiceName::from).unwrap_or_else(|| config.service());
            let mut options = MessageOptions::new(command, origin, destination).ack(ack);
            if let Some(data) = data {
                let data =
                    serde_json::from_str(&data).map_err(|e| ApiError::Parse(e.to_string()))?;
                options = options.data(data);
            }
            if let Some(request_id) = request_id {
                options = options.request_id(request_id);
            }
            let codec = if keep_case {
                JsonCodec::verbatim()
            } else {
                config.codec()
            };
            println!("{}", codec.encode(&Message::new(options))?);
        }
        Commands::Decode { keep_case } => {
            let mut frame = String::new();
            io::stdin()
                .read_to_string(&mut frame)
                .map_err(|e| ApiError::Runtime(e.to_string()))?;
            let mut codec = config.codec();
            if keep_case {
                codec.camel_case_payload = false;
            }
            let message = codec.decode(frame.trim())?;
            print_message(&message)?;
        }
        Commands::Services { mode, simulator } => {
            let services = if simulator || config.simulator.unwrap_or(false) {
                SIMULATOR_SERVICES
            } else {
                mode_services(mode.unwrap_or_else(|| config.mode()))
            };
            for service in services {
                println!("{service}");
            }
        }
    }

    Ok(())
}

fn print_message(message: &Message) -> Result<()> {
    println!("command:     {}", message.command().unwrap_or("<missing>"));
    println!(
        "origin:      {}",
        message
            .origin()
            .map_or_else(|| "<missing>".to_string(), ToString::to_string)
    );
    println!(
        "destination: {}",
        message
            .destination()
            .map_or_else(|| "<missing>".to_string(), ToString::to_string)
    );
    println!("ack:         {}", message.ack());
    println!("request_id:  {}", message.request_id());
    let data = serde_json::to_string_pretty(message.data())
        .map_err(|e| ApiError::Serialization(e.to_string()))?;
    println!("data:\n{data}");
    Ok(())
}
