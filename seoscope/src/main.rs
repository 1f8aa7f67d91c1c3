use colored::Colorize;
use seoscope::commands::command_argument_builder;
use seoscope::handlers::{LookupOptions, ServeOptions, handle_lookup, handle_serve, init_tracing};
use seoscope_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let outcome = match chosen_command.subcommand() {
        Some(("lookup", primary_command)) => {
            init_tracing("warn");
            match LookupOptions::from_matches(primary_command) {
                Ok(options) => handle_lookup(options).await,
                Err(e) => Err(e),
            }
        }
        Some(("serve", primary_command)) => {
            init_tracing("info");
            handle_serve(ServeOptions::from_matches(primary_command)).await
        }
        // Serving is the default so the binary can run as a plain service
        None => {
            init_tracing("info");
            handle_serve(ServeOptions::from_matches(&chosen_command)).await
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
