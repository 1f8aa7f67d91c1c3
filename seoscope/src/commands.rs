use clap::{arg, command};
use seoscope_scanner::fetcher::DEFAULT_UPSTREAM_TEMPLATE;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("seoscope")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("seoscope")
        .about("Scrapes SEO metrics for a domain and serves them as JSON")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-p --"port" <PORT>)
                .required(false)
                .help("Port the HTTP API listens on")
                .env("PORT")
                .value_parser(clap::value_parser!(u16))
                .default_value("7860")
                .global(true),
        )
        .arg(
            arg!(-b --"bind" <ADDR>)
                .required(false)
                .help("Interface address the HTTP API binds to")
                .env("SEOSCOPE_BIND")
                .default_value("0.0.0.0")
                .global(true),
        )
        .arg(
            arg!(--"upstream" <TEMPLATE>)
                .required(false)
                .help("Upstream page URL; {domain} is replaced by the looked-up domain")
                .env("SEOSCOPE_UPSTREAM")
                .default_value(DEFAULT_UPSTREAM_TEMPLATE)
                .global(true),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Upstream request timeout in seconds")
                .env("SEOSCOPE_TIMEOUT_SECS")
                .value_parser(clap::value_parser!(u64))
                .default_value("30")
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(command!("serve").about("Run the HTTP API (the default when no subcommand is given)"))
        .subcommand(
            command!("lookup")
                .about("Look up a single domain and print its report")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("Domain or URL to look up"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
