use colored::Colorize;

pub mod domain;
pub mod lookup;
pub mod report;

pub use domain::normalize_domain;
pub use lookup::execute_lookup;

pub fn print_banner() {
    println!(
        "{} {}",
        "seoscope".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!("{}\n", "domain traffic & SEO metrics".bright_white());
}
