mod styling;
mod summary;
mod tables;

pub use summary::print_summary;

use styling::{dim, magenta_bold};

/// Prints the `PipeSage` banner to stderr.
///
/// Displays the tool name, version, and description at the start of
/// execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("🔮 PipeSage"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("CI/CD Failure Prediction Tool")
    );
}
