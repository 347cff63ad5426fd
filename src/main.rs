//! gdcpp CLI entry point

fn main() {
    gdcpp::cli::run();
}
