mod cli;

fn main() {
    // Run the CLI
    cli::run();
}
