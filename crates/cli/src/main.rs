fn main() {
    if let Err(e) = pathforge_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
