use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    nixchat::cli::main()
}
