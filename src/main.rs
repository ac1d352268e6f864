use menu_rolodex::prelude::run_app;
use std::process::exit;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
