//! # Shelf CLI
//!
//! The binary is a thin presentation layer over `shelfapp`: it turns command
//! line arguments into a filter form, hands it to the API and renders the
//! resulting listing. No filtering rules live here.
//!
//! ```text
//! shelf list                               # every product
//! shelf list price greater_than 10         # one clause
//! shelf list category in "tools, kitchen"  # `in` takes separated values
//! shelf list color none                    # `any` / `none` take no value
//! shelf properties                         # what can be filtered
//! shelf operators price                    # which operators apply
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
