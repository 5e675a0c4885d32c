//! # plr-organize CLI
//!
//! Command-line interface for the PLR content organizer.
//!
//! ## Usage
//! ```bash
//! plr-organize plan library.json --output ~/PLR --structure niche
//! plr-organize plan library.json --config organize.json --format json
//! ```

mod cli;

use plr_organizer::Result;

fn main() -> Result<()> {
    plr_organizer::init_tracing();
    cli::run()
}
