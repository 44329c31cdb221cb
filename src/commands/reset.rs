use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use guestlist_core::Session;

pub fn run(session_dir: &Path) -> Result<()> {
    if Session::clear(session_dir)? {
        println!("Cleared the saved event and guest identity");
    } else {
        println!("{}", "Nothing to clear".dimmed());
    }

    Ok(())
}
