//! Download command - Derive the notebook ID and print download guidance
//!
//! There is no authenticated fetch here: Colab downloads require a Google
//! login, which is out of scope for this tool. The command resolves the ID
//! and output name, then tells the user how to download manually.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::colab::notebook_id::{self, extract_notebook_id};
use crate::colab::resolve::COLAB_DRIVE_URL;

/// Execute the download command
pub fn execute(url_or_id: &str, output: Option<&str>) -> Result<()> {
    let notebook_id = extract_notebook_id(url_or_id)?;
    let output_path = match output {
        Some(path) => path.to_string(),
        None => notebook_id::default_output_name(&notebook_id),
    };

    println!("Downloading notebook {} to {}", notebook_id, output_path);
    println!(
        "{}",
        "Note: Full download functionality requires Google authentication".yellow()
    );
    println!("Visit: {}/{}", COLAB_DRIVE_URL, notebook_id);
    println!("Then use File > Download > .ipynb to save the notebook");

    Ok(())
}
