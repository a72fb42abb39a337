//! `clipkit code` – print fresh access codes.

use anyhow::Result;
use clipkit_core::generate_access_code;

pub fn run_code(count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", generate_access_code()?);
    }
    Ok(())
}
