use std::path::Path;

use pathforge_core::path;

pub fn run(target: &str, base: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let relative = match base {
        Some(base) => path::relative_path_from(target, base),
        None => path::relative_path(target),
    };
    println!("{relative}");
    Ok(())
}
