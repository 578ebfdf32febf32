pub mod current;
pub mod flood;
pub mod minutely;

use std::path::PathBuf;

use chrono::{Datelike, Local};
pub use current::current;
pub use flood::flood;
pub use minutely::minutely;

pub fn make_output_file_name(dataset: &str, extension: &str) -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "{}-{}-{:02}-{:02}.{}",
        dataset,
        today.year(),
        today.month(),
        today.day(),
        extension
    );

    dirs::home_dir().unwrap().join(file_name)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn should_make_output_file_name() {
        let path = make_output_file_name("kma-current", "json");
        let name = path.file_name().unwrap().to_string_lossy();

        assert!(name.starts_with("kma-current-"));
        assert!(name.ends_with(".json"));
    }
}
