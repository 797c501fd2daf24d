mod svg_format;

use chrono::NaiveDate;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

pub use svg_format::SvgFormat;

/// Writes an svg image into a file.
pub fn save_as_svg<P: AsRef<Path>>(path: P, svg: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(svg.as_bytes())?;
    Ok(())
}

/// Returns a date-stamped chart file name, e.g. `rod_cutting_2024-03-01.svg`.
pub fn chart_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.svg", prefix, date.format("%Y-%m-%d"))
}

/// Joins `dir` with the date-stamped chart file name.
pub fn chart_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(chart_file_name(prefix, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_file_name() {
        let date = NaiveDate::from_ymd_opt(2021, 9, 4).unwrap();
        assert_eq!(chart_file_name("rod_cutting", date), "rod_cutting_2021-09-04.svg");
        assert_eq!(
            chart_path(Path::new("/tmp/charts"), "times", date),
            PathBuf::from("/tmp/charts/times_2021-09-04.svg")
        );
    }

    #[test]
    fn test_save_as_svg() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join("rod_cutting_test_chart.svg");
        save_as_svg(&path, "<svg></svg>")?;
        assert_eq!(std::fs::read_to_string(&path)?, "<svg></svg>");
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
