use crate::angle::{convert, AngleUnit};
use crate::errors::GonioError;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Conversion {
    pub input: f64,
    pub output: f64,
}

/// Parses a list of numbers separated by whitespace or commas. Lines
/// starting with `#` are comments.
pub fn parse_values(text: &str) -> Result<Vec<f64>, GonioError> {
    let mut values = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| {
                GonioError::InvalidNumber {
                    token: token.to_string(),
                    line: line_index + 1,
                }
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

pub fn read_values(path: &Path) -> Result<Vec<f64>, GonioError> {
    let text = fs::read_to_string(path).map_err(|source| GonioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_values(&text)?;
    tracing::debug!("read {} values from {}", values.len(), path.display());
    Ok(values)
}

/// Converts every value from `from` units in parallel, keeping input order.
pub fn convert_all(values: &[f64], from: AngleUnit) -> Vec<Conversion> {
    tracing::debug!("converting {} values from {}", values.len(), from);

    values
        .par_iter()
        .map(|&input| Conversion {
            input,
            output: convert(input, from),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::{deg_to_rad, rad_to_deg};
    use std::io::Write;

    #[test]
    fn parsing_mixed_separators_and_comments() {
        let text = "# header\n180, 90\n-45\t0.5\n\n  # indented comment\nNaN inf -inf\n";
        let values = parse_values(text).unwrap();

        assert_eq!(values.len(), 7);
        assert_eq!(&values[..4], &[180., 90., -45., 0.5]);
        assert!(values[4].is_nan());
        assert_eq!(values[5], f64::INFINITY);
        assert_eq!(values[6], f64::NEG_INFINITY);
    }

    #[test]
    fn empty_input_gives_no_values() {
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values(" \n,,\n# only a comment").unwrap().is_empty());
    }

    #[test]
    fn bad_token_reports_its_line() {
        let error = parse_values("1 2\n3 abc 4").unwrap_err();
        assert!(matches!(
            &error,
            GonioError::InvalidNumber { token, line: 2 } if token == "abc"
        ));
    }

    #[test]
    fn reading_values_from_file() {
        let path = std::env::temp_dir()
            .join(format!("gonio-batch-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "30\n60, 90").unwrap();
        drop(file);

        let values = read_values(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(values, vec![30., 60., 90.]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("does/not/exist.txt");
        let error = read_values(path).unwrap_err();
        assert!(matches!(error, GonioError::Io { .. }));
        assert!(error.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn batch_conversion_keeps_order() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64 - 500.).collect();

        let conversions = convert_all(&values, AngleUnit::Degrees);
        assert_eq!(conversions.len(), values.len());
        for (conversion, &value) in conversions.iter().zip(values.iter()) {
            assert_eq!(conversion.input, value);
            assert_eq!(conversion.output, deg_to_rad(value));
        }

        let conversions = convert_all(&values, AngleUnit::Radians);
        for (conversion, &value) in conversions.iter().zip(values.iter()) {
            assert_eq!(conversion.output, rad_to_deg(value));
        }
    }
}
