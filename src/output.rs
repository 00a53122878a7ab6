use crate::angle::AngleUnit;
use crate::batch::Conversion;
use crate::errors::GonioError;
use serde_json::{json, Value};

pub fn render_plain(conversions: &[Conversion], precision: Option<usize>) -> String {
    let mut text = String::new();
    for conversion in conversions {
        let line = match precision {
            Some(precision) => format!("{:.*}", precision, conversion.output),
            None => format!("{}", conversion.output),
        };
        text.push_str(&line);
        text.push('\n');
    }
    text
}

// JSON has no NaN or Infinity, those become null.
fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

pub fn render_json(conversions: &[Conversion], from: AngleUnit) -> Result<String, GonioError> {
    let items: Vec<Value> = conversions
        .iter()
        .map(|c| json!({ "input": number(c.input), "output": number(c.output) }))
        .collect();

    let document = json!({
        "from": from.to_string(),
        "to": from.other().to_string(),
        "conversions": items,
    });

    serde_json::to_string_pretty(&document)
        .map_err(|e| GonioError::Output(e.to_string()))
}
