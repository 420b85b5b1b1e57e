use crate::domain::models::{JsonErr, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_err(json: bool, message: &str, row: impl Fn(&str) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonErr {
                ok: false,
                error: message.to_string(),
            })?
        );
    } else {
        println!("{}", row(message));
    }
    Ok(())
}
