use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonesift_core::domain::{normalize_phone_text, CanonicalPhone, Rejection};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Raw values, exactly as they would appear in a cell
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<CanonicalPhone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<Rejection>,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let results: Vec<CheckResult> = args
        .values
        .into_iter()
        .map(|input| match normalize_phone_text(&input) {
            Ok(phone) => CheckResult {
                input,
                phone: Some(phone),
                rejected: None,
            },
            Err(rejection) => CheckResult {
                input,
                phone: None,
                rejected: Some(rejection),
            },
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    for result in results {
        match (result.phone, result.rejected) {
            (Some(phone), _) => println!("{:?} -> {}", result.input, phone),
            (None, Some(rejection)) => println!("{:?} -> rejected: {}", result.input, rejection),
            (None, None) => {}
        }
    }
    Ok(())
}
