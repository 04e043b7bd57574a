//! `litespec classify` — judge every observation in a fleet file.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use litespec_core::{MatchingExt, SatisfactionResult};
use serde::Serialize;

use crate::fleet::Fleet;
use crate::vehicle::{build_rule, VehicleClass};

/// How classification results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// The outcome for one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub name: String,
    #[serde(flatten)]
    pub result: SatisfactionResult,
}

/// Options for a classification run.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub accept: Vec<VehicleClass>,
    pub exclude: Vec<VehicleClass>,
    pub format: OutputFormat,
    pub matching_only: bool,
}

/// Judge every observation in `fleet` against the rule built from `options`.
///
/// With `matching_only`, observations that fail are left out.
pub fn classify(fleet: &Fleet, options: &ClassifyOptions) -> Vec<Verdict> {
    let rule = build_rule(&options.accept, &options.exclude);
    tracing::debug!(kind = %rule.kind(), "built classification rule");

    if options.matching_only {
        return fleet
            .observations
            .iter()
            .matching(&rule)
            .map(|observation| Verdict {
                name: observation.name.clone(),
                result: SatisfactionResult::satisfied(),
            })
            .collect();
    }

    fleet
        .observations
        .iter()
        .map(|observation| {
            let result = rule.evaluate(observation);
            tracing::trace!(name = %observation.name, %result, "evaluated observation");
            Verdict {
                name: observation.name.clone(),
                result,
            }
        })
        .collect()
}

/// Render verdicts in the requested format.
pub fn render(verdicts: &[Verdict], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(verdicts).context("serializing verdicts")
        }
        OutputFormat::Human => {
            let mut out = String::new();
            for verdict in verdicts {
                out.push_str(&format!("{}: {}\n", verdict.name, verdict.result));
            }
            let passed = verdicts.iter().filter(|v| v.result.is_satisfied()).count();
            out.push_str(&format!("{passed}/{} satisfied\n", verdicts.len()));
            Ok(out)
        }
    }
}

pub fn run(input: &Path, options: &ClassifyOptions) -> Result<()> {
    let fleet = Fleet::load(input)?;
    tracing::info!(
        observations = fleet.observations.len(),
        accept = ?options.accept,
        exclude = ?options.exclude,
        "classifying fleet"
    );
    let verdicts = classify(&fleet, options);
    print!("{}", render(&verdicts, options.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLEET: &str = r#"
[[observation]]
name = "sedan"
wheels = 4
engine = true

[[observation]]
name = "board"
wheels = 4

[[observation]]
wheels = 2
engine = true
"#;

    fn options(accept: &[VehicleClass]) -> ClassifyOptions {
        ClassifyOptions {
            accept: accept.to_vec(),
            ..ClassifyOptions::default()
        }
    }

    #[test]
    fn every_observation_gets_a_verdict() {
        let fleet = Fleet::parse(FLEET).unwrap();
        let verdicts = classify(&fleet, &options(&[VehicleClass::Car]));

        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].result.is_satisfied());
        assert_eq!(verdicts[1].result.reasons(), ["A car must have an engine."]);
        assert_eq!(verdicts[2].name, "#3");
        assert_eq!(verdicts[2].result.reasons(), ["A car must have 4 wheels."]);
    }

    #[test]
    fn matching_only_keeps_satisfied() {
        let fleet = Fleet::parse(FLEET).unwrap();
        let opts = ClassifyOptions {
            matching_only: true,
            ..options(&[VehicleClass::Car, VehicleClass::Motorcycle])
        };
        let names: Vec<String> = classify(&fleet, &opts).into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["sedan".to_string(), "#3".to_string()]);
    }

    #[test]
    fn human_output() {
        let fleet = Fleet::parse(FLEET).unwrap();
        let verdicts = classify(&fleet, &options(&[VehicleClass::Skateboard]));
        let text = render(&verdicts, OutputFormat::Human).unwrap();

        assert!(text.contains("board: satisfied"), "{text}");
        assert!(
            text.contains("sedan: not satisfied: No engines are allowed"),
            "{text}"
        );
        assert!(text.ends_with("1/3 satisfied\n"), "{text}");
    }

    #[test]
    fn json_output() {
        let fleet = Fleet::parse(FLEET).unwrap();
        let verdicts = classify(&fleet, &options(&[VehicleClass::Car]));
        let json = render(&verdicts, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "sedan");
        assert_eq!(parsed[0]["satisfied"], true);
        assert_eq!(parsed[1]["reasons"][0], "A car must have an engine.");
    }
}
