//! Vehicle classes and the specifications that recognise them.

use std::fmt;

use clap::ValueEnum;
use litespec_core::{Evaluate, SatisfactionResult, Specification};

use crate::fleet::Observation;

/// A kind of vehicle an observation may be evidence of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VehicleClass {
    Car,
    Motorcycle,
    Skateboard,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Car,
        VehicleClass::Motorcycle,
        VehicleClass::Skateboard,
    ];

    /// One-line description of what the class requires.
    pub fn requirement(self) -> &'static str {
        match self {
            VehicleClass::Car => "an engine and exactly 4 wheels",
            VehicleClass::Motorcycle => "an engine and exactly 2 wheels",
            VehicleClass::Skateboard => "no engine and exactly 4 wheels",
        }
    }

    /// The specification an observation must satisfy to be this class.
    pub fn specification(self) -> Specification<Observation> {
        match self {
            VehicleClass::Car => can_be_car(),
            VehicleClass::Motorcycle => Specification::predicate(
                |o: &Observation| o.engine && o.wheels == 2,
                "It can not be a motorcycle.",
            ),
            VehicleClass::Skateboard => Specification::from_rule(CanBeSkateboard),
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleClass::Car => write!(f, "car"),
            VehicleClass::Motorcycle => write!(f, "motorcycle"),
            VehicleClass::Skateboard => write!(f, "skateboard"),
        }
    }
}

/// Checks engine first, then wheel count, reporting the first problem.
fn can_be_car() -> Specification<Observation> {
    Specification::new(|o: &Observation| {
        if !o.engine {
            return SatisfactionResult::because("A car must have an engine.");
        }
        if o.wheels != 4 {
            return SatisfactionResult::because("A car must have 4 wheels.");
        }
        SatisfactionResult::satisfied()
    })
}

struct CanBeSkateboard;

impl Evaluate<Observation> for CanBeSkateboard {
    fn evaluate(&self, item: &Observation) -> SatisfactionResult {
        if !item.engine && item.wheels == 4 {
            return SatisfactionResult::satisfied();
        }
        SatisfactionResult::because("No engines are allowed and only 4 wheels are applicable.")
    }
}

/// Build the rule for a classification run.
///
/// An observation passes when it matches any of `accept` (every observation
/// matches when `accept` is empty) and none of `exclude`.
pub fn build_rule(accept: &[VehicleClass], exclude: &[VehicleClass]) -> Specification<Observation> {
    let accepted = accept
        .iter()
        .map(|class| class.specification())
        .reduce(|acc, spec| acc.or(&spec))
        .unwrap_or_default();

    let rejected = Specification::all_of(
        exclude
            .iter()
            .map(|class| class.specification().not(format!("Looks like a {class}."))),
    );

    accepted.and(&rejected)
}
