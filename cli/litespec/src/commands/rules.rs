//! `litespec rules` — list the known vehicle classes.

use anyhow::Result;

use crate::vehicle::VehicleClass;

/// Print every vehicle class and what it requires.
pub fn run() -> Result<()> {
    println!("{:<12} REQUIRES", "CLASS");
    for class in VehicleClass::ALL {
        println!("{:<12} {}", class.to_string(), class.requirement());
    }
    Ok(())
}
