//! Student Roster - Binary Entry Point
//!
//! Drives the registry the way a presentation layer would and logs what
//! happens. Set `RUST_LOG=debug` to see every committed mutation.

use student_roster::{
    Gender, Placement, RecordRegistry, RegistryConfig, RegistryError, SharedRegistry, Student,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("student roster starting");

    let registry: SharedRegistry<Student> =
        RecordRegistry::with_config(RegistryConfig::default().capacity(16)).into();

    // Sorted by last name
    registry.create(Student::new("001", "Ana", "Martinez", "ana.martinez@uni.edu", Gender::Female, "systems"))?;
    registry.create(Student::new("002", "Carlos", "Garcia", "carlos.garcia@uni.edu", Gender::Male, "law"))?;
    registry.create(Student::new("003", "Brenda", "Alvarez", "brenda.alvarez@uni.edu", Gender::Female, "medicine"))?;

    // Relative placements
    registry.insert(
        &Placement::Before("002".into()),
        Student::new("004", "Diego", "Salazar", "diego.salazar@uni.edu", Gender::Male, "systems"),
    )?;
    registry.insert(
        &Placement::After("001".into()),
        Student::new("005", "Laura", "Rivera", "laura.rivera@uni.edu", Gender::Other, "arts"),
    )?;

    let before = registry.snapshot(true);
    for (position, student) in before.records.iter().enumerate() {
        info!(position, code = %student.id, name = %student.full_name(), "roster entry");
    }

    // A rejected command leaves the roster untouched
    if let Err(err) = registry.create(Student::new("001", "Otra", "Persona", "otra@uni.edu", Gender::Other, "arts")) {
        warn!(error = %err, "duplicate rejected");
    }

    registry.update(
        "003",
        Student::new("003", "Brenda Sofia", "Alvarez", "brenda.alvarez@uni.edu", Gender::Female, "medicine"),
    )?;
    registry.delete("005")?;

    // Re-code a student; the record keeps its place in the roster
    if let Some(student) = registry.find_by_key("004")? {
        registry.update("004", student.with_id("006"))?;
    }

    let after = registry.snapshot(true);
    info!(
        count = after.len(),
        changed = !before.same_content(&after),
        fingerprint = %after.fingerprint_hex(),
        "roster updated"
    );

    for student in registry.list_all(false) {
        info!(%student, "descending");
    }

    Ok(())
}
