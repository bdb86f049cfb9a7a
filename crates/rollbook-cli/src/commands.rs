use anyhow::bail;
use colored::Colorize;
use rollbook_persist::JsonFileSlotStore;
use rollbook_store::{RecordId, Registry};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut registry = Registry::open(JsonFileSlotStore::new(&cli.data_dir))?;
    match cli.command {
        Command::CourseType { action } => cmd_course_type(&mut registry, action),
        Command::Course { action } => cmd_course(&mut registry, action),
        Command::Offering { action } => cmd_offering(&mut registry, action),
        Command::Student { action } => cmd_student(&mut registry, action),
        Command::Dashboard => cmd_dashboard(&registry),
    }
}

fn cmd_course_type(registry: &mut Registry, action: CourseTypeAction) -> anyhow::Result<()> {
    match action {
        CourseTypeAction::Add { name } => {
            let name = require_name(&name, "course type")?;
            let record = registry.add_course_type(name)?;
            println!(
                "{} Added course type {} ({})",
                "✓".green().bold(),
                record.name.yellow(),
                record.id.short_id().dimmed()
            );
        }
        CourseTypeAction::List => {
            if registry.course_types().is_empty() {
                println!("No course types yet.");
            }
            for ct in registry.course_types() {
                println!("{}  {}", ct.id.to_string().dimmed(), ct.name.yellow());
            }
        }
        CourseTypeAction::Rename { id, name } => {
            let name = require_name(&name, "course type")?;
            if !registry.update_course_type(&RecordId::from(id.as_str()), name)? {
                bail!("no course type with id {id}");
            }
            println!("{} Renamed course type {}", "✓".green(), id.dimmed());
        }
        CourseTypeAction::Remove { id } => {
            if !registry.delete_course_type(&RecordId::from(id.as_str()))? {
                bail!("no course type with id {id}");
            }
            println!("{} Removed course type {} and its offerings", "✓".green(), id.dimmed());
        }
    }
    Ok(())
}

fn cmd_course(registry: &mut Registry, action: CourseAction) -> anyhow::Result<()> {
    match action {
        CourseAction::Add { name } => {
            let name = require_name(&name, "course")?;
            let record = registry.add_course(name)?;
            println!(
                "{} Added course {} ({})",
                "✓".green().bold(),
                record.name.yellow(),
                record.id.short_id().dimmed()
            );
        }
        CourseAction::List => {
            if registry.courses().is_empty() {
                println!("No courses yet.");
            }
            for course in registry.courses() {
                println!("{}  {}", course.id.to_string().dimmed(), course.name.yellow());
            }
        }
        CourseAction::Rename { id, name } => {
            let name = require_name(&name, "course")?;
            if !registry.update_course(&RecordId::from(id.as_str()), name)? {
                bail!("no course with id {id}");
            }
            println!("{} Renamed course {}", "✓".green(), id.dimmed());
        }
        CourseAction::Remove { id } => {
            if !registry.delete_course(&RecordId::from(id.as_str()))? {
                bail!("no course with id {id}");
            }
            println!("{} Removed course {} and its offerings", "✓".green(), id.dimmed());
        }
    }
    Ok(())
}

fn cmd_offering(registry: &mut Registry, action: OfferingAction) -> anyhow::Result<()> {
    match action {
        OfferingAction::Add {
            course_id,
            course_type_id,
        } => {
            let (course_id, course_type_id) =
                require_offering_refs(registry, &course_id, &course_type_id)?;
            let record = registry.add_course_offering(course_id, course_type_id)?;
            println!(
                "{} Added offering {} ({})",
                "✓".green().bold(),
                registry.full_offering_name(&record.id).yellow(),
                record.id.short_id().dimmed()
            );
        }
        OfferingAction::List => {
            if registry.offerings().is_empty() {
                println!("No offerings yet.");
            }
            for offering in registry.offerings() {
                let count = registry.student_count(&offering.id);
                println!(
                    "{}  {}  {} registered",
                    offering.id.to_string().dimmed(),
                    registry.full_offering_name(&offering.id).yellow(),
                    count.to_string().bold()
                );
            }
        }
        OfferingAction::Update {
            id,
            course_id,
            course_type_id,
        } => {
            let (course_id, course_type_id) =
                require_offering_refs(registry, &course_id, &course_type_id)?;
            let offering_id = RecordId::from(id.as_str());
            if !registry.update_course_offering(&offering_id, course_id, course_type_id)? {
                bail!("no offering with id {id}");
            }
            println!(
                "{} Offering {} is now {}",
                "✓".green(),
                id.dimmed(),
                registry.full_offering_name(&offering_id).yellow()
            );
        }
        OfferingAction::Remove { id } => {
            if !registry.delete_course_offering(&RecordId::from(id.as_str()))? {
                bail!("no offering with id {id}");
            }
            println!("{} Removed offering {} and its registrations", "✓".green(), id.dimmed());
        }
    }
    Ok(())
}

fn cmd_student(registry: &mut Registry, action: StudentAction) -> anyhow::Result<()> {
    match action {
        StudentAction::Register {
            name,
            email,
            offering_id,
        } => {
            let name = require_name(&name, "student")?;
            let email = email.trim();
            if !is_valid_email(email) {
                bail!("please enter a valid email address");
            }
            let offering_id = RecordId::from(offering_id.as_str());
            if registry.offering_by_id(&offering_id).is_none() {
                bail!("no offering with id {offering_id}");
            }
            let record = registry.add_student(name, email, offering_id)?;
            println!(
                "{} Registered {} <{}> for {}",
                "✓".green().bold(),
                record.name.yellow(),
                record.email.blue(),
                registry.full_offering_name(&record.course_offering_id)
            );
        }
        StudentAction::List(args) => {
            let students = match &args.offering {
                Some(id) => registry.students_by_offering(&RecordId::from(id.as_str())),
                None => registry.students().to_vec(),
            };
            if students.is_empty() {
                println!("No students registered.");
            }
            for student in &students {
                println!(
                    "{}  {} <{}>  {}",
                    student.id.to_string().dimmed(),
                    student.name.yellow(),
                    student.email.blue(),
                    registry.full_offering_name(&student.course_offering_id)
                );
            }
        }
    }
    Ok(())
}

fn cmd_dashboard(registry: &Registry) -> anyhow::Result<()> {
    let summary = registry.summary();
    println!("{}", "Rollbook dashboard".bold());
    println!("  Course types: {}", summary.course_types.to_string().bold());
    println!("  Courses:      {}", summary.courses.to_string().bold());
    println!("  Offerings:    {}", summary.offerings.to_string().bold());
    println!("  Students:     {}", summary.students.to_string().bold());
    if !summary.breakdown.is_empty() {
        println!("\n{}", "By course type".bold());
        for row in &summary.breakdown {
            println!(
                "  {}  {} offerings, {} students",
                row.course_type.name.yellow(),
                row.offering_count,
                row.student_count
            );
        }
    }
    if let Some(popular) = &summary.most_popular_offering {
        let noun = if popular.student_count == 1 {
            "student"
        } else {
            "students"
        };
        println!("\n{}", "Most popular offering".bold());
        println!(
            "  {}  {} {} registered",
            popular.name.yellow(),
            popular.student_count.to_string().bold(),
            noun
        );
    }
    let orphans = registry.orphaned_students();
    if !orphans.is_empty() {
        println!(
            "\n{} {} student registration(s) reference a removed offering",
            "!".red().bold(),
            orphans.len()
        );
    }
    Ok(())
}

// ---- Input validation (the store itself validates nothing) ----

fn require_name(name: &str, what: &str) -> anyhow::Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("{what} name cannot be empty");
    }
    Ok(trimmed.to_string())
}

fn require_offering_refs(
    registry: &Registry,
    course_id: &str,
    course_type_id: &str,
) -> anyhow::Result<(RecordId, RecordId)> {
    let course_id = RecordId::from(course_id);
    let course_type_id = RecordId::from(course_type_id);
    if registry.course_by_id(&course_id).is_none() {
        bail!("no course with id {course_id}");
    }
    if registry.course_type_by_id(&course_type_id).is_none() {
        bail!("no course type with id {course_type_id}");
    }
    Ok((course_id, course_type_id))
}

/// Same acceptance as the original form check: a non-empty local part, an
/// `@`, and a domain containing a dot with characters on both sides; no
/// whitespace or second `@` anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i < domain.len() - 1)
}
