use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rollbook",
    about = "Rollbook — course and student registration admin",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the persisted registry slots
    #[arg(long, global = true, default_value = ".rollbook")]
    pub data_dir: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage course types (individual, group, ...)
    CourseType {
        #[command(subcommand)]
        action: CourseTypeAction,
    },
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Manage course offerings (one course paired with one course type)
    Offering {
        #[command(subcommand)]
        action: OfferingAction,
    },
    /// Register and list students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Show collection counts and the per-course-type breakdown
    Dashboard,
}

#[derive(Subcommand)]
pub enum CourseTypeAction {
    /// Add a new course type
    Add { name: String },
    /// List all course types
    List,
    /// Rename a course type
    Rename { id: String, name: String },
    /// Remove a course type and its offerings
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum CourseAction {
    /// Add a new course
    Add { name: String },
    /// List all courses
    List,
    /// Rename a course
    Rename { id: String, name: String },
    /// Remove a course and its offerings
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum OfferingAction {
    /// Pair a course with a course type
    Add {
        course_id: String,
        course_type_id: String,
    },
    /// List all offerings with their registration counts
    List,
    /// Repoint an offering at a different course and course type
    Update {
        id: String,
        course_id: String,
        course_type_id: String,
    },
    /// Remove an offering and its registered students
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Register a student against an offering
    Register {
        name: String,
        email: String,
        offering_id: String,
    },
    /// List students, optionally for a single offering
    List(StudentListArgs),
}

#[derive(Args)]
pub struct StudentListArgs {
    /// Only students registered to this offering
    #[arg(long)]
    pub offering: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_course_type_add() {
        let cli = Cli::try_parse_from(["rollbook", "course-type", "add", "Group"]).unwrap();
        if let Command::CourseType {
            action: CourseTypeAction::Add { name },
        } = cli.command
        {
            assert_eq!(name, "Group");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_data_dir_is_global() {
        let cli =
            Cli::try_parse_from(["rollbook", "course", "list", "--data-dir", "/tmp/rb"]).unwrap();
        assert_eq!(cli.data_dir, "/tmp/rb");
    }

    #[test]
    fn parse_default_data_dir() {
        let cli = Cli::try_parse_from(["rollbook", "dashboard"]).unwrap();
        assert_eq!(cli.data_dir, ".rollbook");
    }

    #[test]
    fn parse_offering_add() {
        let cli = Cli::try_parse_from(["rollbook", "offering", "add", "c1", "t1"]).unwrap();
        if let Command::Offering {
            action:
                OfferingAction::Add {
                    course_id,
                    course_type_id,
                },
        } = cli.command
        {
            assert_eq!(course_id, "c1");
            assert_eq!(course_type_id, "t1");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_student_register() {
        let cli = Cli::try_parse_from([
            "rollbook", "student", "register", "Ana", "ana@x.com", "o1",
        ])
        .unwrap();
        if let Command::Student {
            action: StudentAction::Register { name, email, offering_id },
        } = cli.command
        {
            assert_eq!(name, "Ana");
            assert_eq!(email, "ana@x.com");
            assert_eq!(offering_id, "o1");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_student_list_with_offering_filter() {
        let cli =
            Cli::try_parse_from(["rollbook", "student", "list", "--offering", "o1"]).unwrap();
        if let Command::Student {
            action: StudentAction::List(args),
        } = cli.command
        {
            assert_eq!(args.offering, Some("o1".into()));
        } else {
            panic!("wrong command");
        }
    }
}
