//! Console command parsing
//!
//! One command per line. Fields that may contain spaces are separated by `|`,
//! e.g. `student-add Ada Lovelace | ada@club.org | R-001 | secret`.

use std::str::FromStr;
use crate::models::{AdminForm, LectureForm, Role, StudentForm};
use crate::state::guard::Route;
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::helpers::{normalize_whitespace, parse_lecture_time};

pub const HELP: &str = "\
Session:
  login <admin|student> <email> <password>
  logout | whoami | home | help | quit
Admin:
  lectures | upcoming
  lecture-add <yyyy-mm-ddThh:mm> | <title> [| <description>]
  lecture-edit <id> <yyyy-mm-ddThh:mm> | <title> [| <description>]
  lecture-delete <id>
  students | student <id>
  student-add <name> | <email> | <roll no> | <password>
  student-edit <id> <name> | <email> | <roll no> | <password>
  student-delete <id>
  admins | admin <id>
  admin-add <name> | <email> | <password>
  admin-edit <id> <name> | <email> | <password>
  admin-delete <id>
  select <lecture id|none> | sheet | report
  stage <student id> <present|absent> | stage-all <present|absent>
  commit | discard
Student:
  my-lectures | my-stats
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Home,
    WhoAmI,
    Login { role: Role, email: String, password: String },
    Logout,

    Lectures,
    Upcoming,
    LectureAdd(LectureForm),
    LectureEdit { id: i64, form: LectureForm },
    LectureDelete(i64),

    Students,
    StudentShow(i64),
    StudentAdd(StudentForm),
    StudentEdit { id: i64, form: StudentForm },
    StudentDelete(i64),

    Admins,
    AdminShow(i64),
    AdminAdd(AdminForm),
    AdminEdit { id: i64, form: AdminForm },
    AdminDelete(i64),

    Select(Option<i64>),
    Stage { student_id: i64, present: bool },
    StageAll(bool),
    Sheet,
    Commit,
    Discard,
    Report,

    MyLectures,
    MyStats,
}

impl Command {
    /// The view a command runs in, checked against the route guard
    pub fn route(&self) -> Option<Route> {
        use Command::*;
        match self {
            Help | Quit | Home | WhoAmI | Login { .. } | Logout => None,
            MyLectures | MyStats => Some(Route::Student),
            _ => Some(Route::Admin),
        }
    }
}

fn invalid(msg: impl Into<String>) -> AttendanceError {
    AttendanceError::InvalidInput(msg.into())
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| invalid(format!("Expected a numeric id, got '{}'", raw.trim())))
}

fn parse_presence(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "present" | "p" | "yes" => Ok(true),
        "absent" | "a" | "no" => Ok(false),
        other => Err(invalid(format!("Expected present or absent, got '{}'", other))),
    }
}

/// Split `<id> <rest>` into the id and the remainder
fn split_id(args: &str) -> Result<(i64, &str)> {
    let (id, rest) = args.trim().split_once(char::is_whitespace).unwrap_or((args.trim(), ""));
    Ok((parse_id(id)?, rest.trim()))
}

fn fields(args: &str) -> Vec<String> {
    args.split('|').map(normalize_whitespace).collect()
}

fn field(fields: &[String], index: usize, name: &str) -> Result<String> {
    fields
        .get(index)
        .filter(|f| !f.is_empty())
        .cloned()
        .ok_or_else(|| invalid(format!("Missing {}", name)))
}

fn lecture_form(args: &str) -> Result<LectureForm> {
    let fields = fields(args);
    let raw_time = field(&fields, 0, "date and time")?;
    let date_time = parse_lecture_time(&raw_time)
        .ok_or_else(|| invalid(format!("Invalid date and time '{}', expected yyyy-mm-ddThh:mm", raw_time)))?;
    let title = field(&fields, 1, "title")?;
    Ok(LectureForm::new(title, fields.get(2).cloned(), date_time))
}

fn student_form(args: &str) -> Result<StudentForm> {
    let fields = fields(args);
    Ok(StudentForm::new(
        &field(&fields, 0, "name")?,
        &field(&fields, 1, "email")?,
        &field(&fields, 2, "roll number")?,
        Some(field(&fields, 3, "password")?),
    ))
}

fn admin_form(args: &str) -> Result<AdminForm> {
    let fields = fields(args);
    Ok(AdminForm::new(
        &field(&fields, 0, "name")?,
        &field(&fields, 1, "email")?,
        Some(field(&fields, 2, "password")?),
    ))
}

impl FromStr for Command {
    type Err = AttendanceError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args = args.trim();

        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "home" => Command::Home,
            "whoami" => Command::WhoAmI,
            "logout" => Command::Logout,
            "login" => {
                let parts: Vec<&str> = args.split_whitespace().collect();
                match parts.as_slice() {
                    [role, email, password] => Command::Login {
                        role: role.parse()?,
                        email: email.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err(invalid("Usage: login <admin|student> <email> <password>")),
                }
            }

            "lectures" => Command::Lectures,
            "upcoming" => Command::Upcoming,
            "lecture-add" => Command::LectureAdd(lecture_form(args)?),
            "lecture-edit" => {
                let (id, rest) = split_id(args)?;
                Command::LectureEdit { id, form: lecture_form(rest)? }
            }
            "lecture-delete" => Command::LectureDelete(parse_id(args)?),

            "students" => Command::Students,
            "student" => Command::StudentShow(parse_id(args)?),
            "student-add" => Command::StudentAdd(student_form(args)?),
            "student-edit" => {
                let (id, rest) = split_id(args)?;
                Command::StudentEdit { id, form: student_form(rest)? }
            }
            "student-delete" => Command::StudentDelete(parse_id(args)?),

            "admins" => Command::Admins,
            "admin" => Command::AdminShow(parse_id(args)?),
            "admin-add" => Command::AdminAdd(admin_form(args)?),
            "admin-edit" => {
                let (id, rest) = split_id(args)?;
                Command::AdminEdit { id, form: admin_form(rest)? }
            }
            "admin-delete" => Command::AdminDelete(parse_id(args)?),

            "select" => match args.to_ascii_lowercase().as_str() {
                "" | "none" => Command::Select(None),
                _ => Command::Select(Some(parse_id(args)?)),
            },
            "stage" => {
                let (student_id, rest) = split_id(args)?;
                Command::Stage { student_id, present: parse_presence(rest)? }
            }
            "stage-all" => Command::StageAll(parse_presence(args)?),
            "sheet" => Command::Sheet,
            "commit" | "save" => Command::Commit,
            "discard" => Command::Discard,
            "report" => Command::Report,

            "my-lectures" => Command::MyLectures,
            "my-stats" => Command::MyStats,

            "" => return Err(invalid("Empty command")),
            other => return Err(invalid(format!("Unknown command '{}', try 'help'", other))),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_login() {
        let cmd: Command = "login admin root@club.org secret".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Login { role: Role::Admin, email: "root@club.org".into(), password: "secret".into() }
        );
        assert!("login admin root@club.org".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_lecture_add_with_description() {
        let cmd: Command = "lecture-add 2025-03-01T18:30 | Intro  to Rust | Bring a laptop".parse().unwrap();
        assert_matches!(cmd, Command::LectureAdd(form) => {
            assert_eq!(form.title, "Intro to Rust");
            assert_eq!(form.description.as_deref(), Some("Bring a laptop"));
        });
    }

    #[test]
    fn test_parse_student_edit_requires_password() {
        let cmd: Command = "student-edit 12 Ada Lovelace | ada@club.org | R-001 | secret".parse().unwrap();
        assert_matches!(cmd, Command::StudentEdit { id: 12, form } => {
            assert_eq!(form.name, "Ada Lovelace");
            assert_eq!(form.password.as_deref(), Some("secret"));
        });
        assert_matches!(
            "student-edit 12 Ada Lovelace | ada@club.org | R-001".parse::<Command>(),
            Err(AttendanceError::InvalidInput(msg)) if msg == "Missing password"
        );
        assert!("admin-edit 3 Root | root@club.org".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_staging() {
        assert_eq!("stage 4 present".parse::<Command>().unwrap(), Command::Stage { student_id: 4, present: true });
        assert_eq!("stage-all absent".parse::<Command>().unwrap(), Command::StageAll(false));
        assert!("stage 4 maybe".parse::<Command>().is_err());
        assert_eq!("select none".parse::<Command>().unwrap(), Command::Select(None));
        assert_eq!("select 3".parse::<Command>().unwrap(), Command::Select(Some(3)));
    }

    #[test]
    fn test_routes() {
        assert_eq!(Command::Commit.route(), Some(Route::Admin));
        assert_eq!(Command::MyStats.route(), Some(Route::Student));
        assert_eq!(Command::Help.route(), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_matches!("dance".parse::<Command>(), Err(AttendanceError::InvalidInput(msg)) if msg.contains("dance"));
    }
}
