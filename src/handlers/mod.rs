//! Console handlers
//!
//! Parses a line into a [`Command`], checks it against the route guard and
//! runs it against the mounted dashboard. Handlers return the text to show.

pub mod commands;

pub use commands::Command;

use chrono::Local;
use tracing::{debug, info};

use crate::dashboard::report;
use crate::state::context::AppContext;
use crate::state::guard::{Navigation, Route};
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::helpers::format_lecture_time;

/// What the console should print, and whether to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: false }
    }
}

/// Parse and run one console line
pub async fn handle_line(ctx: &mut AppContext, line: &str) -> Result<Reply> {
    let command: Command = line.parse()?;
    handle_command(ctx, command).await
}

pub async fn handle_command(ctx: &mut AppContext, command: Command) -> Result<Reply> {
    if let Some(route) = command.route() {
        ctx.require(route)?;
    }
    debug!(command = ?command.route(), "Handling console command");

    match command {
        Command::Help => Ok(Reply::text(commands::HELP)),
        Command::Quit => Ok(Reply { text: "Bye".to_string(), quit: true }),
        Command::Home => handle_home(ctx),
        Command::WhoAmI => Ok(Reply::text(match ctx.session.current() {
            Some(s) => format!("{} (#{}, {})", s.name, s.user_id, s.role),
            None => "Not logged in".to_string(),
        })),
        Command::Login { role, email, password } => {
            let session = ctx.login(role, &email, &password).await?;
            info!(user_id = session.user_id, "Console login");
            Ok(Reply::text(format!(
                "Welcome, {}! Opened {}",
                session.name,
                Route::for_role(session.role)
            )))
        }
        Command::Logout => {
            ctx.logout().await?;
            Ok(Reply::text("Logged out"))
        }
        Command::MyLectures => {
            let view = ctx.student_view()?;
            view.load().await;
            Ok(Reply::text(report::render_lectures(view.upcoming(), "No upcoming lectures")))
        }
        Command::MyStats => {
            let view = ctx.student_view()?;
            view.load().await;
            Ok(Reply::text(report::render_student_stats(view.stats())))
        }
        admin_command => handle_admin(ctx, admin_command).await,
    }
}

fn handle_home(ctx: &AppContext) -> Result<Reply> {
    let text = match ctx.guard.navigate(Route::Home) {
        Navigation::Redirect(route) | Navigation::Render(route) => format!("Current view: {}", route),
        Navigation::Wait => "Loading...".to_string(),
    };
    Ok(Reply::text(text))
}

async fn handle_admin(ctx: &mut AppContext, command: Command) -> Result<Reply> {
    let view = ctx.admin_view()?;

    let text = match command {
        Command::Lectures => report::render_lectures(view.lectures(), "No lectures"),
        Command::Upcoming => {
            let now = Local::now().naive_local();
            report::render_lectures(view.upcoming_schedule(now), "No upcoming lectures scheduled")
        }
        Command::LectureAdd(form) => {
            let lecture = view.create_lecture(form).await?;
            format!("Created lecture #{} {}", lecture.id, lecture.title)
        }
        Command::LectureEdit { id, form } => {
            let lecture = view.update_lecture(id, form).await?;
            format!("Updated lecture #{} {}", lecture.id, lecture.title)
        }
        Command::LectureDelete(id) => {
            view.delete_lecture(id).await?;
            format!("Deleted lecture #{}", id)
        }

        Command::Students => report::render_students(view.students()),
        Command::StudentShow(id) => {
            let s = view.get_student(id).await?;
            format!("#{} {}\nEmail: {}\nRoll: {}", s.id, s.name, s.email, s.roll_no)
        }
        Command::StudentAdd(form) => {
            let student = view.create_student(form).await?;
            format!("Created student #{} {}", student.id, student.name)
        }
        Command::StudentEdit { id, form } => {
            let student = view.update_student(id, form).await?;
            format!("Updated student #{} {}", student.id, student.name)
        }
        Command::StudentDelete(id) => {
            view.delete_student(id).await?;
            format!("Deleted student #{}", id)
        }

        Command::Admins => report::render_admins(view.admins(), view.admin_id()),
        Command::AdminShow(id) => {
            let a = view.get_admin(id).await?;
            format!("#{} {}\nEmail: {}", a.id, a.name, a.email)
        }
        Command::AdminAdd(form) => {
            let admin = view.create_admin(form).await?;
            format!("Created admin #{} {}", admin.id, admin.name)
        }
        Command::AdminEdit { id, form } => {
            let admin = view.update_admin(id, form).await?;
            format!("Updated admin #{} {}", admin.id, admin.name)
        }
        Command::AdminDelete(id) => {
            view.delete_admin(id).await?;
            format!("Deleted admin #{}", id)
        }

        Command::Select(id) => {
            view.select_lecture(id).await?;
            match view.sheet().selected() {
                Some(lecture) => format!(
                    "Selected #{} {} ({})",
                    lecture.id,
                    lecture.title,
                    format_lecture_time(lecture.date_time)
                ),
                None => "Selection cleared".to_string(),
            }
        }
        Command::Stage { student_id, present } => {
            view.stage(student_id, present)?;
            format!("Staged #{} as {}", student_id, if present { "present" } else { "absent" })
        }
        Command::StageAll(present) => {
            view.stage_all(present)?;
            format!(
                "Staged {} student(s) as {}",
                view.students().len(),
                if present { "present" } else { "absent" }
            )
        }
        Command::Sheet => {
            let rows = view.attendance_rows();
            report::render_sheet(view.sheet().selected(), &rows, view.sheet().pending_count())
        }
        Command::Commit => {
            let outcome = view.commit().await?;
            format!("Attendance saved ({} submission(s))", outcome.submitted)
        }
        Command::Discard => {
            view.discard();
            "Discarded unsaved changes".to_string()
        }
        Command::Report => {
            let sheet = view.sheet();
            let lecture = sheet.selected().ok_or(AttendanceError::NoLectureSelected)?;
            report::render_attendance_report(lecture, sheet.stats(), sheet.records())
        }

        other => {
            return Err(AttendanceError::InvalidInput(format!("{:?} is not an admin command", other)));
        }
    };

    Ok(Reply::text(text))
}
