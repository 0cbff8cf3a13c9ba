use crate::domain::commands::{
    AddCourse, CalculateGpa, CreateStudent, ListStudentCourses, UpdateCourseMark,
};
use crate::domain::model::{Course, Student};
use crate::domain::ports::Repository;
use crate::utils::error::{Result, StudentMarkError};

/// What a handler hands back to the caller for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    Courses(Vec<Course>),
    Gpa(f64),
}

pub fn create_student<R: Repository + ?Sized>(
    cmd: &CreateStudent,
    repo: &mut R,
) -> Result<CommandOutcome> {
    repo.add(Student::new(&cmd.id, &cmd.name, &cmd.date_of_birth));
    tracing::debug!("Created student {}", cmd.id);
    Ok(CommandOutcome::Done)
}

pub fn add_course<R: Repository + ?Sized>(cmd: &AddCourse, repo: &mut R) -> Result<CommandOutcome> {
    let student = repo
        .get_mut(&cmd.student_id)
        .ok_or_else(|| StudentMarkError::InvalidStudentId(cmd.student_id.clone()))?;

    student
        .courses
        .push(Course::new(&cmd.id, &cmd.name, cmd.credit));
    tracing::debug!("Added course {} to student {}", cmd.id, cmd.student_id);
    Ok(CommandOutcome::Done)
}

pub fn list_student_courses<R: Repository + ?Sized>(
    cmd: &ListStudentCourses,
    repo: &mut R,
) -> Result<CommandOutcome> {
    let student = repo
        .get(&cmd.id)
        .ok_or_else(|| StudentMarkError::InvalidStudentId(cmd.id.clone()))?;

    Ok(CommandOutcome::Courses(student.courses.clone()))
}

pub fn update_course_mark<R: Repository + ?Sized>(
    cmd: &UpdateCourseMark,
    repo: &mut R,
) -> Result<CommandOutcome> {
    let student = repo
        .get_mut(&cmd.student_id)
        .ok_or_else(|| StudentMarkError::InvalidStudentId(cmd.student_id.clone()))?;

    let course = student
        .course_mut(&cmd.id)
        .ok_or_else(|| StudentMarkError::InvalidCourseId(cmd.id.clone()))?;

    course.set_mark(cmd.mark);
    tracing::debug!(
        "Set mark of course {} for student {} to {}",
        cmd.id,
        cmd.student_id,
        course.mark
    );
    Ok(CommandOutcome::Done)
}

pub fn calculate_gpa<R: Repository + ?Sized>(
    cmd: &CalculateGpa,
    repo: &mut R,
) -> Result<CommandOutcome> {
    let student = repo
        .get(&cmd.id)
        .ok_or_else(|| StudentMarkError::InvalidStudentId(cmd.id.clone()))?;

    Ok(CommandOutcome::Gpa(student.gpa()))
}

/// Every student, highest GPA first. Equal GPAs keep insertion order.
pub fn list_students<R: Repository + ?Sized>(repo: &R) -> Vec<&Student> {
    let mut ranked: Vec<(f64, &Student)> = repo.list().into_iter().map(|s| (s.gpa(), s)).collect();
    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    ranked.into_iter().map(|(_, s)| s).collect()
}
