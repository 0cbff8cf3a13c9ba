use crate::domain::commands::{
    AddCourse, CalculateGpa, Command, CreateStudent, ListStudentCourses, UpdateCourseMark,
};
use crate::domain::ports::Console;
use crate::utils::error::{Result, StudentMarkError};
use crate::utils::validation::{parse_credit, parse_mark, validate_token};
use std::str::FromStr;

pub const MENU: &str = "
    Choose an option below
=======================================
0. Exit.
1. Add a new course for a student.
2. List course(s) of a student.
3. Create a new student.
4. List student(s).
5. Update course mark for a student.
6. Calculate GPA of a student
=======================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddCourse,
    ListStudentCourses,
    CreateStudent,
    ListStudents,
    UpdateCourseMark,
    CalculateGpa,
}

impl FromStr for MenuChoice {
    type Err = StudentMarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Self::Exit),
            "1" => Ok(Self::AddCourse),
            "2" => Ok(Self::ListStudentCourses),
            "3" => Ok(Self::CreateStudent),
            "4" => Ok(Self::ListStudents),
            "5" => Ok(Self::UpdateCourseMark),
            "6" => Ok(Self::CalculateGpa),
            _ => Err(StudentMarkError::InvalidChoice(s.to_string())),
        }
    }
}

/// Asks for one value. `None` means the input ran out.
fn ask<C: Console + ?Sized>(console: &mut C, label: &str) -> Result<Option<String>> {
    console.write_line(label)?;
    Ok(console.read_line()?.map(|line| line.trim().to_string()))
}

/// Bails out of the surrounding prompt with `Ok(None)` when input ends.
macro_rules! ask_or_end {
    ($console:expr, $label:expr) => {
        match ask($console, $label)? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}

fn token(field: &str, value: String) -> Result<String> {
    validate_token(field, &value)?;
    Ok(value)
}

/// Collects the fields for a menu choice and builds its command.
/// Returns `Ok(None)` for choices that do not map to a command or when input ends.
pub fn read_command<C: Console + ?Sized>(
    choice: MenuChoice,
    console: &mut C,
) -> Result<Option<Command>> {
    match choice {
        MenuChoice::AddCourse => prompt_add_course(console),
        MenuChoice::ListStudentCourses => prompt_list_student_courses(console),
        MenuChoice::CreateStudent => prompt_create_student(console),
        MenuChoice::UpdateCourseMark => prompt_update_course_mark(console),
        MenuChoice::CalculateGpa => prompt_calculate_gpa(console),
        MenuChoice::Exit | MenuChoice::ListStudents => Ok(None),
    }
}

pub fn prompt_add_course<C: Console + ?Sized>(console: &mut C) -> Result<Option<Command>> {
    let student_id = ask_or_end!(console, "Student ID:");
    let id = ask_or_end!(console, "ID:");
    let name = ask_or_end!(console, "Name:");
    let credit = ask_or_end!(console, "Credit:");

    Ok(Some(
        AddCourse {
            student_id: token("student ID", student_id)?,
            id: token("course ID", id)?,
            name: token("course name", name)?,
            credit: parse_credit("credit", &credit)?,
        }
        .into(),
    ))
}

pub fn prompt_list_student_courses<C: Console + ?Sized>(
    console: &mut C,
) -> Result<Option<Command>> {
    let id = ask_or_end!(console, "Student ID:");
    Ok(Some(ListStudentCourses { id: token("student ID", id)? }.into()))
}

pub fn prompt_create_student<C: Console + ?Sized>(console: &mut C) -> Result<Option<Command>> {
    let id = ask_or_end!(console, "Student ID:");
    let name = ask_or_end!(console, "Student name:");
    let date_of_birth = ask_or_end!(console, "Date of Birth:");

    Ok(Some(
        CreateStudent {
            id: token("student ID", id)?,
            name: token("student name", name)?,
            date_of_birth: token("date of birth", date_of_birth)?,
        }
        .into(),
    ))
}

pub fn prompt_update_course_mark<C: Console + ?Sized>(
    console: &mut C,
) -> Result<Option<Command>> {
    let student_id = ask_or_end!(console, "Student ID:");
    let id = ask_or_end!(console, "ID:");
    let mark = ask_or_end!(console, "Mark:");

    Ok(Some(
        UpdateCourseMark {
            student_id: token("student ID", student_id)?,
            id: token("course ID", id)?,
            mark: parse_mark("mark", &mark)?,
        }
        .into(),
    ))
}

pub fn prompt_calculate_gpa<C: Console + ?Sized>(console: &mut C) -> Result<Option<Command>> {
    let id = ask_or_end!(console, "ID:");
    Ok(Some(CalculateGpa { id: token("student ID", id)? }.into()))
}
