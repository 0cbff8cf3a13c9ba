use crate::core::handlers::CommandOutcome;
use crate::domain::model::{Course, Student};

pub fn course_lines(courses: &[Course]) -> Vec<String> {
    if courses.is_empty() {
        return vec!["There aren't any course yet!".to_string()];
    }

    courses
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {} {} {} {}", i + 1, c.id, c.name, c.credit, c.mark))
        .collect()
}

pub fn student_lines(students: &[&Student]) -> Vec<String> {
    if students.is_empty() {
        return vec!["There aren't any student yet!".to_string()];
    }

    students
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}. {} {} {} {:.1}",
                i + 1,
                s.id,
                s.name,
                s.date_of_birth,
                s.gpa()
            )
        })
        .collect()
}

pub fn outcome_lines(outcome: &CommandOutcome) -> Vec<String> {
    match outcome {
        CommandOutcome::Done => Vec::new(),
        CommandOutcome::Courses(courses) => course_lines(courses),
        CommandOutcome::Gpa(gpa) => vec![format!("{:.1}", gpa)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_keeps_one_decimal() {
        assert_eq!(outcome_lines(&CommandOutcome::Gpa(7.0)), vec!["7.0"]);
        assert_eq!(outcome_lines(&CommandOutcome::Gpa(6.7)), vec!["6.7"]);
    }

    #[test]
    fn test_course_lines_are_numbered() {
        let mut maths = Course::new("c1", "Maths", 3);
        maths.mark = 8;
        let lines = course_lines(&[maths, Course::new("c2", "Logic", 1)]);
        assert_eq!(lines, vec!["1. c1 Maths 3 8", "2. c2 Logic 1 0"]);
    }

    #[test]
    fn test_empty_lists_print_notice() {
        assert_eq!(course_lines(&[]).len(), 1);
        assert_eq!(student_lines(&[]).len(), 1);
        assert!(outcome_lines(&CommandOutcome::Done).is_empty());
    }
}
