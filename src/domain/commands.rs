#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudent {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCourse {
    pub student_id: String,
    pub id: String,
    pub name: String,
    pub credit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListStudentCourses {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCourseMark {
    pub student_id: String,
    pub id: String,
    pub mark: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculateGpa {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateStudent,
    AddCourse,
    ListStudentCourses,
    UpdateCourseMark,
    CalculateGpa,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::CreateStudent,
        CommandKind::AddCourse,
        CommandKind::ListStudentCourses,
        CommandKind::UpdateCourseMark,
        CommandKind::CalculateGpa,
    ];
}

/// One user intent, carrying everything needed to execute it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateStudent(CreateStudent),
    AddCourse(AddCourse),
    ListStudentCourses(ListStudentCourses),
    UpdateCourseMark(UpdateCourseMark),
    CalculateGpa(CalculateGpa),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::CreateStudent(_) => CommandKind::CreateStudent,
            Command::AddCourse(_) => CommandKind::AddCourse,
            Command::ListStudentCourses(_) => CommandKind::ListStudentCourses,
            Command::UpdateCourseMark(_) => CommandKind::UpdateCourseMark,
            Command::CalculateGpa(_) => CommandKind::CalculateGpa,
        }
    }

    /// Whether a successful run changes repository state and so belongs in the journal.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::CreateStudent(_) | Command::AddCourse(_) | Command::UpdateCourseMark(_)
        )
    }
}

impl From<CreateStudent> for Command {
    fn from(cmd: CreateStudent) -> Self {
        Command::CreateStudent(cmd)
    }
}

impl From<AddCourse> for Command {
    fn from(cmd: AddCourse) -> Self {
        Command::AddCourse(cmd)
    }
}

impl From<ListStudentCourses> for Command {
    fn from(cmd: ListStudentCourses) -> Self {
        Command::ListStudentCourses(cmd)
    }
}

impl From<UpdateCourseMark> for Command {
    fn from(cmd: UpdateCourseMark) -> Self {
        Command::UpdateCourseMark(cmd)
    }
}

impl From<CalculateGpa> for Command {
    fn from(cmd: CalculateGpa) -> Self {
        Command::CalculateGpa(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_state_changing_commands_are_mutating() {
        let create: Command = CreateStudent {
            id: "s1".into(),
            name: "Ada".into(),
            date_of_birth: "1815-12-10".into(),
        }
        .into();
        let list: Command = ListStudentCourses { id: "s1".into() }.into();
        let gpa: Command = CalculateGpa { id: "s1".into() }.into();

        assert!(create.is_mutating());
        assert!(!list.is_mutating());
        assert!(!gpa.is_mutating());
        assert_eq!(gpa.kind(), CommandKind::CalculateGpa);
    }
}
