use crate::domain::model::Student;
use crate::domain::ports::Repository;

/// Students held in insertion order. Lookups scan linearly and stop at the first match.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    students: Vec<Student>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Snapshot of the full state, courses and marks included.
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

impl Repository for InMemoryRepository {
    fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    fn list(&self) -> Vec<&Student> {
        self.students.iter().collect()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_student() {
        let repo = InMemoryRepository::new();
        assert!(repo.get("s1").is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut repo = InMemoryRepository::new();
        repo.add(Student::new("b", "Bob", "2001-02-03"));
        repo.add(Student::new("a", "Alice", "2000-01-01"));

        let ids: Vec<&str> = repo.list().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut repo = InMemoryRepository::new();
        repo.add(Student::new("s1", "First", "2000-01-01"));
        repo.add(Student::new("s1", "Second", "2000-01-01"));

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get("s1").unwrap().name, "First");

        repo.get_mut("s1").unwrap().name = "Renamed".to_string();
        assert_eq!(repo.students()[0].name, "Renamed");
        assert_eq!(repo.students()[1].name, "Second");
    }
}
