#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub credit: u32,
    pub mark: i64,
}

impl Course {
    /// A freshly added course starts with a mark of 0.
    pub fn new(id: impl Into<String>, name: impl Into<String>, credit: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credit,
            mark: 0,
        }
    }

    /// Stores `floor(mark)`; the fractional part is discarded.
    pub fn set_mark(&mut self, mark: f64) {
        self.mark = mark.floor() as i64;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
    pub courses: Vec<Course>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            courses: Vec::new(),
        }
    }

    /// First course with the given id, if any.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_mut(&mut self, id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Credit-weighted average mark rounded half-to-even to one decimal.
    /// Returns 0.0 when the student carries no credit at all.
    pub fn gpa(&self) -> f64 {
        let (weighted_sum, total_credit) =
            self.courses
                .iter()
                .fold((0i128, 0i128), |(sum, credit), course| {
                    let c = i128::from(course.credit);
                    (sum + c * i128::from(course.mark), credit + c)
                });

        if total_credit == 0 {
            return 0.0;
        }

        round_half_even(weighted_sum * 10, total_credit) as f64 / 10.0
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
/// The rounding is decided on the exact quotient, not a float approximation,
/// so 3/20 gives 2 tenths where rounding the binary `0.15` would give 1.
fn round_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let twice_remainder = numerator.rem_euclid(denominator) * 2;

    match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + quotient.rem_euclid(2),
    }
}
