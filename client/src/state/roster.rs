//! Student roster model, demo data, and search filtering.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use serde::{Deserialize, Serialize};

pub type StudentId = u32;

/// Enrollment status as stored in the roster data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    Graduated,
    #[serde(other)]
    Unknown,
}

/// A course name the student is enrolled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub faculty: String,
    pub year: u8,
    pub gpa: f64,
    pub status: StudentStatus,
    /// ISO `YYYY-MM-DD`.
    pub enrollment_date: String,
    /// ISO `YYYY-MM-DD`.
    pub birth_date: String,
    pub address: String,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub scholarship: bool,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercase first letters of first and last name, for the avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn matches(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.faculty.to_lowercase().contains(needle)
    }
}

/// Students whose full name, email, or faculty contains `query`, ignoring case.
///
/// An empty query returns every student, in roster order.
#[must_use]
pub fn filter_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    if query.is_empty() {
        return students.iter().collect();
    }
    let needle = query.to_lowercase();
    students.iter().filter(|student| student.matches(&needle)).collect()
}

#[must_use]
pub fn find_student(students: &[Student], id: StudentId) -> Option<&Student> {
    students.iter().find(|student| student.id == id)
}

fn courses(names: &[&str]) -> Vec<Course> {
    names.iter().map(|name| Course((*name).to_string())).collect()
}

/// Demo roster rendered by the page.
#[must_use]
pub fn mock_students() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            first_name: "Andrei".into(),
            last_name: "Popescu".into(),
            email: "andrei.popescu@student.ro".into(),
            phone: "0722 123 456".into(),
            faculty: "Informatică".into(),
            year: 3,
            gpa: 9.45,
            status: StudentStatus::Active,
            enrollment_date: "2022-10-01".into(),
            birth_date: "2003-03-15".into(),
            address: "Str. Lalelelor 12, Cluj-Napoca".into(),
            courses: courses(&["Algoritmi avansați", "Baze de date", "Rețele de calculatoare"]),
            scholarship: true,
            observations: "Participă la olimpiada de programare.".into(),
            profile_pic: None,
        },
        Student {
            id: 2,
            first_name: "Maria".into(),
            last_name: "Ionescu".into(),
            email: "maria.ionescu@student.ro".into(),
            phone: "0733 987 654".into(),
            faculty: "Drept".into(),
            year: 2,
            gpa: 8.7,
            status: StudentStatus::Active,
            enrollment_date: "2023-10-02".into(),
            birth_date: "2004-07-22".into(),
            address: "Bd. Unirii 45, București".into(),
            courses: courses(&["Drept civil", "Drept constituțional"]),
            scholarship: false,
            observations: String::new(),
            profile_pic: None,
        },
        Student {
            id: 3,
            first_name: "Elena".into(),
            last_name: "Dumitrescu".into(),
            email: "elena.dumitrescu@student.ro".into(),
            phone: "0744 555 111".into(),
            faculty: "Medicină".into(),
            year: 6,
            gpa: 9.8,
            status: StudentStatus::Graduated,
            enrollment_date: "2019-10-01".into(),
            birth_date: "2000-11-03".into(),
            address: "Str. Mihai Eminescu 8, Iași".into(),
            courses: courses(&["Chirurgie generală", "Pediatrie", "Medicină internă"]),
            scholarship: true,
            observations: "Absolventă cu distincție.".into(),
            profile_pic: None,
        },
        Student {
            id: 4,
            first_name: "Mihai".into(),
            last_name: "Stan".into(),
            email: "mihai.stan@student.ro".into(),
            phone: "0755 222 333".into(),
            faculty: "Economie".into(),
            year: 1,
            gpa: 7.6,
            status: StudentStatus::Inactive,
            enrollment_date: "2024-10-01".into(),
            birth_date: "2005-01-30".into(),
            address: "Str. Republicii 3, Timișoara".into(),
            courses: courses(&["Microeconomie", "Contabilitate"]),
            scholarship: false,
            observations: "Întrerupere temporară a studiilor.".into(),
            profile_pic: None,
        },
        Student {
            id: 5,
            first_name: "Ioana".into(),
            last_name: "Georgescu".into(),
            email: "ioana.georgescu@student.ro".into(),
            phone: "0766 444 888".into(),
            faculty: "Informatică".into(),
            year: 4,
            gpa: 8.95,
            status: StudentStatus::Active,
            enrollment_date: "2021-10-01".into(),
            birth_date: "2002-05-09".into(),
            address: "Calea Victoriei 101, București".into(),
            courses: courses(&["Inteligență artificială", "Compilatoare", "Securitate informatică"]),
            scholarship: false,
            observations: String::new(),
            profile_pic: None,
        },
        Student {
            id: 6,
            first_name: "Radu".into(),
            last_name: "Marinescu".into(),
            email: "radu.marinescu@student.ro".into(),
            phone: "0777 010 203".into(),
            faculty: "Arhitectură".into(),
            year: 5,
            gpa: 9.1,
            status: StudentStatus::Active,
            enrollment_date: "2020-10-01".into(),
            birth_date: "2001-09-18".into(),
            address: "Str. Avram Iancu 27, Brașov".into(),
            courses: courses(&["Urbanism", "Proiectare"]),
            scholarship: true,
            observations: "Proiect de diplomă în curs.".into(),
            profile_pic: None,
        },
    ]
}
