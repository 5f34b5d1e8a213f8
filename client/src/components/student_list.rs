//! Searchable student list.
//!
//! Rows are keyed by student id, so filtering reuses existing row DOM.

use leptos::prelude::*;

use crate::state::roster::{Student, StudentId};
use crate::util::formatters::{avatar_color, gpa_color, status_color, status_label};

#[component]
pub fn StudentList(
    #[prop(into)] students: Signal<Vec<Student>>,
    #[prop(into)] selected: Signal<Option<StudentId>>,
    on_select: Callback<StudentId>,
) -> impl IntoView {
    view! {
        <ul class="student-list">
            <For each=move || students.get() key=|student| student.id let:student>
                <StudentRow student=student selected=selected on_select=on_select/>
            </For>
        </ul>
        <Show when=move || students.with(Vec::is_empty)>
            <p class="student-list__empty">"Niciun student găsit."</p>
        </Show>
    }
}

#[component]
fn StudentRow(student: Student, selected: Signal<Option<StudentId>>, on_select: Callback<StudentId>) -> impl IntoView {
    let id = student.id;
    let scholarship = student.scholarship;
    let is_selected = move || selected.get() == Some(id);
    let avatar_style = format!("background: {};", avatar_color(&student.first_name, &student.last_name));
    let status_class = format!("badge badge--{}", status_color(student.status));
    let gpa_class = format!("student-row__gpa text--{}", gpa_color(student.gpa));

    view! {
        <li
            class="student-row"
            class:student-row--selected=is_selected
            on:click=move |_| on_select.run(id)
        >
            <span class="avatar" style=avatar_style>{student.initials()}</span>
            <div class="student-row__main">
                <span class="student-row__name">{student.full_name()}</span>
                <span class="student-row__email">{student.email.clone()}</span>
                <span class="student-row__faculty">{format!("{} • Anul {}", student.faculty, student.year)}</span>
            </div>
            <div class="student-row__meta">
                <span class=status_class>{status_label(student.status).to_uppercase()}</span>
                <Show when=move || scholarship>
                    <span class="badge badge--green">"BURSĂ"</span>
                </Show>
                <span class=gpa_class>{format!("{:.2}", student.gpa)}</span>
            </div>
        </li>
    }
}
