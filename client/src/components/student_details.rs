//! Drawer body: full record for one student.

use leptos::prelude::*;

use crate::components::resizable_drawer::DrawerHost;
use crate::state::roster::Student;
use crate::util::formatters::{avatar_color, format_date, gpa_color, gpa_label, status_color, status_label};

/// Renders `student`, or nothing once the drawer released its content.
#[component]
pub fn StudentDetails(#[prop(into)] student: Signal<Option<Student>>) -> impl IntoView {
    let host = expect_context::<DrawerHost>();

    move || {
        student.get().map(|student| {
            let avatar_style = format!("background: {};", avatar_color(&student.first_name, &student.last_name));
            let status_class = format!("badge badge--solid badge--{}", status_color(student.status));
            let gpa_class = format!("stat__value stat__value--large text--{}", gpa_color(student.gpa));
            let courses = student.courses.clone();
            let has_courses = !courses.is_empty();
            let observations = student.observations.clone();
            let has_observations = !observations.is_empty();

            view! {
                <div class="student-details">
                    <header class="student-details__header">
                        <div class="student-details__title-row">
                            <h2>"Detalii Student"</h2>
                            <button class="icon-button" aria-label="Închide panoul" on:click=move |_| host.close()>
                                "✕"
                            </button>
                        </div>
                        <div class="student-details__identity">
                            <span class="avatar avatar--xl" style=avatar_style>{student.initials()}</span>
                            <div>
                                <p class="student-details__name">{student.full_name()}</p>
                                <div class="student-details__subtitle">
                                    <span class=status_class>{status_label(student.status)}</span>
                                    <span>{format!("{} • Anul {}", student.faculty, student.year)}</span>
                                </div>
                            </div>
                        </div>
                    </header>

                    <div class="student-details__body">
                        <section class="card">
                            <h3>"Informații de Contact"</h3>
                            <dl>
                                <dt>"Email"</dt>
                                <dd><a href=format!("mailto:{}", student.email)>{student.email.clone()}</a></dd>
                                <dt>"Telefon"</dt>
                                <dd>{student.phone.clone()}</dd>
                                <dt>"Adresa"</dt>
                                <dd>{student.address.clone()}</dd>
                            </dl>
                        </section>

                        <section class="card">
                            <h3>"Informații Academice"</h3>
                            <div class="stats">
                                <div class="stat">
                                    <span class="stat__label">"Facultatea"</span>
                                    <span class="stat__value">{student.faculty.clone()}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__label">"Anul de studiu"</span>
                                    <span class="stat__value">{format!("Anul {}", student.year)}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__label">"Media generală"</span>
                                    <span class=gpa_class>{format!("{:.2}", student.gpa)}</span>
                                    <span class="stat__help">{gpa_label(student.gpa)}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__label">"Data înscrierii"</span>
                                    <span class="stat__value">{format_date(&student.enrollment_date)}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__label">"Data nașterii"</span>
                                    <span class="stat__value">{format_date(&student.birth_date)}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat__label">"Bursă"</span>
                                    <span class="stat__value">{if student.scholarship { "Da" } else { "Nu" }}</span>
                                </div>
                            </div>
                        </section>

                        <Show when=move || has_courses>
                            <section class="card">
                                <h3>"Cursuri Curente"</h3>
                                <ul class="course-list">
                                    {courses
                                        .iter()
                                        .map(|course| view! { <li class="course-list__item">{course.0.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </section>
                        </Show>

                        <Show when=move || has_observations>
                            <section class="card">
                                <h3>"Observații"</h3>
                                <p>{observations.clone()}</p>
                            </section>
                        </Show>
                    </div>
                </div>
            }
        })
    }
}
