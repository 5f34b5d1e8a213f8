//! Roster page: searchable student list with a resizable details drawer.
//!
//! ARCHITECTURE
//! ============
//! The page owns the search query and the selected student id. Selecting a
//! row opens the drawer through `DrawerHost`; the selection highlight is
//! cleared only when the drawer reports `Closed`, after its exit slide.

use leptos::prelude::*;

use drawer::config::PanelConfig;

use crate::components::resizable_drawer::{DrawerHost, ResizableDrawer};
use crate::components::student_details::StudentDetails;
use crate::components::student_list::StudentList;
use crate::state::drawer::DrawerView;
use crate::state::roster::{Student, StudentId, filter_students, find_student, mock_students};

#[component]
pub fn RosterPage() -> impl IntoView {
    let drawer_view = expect_context::<RwSignal<DrawerView>>();
    let roster = StoredValue::new(mock_students());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<StudentId>);

    let on_closed = Callback::new(move |()| selected.set(None));
    let host = DrawerHost::new(drawer_view, PanelConfig::default(), Some(on_closed));
    provide_context(host);

    let filtered = Memo::new(move |_| {
        query.with(|q| roster.with_value(|all| filter_students(all, q).into_iter().cloned().collect::<Vec<Student>>()))
    });
    let total = roster.with_value(Vec::len);
    let shown = Signal::derive(move || {
        let id = drawer_view.with(|v| v.content)?;
        roster.with_value(|all| find_student(all, id).cloned())
    });
    let on_select = Callback::new(move |id: StudentId| {
        selected.set(Some(id));
        host.open(id);
    });

    view! {
        <main class="roster">
            <header class="roster__header">
                <h1>"Studenți"</h1>
                <span class="roster__count">{move || format!("{} din {total} studenți", filtered.with(Vec::len))}</span>
                <input
                    class="roster__search"
                    type="search"
                    placeholder="Caută după nume, email sau facultate..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            <StudentList students=filtered selected=selected on_select=on_select/>
        </main>
        <ResizableDrawer>
            <StudentDetails student=shown/>
        </ResizableDrawer>
    }
}
