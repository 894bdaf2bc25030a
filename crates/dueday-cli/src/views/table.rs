use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use comfy_table::{Cell, Color, Row, Table};
use dueday_core::models::{parse_date, Task};

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Due", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        // Stored dates are validated on write; fall back to plain text if a
        // row was tampered with outside the application.
        let (date_cell, due_cell) = match parse_date(&task.date) {
            Ok(due) => {
                let human = HumanTime::from(due.signed_duration_since(today)).to_string();
                if due < today {
                    (
                        Cell::new(&task.date).fg(Color::Red),
                        Cell::new(human).fg(Color::Red),
                    )
                } else if due == today {
                    (
                        Cell::new(&task.date).fg(Color::Yellow),
                        Cell::new("today").fg(Color::Yellow),
                    )
                } else {
                    (Cell::new(&task.date), Cell::new(human))
                }
            }
            Err(_) => (Cell::new(&task.date), Cell::new("?")),
        };
        row.add_cell(date_cell);
        row.add_cell(due_cell);

        row.add_cell(Cell::new(&task.title));
        row.add_cell(Cell::new(if task.repeat.is_empty() {
            "-"
        } else {
            task.repeat.as_str()
        }));
        row.add_cell(Cell::new(&task.comment));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task(task: &Task, today: NaiveDate) {
    display_tasks(std::slice::from_ref(task), today);
}
