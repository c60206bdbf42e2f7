use crate::domain::Task;

/// Serialize the whole board into the key-value-section format.
///
/// Every mutation rewrites the file in full; there is no incremental
/// diffing. Comments are comma-joined, the due date is written as the
/// literal sentinel when unset.
pub fn serialize_board<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut output = String::new();

    for task in tasks {
        output.push_str(&format!("[{}]\n", task.title));
        output.push_str(&format!("comments = {}\n", task.comments.join(",")));
        output.push_str(&format!("status = {}\n", task.status.name()));
        output.push_str(&format!("end_date = {}\n", task.due.to_wire()));
        output.push('\n');
    }

    output
}
