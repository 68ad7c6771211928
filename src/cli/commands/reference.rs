use crate::cli::errors::CommandResult;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("profile", "Show the employee profile", "profile", cmd_profile),
        CommandEntry::new(
            "requests",
            "List travel requests available for settlement",
            "requests",
            cmd_requests,
        ),
    ]
}

fn cmd_profile(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let profile = &context.profile;
    output_section("Employee");
    io::print_info(format!("  Code       : {}", profile.code));
    io::print_info(format!("  Name       : {}", profile.name));
    io::print_info(format!("  Grade      : {}", profile.grade));
    io::print_info(format!("  Department : {}", profile.department));
    io::print_info(format!("  Supervisor : {}", profile.supervisor));
    io::print_info(format!("  Location   : {}", profile.location));
    Ok(())
}

fn cmd_requests(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Travel requests");
    let mut table = Table::new(vec![
        TableColumn::new("Number", 12),
        TableColumn::new("Title", 24),
        TableColumn::new("Route", 20),
        TableColumn::new("Dates", 23),
    ]);
    for request in context.catalog.iter() {
        table.add_row(vec![
            request.number.clone(),
            request.title.clone(),
            format!("{} > {}", request.from_place, request.to_place),
            format!("{} to {}", request.from_date, request.to_date),
        ]);
    }
    table.render();
    Ok(())
}
