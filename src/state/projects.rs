#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::HashMap;

use crate::net::types::{Project, ProjectStatus};

/// Sortable columns of the admin project table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Nome,
    DataInicio,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Next sort configuration after a header click: clicking the active key
/// flips direction, clicking a new key starts ascending.
pub fn toggle_sort(current: Option<(SortKey, SortDir)>, key: SortKey) -> (SortKey, SortDir) {
    match current {
        Some((active, SortDir::Asc)) if active == key => (key, SortDir::Desc),
        _ => (key, SortDir::Asc),
    }
}

/// Projects owned by a professor.
pub fn owned_by(projects: &[Project], professor_id: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.professor_id == professor_id)
        .cloned()
        .collect()
}

/// Apply the admin table's search term and status filter.
///
/// The search is case-insensitive over the project name, its objective,
/// and the owning professor's display name (resolved through
/// `professor_names`, keyed by professor id).
pub fn filter(
    projects: &[Project],
    search: &str,
    status: Option<ProjectStatus>,
    professor_names: &HashMap<String, String>,
) -> Vec<Project> {
    let term = search.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| status.is_none_or(|wanted| project.status == wanted))
        .filter(|project| {
            if term.is_empty() {
                return true;
            }
            project.nome.to_lowercase().contains(&term)
                || project.objetivo.to_lowercase().contains(&term)
                || professor_names
                    .get(&project.professor_id)
                    .is_some_and(|name| name.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Sort in place by a table column.
pub fn sort(projects: &mut [Project], key: SortKey, dir: SortDir) {
    projects.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Nome => a.nome.to_lowercase().cmp(&b.nome.to_lowercase()),
            // ISO-8601 dates order lexicographically.
            SortKey::DataInicio => a.data_inicio.cmp(&b.data_inicio),
            SortKey::Status => a.status.cmp(&b.status),
        };
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

/// The `count` most recently started projects, newest first.
pub fn most_recent(projects: &[Project], count: usize) -> Vec<Project> {
    let mut recent = projects.to_vec();
    recent.sort_by(|a, b| b.data_inicio.cmp(&a.data_inicio));
    recent.truncate(count);
    recent
}

/// How many projects sit in a given lifecycle state.
pub fn count_with_status(projects: &[Project], status: ProjectStatus) -> usize {
    projects
        .iter()
        .filter(|project| project.status == status)
        .count()
}

/// Finalized share of all projects, as a whole percentage. Zero when the
/// list is empty.
pub fn completion_rate(projects: &[Project]) -> usize {
    if projects.is_empty() {
        return 0;
    }
    count_with_status(projects, ProjectStatus::Finalizado) * 100 / projects.len()
}

/// Case-insensitive duplicate-name check used before submission.
pub fn name_exists(projects: &[Project], nome: &str) -> bool {
    let wanted = nome.trim().to_lowercase();
    projects
        .iter()
        .any(|project| project.nome.to_lowercase() == wanted)
}

/// Finalized projects are never deleted from the client.
pub fn can_delete(project: &Project) -> bool {
    project.status != ProjectStatus::Finalizado
}

/// Map professor ids to display names for table rendering.
pub fn professor_names(professors: &[crate::net::types::User]) -> HashMap<String, String> {
    professors
        .iter()
        .map(|professor| (professor.id.clone(), professor.display_name().to_owned()))
        .collect()
}
