use super::*;
use crate::net::types::{Role, User};

fn project(id: &str, nome: &str, data: &str, status: ProjectStatus, owner: &str) -> Project {
    Project {
        id: id.to_owned(),
        nome: nome.to_owned(),
        objetivo: format!("objetivo de {nome}"),
        data_inicio: data.to_owned(),
        escopo: "escopo".to_owned(),
        publico_alvo: "alunos".to_owned(),
        status,
        professor_id: owner.to_owned(),
    }
}

fn fixture() -> Vec<Project> {
    vec![
        project(
            "p-1",
            "Horta Comunitária",
            "2025-03-01T00:00:00Z",
            ProjectStatus::AguardandoAnalisePreliminar,
            "u-1",
        ),
        project(
            "p-2",
            "Robótica na Escola",
            "2025-01-15T00:00:00Z",
            ProjectStatus::EmAndamento,
            "u-2",
        ),
        project(
            "p-3",
            "Clube de Leitura",
            "2025-05-20T00:00:00Z",
            ProjectStatus::Finalizado,
            "u-1",
        ),
        project(
            "p-4",
            "Feira de Ciências",
            "2024-11-02T00:00:00Z",
            ProjectStatus::Finalizado,
            "u-2",
        ),
    ]
}

// =============================================================
// ownership and filtering
// =============================================================

#[test]
fn owned_by_keeps_only_the_professors_projects() {
    let owned = owned_by(&fixture(), "u-1");
    let ids: Vec<_> = owned.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-1", "p-3"]);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let result = filter(&fixture(), "horta", None, &HashMap::new());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "p-1");
}

#[test]
fn filter_matches_professor_display_name() {
    let names = HashMap::from([("u-2".to_owned(), "Prof. Maria Souza".to_owned())]);
    let result = filter(&fixture(), "maria", None, &names);
    let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-2", "p-4"]);
}

#[test]
fn filter_by_status_narrows_the_list() {
    let result = filter(&fixture(), "", Some(ProjectStatus::Finalizado), &HashMap::new());
    assert_eq!(result.len(), 2);
}

#[test]
fn filter_combines_search_and_status() {
    let result = filter(
        &fixture(),
        "leitura",
        Some(ProjectStatus::Finalizado),
        &HashMap::new(),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "p-3");
}

// =============================================================
// sorting
// =============================================================

#[test]
fn sort_by_name_is_case_insensitive() {
    let mut projects = fixture();
    sort(&mut projects, SortKey::Nome, SortDir::Asc);
    assert_eq!(projects[0].nome, "Clube de Leitura");
    assert_eq!(projects[3].nome, "Robótica na Escola");
}

#[test]
fn sort_by_date_desc_puts_newest_first() {
    let mut projects = fixture();
    sort(&mut projects, SortKey::DataInicio, SortDir::Desc);
    assert_eq!(projects[0].id, "p-3");
    assert_eq!(projects[3].id, "p-4");
}

#[test]
fn sort_by_status_follows_the_lifecycle_order() {
    let mut projects = fixture();
    sort(&mut projects, SortKey::Status, SortDir::Asc);
    assert_eq!(projects[0].status, ProjectStatus::AguardandoAnalisePreliminar);
    assert_eq!(projects[3].status, ProjectStatus::Finalizado);
}

#[test]
fn toggle_sort_flips_direction_on_the_active_key() {
    assert_eq!(toggle_sort(None, SortKey::Nome), (SortKey::Nome, SortDir::Asc));
    assert_eq!(
        toggle_sort(Some((SortKey::Nome, SortDir::Asc)), SortKey::Nome),
        (SortKey::Nome, SortDir::Desc)
    );
    assert_eq!(
        toggle_sort(Some((SortKey::Nome, SortDir::Desc)), SortKey::Nome),
        (SortKey::Nome, SortDir::Asc)
    );
    assert_eq!(
        toggle_sort(Some((SortKey::Nome, SortDir::Asc)), SortKey::Status),
        (SortKey::Status, SortDir::Asc)
    );
}

// =============================================================
// dashboard aggregates
// =============================================================

#[test]
fn most_recent_takes_newest_n() {
    let recent = most_recent(&fixture(), 2);
    let ids: Vec<_> = recent.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-3", "p-1"]);
}

#[test]
fn count_with_status_counts_matching_projects() {
    let projects = fixture();
    assert_eq!(count_with_status(&projects, ProjectStatus::Finalizado), 2);
    assert_eq!(count_with_status(&projects, ProjectStatus::EmAnalise), 0);
}

#[test]
fn completion_rate_is_a_whole_percentage() {
    assert_eq!(completion_rate(&fixture()), 50);
    assert_eq!(completion_rate(&[]), 0);
}

// =============================================================
// submission rules
// =============================================================

#[test]
fn name_exists_ignores_case_and_surrounding_whitespace() {
    let projects = fixture();
    assert!(name_exists(&projects, "horta comunitária"));
    assert!(name_exists(&projects, "  Horta Comunitária  "));
    assert!(!name_exists(&projects, "Projeto Inédito"));
}

#[test]
fn finalized_projects_cannot_be_deleted() {
    let projects = fixture();
    assert!(can_delete(&projects[0]));
    assert!(!can_delete(&projects[2]));
}

// =============================================================
// professor name map
// =============================================================

#[test]
fn professor_names_fall_back_to_login() {
    let professors = vec![
        User {
            id: "u-1".to_owned(),
            login: "joao".to_owned(),
            role: Role::Professor,
            nome: Some("Prof. João Silva".to_owned()),
            escola: None,
        },
        User {
            id: "u-2".to_owned(),
            login: "maria".to_owned(),
            role: Role::Professor,
            nome: None,
            escola: None,
        },
    ];
    let names = professor_names(&professors);
    assert_eq!(names["u-1"], "Prof. João Silva");
    assert_eq!(names["u-2"], "maria");
}
