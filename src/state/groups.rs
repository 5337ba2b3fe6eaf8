#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use crate::net::types::Group;

/// Seed roster shown until group management gains a backend boundary.
/// Groups live only in page state and die with the tab.
pub fn demo_roster() -> Vec<Group> {
    vec![
        Group {
            id: "g-1".to_owned(),
            nome: "Grupo A".to_owned(),
            professor_coordenador: "Prof. João Silva".to_owned(),
            alunos: vec![
                "Ana Maria".to_owned(),
                "Pedro Santos".to_owned(),
                "Carla Oliveira".to_owned(),
            ],
            disponivel: true,
            projeto_id: None,
        },
        Group {
            id: "g-2".to_owned(),
            nome: "Grupo B".to_owned(),
            professor_coordenador: "Prof. Maria Souza".to_owned(),
            alunos: vec!["Lucas Ferreira".to_owned(), "Julia Martins".to_owned()],
            disponivel: true,
            projeto_id: Some("p-123".to_owned()),
        },
        Group {
            id: "g-3".to_owned(),
            nome: "Grupo C".to_owned(),
            professor_coordenador: "Prof. Carlos Mendes".to_owned(),
            alunos: vec![
                "Marcos Lima".to_owned(),
                "Fernanda Costa".to_owned(),
                "Bruno Dias".to_owned(),
                "Patrícia Almeida".to_owned(),
            ],
            disponivel: false,
            projeto_id: None,
        },
    ]
}

/// Append a freshly created group with an empty student list.
pub fn create(groups: &mut Vec<Group>, nome: &str, coordenador: &str, disponivel: bool) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    groups.push(Group {
        id: id.clone(),
        nome: nome.trim().to_owned(),
        professor_coordenador: coordenador.trim().to_owned(),
        alunos: Vec::new(),
        disponivel,
        projeto_id: None,
    });
    id
}

/// Flip a group's availability. Unknown ids are ignored.
pub fn toggle_availability(groups: &mut [Group], id: &str) {
    if let Some(group) = groups.iter_mut().find(|group| group.id == id) {
        group.disponivel = !group.disponivel;
    }
}

/// Add a student to a group's roster. Unknown ids are ignored.
pub fn add_student(groups: &mut [Group], id: &str, aluno: &str) {
    if let Some(group) = groups.iter_mut().find(|group| group.id == id) {
        group.alunos.push(aluno.trim().to_owned());
    }
}

/// Remove the student at `index` from a group's roster. Out-of-range
/// indexes and unknown ids are ignored.
pub fn remove_student(groups: &mut [Group], id: &str, index: usize) {
    if let Some(group) = groups.iter_mut().find(|group| group.id == id) {
        if index < group.alunos.len() {
            group.alunos.remove(index);
        }
    }
}
